//! Named constants for CSI/ESC/SGR/DSR final bytes and argument values.
//!
//! Grounded on the teacher's `core/ansi/constants/{csi,esc,generic,sgr,dsr}.rs`
//! naming convention: flat, re-exported `u8`/`u16` constants rather than a
//! single giant match, so call sites read as named comparisons.

// ESC single-character finals (outside CSI/OSC/STR).
pub const ESC_CSI: u8 = b'[';
pub const ESC_TEST: u8 = b'#';
pub const ESC_DCS: u8 = b'P';
pub const ESC_APC: u8 = b'_';
pub const ESC_PM: u8 = b'^';
pub const ESC_OSC: u8 = b']';
pub const ESC_LEGACY_TITLE: u8 = b'k';
pub const ESC_CHARSET_G0: u8 = b'(';
pub const ESC_CHARSET_G1: u8 = b')';
pub const ESC_CHARSET_G2: u8 = b'*';
pub const ESC_CHARSET_G3: u8 = b'+';
pub const ESC_IND: u8 = b'D';
pub const ESC_NEL: u8 = b'E';
pub const ESC_HTS: u8 = b'H';
pub const ESC_RI: u8 = b'M';
pub const ESC_DECID: u8 = b'Z';
pub const ESC_RIS: u8 = b'c';
pub const ESC_APPKEYPAD_SET: u8 = b'=';
pub const ESC_APPKEYPAD_CLEAR: u8 = b'>';
pub const ESC_SAVE_CURSOR: u8 = b'7';
pub const ESC_LOAD_CURSOR: u8 = b'8';
pub const ESC_ST: u8 = b'\\';

// CSI final bytes.
pub const CSI_ICH: char = '@';
pub const CSI_CUU: char = 'A';
pub const CSI_CUD: char = 'B';
pub const CSI_CUF: char = 'C';
pub const CSI_CUB: char = 'D';
pub const CSI_CNL: char = 'E';
pub const CSI_CPL: char = 'F';
pub const CSI_CHA: char = 'G';
pub const CSI_CUP: char = 'H';
pub const CSI_CHT: char = 'I';
pub const CSI_ED: char = 'J';
pub const CSI_EL: char = 'K';
pub const CSI_IL: char = 'L';
pub const CSI_DL: char = 'M';
pub const CSI_DCH: char = 'P';
pub const CSI_SU: char = 'S';
pub const CSI_SD: char = 'T';
pub const CSI_ECH: char = 'X';
pub const CSI_CBT: char = 'Z';
pub const CSI_HPA: char = '`';
pub const CSI_CHA_REL: char = 'a'; // HPR, relative CHA
pub const CSI_VPA: char = 'd';
pub const CSI_VPR_CUP_ALIAS: char = 'e'; // VPR
pub const CSI_HVP: char = 'f';
pub const CSI_TBC: char = 'g';
pub const CSI_SM: char = 'h';
pub const CSI_RM: char = 'l';
pub const CSI_SGR: char = 'm';
pub const CSI_DSR: char = 'n';
pub const CSI_DECSTBM: char = 'r';
pub const CSI_SCP: char = 's';
pub const CSI_RCP: char = 'u';
pub const CSI_DA: char = 'c';

// DSR argument values.
pub const DSR_CURSOR_POSITION: u16 = 6;

// DA reply.
pub const DA_REPLY: &[u8] = b"\x1b[?6c";

// SGR argument ranges/values.
pub const SGR_RESET: u16 = 0;
pub const SGR_BOLD: u16 = 1;
pub const SGR_ITALIC: u16 = 3;
pub const SGR_UNDERLINE: u16 = 4;
pub const SGR_BLINK_SLOW: u16 = 5;
pub const SGR_BLINK_FAST: u16 = 6;
pub const SGR_REVERSE: u16 = 7;
pub const SGR_BOLD_OFF: u16 = 21;
pub const SGR_BOLD_OFF_ALT: u16 = 22;
pub const SGR_ITALIC_OFF: u16 = 23;
pub const SGR_UNDERLINE_OFF: u16 = 24;
pub const SGR_BLINK_OFF: u16 = 25;
pub const SGR_BLINK_OFF_ALT: u16 = 26;
pub const SGR_REVERSE_OFF: u16 = 27;
pub const SGR_FG_START: u16 = 30;
pub const SGR_FG_END: u16 = 37;
pub const SGR_FG_EXTENDED: u16 = 38;
pub const SGR_FG_DEFAULT: u16 = 39;
pub const SGR_BG_START: u16 = 40;
pub const SGR_BG_END: u16 = 47;
pub const SGR_BG_EXTENDED: u16 = 48;
pub const SGR_BG_DEFAULT: u16 = 49;
pub const SGR_BRIGHT_FG_START: u16 = 90;
pub const SGR_BRIGHT_FG_END: u16 = 97;
pub const SGR_BRIGHT_BG_START: u16 = 100;
pub const SGR_BRIGHT_BG_END: u16 = 107;
pub const SGR_EXTENDED_RGB: u16 = 2;
pub const SGR_EXTENDED_INDEXED: u16 = 5;

// OSC sub-commands (first `;`-separated argument).
pub const OSC_SET_ICON_AND_TITLE: u16 = 0;
pub const OSC_SET_ICON_NAME: u16 = 1;
pub const OSC_SET_TITLE: u16 = 2;
pub const OSC_SET_COLOR: u16 = 4;
pub const OSC_RESET_COLOR: u16 = 104;
