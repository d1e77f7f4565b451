//! One module per dispatch family, mirroring the teacher's
//! `vt_100_ansi_parser::operations` split (CSI, ESC, SGR, mode-setting, OSC
//! each get their own file rather than one large match).

pub mod csi_ops;
pub mod esc_ops;
pub mod mode_ops;
pub mod osc_ops;
pub mod sgr_ops;
