//! Manual UTF-8 decode/encode, ported from `utf8decode`/`utf8encode`/
//! `isfullutf8`/`utf8size` in the original C source this design is derived
//! from. Kept independent of [`vte`]'s internal UTF-8 handling so a host can
//! decode raw bytes (e.g. for local echo) without driving the CSI tokenizer.

const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Decode one UTF-8 code point starting at `bytes[0]`.
///
/// Returns `(char, consumed)`. On any malformed input the replacement
/// character U+FFFD is returned and `consumed` is however many bytes the
/// (invalid) leading-byte pattern claimed to need — mirroring `utf8decode`,
/// which always advances `rtn` bytes even on the `invalid` path. `bytes` must
/// be non-empty.
#[must_use]
pub fn decode(bytes: &[u8]) -> (char, usize) {
    assert!(!bytes.is_empty(), "decode() requires at least one byte");

    let c = bytes[0];

    // 0xxxxxxx
    if c & 0x80 == 0 {
        return (c as char, 1);
    }

    let (mut u, n): (u32, usize) = if c & 0xE0 == 0xC0 {
        (u32::from(c & 0x1F), 1)
    } else if c & 0xF0 == 0xE0 {
        (u32::from(c & 0x0F), 2)
    } else if c & 0xF8 == 0xF0 {
        (u32::from(c & 0x07), 3)
    } else {
        // Not a valid leading byte at all; the C source's `goto invalid`
        // still reports `rtn == 1` in this branch (the for loop never ran).
        return (REPLACEMENT_CHAR, 1);
    };

    let mut consumed = 1usize;
    for i in 0..n {
        let Some(&c) = bytes.get(1 + i) else {
            // Truncated at the end of the given slice: stop, report what we
            // consumed so far plus this would-be byte, without reading past
            // the slice (the fuzz property in SPEC_FULL.md §8 requires this).
            return (REPLACEMENT_CHAR, consumed);
        };
        if c & 0xC0 != 0x80 {
            return (REPLACEMENT_CHAR, consumed);
        }
        u = (u << 6) | u32::from(c & 0x3F);
        consumed += 1;
    }

    let overlong = (n == 1 && u < 0x80) || (n == 2 && u < 0x800) || (n == 3 && u < 0x10000);
    let surrogate = (0xD800..=0xDFFF).contains(&u);
    if overlong || surrogate || u > 0x10FFFF {
        return (REPLACEMENT_CHAR, consumed);
    }

    (char::from_u32(u).unwrap_or(REPLACEMENT_CHAR), consumed)
}

/// Encode `ch` as canonical 1-4 byte UTF-8 into `out`, returning the byte
/// count written. `out` must have room for at least 4 bytes. Mirrors
/// `utf8encode`; since `char` is already a validated Unicode scalar value
/// the "invalid" branch of the C source (U+FFFD fallback) is unreachable
/// here, but `encode_u32` below preserves it for raw, unvalidated code
/// points (e.g. arriving from a wire protocol).
#[must_use]
pub fn encode(ch: char, out: &mut [u8; 4]) -> usize {
    encode_u32(ch as u32, out)
}

/// As [`encode`], but accepts a raw `u32` that may not be a valid Unicode
/// scalar value (e.g. a surrogate or `> 0x10FFFF`), falling back to the
/// three-byte U+FFFD encoding in that case, matching `utf8encode`'s
/// `invalid` path.
#[must_use]
pub fn encode_u32(u: u32, out: &mut [u8; 4]) -> usize {
    if u < 0x80 {
        out[0] = u as u8;
        return 1;
    }
    let n = if u < 0x800 {
        out[0] = (u >> 6) as u8 | 0xC0;
        1
    } else if u < 0x10000 {
        out[0] = (u >> 12) as u8 | 0xE0;
        2
    } else if u <= 0x10FFFF {
        out[0] = (u >> 18) as u8 | 0xF0;
        3
    } else {
        out[0] = 0xEF;
        out[1] = 0xBF;
        out[2] = 0xBD;
        return 3;
    };

    for i in 0..n {
        let shift = 6 * (n - i - 1);
        out[1 + i] = ((u >> shift) & 0x3F) as u8 | 0x80;
    }
    n + 1
}

/// Number of bytes a complete UTF-8 code point starting with `lead` needs,
/// judged purely from the leading byte's high bits (no validation of
/// continuation bytes). Mirrors `utf8size`.
#[must_use]
pub const fn size_from_lead_byte(lead: u8) -> usize {
    if lead & 0x80 == 0 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else {
        4
    }
}

/// Is `prefix` (of length `< 4`) a complete UTF-8 code point on its own, or
/// does it need more bytes? Mirrors `isfullutf8`, which callers use to
/// decide whether to stall a partial tail across `feed` calls rather than
/// decode a truncated sequence as U+FFFD prematurely.
#[must_use]
pub fn is_full_utf8(prefix: &[u8]) -> bool {
    let b = prefix.len();
    if b < 1 {
        return false;
    }
    let c1 = prefix[0];
    let c2 = prefix.get(1).copied();
    let c3 = prefix.get(2).copied();

    let needs_more = if c1 & 0xE0 == 0xC0 {
        b == 1
    } else if c1 & 0xF0 == 0xE0 {
        b == 1 || (b == 2 && c2.is_some_and(|c| c & 0xC0 == 0x80))
    } else if c1 & 0xF8 == 0xF0 {
        b == 1
            || (b == 2 && c2.is_some_and(|c| c & 0xC0 == 0x80))
            || (b == 3
                && c2.is_some_and(|c| c & 0xC0 == 0x80)
                && c3.is_some_and(|c| c & 0xC0 == 0x80))
    } else {
        false
    };

    !needs_more
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_ascii() {
        assert_eq!(decode(b"A"), ('A', 1));
    }

    #[test]
    fn decode_two_byte() {
        // U+00E9 'é' = 0xC3 0xA9
        assert_eq!(decode(&[0xC3, 0xA9]), ('\u{E9}', 2));
    }

    #[test]
    fn decode_three_byte_wide() {
        // U+FF2F fullwidth letter O = 0xEF 0xBC 0xAF
        assert_eq!(decode(&[0xEF, 0xBC, 0xAF]), ('\u{FF2F}', 3));
    }

    #[test]
    fn decode_four_byte_emoji() {
        // U+1F600 = 0xF0 0x9F 0x98 0x80
        assert_eq!(decode(&[0xF0, 0x9F, 0x98, 0x80]), ('\u{1F600}', 4));
    }

    #[test]
    fn decode_invalid_leading_byte() {
        assert_eq!(decode(&[0xFF]), (REPLACEMENT_CHAR, 1));
    }

    #[test]
    fn decode_bad_continuation() {
        assert_eq!(decode(&[0xC3, 0x20]), (REPLACEMENT_CHAR, 2));
    }

    #[test]
    fn decode_overlong() {
        // Overlong encoding of U+002F using 2 bytes: 0xC0 0xAF
        assert_eq!(decode(&[0xC0, 0xAF]), (REPLACEMENT_CHAR, 2));
    }

    #[test]
    fn decode_surrogate() {
        // U+D800 encoded directly as 3 bytes: 0xED 0xA0 0x80
        assert_eq!(decode(&[0xED, 0xA0, 0x80]), (REPLACEMENT_CHAR, 3));
    }

    #[test]
    fn decode_truncated_does_not_read_past_slice() {
        assert_eq!(decode(&[0xF0, 0x9F]), (REPLACEMENT_CHAR, 2));
    }

    #[test]
    fn round_trip_all_bmp_and_beyond() {
        for u in (0u32..0x110000).step_by(997) {
            if (0xD800..=0xDFFF).contains(&u) {
                continue;
            }
            let Some(ch) = char::from_u32(u) else {
                continue;
            };
            let mut buf = [0u8; 4];
            let n = encode(ch, &mut buf);
            let (decoded, consumed) = decode(&buf[..n]);
            assert_eq!(decoded, ch);
            assert_eq!(consumed, n);
        }
    }

    #[test]
    fn encode_invalid_u32_is_replacement() {
        let mut buf = [0u8; 4];
        let n = encode_u32(0x1101_0000, &mut buf);
        assert_eq!(n, 3);
        assert_eq!(&buf[..3], &[0xEF, 0xBF, 0xBD]);
    }

    #[test]
    fn is_full_utf8_cases() {
        assert!(!is_full_utf8(&[]));
        assert!(is_full_utf8(b"A"));
        assert!(!is_full_utf8(&[0xC3]));
        assert!(is_full_utf8(&[0xC3, 0xA9]));
        assert!(!is_full_utf8(&[0xE2]));
        assert!(!is_full_utf8(&[0xE2, 0x82]));
        assert!(is_full_utf8(&[0xE2, 0x82, 0xAC]));
        assert!(!is_full_utf8(&[0xF0]));
        assert!(!is_full_utf8(&[0xF0, 0x9F]));
        assert!(!is_full_utf8(&[0xF0, 0x9F, 0x98]));
        assert!(is_full_utf8(&[0xF0, 0x9F, 0x98, 0x80]));
    }

    #[test]
    fn size_from_lead_byte_cases() {
        assert_eq!(size_from_lead_byte(b'A'), 1);
        assert_eq!(size_from_lead_byte(0xC3), 2);
        assert_eq!(size_from_lead_byte(0xE2), 3);
        assert_eq!(size_from_lead_byte(0xF0), 4);
    }
}
