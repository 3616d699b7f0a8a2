//! Decimal rendering of signed 64-bit integers
//!
//! Renders into a fixed stack buffer so the integer path never allocates.

/// Longest rendering of an `i64`: `-9223372036854775808`.
pub const MAX_DECIMAL_LEN: usize = 20;

/// Scratch space for [`render_i64`].
pub type DecimalBuf = [u8; MAX_DECIMAL_LEN];

/// Render `value` as canonical decimal text: no leading zeros, a single `-`
/// for negative values and `0` for zero.
///
/// The magnitude is taken with `unsigned_abs`, so `i64::MIN` is rendered
/// without negating it.
pub fn render_i64(value: i64, buf: &mut DecimalBuf) -> &[u8] {
    let mut magnitude = value.unsigned_abs();
    let mut pos = buf.len();

    loop {
        pos -= 1;
        buf[pos] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    if value < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }

    &buf[pos..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: i64) -> String {
        let mut buf = [0u8; MAX_DECIMAL_LEN];
        String::from_utf8(render_i64(value, &mut buf).to_vec()).unwrap()
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(render(0), "0");
        assert_eq!(render(-1), "-1");
        assert_eq!(render(i64::MAX), "9223372036854775807");
        assert_eq!(render(i64::MIN), "-9223372036854775808");
        assert_eq!(render(i64::MIN).len(), MAX_DECIMAL_LEN);
    }

    #[test]
    fn test_matches_display() {
        let samples = [
            1,
            9,
            10,
            -10,
            100,
            4_294_967_296,
            -4_294_967_296,
            1_000_000_000_000_000_000,
            i64::MAX - 1,
            i64::MIN + 1,
        ];
        for v in samples {
            assert_eq!(render(v), v.to_string(), "value {}", v);
        }
    }

    #[test]
    fn test_buffer_is_reusable() {
        let mut buf = [0u8; MAX_DECIMAL_LEN];
        assert_eq!(render_i64(-123456, &mut buf), b"-123456");
        assert_eq!(render_i64(7, &mut buf), b"7");
    }
}
