//! Shortest round-trip decimal representation of `f64`.
//!
//! The digits are the shortest ones that read back to the same float
//! (as produced by `{:e}`).  The layout is positional when the decimal
//! exponent `e` of the leading digit satisfies -4 ≤ `e` < 16, and
//! scientific otherwise: `1.0`, `0.001`, `1e-05`, `1.5e+16`.

use std::fmt::{self, Display, Formatter, Write};

/// Positional notation is used for decimal exponents in
/// \[`EXP_MIN`, `EXP_MAX`\).
const EXP_MIN: i32 = -4;
const EXP_MAX: i32 = 16;

/// Wrapper displaying a float in its shortest round-trip form.
///
/// # Example
///
/// ```
/// use cos2_table::Repr;
/// assert_eq!(Repr(1.).to_string(), "1.0");
/// assert_eq!(Repr(1e-5).to_string(), "1e-05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repr(pub f64);

/// Fixed capacity buffer receiving the output of `{:e}`.  The longest
/// shortest form of a `f64` is 17 digits + "." + "e-324" (24 bytes).
struct Buf {
    bytes: [u8; 32],
    len: usize,
}

impl Buf {
    #[inline]
    fn new() -> Self { Buf { bytes: [0; 32], len: 0 } }

    #[inline]
    fn as_str(&self) -> &str {
        // Only `&str` are ever copied in.
        std::str::from_utf8(&self.bytes[.. self.len]).unwrap_or("")
    }
}

impl Write for Buf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() { return Err(fmt::Error) }
        self.bytes[self.len .. end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Write `n` zeros to `f`.
#[inline]
fn zeros(f: &mut Formatter<'_>, n: usize) -> fmt::Result {
    for _ in 0 .. n { f.write_char('0')? }
    Ok(())
}

impl Display for Repr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() { return f.write_str("nan") }
        if x.is_sign_negative() { f.write_char('-')? }
        if x.is_infinite() { return f.write_str("inf") }
        if x == 0. { return f.write_str("0.0") }
        let mut buf = Buf::new();
        write!(buf, "{:e}", x.abs())?;
        let (mantissa, exp) = buf.as_str().split_once('e').ok_or(fmt::Error)?;
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
        // Significant digits, the first one being non-zero.
        let (d0, rest) = mantissa.split_at(1);
        let rest = rest.strip_prefix('.').unwrap_or(rest);
        if (EXP_MIN .. EXP_MAX).contains(&exp) {
            if exp < 0 {
                f.write_str("0.")?;
                zeros(f, (-exp - 1) as usize)?;
                f.write_str(d0)?;
                f.write_str(rest)
            } else {
                // `exp` digits after `d0` belong to the integer part.
                let e = exp as usize;
                f.write_str(d0)?;
                if rest.len() > e {
                    f.write_str(&rest[.. e])?;
                    f.write_char('.')?;
                    f.write_str(&rest[e ..])
                } else {
                    f.write_str(rest)?;
                    zeros(f, e - rest.len())?;
                    f.write_str(".0")
                }
            }
        } else {
            f.write_str(d0)?;
            if !rest.is_empty() {
                f.write_char('.')?;
                f.write_str(rest)?;
            }
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "e{}{:02}", sign, exp.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Repr;

    fn r(x: f64) -> String { Repr(x).to_string() }

    #[test]
    fn special_values() {
        assert_eq!(r(0.), "0.0");
        assert_eq!(r(-0.), "-0.0");
        assert_eq!(r(f64::NAN), "nan");
        assert_eq!(r(f64::INFINITY), "inf");
        assert_eq!(r(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn positional() {
        assert_eq!(r(1.), "1.0");
        assert_eq!(r(-1.), "-1.0");
        assert_eq!(r(0.5), "0.5");
        assert_eq!(r(100.), "100.0");
        assert_eq!(r(1000.), "1000.0");
        assert_eq!(r(123.456), "123.456");
        assert_eq!(r(0.001), "0.001");
        assert_eq!(r(0.0001), "0.0001");
        assert_eq!(r(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(r(1234567890123456.), "1234567890123456.0");
        assert_eq!(r(999999999999999.9), "999999999999999.9");
    }

    #[test]
    fn scientific() {
        assert_eq!(r(1e-5), "1e-05");
        assert_eq!(r(0.00012345), "0.00012345");
        assert_eq!(r(0.000012345), "1.2345e-05");
        assert_eq!(r(1.5e-7), "1.5e-07");
        assert_eq!(r(1e16), "1e+16");
        assert_eq!(r(12345678901234567.), "1.2345678901234568e+16");
        assert_eq!(r(1e22), "1e+22");
        assert_eq!(r(-2.5e100), "-2.5e+100");
        assert_eq!(r(5e-324), "5e-324");
        assert_eq!(r(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn round_trip() {
        for &x in &[0.003, 1. / 3., 2f64.sqrt(), 1e-9 / 7., 6.02214076e23,
                    1000f64.cos().powi(2), 0.1, 299.79245800000003] {
            assert_eq!(r(x).parse::<f64>().unwrap(), x);
        }
    }
}
