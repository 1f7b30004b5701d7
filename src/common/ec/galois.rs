use std::sync::OnceLock;

use crate::common::error::{QRError, QRResult};

// GF(256) arithmetic
//------------------------------------------------------------------------------

// Log and antilog tables for the field. The antilog table holds two full
// periods so generator powers up to alpha^509 resolve without wrapping.
struct GfTables {
    exp: [u8; 510],
    log: [u8; 256],
}

// Built on first use; read-only afterwards, safe to share across threads.
fn tables() -> &'static GfTables {
    static TABLES: OnceLock<GfTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 510];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            exp[i + 255] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIM_POLY;
            }
        }
        GfTables { exp, log }
    })
}

pub fn add(x: u8, y: u8) -> u8 {
    x ^ y
}

// Identical to addition in a field of characteristic 2
pub fn sub(x: u8, y: u8) -> u8 {
    x ^ y
}

pub fn mul(x: u8, y: u8) -> u8 {
    if x == 0 || y == 0 {
        return 0;
    }
    let t = tables();
    let log_sum = t.log[x as usize] as usize + t.log[y as usize] as usize;
    t.exp[log_sum % 255]
}

pub fn div(x: u8, y: u8) -> QRResult<u8> {
    if y == 0 {
        return Err(QRError::DivisionByZero);
    }
    if x == 0 {
        return Ok(0);
    }
    let t = tables();
    let log_diff = (t.log[x as usize] as usize + 255 - t.log[y as usize] as usize) % 255;
    Ok(t.exp[log_diff])
}

// i-th power of the field generator alpha
pub fn gen_pow(i: usize) -> u8 {
    tables().exp[i % 255]
}

#[cfg(test)]
mod galois_tests {
    use test_case::test_case;

    use super::{add, div, gen_pow, mul, sub, tables};
    use crate::common::error::QRError;

    #[test]
    fn test_table_invariants() {
        let t = tables();
        assert_eq!(t.log[1], 0);
        assert_eq!(t.exp[0], 1);
        for x in 1..=255u8 {
            assert_eq!(t.exp[t.log[x as usize] as usize], x, "x {x}");
        }
        for i in 0..255 {
            assert_eq!(t.exp[i], t.exp[i + 255], "i {i}");
        }
    }

    #[test]
    fn test_add_sub_coincide() {
        for x in 0..=255u8 {
            for y in 0..=255u8 {
                assert_eq!(add(x, y), sub(x, y));
                assert_eq!(add(x, y), x ^ y);
            }
        }
    }

    #[test_case(2, 128, 29; "wraps past degree 8")]
    #[test_case(16, 32, 58; "alpha 4 times alpha 5")]
    #[test_case(1, 29, 29; "identity")]
    #[test_case(0, 29, 0; "zero annihilates")]
    fn test_mul(x: u8, y: u8, product: u8) {
        assert_eq!(mul(x, y), product);
        assert_eq!(mul(y, x), product);
    }

    #[test]
    fn test_mul_identity_and_zero() {
        for x in 0..=255u8 {
            assert_eq!(mul(x, 1), x);
            assert_eq!(mul(x, 0), 0);
            assert_eq!(mul(0, x), 0);
        }
    }

    #[test]
    fn test_div_inverse_law() {
        for x in 1..=255u8 {
            for y in 0..=255u8 {
                let quot = div(y, x).unwrap();
                assert_eq!(mul(x, quot), y, "x {x}, y {y}");
            }
        }
    }

    #[test]
    fn test_div_edge_cases() {
        for y in 1..=255u8 {
            assert_eq!(div(0, y), Ok(0));
        }
        assert_eq!(div(0, 0), Err(QRError::DivisionByZero));
        assert_eq!(div(29, 0), Err(QRError::DivisionByZero));
        assert_eq!(div(29, 2), Ok(128));
    }

    #[test]
    fn test_gen_pow_periodicity() {
        assert_eq!(gen_pow(0), 1);
        assert_eq!(gen_pow(1), 2);
        assert_eq!(gen_pow(8), 29);
        assert_eq!(gen_pow(255), 1);
        for i in 0..255 {
            assert_eq!(gen_pow(i), gen_pow(i + 255), "i {i}");
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

// Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 generating the field
static PRIM_POLY: u16 = 0x11D;
