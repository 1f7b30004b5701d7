use super::galois;
use crate::common::error::QRResult;

// Polynomial arithmetic over GF(256)
//------------------------------------------------------------------------------

// Coefficients are stored highest degree first; index 0 is the leading term.

pub fn poly_mul(p: &[u8], q: &[u8]) -> Vec<u8> {
    debug_assert!(!p.is_empty() && !q.is_empty(), "Polynomial has no coefficients");

    let mut res = vec![0u8; p.len() + q.len() - 1];
    for (i, &pc) in p.iter().enumerate() {
        if pc == 0 {
            continue;
        }
        for (j, &qc) in q.iter().enumerate() {
            res[i + j] = galois::add(res[i + j], galois::mul(pc, qc));
        }
    }
    res
}

// Synthetic division. Walks the leading positions of the dividend; each
// position's coefficient, divided by the leading divisor coefficient,
// cancels that position across the divisor window. The remainder always
// has one coefficient fewer than the divisor.
pub fn poly_div_mod(dividend: &[u8], divisor: &[u8]) -> QRResult<(Vec<u8>, Vec<u8>)> {
    debug_assert!(!divisor.is_empty(), "Divisor has no coefficients");

    let deg = divisor.len() - 1;
    if dividend.len() <= deg {
        let mut rem = vec![0; deg - dividend.len()];
        rem.extend_from_slice(dividend);
        return Ok((Vec::new(), rem));
    }

    let mut buf = dividend.to_vec();
    let quot_len = dividend.len() - deg;
    for i in 0..quot_len {
        let factor = galois::div(buf[i], divisor[0])?;
        if factor == 0 {
            continue;
        }
        buf[i] = factor;
        for (j, &g) in divisor.iter().enumerate().skip(1) {
            buf[i + j] = galois::sub(buf[i + j], galois::mul(g, factor));
        }
    }
    let rem = buf.split_off(quot_len);
    Ok((buf, rem))
}
