use super::{galois, poly};
use crate::common::error::{QRError, QRResult};

// Reed-Solomon encoder
//------------------------------------------------------------------------------

// Product of the binomials (x - alpha^i) for i in 0..ec_len. Subtraction is
// XOR, so each binomial is [1, alpha^i]. Monic, ec_len + 1 coefficients.
pub fn generator_poly(ec_len: usize) -> Vec<u8> {
    let mut gen = vec![1];
    for i in 0..ec_len {
        gen = poly::poly_mul(&gen, &[1, galois::gen_pow(i)]);
    }
    gen
}

// Systematic encoding: the codeword starts with the message untouched,
// followed by ec_len parity codewords. Parity is the remainder of
// msg * x^ec_len divided by the generator polynomial.
pub fn encode(msg: &[u8], ec_len: usize) -> QRResult<Vec<u8>> {
    if msg.len() + ec_len > MAX_BLOCK_SIZE {
        return Err(QRError::LengthExceeded);
    }

    let gen = generator_poly(ec_len);
    let mut codeword = msg.to_vec();
    codeword.resize(msg.len() + ec_len, 0);
    let (_, parity) = poly::poly_div_mod(&codeword, &gen)?;
    codeword[msg.len()..].copy_from_slice(&parity);
    Ok(codeword)
}


// Global constants
//------------------------------------------------------------------------------

// GF(256) symbols per codeword, message and parity combined
pub static MAX_BLOCK_SIZE: usize = 255;
