mod matrix;

pub use matrix::{Matrix, Module};

use crate::common::{
    codec, ec,
    error::QRResult,
    metadata::{EC_LEN, VERSION},
    BitStream,
};

// QR builder
//------------------------------------------------------------------------------

pub struct QRBuilder<'a> {
    text: &'a str,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Version: {}, Ec len: {} }}", *VERSION, EC_LEN)
    }
}

impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<Matrix> {
        // Encode data into a byte mode segment
        let segment = codec::encode(self.text)?;

        // Append error correction to the packed message
        let codeword = ec::encode(segment.data(), EC_LEN)?;

        // Construct the symbol
        let payload = BitStream::from(&codeword);
        Ok(Matrix::with_payload(VERSION, payload))
    }
}
