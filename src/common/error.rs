use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    DivisionByZero,
    LengthExceeded,
    UnsupportedCharacter,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::DivisionByZero => "Division by zero in GF(256)",
            Self::LengthExceeded => "Data too long for codeword capacity",
            Self::UnsupportedCharacter => "Character doesn't fit in a single byte",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
