pub mod bitstream;
pub mod codec;
pub mod ec;
pub mod error;
pub mod metadata;

pub use bitstream::BitStream;
pub use error::*;
pub use metadata::*;
