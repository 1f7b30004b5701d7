//! # qrlite
//!
//! A small Rust library for generating QR-style symbols with Reed-Solomon error correction.
//! Text is encoded as a byte mode segment, protected with parity codewords over GF(256),
//! and laid out on a module grid with the familiar finder and alignment patterns.
//!
//! The encoding profile is fixed: one symbol version (25x25 modules), one error correction
//! strength, a single undivided codeword block. Payload bits fill the grid row-major, so
//! the output resembles a QR code but doesn't follow the full standard; there is no
//! masking, no format or version information, and no interleaving.
//!
//! ## Features
//!
//! - **Byte Mode Encoding**: Any text whose characters fit in a single byte
//! - **Reed-Solomon Error Correction**: Systematic encoding over GF(256)
//! - **Rendering**: In-memory grayscale images or terminal block strings
//!
//! ## Quick Start
//!
//! ```rust
//! use qrlite::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symbol = QRBuilder::new("HELLO WORLD").build()?;
//!
//! // Terminal rendering, one block character per module
//! println!("{}", symbol.to_str(1));
//!
//! // Grayscale image, 4 pixels per module
//! let img = symbol.to_image(4);
//! assert_eq!(img.dimensions(), (132, 132));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
mod render;

pub use builder::{Matrix, Module, QRBuilder};
pub use common::error::{QRError, QRResult};
pub use common::metadata::{Color, Version, EC_LEN, VERSION};
