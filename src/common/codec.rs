use super::{
    bitstream::BitStream,
    error::{QRError, QRResult},
};

// Byte mode segment encoder
//------------------------------------------------------------------------------

// Encodes text as a single byte mode segment: the mode indicator, an 8 bit
// character count, then one byte per character. Only code points up to
// U+00FF fit in a byte.
pub fn encode(text: &str) -> QRResult<BitStream> {
    let char_cnt = text.chars().count();
    if char_cnt > MAX_CHAR_COUNT {
        return Err(QRError::LengthExceeded);
    }

    let mut out = BitStream::new(MODE_BITS + LEN_BITS + (char_cnt << 3));
    push_header(char_cnt, &mut out);
    push_byte_data(text, &mut out)?;

    debug_assert_eq!(out.len(), out.capacity(), "Segment should fill its capacity exactly");

    Ok(out)
}

fn push_header(char_cnt: usize, out: &mut BitStream) {
    out.push_bits(MODE_BYTE, MODE_BITS);
    out.push_bits(char_cnt as u8, LEN_BITS);
}

fn push_byte_data(text: &str, out: &mut BitStream) -> QRResult<()> {
    for ch in text.chars() {
        let cp = ch as u32;
        if cp > 255 {
            return Err(QRError::UnsupportedCharacter);
        }
        out.push_bits(cp as u8, 8);
    }
    Ok(())
}

#[cfg(test)]
mod codec_tests {
    use test_case::test_case;

    use super::encode;
    use crate::common::error::QRError;

    #[test]
    fn test_single_char_segment() {
        let bs = encode("A").unwrap();
        assert_eq!(bs.len(), 20);
        assert_eq!(bs.data(), [0b0100_0000, 0b0001_0100, 0b0001_0000]);

        let bits: Vec<u8> = bs.map(u8::from).collect();
        #[rustfmt::skip]
        assert_eq!(
            bits,
            [0, 1, 0, 0,  0, 0, 0, 0, 0, 0, 0, 1,  0, 1, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test_case("", 12; "empty text")]
    #[test_case("A", 20; "single char")]
    #[test_case("HELLO WORLD", 100; "eleven chars")]
    #[test_case("café", 44; "latin1 chars")]
    fn test_segment_bit_len(text: &str, bit_len: usize) {
        let bs = encode(text).unwrap();
        assert_eq!(bs.len(), bit_len);
        assert_eq!(bs.data().len(), (bit_len + 7) >> 3);
    }

    #[test]
    fn test_header_layout() {
        let bs = encode("HELLO WORLD").unwrap();
        let data = bs.data();
        // Mode nibble then the high half of the count
        assert_eq!(data[0], 0b0100_0000);
        // Low half of the count (11) then the first char 'H'
        assert_eq!(data[1], 0b1011_0100);
        assert_eq!(data[2], (b'H' << 4) | (b'E' >> 4));
    }

    #[test]
    fn test_char_count_cap() {
        let text = "z".repeat(255);
        let bs = encode(&text).unwrap();
        assert_eq!(bs.len(), 12 + 255 * 8);

        let text = "z".repeat(256);
        assert_eq!(encode(&text).unwrap_err(), QRError::LengthExceeded);
    }

    #[test]
    fn test_unsupported_characters() {
        // U+00FF is the last storable code point
        assert!(encode("mañana\u{FF}").is_ok());
        assert_eq!(encode("\u{100}").unwrap_err(), QRError::UnsupportedCharacter);
        assert_eq!(encode("日本").unwrap_err(), QRError::UnsupportedCharacter);
        assert_eq!(encode("ok🌏").unwrap_err(), QRError::UnsupportedCharacter);
    }
}

// Global constants
//------------------------------------------------------------------------------

// Byte mode indicator
static MODE_BYTE: u8 = 0b0100;

static MODE_BITS: usize = 4;

static LEN_BITS: usize = 8;

static MAX_CHAR_COUNT: usize = 255;
