// Message Codec
// Two-digit-per-character mapping between text and the numeric plaintext
// consumed by the RSA core. The core itself never sees this table; it
// only handles opaque integers.
//
// Mapping: 00 = space, 11-36 = A-Z, 37 = ",", 38 = "."

use num_bigint::BigUint;
use num_traits::Zero;

/// Errors from the text/number mapping
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),

    #[error("no character assigned to code {0:02}")]
    UnassignedCode(u8),
}

const CODE_SPACE: u8 = 0;
const CODE_A: u8 = 11;
const CODE_Z: u8 = 36;
const CODE_COMMA: u8 = 37;
const CODE_PERIOD: u8 = 38;

fn char_to_code(c: char) -> Result<u8, CodecError> {
    match c {
        ' ' => Ok(CODE_SPACE),
        'A'..='Z' => Ok(CODE_A + (c as u8 - b'A')),
        'a'..='z' => Ok(CODE_A + (c as u8 - b'a')),
        ',' => Ok(CODE_COMMA),
        '.' => Ok(CODE_PERIOD),
        _ => Err(CodecError::UnsupportedCharacter(c)),
    }
}

fn code_to_char(code: u8) -> Result<char, CodecError> {
    match code {
        CODE_SPACE => Ok(' '),
        CODE_A..=CODE_Z => Ok((b'A' + (code - CODE_A)) as char),
        CODE_COMMA => Ok(','),
        CODE_PERIOD => Ok('.'),
        _ => Err(CodecError::UnassignedCode(code)),
    }
}

/// Encode text as a single integer, two decimal digits per character.
///
/// Leading spaces map to leading zero digits and do not survive the
/// round trip through an integer.
pub fn encode(text: &str) -> Result<BigUint, CodecError> {
    let hundred = BigUint::from(100u8);
    let mut m = BigUint::zero();
    for c in text.chars() {
        m = m * &hundred + BigUint::from(char_to_code(c)?);
    }
    Ok(m)
}

/// Decode an integer back into text.
pub fn decode(m: &BigUint) -> Result<String, CodecError> {
    let mut digits = m.to_string();
    if digits.len() % 2 == 1 {
        digits.insert(0, '0');
    }

    let bytes = digits.as_bytes();
    let mut text = String::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks(2) {
        let code = (pair[0] - b'0') * 10 + (pair[1] - b'0');
        text.push(code_to_char(code)?);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        // A = 11, B = 12
        assert_eq!(encode("AB").unwrap(), BigUint::from(1112u32));
        // trailing space keeps its zero pair
        assert_eq!(encode("A ").unwrap(), BigUint::from(1100u32));
        assert_eq!(encode("Z.").unwrap(), BigUint::from(3638u32));
    }

    #[test]
    fn test_encode_lowercase_folds_to_uppercase() {
        assert_eq!(encode("abc").unwrap(), encode("ABC").unwrap());
    }

    #[test]
    fn test_roundtrip() {
        for text in ["HELLO WORLD.", "A", "RUST, SAFE PRIMES.", "Z"] {
            let m = encode(text).unwrap();
            assert_eq!(decode(&m).unwrap(), text);
        }
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(encode("").unwrap(), BigUint::zero());
        // zero decodes to a single space, the 00 code
        assert_eq!(decode(&BigUint::zero()).unwrap(), " ");
    }

    #[test]
    fn test_unsupported_character() {
        assert_eq!(
            encode("A!"),
            Err(CodecError::UnsupportedCharacter('!'))
        );
    }

    #[test]
    fn test_unassigned_code() {
        // 99 is outside every mapped range
        assert_eq!(
            decode(&BigUint::from(99u8)),
            Err(CodecError::UnassignedCode(99))
        );
    }
}
