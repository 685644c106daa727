use crate::{Error, Result};

/// The engine's pitch alphabet: two chromatic octaves, sharps only.
///
/// Index order is the canonical pitch index, so `SYMBOLS[i]` decodes
/// index `i` and arithmetic on indices wraps modulo [`ALPHABET_LEN`].
/// Wrap-around across the octave-4/octave-5 boundary can produce jumps
/// of nearly two octaves; accepted as a simplification.
pub const SYMBOLS: [&str; 24] = [
    "C4", "C#4", "D4", "D#4", "E4", "F4", "F#4", "G4", "G#4", "A4", "A#4", "B4",
    "C5", "C#5", "D5", "D#5", "E5", "F5", "F#5", "G5", "G#5", "A5", "A#5", "B5",
];

pub const ALPHABET_LEN: usize = SYMBOLS.len();

/// Encode a note symbol to its pitch index in [0, 23].
pub fn encode(symbol: &str) -> Result<u8> {
    SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|i| i as u8)
        .ok_or_else(|| Error::UnknownSymbol {
            symbol: symbol.to_string(),
        })
}

/// Decode a pitch index back to its note symbol.
///
/// Total: any index is taken modulo the alphabet length, so callers can
/// pass wrapped arithmetic results directly.
pub fn decode(index: i32) -> &'static str {
    SYMBOLS[index.rem_euclid(ALPHABET_LEN as i32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_decode_round_trip() {
        for (i, &symbol) in SYMBOLS.iter().enumerate() {
            assert_eq!(encode(symbol).unwrap(), i as u8);
            assert_eq!(decode(i as i32), symbol);
        }
    }

    #[test]
    fn encode_rejects_unknown_symbols() {
        for bad in ["H9", "C6", "Db4", "c4", ""] {
            match encode(bad) {
                Err(Error::UnknownSymbol { symbol }) => assert_eq!(symbol, bad),
                other => panic!("expected UnknownSymbol for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn decode_wraps_modulo_alphabet() {
        assert_eq!(decode(24), "C4");
        assert_eq!(decode(-1), "B5");
        assert_eq!(decode(-24), "C4");
        assert_eq!(decode(25), "C#4");
    }
}
