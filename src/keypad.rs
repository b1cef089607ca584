use crate::error::PredictError;

/// Letters behind each key of a phone keypad, indexed by digit.
///
/// `0` carries no letters and `1` carries the punctuation that shows up in
/// names and contractions.
pub const KEYPAD: [&[char]; 10] = [
    &[],
    &['.', '-', '\''],
    &['a', 'b', 'c'],
    &['d', 'e', 'f'],
    &['g', 'h', 'i'],
    &['j', 'k', 'l'],
    &['m', 'n', 'o'],
    &['p', 'q', 'r', 's'],
    &['t', 'u', 'v'],
    &['w', 'x', 'y', 'z'],
];

/// Returns the candidate letters for a keypad digit, in keypad order.
pub fn letters_for(digit: char) -> Result<&'static [char], PredictError> {
    digit
        .to_digit(10)
        .map(|d| KEYPAD[d as usize])
        .ok_or(PredictError::InvalidDigit(digit))
}

/// Expands a digit sequence into one alphabet per digit.
///
/// Fails on the first character that isn't an ASCII digit.
pub fn alphabets(digits: &str) -> Result<Vec<&'static [char]>, PredictError> {
    digits.chars().map(letters_for).collect()
}

/// Reverse lookup: the key a letter sits on, if any.
pub fn digit_for(letter: char) -> Option<char> {
    KEYPAD
        .iter()
        .position(|letters| letters.contains(&letter))
        .and_then(|d| char::from_digit(d as u32, 10))
}

/// Spells a word as keypad digits, `None` if any letter has no key.
pub fn spell(word: &str) -> Option<String> {
    word.chars().map(digit_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_letters_for_digits() {
        assert_eq!(letters_for('0'), Ok(&[][..]));
        assert_eq!(letters_for('2'), Ok(&['a', 'b', 'c'][..]));
        assert_eq!(letters_for('7'), Ok(&['p', 'q', 'r', 's'][..]));
        assert_eq!(letters_for('9'), Ok(&['w', 'x', 'y', 'z'][..]));
    }

    #[test]
    fn test_letters_for_rejects_non_digits() {
        assert_eq!(letters_for('a'), Err(PredictError::InvalidDigit('a')));
        assert_eq!(letters_for('*'), Err(PredictError::InvalidDigit('*')));
        // to_digit(10) must not accept other unicode digits
        assert_eq!(letters_for('٣'), Err(PredictError::InvalidDigit('٣')));
    }

    #[test]
    fn test_no_letter_on_two_keys() {
        let mut seen = HashSet::new();
        for letters in KEYPAD.iter() {
            for letter in letters.iter() {
                assert!(seen.insert(*letter), "{letter:?} appears twice");
                assert!(!letter.is_uppercase());
            }
        }
        assert_eq!(seen.len(), 29);
    }

    #[test]
    fn test_alphabets_stops_at_invalid_digit() {
        assert_eq!(alphabets("28").unwrap().len(), 2);
        assert_eq!(alphabets("2x8"), Err(PredictError::InvalidDigit('x')));
        assert!(alphabets("").unwrap().is_empty());
    }

    #[test]
    fn test_spell() {
        assert_eq!(spell("cat").as_deref(), Some("228"));
        assert_eq!(spell("o'neil").as_deref(), Some("616345"));
        assert_eq!(spell("zoë"), None);
        assert_eq!(digit_for('1'), None);
    }
}
