//! Character classification against the fixed policy alphabet.
//!
//! The policy recognizes exactly four character classes: special symbols,
//! digits, lowercase letters, uppercase letters. Classification is
//! ASCII-exact; anything outside the four classes is an invalid character.

/// Returns `true` if `c` belongs to the fixed special-symbol alphabet.
///
/// The alphabet is policy, not derivable: backtick, hyphen, equals, brackets,
/// semicolon, quote, comma, period, slash, tilde, the shifted number row,
/// braces, colon, double quote, angle brackets, question mark.
pub fn is_special(c: char) -> bool {
    matches!(
        c,
        '`' | '-'
            | '='
            | '['
            | ']'
            | ';'
            | '\''
            | ','
            | '.'
            | '/'
            | '~'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | ')'
            | '('
            | '_'
            | '+'
            | '{'
            | '}'
            | ':'
            | '"'
            | '<'
            | '>'
            | '?'
    )
}

/// Returns `true` if `c` is outside all four recognized classes.
pub fn is_invalid_char(c: char) -> bool {
    !c.is_ascii_alphanumeric() && !is_special(c)
}

/// Per-class occurrence counts for one candidate string.
///
/// Computed fresh per call and discarded after use; invalid characters
/// contribute to no class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub special: usize,
    pub digits: usize,
    pub lowercase: usize,
    pub uppercase: usize,
}

impl ClassCounts {
    pub fn scan(candidate: &str) -> Self {
        let mut counts = ClassCounts::default();
        for c in candidate.chars() {
            if c.is_ascii_digit() {
                counts.digits += 1;
            } else if c.is_ascii_lowercase() {
                counts.lowercase += 1;
            } else if c.is_ascii_uppercase() {
                counts.uppercase += 1;
            } else if is_special(c) {
                counts.special += 1;
            }
        }
        counts
    }

    /// How many of the four classes occur at least once (0..=4).
    pub fn classes_present(&self) -> usize {
        [self.special, self.digits, self.lowercase, self.uppercase]
            .iter()
            .filter(|&&n| n > 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_alphabet_membership() {
        for c in "`-=[];',./~!@#$%^&*)(_+{}:\"<>?".chars() {
            assert!(is_special(c), "{:?} should be special", c);
        }
        assert!(!is_special(' '));
        assert!(!is_special('\\'));
        assert!(!is_special('|'));
        assert!(!is_special('a'));
        assert!(!is_special('中'));
    }

    #[test]
    fn test_invalid_char_detection() {
        assert!(is_invalid_char(' '));
        assert!(is_invalid_char('中'));
        assert!(is_invalid_char('é'));
        assert!(!is_invalid_char('A'));
        assert!(!is_invalid_char('7'));
        assert!(!is_invalid_char('?'));
    }

    #[test]
    fn test_scan_counts_each_class() {
        let counts = ClassCounts::scan("Aa1!Aa1!");
        assert_eq!(counts.uppercase, 2);
        assert_eq!(counts.lowercase, 2);
        assert_eq!(counts.digits, 2);
        assert_eq!(counts.special, 2);
        assert_eq!(counts.classes_present(), 4);
    }

    #[test]
    fn test_non_ascii_counts_toward_nothing() {
        let counts = ClassCounts::scan("中文é");
        assert_eq!(counts, ClassCounts::default());
        assert_eq!(counts.classes_present(), 0);
    }

    #[test]
    fn test_classes_present_is_monotone() {
        let base = ClassCounts::scan("abc").classes_present();
        let plus_upper = ClassCounts::scan("abcZ").classes_present();
        let plus_digit = ClassCounts::scan("abcZ9").classes_present();
        assert!(plus_upper >= base);
        assert!(plus_digit >= plus_upper);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(ClassCounts::scan("").classes_present(), 0);
    }
}
