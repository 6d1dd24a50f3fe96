//! Locale-style string collation for sort keys.
//!
//! Approximates the CLDR root collation (what `localeCompare` uses with no
//! locale options) for English text without an ICU dependency:
//!
//! - primary level: whitespace < punctuation < symbols < digits < letters,
//!   with common Latin diacritics folded to their base letter. Whitespace and
//!   punctuation are not ignorable, so `"rick sanchez"` sorts before
//!   `"ricklantis"`.
//! - secondary level: an unaccented letter sorts before its accented forms.
//! - the raw strings break any remaining tie, so the result is a total order.
//!
//! Inputs are expected to be lower-cased already; there is no case level.

use std::cmp::Ordering;

/// Punctuation and symbols in CLDR root order. Everything here sorts after
/// whitespace and before digits.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Compare two already lower-cased strings in dictionary order.
///
/// ```
/// use rmdex::query::collate::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("rick sanchez", "ricklantis"), Ordering::Less);
/// assert_eq!(compare("mr. goldenfold", "mr meeseeks"), Ordering::Greater);
/// assert_eq!(compare("élan", "ember"), Ordering::Less);
/// assert_eq!(compare("", "abc"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| a.chars().map(is_accented).cmp(b.chars().map(is_accented)))
        .then_with(|| a.cmp(b))
}

/// Character class, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

fn primary_weight(c: char) -> (Class, u32) {
    if c.is_whitespace() {
        return (Class::Whitespace, 0);
    }
    if c.is_numeric() {
        return (Class::Digit, c.to_digit(10).unwrap_or(c as u32));
    }
    if c.is_alphabetic() {
        return (Class::Letter, fold_diacritic(c) as u32);
    }

    // Known ASCII punctuation by table position, anything else after it
    let rank = PUNCTUATION_ORDER
        .chars()
        .position(|p| p == c)
        .map_or(PUNCTUATION_ORDER.len() as u32 + c as u32, |i| i as u32);
    (Class::Punctuation, rank)
}

fn is_accented(c: char) -> bool {
    fold_diacritic(c) != c
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
