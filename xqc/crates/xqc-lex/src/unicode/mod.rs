//! XML character classes used by the scanner.
//!
//! Names and numbers are defined in terms of the XML 1.0 `Letter`, `Digit`,
//! `CombiningChar` and `Extender` productions. Membership here must match
//! those productions exactly, which rules out `char::is_alphabetic` and
//! friends: Unicode has moved on since the tables were fixed.
//!
//! ```text
//! Letter        ::= BaseChar | Ideographic
//! NameStartChar ::= Letter | '_'
//! NameChar      ::= Letter | Digit | '.' | '-' | '_' | CombiningChar | Extender
//! ```

mod tables;

use tables::{BASE_CHAR, COMBINING_CHAR, DIGIT, EXTENDER, IDEOGRAPHIC};

#[inline]
fn in_table(table: &[(char, char)], c: char) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if c < lo {
                std::cmp::Ordering::Greater
            } else if c > hi {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// `BaseChar`
pub fn is_base_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    in_table(BASE_CHAR, c)
}

/// `Ideographic`
pub fn is_ideographic(c: char) -> bool {
    in_table(IDEOGRAPHIC, c)
}

/// `Letter`
///
/// ```
/// use xqc_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('\u{4E00}'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('\u{00AA}')); // not in the XML 1.0 tables
/// ```
pub fn is_letter(c: char) -> bool {
    is_base_char(c) || is_ideographic(c)
}

/// `Digit`, ASCII and the other decimal digit blocks of the tables
///
/// ```
/// use xqc_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('\u{0663}')); // ARABIC-INDIC DIGIT THREE
/// assert!(!is_digit('a'));
/// ```
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    in_table(DIGIT, c)
}

/// `CombiningChar`
pub fn is_combining(c: char) -> bool {
    !c.is_ascii() && in_table(COMBINING_CHAR, c)
}

/// `Extender`
pub fn is_extender(c: char) -> bool {
    !c.is_ascii() && in_table(EXTENDER, c)
}

/// First character of an NCName
///
/// ```
/// use xqc_lex::unicode::is_name_start;
///
/// assert!(is_name_start('_'));
/// assert!(is_name_start('x'));
/// assert!(!is_name_start('-'));
/// assert!(!is_name_start(':'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Any later character of an NCName
///
/// ```
/// use xqc_lex::unicode::is_name_char;
///
/// assert!(is_name_char('-'));
/// assert!(is_name_char('.'));
/// assert!(is_name_char('9'));
/// assert!(!is_name_char(':'));
/// ```
#[inline]
pub fn is_name_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_');
    }
    is_letter(c) || is_digit(c) || is_combining(c) || is_extender(c)
}

/// Whitespace recognised between tokens: space, tab, CR and LF
#[inline]
pub fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
