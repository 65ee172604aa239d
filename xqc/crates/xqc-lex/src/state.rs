//! Scanner mode flags.
//!
//! The grammar decides when the scanner is inside element content or a
//! quoted attribute value; the scanner itself only reacts to a handful of
//! tokens (see [`ScanState::on_token`]). The flags are private so that
//! element and attribute content can never be active at the same time.

use tracing::trace;

use crate::token::TokenKind;

/// Delimiter of the attribute value being scanned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttrDelim {
    /// `"`
    #[default]
    Quot,
    /// `'`
    Apos,
}

impl AttrDelim {
    /// The delimiter character.
    pub const fn as_char(self) -> char {
        match self {
            AttrDelim::Quot => '"',
            AttrDelim::Apos => '\'',
        }
    }

    /// Maps `"` and `'` to a delimiter.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(AttrDelim::Quot),
            '\'' => Some(AttrDelim::Apos),
            _ => None,
        }
    }
}

/// Mode flags consulted by every recognizer.
///
/// ```
/// use xqc_lex::{AttrDelim, ScanState};
///
/// let mut state = ScanState::default();
/// assert!(state.parse_string_literals());
///
/// state.set_element_content(true);
/// state.enter_attribute_content(AttrDelim::Apos);
/// assert!(!state.in_element_content());
/// assert_eq!(state.attr_delim(), Some(AttrDelim::Apos));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanState {
    in_element_content: bool,
    in_attribute_content: bool,
    attr_delim: AttrDelim,
    in_pragma: bool,
    ws_explicit: bool,
    parse_string_literals: bool,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            in_element_content: false,
            in_attribute_content: false,
            attr_delim: AttrDelim::Quot,
            in_pragma: false,
            ws_explicit: false,
            parse_string_literals: true,
        }
    }
}

impl ScanState {
    /// Between the tags of a direct element constructor.
    #[inline]
    pub fn in_element_content(&self) -> bool {
        self.in_element_content
    }

    /// Inside a quoted attribute value of a direct constructor.
    #[inline]
    pub fn in_attribute_content(&self) -> bool {
        self.in_attribute_content
    }

    /// Either content mode.
    #[inline]
    pub fn in_content(&self) -> bool {
        self.in_element_content || self.in_attribute_content
    }

    /// The active delimiter, only while in attribute content.
    #[inline]
    pub fn attr_delim(&self) -> Option<AttrDelim> {
        self.in_attribute_content.then_some(self.attr_delim)
    }

    /// Between `(#` and `#)`.
    #[inline]
    pub fn in_pragma(&self) -> bool {
        self.in_pragma
    }

    /// Whitespace is emitted as [`TokenKind::Ws`] instead of skipped.
    #[inline]
    pub fn ws_explicit(&self) -> bool {
        self.ws_explicit
    }

    /// Quotes start string literals.
    #[inline]
    pub fn parse_string_literals(&self) -> bool {
        self.parse_string_literals
    }

    /// Enters or leaves element content. Entering leaves attribute content.
    pub fn set_element_content(&mut self, on: bool) {
        if on && self.in_attribute_content {
            trace!("element content replaces attribute content");
            self.in_attribute_content = false;
        }
        self.in_element_content = on;
    }

    /// Enters attribute content delimited by `delim`, leaving element
    /// content.
    pub fn enter_attribute_content(&mut self, delim: AttrDelim) {
        if self.in_element_content {
            trace!("attribute content replaces element content");
            self.in_element_content = false;
        }
        self.in_attribute_content = true;
        self.attr_delim = delim;
    }

    /// Leaves attribute content.
    pub fn leave_attribute_content(&mut self) {
        self.in_attribute_content = false;
    }

    /// Sets whether whitespace is significant.
    pub fn set_ws_explicit(&mut self, on: bool) {
        self.ws_explicit = on;
    }

    /// Sets whether quotes start string literals.
    pub fn set_parse_string_literals(&mut self, on: bool) {
        self.parse_string_literals = on;
    }

    /// Applies the transitions triggered by a matched token.
    ///
    /// - `{` leaves element and attribute content
    /// - `</` leaves element content and clears explicit whitespace
    /// - `<` leaves element content
    /// - `(#` enters a pragma, `#)` leaves it
    pub fn on_token(&mut self, kind: TokenKind) {
        match kind {
            TokenKind::LCurly => {
                if self.in_content() {
                    trace!("leaving constructor content at enclosed expression");
                }
                self.in_element_content = false;
                self.in_attribute_content = false;
            },
            TokenKind::EndTagStart => {
                trace!("end tag");
                self.in_element_content = false;
                self.ws_explicit = false;
            },
            TokenKind::Lt => {
                trace!("start tag");
                self.in_element_content = false;
            },
            TokenKind::PragmaStart => {
                trace!("entering pragma");
                self.in_pragma = true;
            },
            TokenKind::PragmaEnd => {
                trace!("leaving pragma");
                self.in_pragma = false;
            },
            _ => {},
        }
    }
}
