//! Template tokenizer.
//!
//! A template is scanned left to right into [`Segment`]s. At each position
//! the scanner prefers, in order:
//!
//! 1. an escaped literal run `[...]` (no nesting; the first `]` closes it),
//! 2. a whole word that is exactly one of the nine [`Token`]s,
//! 3. a single passthrough character.
//!
//! Words are runs of ASCII letters, digits and `_`. A word only counts as a
//! token when the whole run matches, so `yyy` and `ddmmyyyy` are passed
//! through character by character rather than split into tokens.

use std::iter::FusedIterator;

use crate::{Date, LITERAL_CLOSE, LITERAL_OPEN, Locale, prelude::*};

/// A calendar field placeholder inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Token {
    /// Day of month, unpadded
    #[display(fmt = "d")]
    Day,
    /// Day of month, zero-padded to 2 digits
    #[display(fmt = "dd")]
    DayPadded,
    /// Abbreviated weekday name
    #[display(fmt = "ddd")]
    ShortWeekday,
    /// Full weekday name
    #[display(fmt = "dddd")]
    FullWeekday,
    /// Month number (1-12), unpadded
    #[display(fmt = "m")]
    Month,
    /// Month number (01-12), zero-padded to 2 digits
    #[display(fmt = "mm")]
    MonthPadded,
    /// Abbreviated month name
    #[display(fmt = "mmm")]
    ShortMonth,
    /// Full month name
    #[display(fmt = "mmmm")]
    FullMonth,
    /// Full year, zero-padded to 4 digits
    #[display(fmt = "yyyy")]
    Year,
}

impl Token {
    pub const ALL: [Self; 9] = [
        Self::Day,
        Self::DayPadded,
        Self::ShortWeekday,
        Self::FullWeekday,
        Self::Month,
        Self::MonthPadded,
        Self::ShortMonth,
        Self::FullMonth,
        Self::Year,
    ];

    /// The token's spelling in a template
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::DayPadded => "dd",
            Self::ShortWeekday => "ddd",
            Self::FullWeekday => "dddd",
            Self::Month => "m",
            Self::MonthPadded => "mm",
            Self::ShortMonth => "mmm",
            Self::FullMonth => "mmmm",
            Self::Year => "yyyy",
        }
    }

    /// Looks up a token by its exact spelling
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.as_str() == word)
    }

    /// Whether the token reads digits (as opposed to names)
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Day | Self::DayPadded | Self::Month | Self::MonthPadded | Self::Year
        )
    }

    /// Renders the field this token stands for
    pub fn format(self, date: &Date, locale: &Locale) -> String {
        let month = usize::from(date.month());
        let weekday = usize::from(date.weekday());
        match self {
            Self::Day => date.day().to_string(),
            Self::DayPadded => format!("{:02}", date.day()),
            Self::ShortWeekday => locale.short_day_names()[weekday].to_owned(),
            Self::FullWeekday => locale.full_day_names()[weekday].to_owned(),
            Self::Month => (month + 1).to_string(),
            Self::MonthPadded => format!("{:02}", month + 1),
            Self::ShortMonth => locale.short_month_names()[month].to_owned(),
            Self::FullMonth => locale.full_month_names()[month].to_owned(),
            Self::Year => format!("{:04}", date.year()),
        }
    }

    /// The leading part of `input` this token would consume.
    ///
    /// Numeric tokens take the longest run of ASCII digits, name tokens the
    /// longest run of word characters (letters, digits, `_`). The result is
    /// empty when `input` does not start with such a character.
    pub fn extract(self, input: &str) -> &str {
        let end = if self.is_numeric() {
            input.find(|c: char| !c.is_ascii_digit())
        } else {
            input.find(|c: char| !is_name_char(c))
        };
        &input[..end.unwrap_or(input.len())]
    }
}

/// One piece of a tokenized template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Contents of an escaped `[...]` run, brackets removed
    Literal(&'a str),
    /// A recognized token
    Token(Token),
    /// Any other single character
    Passthrough(char),
}

/// Iterator over the segments of a template, see [`tokenize`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    template: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    pub const fn new(template: &'a str) -> Self {
        Self { template, pos: 0 }
    }

    fn at_word_start(&self) -> bool {
        self.template[..self.pos]
            .chars()
            .next_back()
            .is_none_or(|prev| !is_word_char(prev))
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.template[self.pos..];
        let c = rest.chars().next()?;

        if c == LITERAL_OPEN {
            let body = &rest[LITERAL_OPEN.len_utf8()..];
            if let Some(end) = body.find(LITERAL_CLOSE) {
                self.pos += LITERAL_OPEN.len_utf8() + end + LITERAL_CLOSE.len_utf8();
                return Some(Segment::Literal(&body[..end]));
            }
        }

        if is_word_char(c) && self.at_word_start() {
            let len = rest.find(|ch| !is_word_char(ch)).unwrap_or(rest.len());
            if let Some(token) = Token::from_word(&rest[..len]) {
                self.pos += len;
                return Some(Segment::Token(token));
            }
        }

        self.pos += c.len_utf8();
        Some(Segment::Passthrough(c))
    }
}

impl FusedIterator for Segments<'_> {}

/// Splits a template into literal, token and passthrough segments.
pub fn tokenize(template: &str) -> Vec<Segment<'_>> {
    Segments::new(template).collect()
}

// Token boundaries use the ASCII word class.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// Names may be localized, so extraction accepts any alphanumeric.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
