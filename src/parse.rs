//! Template-driven parser, the inverse of [`crate::format()`].
//!
//! The input is consumed strictly left to right in a single pass. When a
//! segment cannot be matched the walk stops there, a [`Mismatch`] is logged,
//! and the date is still assembled from whatever fields were read so far.

use std::fmt;

use crate::{Date, Locale, Segment, Segments, Token};

/// Where and why a parse stopped consuming input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// The full string being parsed
    pub input: String,
    /// The template text or token that could not be matched
    pub expected: String,
    /// Offset into `input`, in characters
    pub position: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to match {:?} at position {} in {:?}",
            self.expected, self.position, self.input
        )
    }
}

/// Result of [`parse_with_diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The parsed date, `None` when year, month or day is missing or invalid
    pub date: Option<Date>,
    /// Set when the walk stopped before the end of the template
    pub mismatch: Option<Mismatch>,
}

/// Raw text matched per token during one parse call.
#[derive(Default)]
struct HookValues<'a>([Option<&'a str>; Token::ALL.len()]);

impl<'a> HookValues<'a> {
    const fn set(&mut self, token: Token, value: &'a str) {
        self.0[token as usize] = Some(value);
    }

    const fn get(&self, token: Token) -> Option<&'a str> {
        self.0[token as usize]
    }

    fn get_either(&self, first: Token, second: Token) -> Option<&'a str> {
        self.get(first).or_else(|| self.get(second))
    }
}

/// Parses `input` against `template`, returning `None` when no valid date
/// can be assembled.
///
/// A literal or token that does not match stops the walk without failing
/// it: whatever fields were read up to that point are still used. Trailing
/// input after the last segment is ignored.
///
/// The day comes from `dd`, else `d`; the month from `mmmm`, else `mmm`,
/// else `mm`/`m`; the year from `yyyy`. A month *name* that is not in the
/// locale maps to month index `-1`, which is accepted and rolls back into
/// December of the previous year.
pub fn parse(input: &str, template: &str, locale: &Locale) -> Option<Date> {
    parse_with_diagnostics(input, template, locale).date
}

/// Like [`parse()`], but also reports where the walk stopped.
pub fn parse_with_diagnostics(input: &str, template: &str, locale: &Locale) -> ParseOutcome {
    let mut hooks = HookValues::default();
    let mut rest = input;
    let mut mismatch = None;

    for segment in Segments::new(template) {
        let matched = match segment {
            Segment::Literal(text) => rest.starts_with(text).then_some(text.len()),
            Segment::Passthrough(c) => rest.starts_with(c).then_some(c.len_utf8()),
            Segment::Token(token) => {
                let value = token.extract(rest);
                if value.is_empty() {
                    None
                } else {
                    hooks.set(token, value);
                    Some(value.len())
                }
            }
        };

        match matched {
            Some(len) => rest = &rest[len..],
            None => {
                let found = Mismatch {
                    input: input.to_owned(),
                    expected: expected_text(segment),
                    position: input[..input.len() - rest.len()].chars().count(),
                };
                log::warn!("{found}");
                mismatch = Some(found);
                break;
            }
        }
    }

    let date = assemble(&hooks, locale);
    if date.is_none() {
        log::debug!("No date in {input:?} for template {template:?}");
    }
    ParseOutcome { date, mismatch }
}

fn expected_text(segment: Segment<'_>) -> String {
    match segment {
        Segment::Literal(text) => text.to_owned(),
        Segment::Token(token) => token.as_str().to_owned(),
        Segment::Passthrough(c) => c.to_string(),
    }
}

fn assemble(hooks: &HookValues<'_>, locale: &Locale) -> Option<Date> {
    let year = digits(hooks.get(Token::Year))?;
    let day = digits(hooks.get_either(Token::DayPadded, Token::Day))?;
    let month = if let Some(name) = hooks.get(Token::FullMonth) {
        name_index(locale.index_of_full_month_name(name))
    } else if let Some(name) = hooks.get(Token::ShortMonth) {
        name_index(locale.index_of_short_month_name(name))
    } else {
        digits(hooks.get_either(Token::MonthPadded, Token::Month))? - 1
    };

    Date::new(year, month, day).ok()
}

/// A field read from digits: must be a non-empty run of ASCII digits that
/// fits in an `i32`
fn digits(value: Option<&str>) -> Option<i32> {
    let value = value?;
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

// Unknown names are not rejected; they become -1.
fn name_index(index: Option<usize>) -> i32 {
    index.and_then(|i| i32::try_from(i).ok()).unwrap_or(-1)
}

impl Locale {
    /// Parses `input` against `template` with this locale's names
    pub fn parse(&self, input: &str, template: &str) -> Option<Date> {
        parse(input, template, self)
    }
}
