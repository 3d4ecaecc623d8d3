use crate::{Date, DateError, Locale, Segment, Segments};

/// Renders `date` through `template`.
///
/// Tokens are replaced by the date's fields (names taken from `locale`),
/// escaped `[...]` runs are emitted without their brackets and every other
/// character is copied as is.
pub fn format(date: &Date, template: &str, locale: &Locale) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    for segment in Segments::new(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token(token) => out.push_str(&token.format(date, locale)),
            Segment::Passthrough(c) => out.push(c),
        }
    }
    out
}

/// Renders an epoch timestamp (milliseconds) through `template`.
///
/// # Errors
/// Returns `DateError::OutOfRange` if `millis` does not describe a valid date.
pub fn format_millis(millis: i64, template: &str, locale: &Locale) -> Result<String, DateError> {
    let date = Date::from_timestamp_millis(millis)?;
    Ok(format(&date, template, locale))
}

impl Locale {
    /// Renders `date` through `template` with this locale's names
    pub fn format(&self, date: &Date, template: &str) -> String {
        format(date, template, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language, MAX_TIMESTAMP_MILLIS};

    fn date(year: i32, month: i32, day: i32) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn test_format_iso() {
        assert_eq!(
            format(&date(2014, 3, 20), "yyyy-mm-dd", &Locale::default()),
            "2014-04-20"
        );
    }

    #[test]
    fn test_format_cases() {
        struct TestCase {
            template: &'static str,
            expected: &'static str,
        }

        let d = date(2014, 3, 6);
        let cases = [
            TestCase {
                template: "d/m/yyyy",
                expected: "6/4/2014",
            },
            TestCase {
                template: "dd.mm.yyyy",
                expected: "06.04.2014",
            },
            TestCase {
                template: "dddd, mmmm d, yyyy",
                expected: "Sunday, April 6, 2014",
            },
            TestCase {
                template: "ddd d mmm",
                expected: "Sun 6 Apr",
            },
            TestCase {
                template: "",
                expected: "",
            },
            TestCase {
                template: "no tokens here!",
                expected: "no tokens here!",
            },
            TestCase {
                template: "ddmmyyyy",
                expected: "ddmmyyyy",
            },
            TestCase {
                template: "yyy",
                expected: "yyy",
            },
        ];

        for case in &cases {
            assert_eq!(
                format(&d, case.template, &Locale::default()),
                case.expected,
                "template {:?}",
                case.template
            );
        }
    }

    #[test]
    fn test_format_escaped_literal() {
        let out = format(&date(2014, 0, 1), "yyyy[ year]", &Locale::default());
        assert_eq!(out, "2014 year");
        assert!(!out.contains('[') && !out.contains(']'));
    }

    #[test]
    fn test_format_escaped_tokens_are_not_expanded() {
        assert_eq!(
            format(&date(2014, 3, 20), "[dd] dd", &Locale::default()),
            "dd 20"
        );
    }

    #[test]
    fn test_format_localized() {
        let d = date(2014, 11, 25);
        assert_eq!(
            format(&d, "dddd d mmmm yyyy", &Locale::new(Language::Fr)),
            "jeudi 25 décembre 2014"
        );
        assert_eq!(Locale::new(Language::Es).format(&d, "d mmm"), "25 dic");
    }

    #[test]
    fn test_format_ignores_time_of_day() {
        let d = date(2014, 3, 20).and_hms_milli(23, 59, 59, 999).unwrap();
        assert_eq!(format(&d, "yyyy-mm-dd", &Locale::default()), "2014-04-20");
    }

    #[test]
    fn test_format_millis() {
        let locale = Locale::default();
        assert_eq!(
            format_millis(1_397_952_000_000, "yyyy-mm-dd", &locale).unwrap(),
            "2014-04-20"
        );
        assert_eq!(format_millis(0, "d mmmm yyyy", &locale).unwrap(), "1 January 1970");
        assert!(matches!(
            format_millis(MAX_TIMESTAMP_MILLIS + 1, "yyyy", &locale),
            Err(DateError::OutOfRange(_))
        ));
    }
}
