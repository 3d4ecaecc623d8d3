//! Format configuration
//!
//! Holds the language and template a picker formats and parses with, so
//! both can be loaded from an application's settings file.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_TEMPLATE, Date, Language, Locale, format, parse};

/// Language and template for a date field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Language used for month and weekday names
    pub language: Language,
    /// Template, e.g. `"yyyy-mm-dd"` or `"dddd, d mmmm yyyy"`
    pub template: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            template: DEFAULT_TEMPLATE.to_owned(),
        }
    }
}

impl FormatConfig {
    pub fn new(language: Language, template: impl Into<String>) -> Self {
        Self {
            language,
            template: template.into(),
        }
    }

    pub const fn locale(&self) -> Locale {
        Locale::new(self.language)
    }

    /// Renders `date` with the configured template and language
    pub fn format(&self, date: &Date) -> String {
        format(date, &self.template, &self.locale())
    }

    /// Parses `input` with the configured template and language
    pub fn parse(&self, input: &str) -> Option<Date> {
        parse(input, &self.template, &self.locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.template, "yyyy-mm-dd");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FormatConfig = serde_json::from_str(r#"{"language":"de"}"#).unwrap();
        assert_eq!(config, FormatConfig::new(Language::De, DEFAULT_TEMPLATE));

        let config: FormatConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FormatConfig::default());
    }

    #[test]
    fn test_deserialize_unknown_language_fails() {
        let result: Result<FormatConfig, _> = serde_json::from_str(r#"{"language":"xx"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = FormatConfig::new(Language::Nl, "d mmmm yyyy");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"language":"nl","template":"d mmmm yyyy"}"#);
        assert_eq!(serde_json::from_str::<FormatConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_format_and_parse_with_config() {
        let config = FormatConfig::new(Language::Nl, "d mmmm yyyy");
        let date = Date::new(2014, 2, 20).unwrap();
        assert_eq!(config.format(&date), "20 maart 2014");
        assert_eq!(config.parse("20 maart 2014"), Some(date));
    }
}
