//! Month and weekday name tables, addressed through an explicit [`Locale`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, prelude::*};

const MONTHS: usize = 12;

/// Supported languages for month and weekday names.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "de")]
    De,
    #[display(fmt = "fr")]
    Fr,
    #[display(fmt = "es")]
    Es,
    #[display(fmt = "it")]
    It,
    #[display(fmt = "nl")]
    Nl,
    #[display(fmt = "ru")]
    Ru,
}

/// Error type for locale lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// Language code is not one of the supported languages.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

impl Language {
    /// Every supported language, in declaration order
    pub const ALL: [Self; 7] = [
        Self::En,
        Self::De,
        Self::Fr,
        Self::Es,
        Self::It,
        Self::Nl,
        Self::Ru,
    ];

    const fn names(self) -> &'static Names {
        match self {
            Self::En => &EN,
            Self::De => &DE,
            Self::Fr => &FR,
            Self::Es => &ES,
            Self::It => &IT,
            Self::Nl => &NL,
            Self::Ru => &RU,
        }
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.to_string().eq_ignore_ascii_case(code))
            .ok_or_else(|| LocaleError::UnknownLanguage(s.to_owned()))
    }
}

struct Names {
    full_months: [&'static str; MONTHS],
    short_months: [&'static str; MONTHS],
    full_days: [&'static str; DAYS_PER_WEEK],
    short_days: [&'static str; DAYS_PER_WEEK],
}

// Weekday tables start on Sunday to line up with `Date::weekday`.

static EN: Names = Names {
    full_months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    full_days: [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    short_days: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
};

static DE: Names = Names {
    full_months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    short_months: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    full_days: [
        "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
    ],
    short_days: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
};

static FR: Names = Names {
    full_months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    short_months: [
        "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct", "nov",
        "déc",
    ],
    full_days: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    short_days: ["dim", "lun", "mar", "mer", "jeu", "ven", "sam"],
};

static ES: Names = Names {
    full_months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    short_months: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
    ],
    full_days: [
        "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
    ],
    short_days: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
};

static IT: Names = Names {
    full_months: [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
        "settembre", "ottobre", "novembre", "dicembre",
    ],
    short_months: [
        "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
    ],
    full_days: [
        "domenica", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
    ],
    short_days: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
};

static NL: Names = Names {
    full_months: [
        "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
        "oktober", "november", "december",
    ],
    short_months: [
        "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
    full_days: [
        "zondag", "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag",
    ],
    short_days: ["zo", "ma", "di", "wo", "do", "vr", "za"],
};

static RU: Names = Names {
    full_months: [
        "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
        "Октябрь", "Ноябрь", "Декабрь",
    ],
    short_months: [
        "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
    ],
    full_days: [
        "Воскресенье", "Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота",
    ],
    short_days: ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
};

/// The language selection every name lookup, format and parse runs against.
///
/// Pass it explicitly; nothing in this crate keeps a global current language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
pub struct Locale {
    language: Language,
}

impl Locale {
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    const fn names(&self) -> &'static Names {
        self.language.names()
    }

    /// Full month name for a 0-indexed month, e.g. `"April"` for `3`
    pub fn full_month_name(&self, month: usize) -> Option<&'static str> {
        self.names().full_months.get(month).copied()
    }

    /// Abbreviated month name for a 0-indexed month, e.g. `"Apr"` for `3`
    pub fn short_month_name(&self, month: usize) -> Option<&'static str> {
        self.names().short_months.get(month).copied()
    }

    /// Full weekday name, `0` = Sunday
    pub fn full_day_name(&self, weekday: usize) -> Option<&'static str> {
        self.names().full_days.get(weekday).copied()
    }

    /// Abbreviated weekday name, `0` = Sunday
    pub fn short_day_name(&self, weekday: usize) -> Option<&'static str> {
        self.names().short_days.get(weekday).copied()
    }

    pub const fn full_month_names(&self) -> &'static [&'static str; MONTHS] {
        &self.names().full_months
    }

    pub const fn short_month_names(&self) -> &'static [&'static str; MONTHS] {
        &self.names().short_months
    }

    pub const fn full_day_names(&self) -> &'static [&'static str; DAYS_PER_WEEK] {
        &self.names().full_days
    }

    pub const fn short_day_names(&self) -> &'static [&'static str; DAYS_PER_WEEK] {
        &self.names().short_days
    }

    /// 0-indexed month whose full name is exactly `name`
    pub fn index_of_full_month_name(&self, name: &str) -> Option<usize> {
        self.names().full_months.iter().position(|m| *m == name)
    }

    /// 0-indexed month whose abbreviated name is exactly `name`
    pub fn index_of_short_month_name(&self, name: &str) -> Option<usize> {
        self.names().short_months.iter().position(|m| *m == name)
    }
}
