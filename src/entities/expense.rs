//! Fixed expense entity - a recurring monthly cost unrelated to any debt.
//!
//! Expenses carry one display name per supported locale as parallel fields.
//! Which one is shown is up to the caller.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Display locales an expense carries names for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Farsi, tag `fa`
    #[serde(rename = "fa")]
    Persian,
    /// German, tag `de`
    #[default]
    #[serde(rename = "de")]
    German,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::German, Self::Persian];

    /// Language tag, e.g. `"de"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Persian => "fa",
            Self::German => "de",
        }
    }
}

/// A stored fixed expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    /// Identifier assigned at creation, never changes
    pub id: RecordId,
    /// Default (untranslated) name
    pub name: String,
    /// Farsi name, may be blank
    pub name_fa: String,
    /// German name, may be blank
    pub name_de: String,
    /// Monthly cost
    pub amount: f64,
}

impl FixedExpense {
    /// Picks the name for `locale`, falling back to the default name when the
    /// localized one is blank.
    #[must_use]
    pub fn display_name(&self, locale: Locale) -> &str {
        let localized = match locale {
            Locale::Persian => &self.name_fa,
            Locale::German => &self.name_de,
        };
        if localized.trim().is_empty() {
            &self.name
        } else {
            localized
        }
    }
}

/// Payload for creating a fixed expense. The ledger assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// Default (untranslated) name
    pub name: String,
    /// Farsi name
    #[serde(default)]
    pub name_fa: String,
    /// German name
    #[serde(default)]
    pub name_de: String,
    /// Monthly cost
    pub amount: f64,
}

impl NewExpense {
    /// Creates an expense with only a default name.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            name_fa: String::new(),
            name_de: String::new(),
            amount,
        }
    }

    /// Sets the Farsi and German names.
    #[must_use]
    pub fn with_translations(mut self, name_fa: impl Into<String>, name_de: impl Into<String>) -> Self {
        self.name_fa = name_fa.into();
        self.name_de = name_de.into();
        self
    }

    /// Attaches an id, producing the stored form of this expense.
    #[must_use]
    pub fn into_expense(self, id: RecordId) -> FixedExpense {
        FixedExpense {
            id,
            name: self.name,
            name_fa: self.name_fa,
            name_de: self.name_de,
            amount: self.amount,
        }
    }
}
