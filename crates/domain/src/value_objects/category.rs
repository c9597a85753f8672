//! Expense category value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expense category selected by a single-letter code
///
/// The code table is closed: `f`, `t`, `c`, `g`, `b` and `m`. Anything else
/// resolves to [`Category::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Clothes,
    Grocery,
    Beverage,
    Misc,
    /// Fallback for unrecognized codes
    Unknown,
}

impl Category {
    /// Letter code to category lookup table
    pub const TABLE: [(char, Self); 6] = [
        ('f', Self::Food),
        ('t', Self::Transport),
        ('c', Self::Clothes),
        ('g', Self::Grocery),
        ('b', Self::Beverage),
        ('m', Self::Misc),
    ];

    /// Resolve a single-letter code. Codes are lowercase only.
    #[must_use]
    pub fn from_code(code: char) -> Self {
        Self::TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(Self::Unknown, |(_, category)| *category)
    }

    /// Category name as stored in the record store's select field
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Clothes => "clothes",
            Self::Grocery => "grocery",
            Self::Beverage => "beverage",
            Self::Misc => "misc",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the category came from a recognized code
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// All recognized codes, in table order
    pub fn codes() -> impl Iterator<Item = char> {
        Self::TABLE.iter().map(|(c, _)| *c)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
