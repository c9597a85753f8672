//! Expense grammar pattern

use std::sync::LazyLock;

use domain::Category;
use regex::Regex;

/// Compiled expense grammar. The category class is generated from
/// [`Category::TABLE`] so the two cannot drift apart.
static EXPENSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let codes: String = Category::codes().collect();
    let pattern = format!(r"^([0-9]+(?:\.[0-9]{{1,2}})?)([{codes}])(\s*)(.*)$");
    #[allow(clippy::expect_used)] // Infallible with the static pattern above
    Regex::new(&pattern).expect("Failed to compile expense pattern")
});

/// Raw pieces of a grammar match
#[derive(Debug, Clone, Copy)]
pub(super) struct ExpenseCaptures<'a> {
    pub amount: &'a str,
    pub code: char,
    pub separator: &'a str,
    pub tail: &'a str,
}

impl<'a> ExpenseCaptures<'a> {
    pub(super) fn match_input(input: &'a str) -> Option<Self> {
        let caps = EXPENSE_PATTERN.captures(input)?;

        Some(Self {
            amount: caps.get(1)?.as_str(),
            code: caps.get(2)?.as_str().chars().next()?,
            separator: caps.get(3).map_or("", |m| m.as_str()),
            tail: caps.get(4).map_or("", |m| m.as_str()),
        })
    }

    /// A title glued to the code must not start with another code (`10ft`)
    pub(super) fn has_glued_category_letter(&self) -> bool {
        self.separator.is_empty()
            && self
                .tail
                .chars()
                .next()
                .is_some_and(|c| Category::from_code(c).is_known())
    }
}
