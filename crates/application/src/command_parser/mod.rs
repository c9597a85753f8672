//! Command parser - Turn chat text into typed expense commands
//!
//! The grammar is fixed: `<amount>[.<1-2 digits>]<category-letter>[ <title>]`,
//! for example `100f`, `49.50c new shoes` or `12.5t taxi home`.
//!
//! - [`grammar`]: the compiled pattern and the capture splitting

mod grammar;

use domain::{Amount, Category, ParsedExpense};
use tracing::debug;

use grammar::ExpenseCaptures;

/// Result of parsing one chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// The text matched the expense grammar
    Expense(ParsedExpense),
    /// Not an expense command
    Unrecognized,
}

impl ParsedCommand {
    /// Get the parsed expense, if any
    #[must_use]
    pub fn into_expense(self) -> Option<ParsedExpense> {
        match self {
            Self::Expense(expense) => Some(expense),
            Self::Unrecognized => None,
        }
    }

    #[must_use]
    pub const fn is_expense(&self) -> bool {
        matches!(self, Self::Expense(_))
    }
}

/// Parser for expense commands
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseParser;

impl ExpenseParser {
    /// Create a new expense parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse raw message text
    ///
    /// Never fails: text outside the grammar yields [`ParsedCommand::Unrecognized`].
    /// A zero amount still parses; use [`ParsedExpense::is_actionable`] to
    /// decide whether to record it.
    pub fn parse(&self, input: &str) -> ParsedCommand {
        let Some(captures) = ExpenseCaptures::match_input(input) else {
            return ParsedCommand::Unrecognized;
        };

        if captures.has_glued_category_letter() {
            debug!(input_len = input.len(), "Rejected command with multiple category letters");
            return ParsedCommand::Unrecognized;
        }

        let amount = match captures.amount.parse::<Amount>() {
            Ok(amount) => amount,
            Err(e) => {
                // Only reachable for amounts beyond decimal precision
                debug!(error = %e, "Amount not exactly representable");
                return ParsedCommand::Unrecognized;
            },
        };

        let category = Category::from_code(captures.code);
        let title = Some(captures.tail.to_string());

        let expense = ParsedExpense::new(amount, category, title);
        debug!(
            amount = %expense.amount(),
            category = %expense.category(),
            has_title = expense.title().is_some(),
            "Parsed expense command"
        );
        ParsedCommand::Expense(expense)
    }

    /// Check whether text is an expense command without building the expense
    pub fn is_expense_command(&self, input: &str) -> bool {
        self.parse(input).is_expense()
    }
}

/// Extract an expense from text, `None` if it does not match the grammar
pub fn extract_expense(input: &str) -> Option<ParsedExpense> {
    ExpenseParser::new().parse(input).into_expense()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Option<ParsedExpense> {
        extract_expense(input)
    }

    #[test]
    fn whole_amount_without_title() {
        let expense = parse("100f").unwrap();
        assert_eq!(expense.amount().formatted(), "100.00");
        assert_eq!(expense.category(), Category::Food);
        assert_eq!(expense.category().name(), "food");
        assert_eq!(expense.title(), None);
    }

    #[test]
    fn decimal_amount_with_title() {
        let expense = parse("49.50c new shoes").unwrap();
        assert_eq!(expense.amount(), "49.50".parse::<Amount>().unwrap());
        assert_eq!(expense.category().name(), "clothes");
        assert_eq!(expense.title(), Some("new shoes"));
    }

    #[test]
    fn single_fraction_digit() {
        let expense = parse("12.5t").unwrap();
        assert_eq!(expense.amount().formatted(), "12.50");
        assert_eq!(expense.category(), Category::Transport);
    }

    #[test]
    fn zero_amount_parses_but_is_not_actionable() {
        let expense = parse("0g").unwrap();
        assert!(expense.amount().is_zero());
        assert_eq!(expense.category(), Category::Grocery);
        assert!(!expense.is_actionable());
    }

    #[test]
    fn plain_text_is_unrecognized() {
        assert_eq!(ExpenseParser::new().parse("hello"), ParsedCommand::Unrecognized);
    }

    #[test]
    fn unknown_category_letter_is_unrecognized() {
        assert!(parse("10x").is_none());
        assert!(parse("10xf").is_none());
    }

    #[test]
    fn uppercase_category_is_unrecognized() {
        assert!(parse("10F").is_none());
    }

    #[test]
    fn three_fraction_digits_are_unrecognized() {
        assert!(parse("1.005f").is_none());
    }

    #[test]
    fn dangling_decimal_point_is_unrecognized() {
        assert!(parse("10.f").is_none());
        assert!(parse(".5f").is_none());
    }

    #[test]
    fn missing_amount_is_unrecognized() {
        assert!(parse("f lunch").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn leading_whitespace_is_unrecognized() {
        assert!(parse(" 10f").is_none());
    }

    #[test]
    fn whitespace_before_title_is_optional() {
        let expense = parse("10frice").unwrap();
        assert_eq!(expense.category(), Category::Food);
        assert_eq!(expense.title(), Some("rice"));
    }

    #[test]
    fn glued_second_category_letter_is_unrecognized() {
        assert!(parse("10ft").is_none());
        assert!(parse("10fcoffee").is_none());
    }

    #[test]
    fn separated_title_may_start_with_category_letter() {
        let expense = parse("10f coffee").unwrap();
        assert_eq!(expense.title(), Some("coffee"));
        let expense = parse("3b tea").unwrap();
        assert_eq!(expense.title(), Some("tea"));
    }

    #[test]
    fn title_is_trimmed() {
        let expense = parse("20m   parking fee   ").unwrap();
        assert_eq!(expense.title(), Some("parking fee"));
    }

    #[test]
    fn trailing_whitespace_only_gives_no_title() {
        let expense = parse("20m   ").unwrap();
        assert_eq!(expense.title(), None);
    }

    #[test]
    fn multiline_title_is_unrecognized() {
        assert!(parse("10f lunch\nwith team").is_none());
    }

    #[test]
    fn every_category_letter() {
        for (code, category) in Category::TABLE {
            let expense = parse(&format!("5{code}")).unwrap();
            assert_eq!(expense.category(), category);
        }
    }

    #[test]
    fn non_ascii_digits_are_unrecognized() {
        assert!(parse("١٢f").is_none());
    }

    #[test]
    fn amount_beyond_decimal_range_is_unrecognized() {
        assert!(parse("999999999999999999999999999999999f").is_none());
    }

    #[test]
    fn amount_that_would_lose_cents_is_unrecognized() {
        assert!(parse("9999999999999999999999999999.99f").is_none());
        assert!(parse("7922816251426433759354395033.55f").is_none());
    }

    #[test]
    fn is_expense_command() {
        let parser = ExpenseParser::new();
        assert!(parser.is_expense_command("7b"));
        assert!(!parser.is_expense_command("status"));
    }
}
