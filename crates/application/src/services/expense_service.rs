//! Expense service
//!
//! Handles one inbound chat message: parse it, record the expense, reply.

use std::{fmt, sync::Arc};

use domain::ParsedExpense;
use tracing::{debug, error, info, instrument};

use crate::{
    command_parser::ExpenseParser,
    error::ApplicationError,
    ports::{ExpenseStorePort, IncomingMessage, MessengerPort, OutgoingReply},
};

/// Reply for text outside the expense grammar (and for zero amounts)
pub const NOT_UNDERSTOOD_REPLY: &str = "I don't understand this command";

/// Reply when the record store call failed
pub const STORE_FAILED_REPLY: &str = "Sorry, I couldn't save that expense. Please try again later.";

/// Configuration for the expense service
#[derive(Debug, Clone)]
pub struct ExpenseServiceConfig {
    /// Currency symbol used in confirmation replies
    pub currency_symbol: String,
}

impl Default for ExpenseServiceConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "฿".to_string(),
        }
    }
}

/// What happened to an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Expense stored; carries the record store's ID
    Recorded { record_id: String },
    /// Not an expense command, or a zero amount
    NotUnderstood,
    /// Parsed fine but the record store call failed
    StoreFailed,
}

/// Service that turns chat messages into stored expenses
pub struct ExpenseService {
    parser: ExpenseParser,
    store: Arc<dyn ExpenseStorePort>,
    messenger: Arc<dyn MessengerPort>,
    config: ExpenseServiceConfig,
}

impl fmt::Debug for ExpenseService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ExpenseService {
    /// Create a new expense service
    pub fn new(
        store: Arc<dyn ExpenseStorePort>,
        messenger: Arc<dyn MessengerPort>,
        config: ExpenseServiceConfig,
    ) -> Self {
        Self {
            parser: ExpenseParser::new(),
            store,
            messenger,
            config,
        }
    }

    /// Process one message and send exactly one reply
    ///
    /// Store failures are logged and answered with a generic notice; only a
    /// failure to deliver the reply itself is returned as an error.
    #[instrument(skip(self, message), fields(chat_id = message.chat_id, message_id = message.message_id))]
    pub async fn handle_message(
        &self,
        message: &IncomingMessage,
    ) -> Result<ReplyOutcome, ApplicationError> {
        info!(sender = %message.sender_name, "Handling chat message");
        debug!(text = %message.text, "Message text");

        let expense = self
            .parser
            .parse(&message.text)
            .into_expense()
            .filter(ParsedExpense::is_actionable);

        let (outcome, text) = match expense {
            None => (ReplyOutcome::NotUnderstood, NOT_UNDERSTOOD_REPLY.to_string()),
            Some(expense) => match self.store.record_expense(&expense).await {
                Ok(record_id) => {
                    info!(record_id = %record_id, "Expense recorded");
                    (
                        ReplyOutcome::Recorded { record_id },
                        self.confirmation_text(&expense),
                    )
                },
                Err(e) => {
                    error!(error = %e, "Failed to record expense");
                    (ReplyOutcome::StoreFailed, STORE_FAILED_REPLY.to_string())
                },
            },
        };

        self.messenger
            .send_reply(OutgoingReply::reply_to(message, text))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send reply"))?;

        Ok(outcome)
    }

    /// Confirmation text, e.g. `฿ 100.00 in food added.`
    #[must_use]
    pub fn confirmation_text(&self, expense: &ParsedExpense) -> String {
        format!(
            "{} {} in {} added.",
            self.config.currency_symbol,
            expense.amount().formatted(),
            expense.category()
        )
    }
}
