//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers and the dispatcher that selects them
//! - The submission handler for plain text and media messages
//! - The router deciding between the two

pub mod commands;
pub mod dispatcher;
pub mod messages;
pub mod router;

pub use dispatcher::{CommandDispatcher, CommandHandler, DispatchOutcome, UNKNOWN_COMMAND_TEXT};
pub use messages::{SubmissionHandler, SubmissionOutcome};
pub use router::{MessageRouter, RouteOutcome};
