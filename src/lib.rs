// Receipt Processor - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod config;
pub mod logging;
pub mod parser;
pub mod processor;
pub mod receipt;
pub mod rules;
pub mod schema;
pub mod store;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use parser::{parse_date, parse_money, parse_time, Cents, ParseError};
pub use processor::{ProcessError, ReceiptProcessor, ScoredReceipt};
pub use receipt::{Item, Receipt};
pub use rules::{PointsBreakdown, PointsCalculator, RuleContribution, ScoringRule};
pub use schema::{ReceiptValidator, ValidatedItem, ValidatedReceipt, ValidationError};
pub use store::{ReceiptId, ResultStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
