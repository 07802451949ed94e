// ⚙️ Receipt Processor - validate → score → store
// Either the score is computed and stored, or nothing is stored

use crate::receipt::Receipt;
use crate::rules::PointsCalculator;
use crate::schema::{ReceiptValidator, ValidationError};
use crate::store::{ReceiptId, ResultStore};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("invalid receipt: {}", summarize(.0))]
    InvalidReceipt(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// SCORED RECEIPT
// ============================================================================

/// ScoredReceipt - The outcome of a successful `process` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredReceipt {
    pub id: ReceiptId,
    pub points: u64,
}

// ============================================================================
// RECEIPT PROCESSOR
// ============================================================================

#[derive(Debug, Clone)]
pub struct ReceiptProcessor {
    validator: ReceiptValidator,
    calculator: PointsCalculator,
    store: Arc<ResultStore>,
}

impl ReceiptProcessor {
    pub fn new(store: Arc<ResultStore>) -> Self {
        ReceiptProcessor {
            validator: ReceiptValidator::new(),
            calculator: PointsCalculator::new(),
            store,
        }
    }

    /// Validate, score and store a receipt
    pub fn process(&self, receipt: &Receipt) -> Result<ScoredReceipt, ProcessError> {
        let validated = self.validator.validate(receipt).map_err(|errors| {
            warn!(retailer = %receipt.retailer, errors = errors.len(), "Rejected receipt");
            ProcessError::InvalidReceipt(errors)
        })?;

        let points = self.calculator.score(&validated);
        let id = self.store.put(points);

        info!(%id, points, retailer = %validated.retailer, "Processed receipt");

        Ok(ScoredReceipt { id, points })
    }

    /// Points for a previously processed receipt
    pub fn points(&self, id: &ReceiptId) -> Option<u64> {
        self.store.get(id)
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }
}

impl Default for ReceiptProcessor {
    fn default() -> Self {
        Self::new(Arc::new(ResultStore::new()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
