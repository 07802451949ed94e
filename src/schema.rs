// 📐 Shape Layer - Receipt Validation
// Checks required fields and parses every textual value up front

use crate::parser::{parse_date, parse_money, parse_time, Cents};
use crate::receipt::Receipt;
use chrono::{NaiveDate, NaiveTime};

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        ValidationError::new(field, "Required field is empty")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<ValidatedReceipt, Vec<ValidationError>>;

// ============================================================================
// VALIDATED RECEIPT
// ============================================================================

/// ValidatedReceipt - A receipt whose fields are all present and parsed
///
/// Only the validator can build one, so the calculator never sees
/// unparsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidatedItem>,
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    /// Already trimmed
    pub description: String,
    pub price: Cents,
}

// ============================================================================
// RECEIPT VALIDATOR
// ============================================================================

/// ReceiptValidator - Strict policy: a present field that fails to parse
/// rejects the whole receipt. Errors are collected, not short-circuited.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptValidator;

impl ReceiptValidator {
    pub fn new() -> Self {
        ReceiptValidator
    }

    /// Validate a raw receipt and parse it into its exact form
    pub fn validate(&self, receipt: &Receipt) -> ValidationResult {
        let mut errors = Vec::new();

        if receipt.retailer.is_empty() {
            errors.push(ValidationError::required("retailer"));
        }

        let purchase_date = if receipt.purchase_date.is_empty() {
            errors.push(ValidationError::required("purchaseDate"));
            None
        } else {
            parse_date(&receipt.purchase_date)
                .map_err(|e| errors.push(ValidationError::new("purchaseDate", e.to_string())))
                .ok()
        };

        let purchase_time = if receipt.purchase_time.is_empty() {
            errors.push(ValidationError::required("purchaseTime"));
            None
        } else {
            parse_time(&receipt.purchase_time)
                .map_err(|e| errors.push(ValidationError::new("purchaseTime", e.to_string())))
                .ok()
        };

        let total = if receipt.total.is_empty() {
            errors.push(ValidationError::required("total"));
            None
        } else {
            parse_money(&receipt.total)
                .map_err(|e| errors.push(ValidationError::new("total", e.to_string())))
                .ok()
        };

        let mut items = Vec::with_capacity(receipt.items.len());
        for (index, item) in receipt.items.iter().enumerate() {
            // An absent price scores as zero; a garbled one is rejected
            let price = if item.price.is_empty() {
                Cents::ZERO
            } else {
                match parse_money(&item.price) {
                    Ok(price) => price,
                    Err(e) => {
                        errors.push(ValidationError::new(
                            format!("items[{}].price", index),
                            e.to_string(),
                        ));
                        continue;
                    }
                }
            };

            items.push(ValidatedItem {
                description: item.short_description.trim().to_string(),
                price,
            });
        }

        match (purchase_date, purchase_time, total) {
            (Some(purchase_date), Some(purchase_time), Some(total)) if errors.is_empty() => {
                Ok(ValidatedReceipt {
                    retailer: receipt.retailer.clone(),
                    purchase_date,
                    purchase_time,
                    items,
                    total,
                })
            }
            _ => Err(errors),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::Item;

    fn create_test_receipt() -> Receipt {
        Receipt::new("Target", "2022-01-01", "13:01", "35.35")
            .with_item(Item::new("Mountain Dew 12PK", "6.49"))
            .with_item(Item::new("  Emils Cheese Pizza  ", "12.25"))
    }

    #[test]
    fn test_validate_valid_receipt() {
        let validator = ReceiptValidator::new();
        let validated = validator.validate(&create_test_receipt()).unwrap();

        assert_eq!(validated.retailer, "Target");
        assert_eq!(validated.purchase_date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(validated.purchase_time, NaiveTime::from_hms_opt(13, 1, 0).unwrap());
        assert_eq!(validated.total, Cents(3535));
        assert_eq!(validated.items.len(), 2);
        assert_eq!(validated.items[1].description, "Emils Cheese Pizza");
        assert_eq!(validated.items[1].price, Cents(1225));
    }

    #[test]
    fn test_validate_missing_retailer() {
        let mut receipt = create_test_receipt();
        receipt.retailer = String::new();

        let errors = ReceiptValidator::new().validate(&receipt).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "retailer");
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let receipt = Receipt::default();

        let errors = ReceiptValidator::new().validate(&receipt).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["retailer", "purchaseDate", "purchaseTime", "total"]);
    }

    #[test]
    fn test_validate_empty_items_allowed() {
        let receipt = Receipt::new("Target", "2022-01-01", "13:01", "1.00");
        assert!(ReceiptValidator::new().validate(&receipt).is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_fields() {
        let receipt = Receipt::new("Target", "2022-02-30", "25:00", "1.005");

        let errors = ReceiptValidator::new().validate(&receipt).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "purchaseDate"));
        assert!(errors.iter().any(|e| e.field == "purchaseTime"));
        assert!(errors.iter().any(|e| e.field == "total"));
    }

    #[test]
    fn test_validate_item_price() {
        let absent = create_test_receipt().with_item(Item::new("Bag", ""));
        let validated = ReceiptValidator::new().validate(&absent).unwrap();
        assert_eq!(validated.items[2].price, Cents::ZERO);

        let garbled = create_test_receipt().with_item(Item::new("Bag", "free"));
        let errors = ReceiptValidator::new().validate(&garbled).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "items[2].price");
    }
}
