// 🧾 Receipt Model - Raw input as submitted
// Every field stays textual here; parsing happens in the schema layer

use serde::{Deserialize, Serialize};

// ============================================================================
// RECEIPT
// ============================================================================

/// Receipt - A purchase receipt exactly as the caller sent it
///
/// Missing fields deserialize as empty strings so that the validator,
/// not the JSON decoder, decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name, e.g. "Target"
    #[serde(default)]
    pub retailer: String,

    /// Calendar date, YYYY-MM-DD
    #[serde(default)]
    pub purchase_date: String,

    /// Time of day, HH:MM (24-hour)
    #[serde(default)]
    pub purchase_time: String,

    /// Purchased items (may be empty)
    #[serde(default)]
    pub items: Vec<Item>,

    /// Amount paid, e.g. "35.35"
    #[serde(default)]
    pub total: String,
}

/// Item - One line of a receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free text, may carry surrounding whitespace
    #[serde(default)]
    pub short_description: String,

    /// Item price, e.g. "6.49"
    #[serde(default)]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

impl Receipt {
    /// Create a receipt with no items
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: impl Into<String>,
        purchase_time: impl Into<String>,
        total: impl Into<String>,
    ) -> Self {
        Receipt {
            retailer: retailer.into(),
            purchase_date: purchase_date.into(),
            purchase_time: purchase_time.into(),
            items: Vec::new(),
            total: total.into(),
        }
    }

    /// Builder pattern: append an item
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"total": "1.00"}"#).unwrap();

        assert!(receipt.retailer.is_empty());
        assert!(receipt.purchase_date.is_empty());
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.total, "1.00");
    }

    #[test]
    fn test_builder() {
        let receipt = Receipt::new("M&M Corner Market", "2022-03-20", "14:33", "9.00")
            .with_item(Item::new("Gatorade", "2.25"))
            .with_item(Item::new("Gatorade", "2.25"));

        assert_eq!(receipt.items.len(), 2);
    }
}
