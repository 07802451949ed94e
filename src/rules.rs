// 🏷️ Scoring Rules - Seven additive point rules
// Every rule sees the whole validated receipt and none short-circuits another

use crate::schema::ValidatedReceipt;
use chrono::{Datelike, Timelike};
use serde::Serialize;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoringRule {
    /// R1: one point per ASCII alphanumeric character in the retailer name
    RetailerName,
    /// R2: 50 points if the total has no cents
    RoundDollarTotal,
    /// R3: 25 points if the total is a multiple of 0.25
    QuarterMultipleTotal,
    /// R4: 5 points for every two items
    ItemPairs,
    /// R5: ceil(price * 0.2) per item whose trimmed description length is a multiple of 3
    ItemDescription,
    /// R6: 6 points if the purchase day is odd
    OddPurchaseDay,
    /// R7: 10 points if purchased in [14:00, 16:00)
    AfternoonPurchase,
}

impl ScoringRule {
    pub const ALL: [ScoringRule; 7] = [
        ScoringRule::RetailerName,
        ScoringRule::RoundDollarTotal,
        ScoringRule::QuarterMultipleTotal,
        ScoringRule::ItemPairs,
        ScoringRule::ItemDescription,
        ScoringRule::OddPurchaseDay,
        ScoringRule::AfternoonPurchase,
    ];

    /// Short code for logs and breakdowns
    pub fn code(&self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "R1",
            ScoringRule::RoundDollarTotal => "R2",
            ScoringRule::QuarterMultipleTotal => "R3",
            ScoringRule::ItemPairs => "R4",
            ScoringRule::ItemDescription => "R5",
            ScoringRule::OddPurchaseDay => "R6",
            ScoringRule::AfternoonPurchase => "R7",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "1 point per alphanumeric character in the retailer name",
            ScoringRule::RoundDollarTotal => "50 points if the total is a round dollar amount",
            ScoringRule::QuarterMultipleTotal => "25 points if the total is a multiple of 0.25",
            ScoringRule::ItemPairs => "5 points for every two items",
            ScoringRule::ItemDescription => {
                "ceil(price * 0.2) per item whose trimmed description length is a multiple of 3"
            }
            ScoringRule::OddPurchaseDay => "6 points if the purchase day is odd",
            ScoringRule::AfternoonPurchase => "10 points if purchased between 14:00 and 16:00",
        }
    }

    /// Points this rule awards for a receipt
    pub fn apply(&self, receipt: &ValidatedReceipt) -> u64 {
        match self {
            ScoringRule::RetailerName => receipt
                .retailer
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .count() as u64,

            ScoringRule::RoundDollarTotal => {
                if receipt.total.is_round_dollar() {
                    50
                } else {
                    0
                }
            }

            ScoringRule::QuarterMultipleTotal => {
                if receipt.total.is_multiple_of_quarter() {
                    25
                } else {
                    0
                }
            }

            ScoringRule::ItemPairs => (receipt.items.len() as u64 / 2) * 5,

            ScoringRule::ItemDescription => receipt
                .items
                .iter()
                .filter(|item| item.description.len() % 3 == 0)
                // ceil(dollars * 0.2) == ceil(cents / 500)
                .map(|item| item.price.value().div_ceil(500))
                .sum(),

            ScoringRule::OddPurchaseDay => {
                if receipt.purchase_date.day() % 2 == 1 {
                    6
                } else {
                    0
                }
            }

            // Half-open window: 16:00 itself does not qualify
            ScoringRule::AfternoonPurchase => match receipt.purchase_time.hour() {
                14 | 15 => 10,
                _ => 0,
            },
        }
    }
}

// ============================================================================
// POINTS BREAKDOWN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: ScoringRule,
    pub code: &'static str,
    pub description: &'static str,
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub contributions: Vec<RuleContribution>,
    pub total: u64,
}

impl PointsBreakdown {
    /// Points awarded by a single rule
    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map(|c| c.points)
            .unwrap_or(0)
    }
}

// ============================================================================
// POINTS CALCULATOR
// ============================================================================

/// PointsCalculator - Pure, stateless; safe to share across threads
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsCalculator;

impl PointsCalculator {
    pub fn new() -> Self {
        PointsCalculator
    }

    /// Total points for a receipt
    pub fn score(&self, receipt: &ValidatedReceipt) -> u64 {
        ScoringRule::ALL.iter().map(|rule| rule.apply(receipt)).sum()
    }

    /// Per-rule contributions, in rule order
    pub fn breakdown(&self, receipt: &ValidatedReceipt) -> PointsBreakdown {
        let contributions: Vec<RuleContribution> = ScoringRule::ALL
            .iter()
            .map(|rule| RuleContribution {
                rule: *rule,
                code: rule.code(),
                description: rule.description(),
                points: rule.apply(receipt),
            })
            .collect();

        let total = contributions.iter().map(|c| c.points).sum();

        PointsBreakdown {
            contributions,
            total,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
