//! Budget breakdown.
//!
//! A trip's budget is split across fixed spending categories. This is a pure
//! derivation from the `budget` field; nothing is stored.

use std::fmt;

use serde::Serialize;

/// A spending category with a fixed share of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    /// Hotels, houseboats and other stays.
    Accommodation,
    /// Food & dining.
    Food,
    /// Getting around.
    Transport,
    /// Tickets, tours and experiences.
    Activities,
    /// Souvenirs.
    Shopping,
}

impl BudgetCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Accommodation,
        Self::Food,
        Self::Transport,
        Self::Activities,
        Self::Shopping,
    ];

    /// Fraction of the budget assigned to this category.
    #[must_use]
    pub fn share(self) -> f64 {
        match self {
            Self::Accommodation => 0.35,
            Self::Food | Self::Transport => 0.20,
            Self::Activities => 0.15,
            Self::Shopping => 0.10,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::Food => "Food & Dining",
            Self::Transport => "Transport",
            Self::Activities => "Activities",
            Self::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    /// The category.
    pub category: BudgetCategory,
    /// Rounded amount allotted.
    pub amount: f64,
    /// Rounded percentage of the total, 0 when the total is 0.
    pub percentage: f64,
}

/// Split `budget` across [`BudgetCategory::ALL`].
///
/// Amounts are rounded to whole units with halves going up, so the lines sum
/// to the budget up to rounding.
#[must_use]
pub fn breakdown(budget: f64) -> Vec<BudgetLine> {
    BudgetCategory::ALL
        .iter()
        .map(|&category| {
            let amount = round_half_up(budget * category.share());
            let percentage = if budget == 0.0 {
                0.0
            } else {
                round_half_up(amount / budget * 100.0)
            };
            BudgetLine {
                category,
                amount,
                percentage,
            }
        })
        .collect()
}

fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount_of(lines: &[BudgetLine], category: BudgetCategory) -> f64 {
        lines
            .iter()
            .find(|l| l.category == category)
            .map(|l| l.amount)
            .unwrap()
    }

    #[test]
    fn test_shares_sum_to_one() {
        let total: f64 = BudgetCategory::ALL.iter().map(|c| c.share()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_45000() {
        let lines = breakdown(45_000.0);
        assert_eq!(lines.len(), 5);
        assert!((amount_of(&lines, BudgetCategory::Accommodation) - 15_750.0).abs() < f64::EPSILON);
        assert!((amount_of(&lines, BudgetCategory::Food) - 9_000.0).abs() < f64::EPSILON);
        assert!((amount_of(&lines, BudgetCategory::Transport) - 9_000.0).abs() < f64::EPSILON);
        assert!((amount_of(&lines, BudgetCategory::Activities) - 6_750.0).abs() < f64::EPSILON);
        assert!((amount_of(&lines, BudgetCategory::Shopping) - 4_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_order() {
        let categories: Vec<_> = breakdown(100.0).into_iter().map(|l| l.category).collect();
        assert_eq!(categories, BudgetCategory::ALL.to_vec());
    }

    #[test]
    fn test_breakdown_sums_up_to_rounding() {
        for budget in [1.0, 7.0, 999.0, 28_000.0, 65_001.0] {
            let sum: f64 = breakdown(budget).iter().map(|l| l.amount).sum();
            assert!((sum - budget).abs() <= 2.5, "budget {budget} summed to {sum}");
        }
    }

    #[test]
    fn test_percentages() {
        let lines = breakdown(65_000.0);
        let pcts: Vec<f64> = lines.iter().map(|l| l.percentage).collect();
        assert_eq!(pcts, vec![35.0, 20.0, 20.0, 15.0, 10.0]);
    }

    #[test]
    fn test_zero_budget() {
        for line in breakdown(0.0) {
            assert!(line.amount.abs() < f64::EPSILON);
            assert!(line.percentage.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_halves_round_up() {
        // 10 * 0.15 = 1.5
        let lines = breakdown(10.0);
        assert!((amount_of(&lines, BudgetCategory::Activities) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BudgetCategory::Food.to_string(), "Food & Dining");
        assert_eq!(BudgetCategory::Accommodation.label(), "Accommodation");
    }
}
