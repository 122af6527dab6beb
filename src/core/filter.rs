//! Pure selection helpers over an already-fetched transaction list.

use super::model::{Transaction, TransactionStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Scores at or above this count as high risk for [`TransactionFilter::HighRisk`].
///
/// Deliberately lower than the danger badge threshold in [`super::badge`].
pub const HIGH_RISK_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionFilter {
    #[default]
    All,
    Approved,
    Blocked,
    Pending,
    HighRisk,
}

impl TransactionFilter {
    pub const ALL: [TransactionFilter; 5] = [
        TransactionFilter::All,
        TransactionFilter::Approved,
        TransactionFilter::Blocked,
        TransactionFilter::Pending,
        TransactionFilter::HighRisk,
    ];

    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Approved => txn.status == TransactionStatus::Approved,
            TransactionFilter::Blocked => txn.status == TransactionStatus::Blocked,
            TransactionFilter::Pending => matches!(
                txn.status,
                TransactionStatus::Pending | TransactionStatus::Review
            ),
            TransactionFilter::HighRisk => txn.risk_score.value() >= HIGH_RISK_THRESHOLD,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionFilter::All => "All Transactions",
            TransactionFilter::Approved => "Approved",
            TransactionFilter::Blocked => "Blocked",
            TransactionFilter::Pending => "Pending Review",
            TransactionFilter::HighRisk => "High Risk",
        }
    }
}

impl Display for TransactionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransactionFilter::All => "all",
                TransactionFilter::Approved => "approved",
                TransactionFilter::Blocked => "blocked",
                TransactionFilter::Pending => "pending",
                TransactionFilter::HighRisk => "high-risk",
            }
        )
    }
}

impl FromStr for TransactionFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TransactionFilter::All),
            "approved" => Ok(TransactionFilter::Approved),
            "blocked" => Ok(TransactionFilter::Blocked),
            "pending" => Ok(TransactionFilter::Pending),
            "high-risk" => Ok(TransactionFilter::HighRisk),
            _ => Err(anyhow::anyhow!("Invalid transaction filter: {}", s)),
        }
    }
}

/// Returns the members of `transactions` matching `filter`, in order.
pub fn select_transactions(
    transactions: &[Transaction],
    filter: TransactionFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| filter.matches(txn))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub approved: usize,
    pub blocked: usize,
    pub pending: usize,
    pub review: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.approved + self.blocked + self.pending + self.review
    }
}

pub fn count_by_status(transactions: &[Transaction]) -> StatusCounts {
    transactions
        .iter()
        .fold(StatusCounts::default(), |mut counts, txn| {
            match txn.status {
                TransactionStatus::Approved => counts.approved += 1,
                TransactionStatus::Blocked => counts.blocked += 1,
                TransactionStatus::Pending => counts.pending += 1,
                TransactionStatus::Review => counts.review += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::RiskScore;

    fn txn(id: &str, status: TransactionStatus, risk: u8) -> Transaction {
        Transaction {
            time: "14:00:00".to_string(),
            transaction_id: id.to_string(),
            customer_id: "C1".to_string(),
            customer_name: "Test Customer".to_string(),
            kind: "Purchase".to_string(),
            amount: 1000,
            location: "Mumbai, MH".to_string(),
            risk_score: RiskScore::new(risk).unwrap(),
            status,
            latency: 40,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("T1", TransactionStatus::Approved, 12),
            txn("T2", TransactionStatus::Pending, 67),
            txn("T3", TransactionStatus::Blocked, 94),
            txn("T4", TransactionStatus::Review, 78),
            txn("T5", TransactionStatus::Approved, 70),
            txn("T6", TransactionStatus::Pending, 5),
        ]
    }

    fn ids(list: &[Transaction]) -> Vec<&str> {
        list.iter().map(|t| t.transaction_id.as_str()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let list = sample();
        assert_eq!(select_transactions(&list, TransactionFilter::All), list);
        assert!(select_transactions(&[], TransactionFilter::All).is_empty());
    }

    #[test]
    fn test_approved_only_contains_approved() {
        let list = sample();
        let selected = select_transactions(&list, TransactionFilter::Approved);
        assert!(
            selected
                .iter()
                .all(|t| t.status == TransactionStatus::Approved)
        );
        assert_eq!(selected.len(), count_by_status(&list).approved);
    }

    #[test]
    fn test_pending_includes_review_in_order() {
        let list = sample();
        let selected = select_transactions(&list, TransactionFilter::Pending);
        assert_eq!(ids(&selected), vec!["T2", "T4", "T6"]);
    }

    #[test]
    fn test_high_risk_threshold_is_inclusive() {
        let list = sample();
        let selected = select_transactions(&list, TransactionFilter::HighRisk);
        assert_eq!(ids(&selected), vec!["T3", "T4", "T5"]);
    }

    #[test]
    fn test_selection_leaves_source_untouched() {
        let list = sample();
        let before = list.clone();
        let _ = select_transactions(&list, TransactionFilter::Blocked);
        assert_eq!(list, before);
    }

    #[test]
    fn test_count_by_status() {
        let counts = count_by_status(&sample());
        assert_eq!(
            counts,
            StatusCounts {
                approved: 2,
                blocked: 1,
                pending: 2,
                review: 1,
            }
        );
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_filter_round_trips_through_strings() {
        for filter in TransactionFilter::ALL {
            assert_eq!(filter.to_string().parse::<TransactionFilter>().unwrap(), filter);
        }
        assert!("risky".parse::<TransactionFilter>().is_err());
    }
}
