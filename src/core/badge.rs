//! Categorical display labels derived from statuses and risk scores.

use super::model::{RiskScore, TransactionStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Scores at or above this render as [`Badge::Danger`].
pub const DANGER_RISK_THRESHOLD: u8 = 80;
/// Scores at or above this (and below danger) render as [`Badge::Warning`].
pub const WARNING_RISK_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Success,
    Warning,
    Danger,
    Info,
    #[default]
    #[serde(other)]
    Secondary,
}

impl Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Badge::Success => "success",
                Badge::Warning => "warning",
                Badge::Danger => "danger",
                Badge::Info => "info",
                Badge::Secondary => "secondary",
            }
        )
    }
}

pub fn status_badge(status: TransactionStatus) -> Badge {
    match status {
        TransactionStatus::Approved => Badge::Success,
        TransactionStatus::Blocked => Badge::Danger,
        TransactionStatus::Pending | TransactionStatus::Review => Badge::Warning,
    }
}

/// Badge for status strings that are not part of [`TransactionStatus`],
/// e.g. alert states or decision outcomes.
pub fn status_label_badge(label: &str) -> Badge {
    match label {
        "APPROVED" | "COMPLETED" | "OFFER_SENT" => Badge::Success,
        "BLOCKED" => Badge::Danger,
        "PENDING" | "REVIEW" | "UNDER_REVIEW" => Badge::Warning,
        "ROUTED" => Badge::Info,
        _ => Badge::Secondary,
    }
}

pub fn risk_badge(score: RiskScore) -> Badge {
    risk_value_badge(score.value())
}

/// Total over `u8`: values above 100 still land in `Danger`.
pub fn risk_value_badge(score: u8) -> Badge {
    if score >= DANGER_RISK_THRESHOLD {
        Badge::Danger
    } else if score >= WARNING_RISK_THRESHOLD {
        Badge::Warning
    } else {
        Badge::Success
    }
}
