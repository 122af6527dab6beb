//! Core dashboard abstractions

pub mod badge;
pub mod config;
pub mod filter;
pub mod format;
pub mod log;
pub mod model;
pub mod poller;
pub mod provider;

// Re-export main types for cleaner imports
pub use badge::Badge;
pub use filter::{TransactionFilter, select_transactions};
pub use poller::{Phase, Poller, ViewState};
pub use provider::{DataProvider, ProviderError};
