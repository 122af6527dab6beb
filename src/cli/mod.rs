//! Terminal views, one module per dashboard screen.

pub mod customer;
pub mod dashboard;
pub mod decisions;
pub mod insights;
pub mod live;
pub mod setup;
pub mod stream;
pub mod transactions;
pub mod ui;
