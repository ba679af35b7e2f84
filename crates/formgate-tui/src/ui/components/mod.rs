//! Reusable UI components

mod confirm;

pub use confirm::ConfirmDialog;
