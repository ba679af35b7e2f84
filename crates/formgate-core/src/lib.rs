//! Formgate Core - Confirmation gate types and seams
//!
//! This crate provides the confirmation gate that guards form submission:
//! a user-triggered action is intercepted, a fixed yes/no prompt is shown
//! through an injected [`Confirmer`], and the externally supplied
//! [`SubmitHandler`] runs only on an affirmative answer. The gate returns
//! a boolean the surrounding dispatcher uses to allow or suppress the
//! action.
//!
//! Host crates supply the interactive pieces: `formgate-tui` renders the
//! prompt as a blocking modal dialog, `formgate-cli` as an inline `[y/N]`
//! question.

pub mod config;
pub mod error;
pub mod gate;
pub mod prompt;
pub mod registry;

pub use config::GateConfig;
pub use error::{GateError, Result};
pub use gate::{AutoConfirmer, ConfirmationGate, Confirmer, Decision, SubmitHandler};
pub use prompt::{PromptSpec, REGISTRATION_MESSAGE, REGISTRATION_TITLE};
pub use registry::{RegistrationLog, RegistrationRecord};
