//! Confirmation gate for user-triggered submissions
//!
//! The gate intercepts a submission action, asks the user a yes/no
//! question through an injected [`Confirmer`], and delegates to the
//! injected [`SubmitHandler`] only on an affirmative answer. It holds no
//! state across invocations.

use tracing::debug;

use crate::prompt::PromptSpec;

/// The user's answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Proceed with the gated action
    Affirmed,
    /// Abort the gated action
    Declined,
}

impl Decision {
    /// Whether this decision allows the action to proceed
    pub fn is_affirmative(self) -> bool {
        matches!(self, Decision::Affirmed)
    }
}

impl From<bool> for Decision {
    fn from(affirmed: bool) -> Self {
        if affirmed {
            Decision::Affirmed
        } else {
            Decision::Declined
        }
    }
}

/// Capability to ask the user a yes/no question
///
/// `ask` blocks the calling thread until the user answers; there is no
/// timeout. Implementations resolve their own I/O failures before
/// returning, so the call itself cannot fail. Both shipped confirmers
/// treat unreadable input as a decline.
pub trait Confirmer {
    /// Present `prompt` and block until the user answers
    fn ask(&mut self, prompt: &PromptSpec) -> Decision;
}

/// Confirmer that answers without user interaction
///
/// Used by non-interactive hosts (`--yes`) and as a deterministic stand-in
/// for the interactive dialog in tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirmer {
    decision: Decision,
}

impl AutoConfirmer {
    /// Always answer yes
    pub fn affirm() -> Self {
        Self {
            decision: Decision::Affirmed,
        }
    }

    /// Always answer no
    pub fn decline() -> Self {
        Self {
            decision: Decision::Declined,
        }
    }
}

impl Confirmer for AutoConfirmer {
    fn ask(&mut self, prompt: &PromptSpec) -> Decision {
        debug!("Auto-answering prompt '{}': {:?}", prompt.title, self.decision);
        self.decision
    }
}

impl<C: Confirmer + ?Sized> Confirmer for &mut C {
    fn ask(&mut self, prompt: &PromptSpec) -> Decision {
        (**self).ask(prompt)
    }
}

impl<C: Confirmer + ?Sized> Confirmer for Box<C> {
    fn ask(&mut self, prompt: &PromptSpec) -> Decision {
        (**self).ask(prompt)
    }
}

/// The externally supplied submission routine
///
/// The gate places no constraints on the routine's internals, only on its
/// signature: it receives the originating event and the associated UI
/// element unchanged, and its boolean result states whether the
/// surrounding dispatcher should let the action continue. Failures inside
/// the routine are its own concern and must be expressed through that
/// boolean.
pub trait SubmitHandler {
    /// The originating interaction event type
    type Event;
    /// The UI control associated with the action
    type Element;

    /// Perform the submission for `event` on `element`
    fn submit(&mut self, event: &Self::Event, element: &Self::Element) -> bool;
}

impl<S: SubmitHandler + ?Sized> SubmitHandler for &mut S {
    type Event = S::Event;
    type Element = S::Element;

    fn submit(&mut self, event: &Self::Event, element: &Self::Element) -> bool {
        (**self).submit(event, element)
    }
}

/// Gates a submission action behind a yes/no confirmation
///
/// Both collaborators are explicit constructor parameters rather than
/// ambient globals, so hosts and tests can swap either side freely.
pub struct ConfirmationGate<C, S> {
    confirmer: C,
    handler: S,
    prompt: PromptSpec<'static>,
}

impl<C, S> ConfirmationGate<C, S>
where
    C: Confirmer,
    S: SubmitHandler,
{
    /// Create a gate using the fixed registration prompt
    pub fn new(confirmer: C, handler: S) -> Self {
        Self {
            confirmer,
            handler,
            prompt: PromptSpec::registration(),
        }
    }

    /// Ask for confirmation and, if affirmed, delegate to the submit handler
    ///
    /// The prompt is presented exactly once per call. On an affirmative
    /// answer the handler's boolean result is returned unchanged; on a
    /// negative answer the handler is not invoked and `false` is returned.
    pub fn confirm_and_maybe_submit(&mut self, event: &S::Event, element: &S::Element) -> bool {
        match self.confirmer.ask(&self.prompt) {
            Decision::Affirmed => {
                debug!("Confirmation affirmed, delegating to submit handler");
                self.handler.submit(event, element)
            }
            Decision::Declined => {
                debug!("Confirmation declined, suppressing submission");
                false
            }
        }
    }
}
