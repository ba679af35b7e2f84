//! Property-based tests for the confirmation gate using proptest
//!
//! These tests verify invariants that should hold for all valid inputs.

use proptest::prelude::*;

use formgate_core::{ConfirmationGate, Confirmer, Decision, PromptSpec, SubmitHandler};

fn arb_decision() -> impl Strategy<Value = Decision> {
    prop::bool::ANY.prop_map(Decision::from)
}

struct FixedConfirmer {
    answer: Decision,
    asks: u32,
}

impl Confirmer for FixedConfirmer {
    fn ask(&mut self, _prompt: &PromptSpec) -> Decision {
        self.asks += 1;
        self.answer
    }
}

struct CountingHandler {
    result: bool,
    calls: u32,
}

impl SubmitHandler for CountingHandler {
    type Event = u64;
    type Element = String;

    fn submit(&mut self, _event: &u64, _element: &String) -> bool {
        self.calls += 1;
        self.result
    }
}

proptest! {
    /// The gate's result is exactly "affirmed AND handler result"
    #[test]
    fn gate_result_is_conjunction(
        answer in arb_decision(),
        handler_result in prop::bool::ANY,
        event in any::<u64>(),
        element in ".*",
    ) {
        let mut confirmer = FixedConfirmer { answer, asks: 0 };
        let mut handler = CountingHandler { result: handler_result, calls: 0 };

        let mut gate = ConfirmationGate::new(&mut confirmer, &mut handler);
        let allowed = gate.confirm_and_maybe_submit(&event, &element);

        prop_assert_eq!(allowed, answer.is_affirmative() && handler_result);
    }

    /// The handler runs exactly once on affirm and never on decline
    #[test]
    fn handler_call_count_matches_answer(
        answer in arb_decision(),
        handler_result in prop::bool::ANY,
        event in any::<u64>(),
        element in ".*",
    ) {
        let mut confirmer = FixedConfirmer { answer, asks: 0 };
        let mut handler = CountingHandler { result: handler_result, calls: 0 };

        let mut gate = ConfirmationGate::new(&mut confirmer, &mut handler);
        gate.confirm_and_maybe_submit(&event, &element);

        let expected = if answer.is_affirmative() { 1 } else { 0 };
        prop_assert_eq!(handler.calls, expected);
    }

    /// The prompt is presented exactly once per invocation
    #[test]
    fn prompt_presented_once_per_call(
        answer in arb_decision(),
        handler_result in prop::bool::ANY,
        invocations in 1u32..8,
    ) {
        let mut confirmer = FixedConfirmer { answer, asks: 0 };
        let mut handler = CountingHandler { result: handler_result, calls: 0 };

        let mut gate = ConfirmationGate::new(&mut confirmer, &mut handler);
        for event in 0..u64::from(invocations) {
            gate.confirm_and_maybe_submit(&event, &"submit".to_string());
        }

        prop_assert_eq!(confirmer.asks, invocations);
    }
}
