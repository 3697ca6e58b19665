//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences and numbers.

use abacus::config::CalculatorConfig;
use abacus::core::{
    format_number, parse_operand, transition, Digit, Input, InteractionState, Operator,
    TransitionResult,
};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(value in 0..=9u8) -> Digit {
        Digit::new(value).unwrap()
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Clear),
        arbitrary_digit().prop_map(Input::Digit),
        Just(Input::Decimal),
        arbitrary_operator().prop_map(Input::Operator),
        Just(Input::Equals),
    ]
}

fn run(state: InteractionState, keys: &[Input], config: &CalculatorConfig) -> InteractionState {
    keys.iter().fold(state, |state, input| {
        transition::apply(&state, *input, config).unwrap_or(state)
    })
}

proptest! {
    #[test]
    fn digits_concatenate_without_leading_zeros(
        digits in prop::collection::vec(arbitrary_digit(), 1..20)
    ) {
        let config = CalculatorConfig::default();
        let keys: Vec<Input> = digits.iter().copied().map(Input::Digit).collect();
        let state = run(InteractionState::new(), &keys, &config);

        let typed: String = digits.iter().map(|d| d.as_char()).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(state.current_operand(), expected);
    }

    #[test]
    fn decimal_is_idempotent(
        keys in prop::collection::vec(arbitrary_input(), 0..20)
    ) {
        let config = CalculatorConfig::default();
        let state = run(InteractionState::new(), &keys, &config);
        let once = transition::input_decimal(&state).unwrap_or(state);
        prop_assert_eq!(transition::input_decimal(&once), TransitionResult::Skipped);
    }

    #[test]
    fn format_is_stable_under_reparse(
        x in prop::num::f64::POSITIVE
            | prop::num::f64::NEGATIVE
            | prop::num::f64::NORMAL
            | prop::num::f64::SUBNORMAL
            | prop::num::f64::ZERO
    ) {
        let formatted = format_number(x);
        let reparsed = parse_operand(&formatted);
        prop_assert!(reparsed.is_some());
        prop_assert_eq!(format_number(reparsed.unwrap()), formatted);
    }

    #[test]
    fn divide_by_zero_always_shows_message(
        dividend in prop::collection::vec(arbitrary_digit(), 1..10)
    ) {
        let config = CalculatorConfig::default();
        let mut keys: Vec<Input> = dividend.into_iter().map(Input::Digit).collect();
        keys.push(Input::Operator(Operator::Divide));
        keys.push(Input::Digit(Digit::ZERO));
        keys.push(Input::Equals);

        let state = run(InteractionState::new(), &keys, &config);
        prop_assert_eq!(state.current_operand(), "Cannot divide by 0");
        prop_assert_eq!(state.operator(), None);
        prop_assert_eq!(state.previous_operand(), None);
    }

    #[test]
    fn clear_always_restores_initial_state(
        keys in prop::collection::vec(arbitrary_input(), 0..30)
    ) {
        let config = CalculatorConfig::default();
        let state = run(InteractionState::new(), &keys, &config);
        let cleared = transition::clear(&state).unwrap_or(state);
        prop_assert_eq!(cleared, InteractionState::new());
    }

    #[test]
    fn invariants_hold_for_any_key_sequence(
        keys in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let config = CalculatorConfig::default();
        let mut state = InteractionState::new();
        for input in keys {
            state = transition::apply(&state, input, &config).unwrap_or(state);
            prop_assert!(state.validate().is_ok(), "{:?} after {:?}", state, input);
        }
    }

    #[test]
    fn overwrite_tracks_last_key(
        keys in prop::collection::vec(arbitrary_input(), 1..40)
    ) {
        let config = CalculatorConfig::default();
        let mut state = InteractionState::new();
        for input in keys {
            let result = transition::apply(&state, input, &config);
            let applied = result.is_applied();
            state = result.unwrap_or(state);
            match input {
                Input::Digit(_) | Input::Decimal => {
                    prop_assert!(!state.overwrite());
                }
                Input::Clear | Input::Operator(_) => {
                    prop_assert!(state.overwrite());
                }
                Input::Equals if applied => {
                    prop_assert!(state.overwrite());
                }
                Input::Equals => {}
            }
        }
    }

    #[test]
    fn transitions_are_deterministic(
        keys in prop::collection::vec(arbitrary_input(), 0..20)
    ) {
        let config = CalculatorConfig::default();
        let first = run(InteractionState::new(), &keys, &config);
        let second = run(InteractionState::new(), &keys, &config);
        prop_assert_eq!(first, second);
    }
}
