use proptest::prelude::*;

use super::*;

fn valid_range() -> impl Strategy<Value = (i64, i64)> {
    (-1_000_000i64..1_000_000, 1i64..1_000_000).prop_map(|(min, width)| (min, min + width))
}

fn answer() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("H"),
        Just("L"),
        Just("h"),
        Just(" l "),
        Just("N"),
        Just("X"),
        Just(""),
    ]
}

proptest! {
    #[test]
    fn new_engine_starts_at_midpoint((min, max) in valid_range()) {
        let engine = GuessEngine::new(min, max).unwrap();
        prop_assert_eq!(engine.current_guess(), (min + max) / 2);
        prop_assert!(!engine.is_ended());
    }

    #[test]
    fn inverted_range_is_rejected(min in any::<i64>(), max in any::<i64>()) {
        prop_assume!(min >= max);
        prop_assert_eq!(GuessEngine::new(min, max), Err(GuessError::InvalidRange { min, max }));
    }

    #[test]
    fn guess_stays_in_range_until_the_end(
        (min, max) in valid_range(),
        answers in prop::collection::vec(answer(), 0..64),
    ) {
        let mut engine = GuessEngine::new(min, max).unwrap();
        for answer in answers {
            let before = engine.clone();
            let outcome = engine.process_guess_response(answer);

            match outcome {
                GuessOutcome::Continue => {
                    prop_assert!(engine.min() <= engine.current_guess());
                    prop_assert!(engine.current_guess() <= engine.max());
                    prop_assert_eq!(
                        engine.current_guess(),
                        (engine.min() + engine.max()) / 2
                    );
                    if Response::parse(answer) == Response::Higher {
                        prop_assert_eq!(engine.min(), before.current_guess() + 1);
                        prop_assert_eq!(engine.max(), before.max());
                    } else {
                        prop_assert_eq!(engine.max(), before.current_guess() - 1);
                        prop_assert_eq!(engine.min(), before.min());
                    }
                }
                GuessOutcome::ImpossibleState => {
                    prop_assert!(!before.is_ended());
                    prop_assert!(engine.is_ended());
                    prop_assert!(engine.min() > engine.max());
                }
                GuessOutcome::InvalidInput => prop_assert_eq!(&engine, &before),
                GuessOutcome::Correct => prop_assert!(before.is_ended()),
            }
        }
    }

    #[test]
    fn ended_engine_never_changes(
        (min, max) in valid_range(),
        answers in prop::collection::vec(answer(), 0..16),
    ) {
        let mut engine = GuessEngine::new(min, max).unwrap();
        engine.process_guess_response("C");
        let finished = engine.clone();

        for answer in answers {
            prop_assert_eq!(engine.process_guess_response(answer), GuessOutcome::Correct);
            prop_assert_eq!(engine.process_direction_response(answer), GuessOutcome::Correct);
        }
        prop_assert_eq!(engine, finished);
    }

    #[test]
    fn reset_clears_any_history(
        (min, max) in valid_range(),
        answers in prop::collection::vec(answer(), 0..32),
    ) {
        let mut engine = GuessEngine::default();
        for answer in answers {
            engine.process_guess_response(answer);
        }

        engine.reset(min, max).unwrap();
        prop_assert_eq!(engine, GuessEngine::new(min, max).unwrap());
    }
}
