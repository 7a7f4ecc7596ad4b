use kiku::{Config, Evaluation, KeyPress, Mode, Notification, Step, codes};
use proptest::prelude::*;

mod support;
use support::counter::Counter;
use support::{enter_sequence, recognizer, type_str};

fn trigger_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,12}"
}

// Raw key presses, including control keys, modifiers and junk codes.
fn press_strategy() -> impl Strategy<Value = KeyPress> {
    prop_oneof![
        prop::char::range('a', 'z').prop_map(KeyPress::char),
        prop::char::range('0', '9').prop_map(KeyPress::char),
        Just(KeyPress::enter()),
        Just(KeyPress::escape()),
        Just(KeyPress::with_key(codes::SHIFT, "Shift")),
        (0u32..0x1_0000).prop_map(KeyPress::code),
    ]
}

proptest! {
    #[test]
    fn added_trigger_is_listed_and_matches(trigger in trigger_strategy()) {
        let (mut rec, sink) = recognizer(Config::default());
        let counter = Counter::new();
        prop_assert!(rec.add(counter.binding(&trigger)));
        prop_assert!(rec.function_keys().contains(&trigger));

        let step = enter_sequence(&mut rec, &trigger).unwrap();

        prop_assert_eq!(step, Step::Evaluated(Evaluation::Matched(trigger.clone())));
        prop_assert_eq!(counter.get(), 1);
        prop_assert_eq!(sink.count(Notification::Success), 1);
    }

    #[test]
    fn removed_trigger_never_matches(trigger in trigger_strategy()) {
        let (mut rec, sink) = recognizer(Config::default());
        let counter = Counter::new();
        rec.add(counter.binding(&trigger));
        prop_assert!(rec.remove(&trigger));

        enter_sequence(&mut rec, &trigger).unwrap();

        prop_assert_eq!(counter.get(), 0);
        prop_assert_eq!(sink.count(Notification::Failure), 1);
    }

    #[test]
    fn case_insensitive_matches_any_casing(trigger in "[a-zA-Z]{1,12}") {
        let (mut rec, _sink) = recognizer(Config { case_sensitive: false, ..Config::default() });
        let counter = Counter::new();
        rec.add(counter.binding(&trigger));

        enter_sequence(&mut rec, &trigger.to_uppercase()).unwrap();
        enter_sequence(&mut rec, &trigger.to_lowercase()).unwrap();

        prop_assert_eq!(counter.get(), 2);
    }

    #[test]
    fn blacklisted_keys_never_change_state(prefix in "[a-z]{0,8}", repeats in 1usize..5) {
        let (mut rec, _sink) = recognizer(Config::default());
        rec.handle_key(&KeyPress::enter()).unwrap();
        type_str(&mut rec, &prefix);
        let before = rec.state();

        for _ in 0..repeats {
            let step = rec.handle_key(&KeyPress::with_key(codes::SHIFT, "Shift")).unwrap();
            prop_assert_eq!(step, Step::Ignored);
        }

        prop_assert_eq!(rec.state(), before);
    }

    #[test]
    fn buffer_only_nonempty_while_active(presses in prop::collection::vec(press_strategy(), 0..64)) {
        let (mut rec, _sink) = recognizer(Config::default());
        for press in &presses {
            rec.handle_key(press).unwrap();
            let state = rec.state();
            if state.mode == Mode::Inactive {
                prop_assert!(state.buffer.is_empty());
            }
        }
    }

    #[test]
    fn every_cycle_emits_at_most_one_outcome(presses in prop::collection::vec(press_strategy(), 0..64)) {
        let (mut rec, sink) = recognizer(Config::default());
        for press in &presses {
            rec.handle_key(press).unwrap();
        }
        let outcomes = sink.count(Notification::Success) + sink.count(Notification::Failure);
        prop_assert!(outcomes <= sink.count(Notification::Evaluated));
        prop_assert!(
            sink.count(Notification::Evaluated) + sink.count(Notification::Dismissed)
                <= sink.count(Notification::Activated)
        );
    }
}
