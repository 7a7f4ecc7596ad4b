#![allow(dead_code)]

pub mod counter;
pub mod recording_sink;

use kiku::{Config, InstanceSlot, KeyPress, Recognizer, Step};

use recording_sink::RecordingSink;

/// A recognizer on its own slot, so tests can run in parallel.
pub fn recognizer(config: Config) -> (Recognizer, RecordingSink) {
    let sink = RecordingSink::new();
    let rec = Recognizer::builder()
        .config(config)
        .sink(sink.clone())
        .slot(InstanceSlot::new())
        .build()
        .expect("valid test configuration");
    (rec, sink)
}

/// Feed each character of `text` as a key press.
pub fn type_str(rec: &mut Recognizer, text: &str) -> Vec<Step> {
    text.chars()
        .map(|c| rec.handle_key(&KeyPress::char(c)).expect("typing never fails"))
        .collect()
}

/// ENTER, `text`, ENTER. Returns the final step.
pub fn enter_sequence(rec: &mut Recognizer, text: &str) -> kiku::Result<Step> {
    rec.handle_key(&KeyPress::enter())?;
    type_str(rec, text);
    rec.handle_key(&KeyPress::enter())
}
