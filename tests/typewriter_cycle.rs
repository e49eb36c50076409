// SPDX-License-Identifier: MPL-2.0
use folio_fx::application::port::TextSink;
use folio_fx::infrastructure::VirtualScheduler;
use folio_fx::ui::typewriter::{Message, Mode, Typewriter};
use std::time::Duration;

/// Sink that keeps every write.
#[derive(Default)]
struct Tape(Vec<String>);

impl TextSink for Tape {
    fn write(&mut self, text: &str) {
        self.0.push(text.to_string());
    }
}

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| (*p).to_string()).collect()
}

/// Runs the effect up to `until_ms` and returns (time in ms, text) per step.
fn timeline(list: &[&str], until_ms: u64) -> Vec<(u64, String)> {
    let mut typewriter = Typewriter::new(phrases(list), Tape::default());
    let mut scheduler = VirtualScheduler::<Message>::new();
    typewriter.start(&mut scheduler).unwrap();

    let horizon = Duration::from_millis(until_ms);
    let mut steps = Vec::new();
    while let Some(message) = scheduler.next_due(horizon) {
        typewriter.handle_message(&message, &mut scheduler);
        let at = u64::try_from(scheduler.elapsed().as_millis()).unwrap();
        steps.push((at, typewriter.displayed_text().to_string()));
    }
    steps
}

fn step(at: u64, text: &str) -> (u64, String) {
    (at, text.to_string())
}

#[test]
fn single_phrase_grows_holds_shrinks_and_repeats() {
    assert_eq!(
        timeline(&["AB"], 3800),
        vec![
            step(1000, "A"),
            step(1100, "AB"),
            step(3100, "A"),
            step(3150, ""),
            step(3650, "A"),
            step(3750, "AB"),
        ]
    );
}

#[test]
fn two_phrases_alternate_and_wrap() {
    assert_eq!(
        timeline(&["A", "BB"], 6200),
        vec![
            step(1000, "A"),
            step(3000, ""),
            step(3500, "B"),
            step(3600, "BB"),
            step(5600, "B"),
            step(5650, ""),
            step(6150, "A"),
        ]
    );
}

#[test]
fn displayed_text_is_always_a_prefix() {
    let list = ["Cloud", "Ünïcødé ✓", "x"];
    let mut typewriter = Typewriter::new(phrases(&list), Tape::default());
    let mut scheduler = VirtualScheduler::<Message>::new();
    typewriter.start(&mut scheduler);

    let horizon = Duration::from_secs(60);
    while let Some(message) = scheduler.next_due(horizon) {
        typewriter.handle_message(&message, &mut scheduler);
        let phrase = typewriter.current_phrase().unwrap();
        assert!(phrase.starts_with(typewriter.displayed_text()));
        if typewriter.displayed_text() == phrase && !phrase.is_empty() {
            assert_eq!(typewriter.mode(), Mode::Shrinking);
        }
    }
}

#[test]
fn empty_phrase_list_never_schedules_or_writes() {
    let mut typewriter = Typewriter::new(Vec::new(), Tape::default());
    let mut scheduler = VirtualScheduler::<Message>::new();

    assert!(typewriter.start(&mut scheduler).is_none());
    assert_eq!(scheduler.pending_count(), 0);
    assert!(typewriter.sink().0.is_empty());
}

#[test]
fn stop_handle_ends_the_cycle() {
    let mut typewriter = Typewriter::new(phrases(&["Hello"]), Tape::default());
    let mut scheduler = VirtualScheduler::<Message>::new();
    let handle = typewriter.start(&mut scheduler).unwrap();

    let horizon = Duration::from_millis(1200);
    while let Some(message) = scheduler.next_due(horizon) {
        typewriter.handle_message(&message, &mut scheduler);
    }
    assert!(typewriter.stop(handle, &mut scheduler));
    assert_eq!(scheduler.pending_count(), 0);
    assert!(!typewriter.is_running());

    // A step that was already in flight is dropped.
    typewriter.handle_message(&Message::Step(handle), &mut scheduler);
    assert_eq!(typewriter.sink().0, vec!["H", "He", "Hel"]);
}
