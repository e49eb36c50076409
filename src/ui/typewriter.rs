// SPDX-License-Identifier: MPL-2.0
//! Typewriter effect for the hero subtitle.
//!
//! Cycles a text sink through a list of phrases: type one character at a
//! time, hold the full phrase, erase one character at a time, pause, then
//! move on to the next phrase. The cycle runs until [`Typewriter::stop`].
//!
//! Each run gets a fresh [`RunHandle`]; steps scheduled by an earlier run
//! are ignored, so stopping or restarting never races with a timer that was
//! already in flight.

use crate::application::port::{Scheduler, TextSink, TimerToken};
use crate::config::{
    DEFAULT_TYPEWRITER_ERASE_MS, DEFAULT_TYPEWRITER_HOLD_MS, DEFAULT_TYPEWRITER_NEXT_PHRASE_MS,
    DEFAULT_TYPEWRITER_START_DELAY_MS, DEFAULT_TYPEWRITER_TYPE_MS,
};
use std::time::Duration;

/// Identifies one run of the effect, returned by [`Typewriter::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunHandle(u64);

/// Timer message driving the effect; carries the run that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Step(RunHandle),
}

/// Direction the displayed text is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Growing,
    Shrinking,
}

/// Step delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub start_delay: Duration,
    pub type_delay: Duration,
    /// Pause on the fully typed phrase.
    pub hold: Duration,
    pub erase_delay: Duration,
    /// Pause on the empty text before the next phrase.
    pub next_phrase: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(DEFAULT_TYPEWRITER_START_DELAY_MS),
            type_delay: Duration::from_millis(DEFAULT_TYPEWRITER_TYPE_MS),
            hold: Duration::from_millis(DEFAULT_TYPEWRITER_HOLD_MS),
            erase_delay: Duration::from_millis(DEFAULT_TYPEWRITER_ERASE_MS),
            next_phrase: Duration::from_millis(DEFAULT_TYPEWRITER_NEXT_PHRASE_MS),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Run {
    handle: RunHandle,
    pending: TimerToken,
}

/// Typed/erased title that writes every change to its sink.
#[derive(Debug)]
pub struct Typewriter<T> {
    phrases: Vec<String>,
    phrase_index: usize,
    displayed: String,
    mode: Mode,
    timings: Timings,
    sink: T,
    runs_started: u64,
    run: Option<Run>,
}

impl<T: TextSink> Typewriter<T> {
    #[must_use]
    pub fn new(phrases: Vec<String>, sink: T) -> Self {
        Self::with_timings(phrases, sink, Timings::default())
    }

    #[must_use]
    pub fn with_timings(phrases: Vec<String>, sink: T, timings: Timings) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            displayed: String::new(),
            mode: Mode::Growing,
            timings,
            sink,
            runs_started: 0,
            run: None,
        }
    }

    /// Starts cycling from the first phrase.
    ///
    /// Restarts from scratch if already running. Returns `None` without
    /// scheduling anything when there are no phrases.
    pub fn start<S>(&mut self, scheduler: &mut S) -> Option<RunHandle>
    where
        S: Scheduler,
        S::Event: From<Message>,
    {
        if self.phrases.is_empty() {
            tracing::debug!("typewriter has no phrases, not starting");
            return None;
        }
        if let Some(run) = self.run.take() {
            scheduler.cancel(run.pending);
        }

        self.phrase_index = 0;
        self.displayed.clear();
        self.mode = Mode::Growing;

        self.runs_started += 1;
        let handle = RunHandle(self.runs_started);
        let pending = scheduler.after(self.timings.start_delay, Message::Step(handle).into());
        self.run = Some(Run { handle, pending });

        tracing::debug!(phrases = self.phrases.len(), "typewriter started");
        Some(handle)
    }

    /// Stops the run identified by `handle`, cancelling its pending step.
    ///
    /// Returns `false` if that run is not the active one. The sink keeps
    /// whatever text it last received.
    pub fn stop<S: Scheduler>(&mut self, handle: RunHandle, scheduler: &mut S) -> bool {
        match self.run {
            Some(run) if run.handle == handle => {
                scheduler.cancel(run.pending);
                self.run = None;
                tracing::debug!("typewriter stopped");
                true
            }
            _ => false,
        }
    }

    pub fn handle_message<S>(&mut self, message: &Message, scheduler: &mut S)
    where
        S: Scheduler,
        S::Event: From<Message>,
    {
        let Message::Step(handle) = *message;
        let Some(run) = self.run.as_mut().filter(|run| run.handle == handle) else {
            tracing::trace!("stale typewriter step ignored");
            return;
        };

        let delay = advance(
            &self.phrases,
            &mut self.phrase_index,
            &mut self.displayed,
            &mut self.mode,
            &self.timings,
        );
        self.sink.write(&self.displayed);
        run.pending = scheduler.after(delay, Message::Step(handle).into());
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn current_phrase(&self) -> Option<&str> {
        self.phrases.get(self.phrase_index).map(String::as_str)
    }

    #[must_use]
    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn sink(&self) -> &T {
        &self.sink
    }

    /// Consumes the effect and returns its sink.
    pub fn into_sink(self) -> T {
        self.sink
    }
}

/// Applies one step and returns the delay until the next one.
///
/// `displayed` is always a prefix of the current phrase, so slicing the
/// phrase at its length lands on a char boundary.
fn advance(
    phrases: &[String],
    phrase_index: &mut usize,
    displayed: &mut String,
    mode: &mut Mode,
    timings: &Timings,
) -> Duration {
    let phrase = &phrases[*phrase_index];
    match *mode {
        Mode::Growing => {
            if let Some(next) = phrase[displayed.len()..].chars().next() {
                displayed.push(next);
            }
            if displayed.len() == phrase.len() {
                *mode = Mode::Shrinking;
                timings.hold
            } else {
                timings.type_delay
            }
        }
        Mode::Shrinking => {
            displayed.pop();
            if displayed.is_empty() {
                *mode = Mode::Growing;
                *phrase_index = (*phrase_index + 1) % phrases.len();
                timings.next_phrase
            } else {
                timings.erase_delay
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::VirtualScheduler;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| (*p).to_string()).collect()
    }

    /// Records every write in order.
    #[derive(Debug, Default)]
    struct Recorder {
        writes: Vec<String>,
    }

    impl TextSink for Recorder {
        fn write(&mut self, text: &str) {
            self.writes.push(text.to_string());
        }
    }

    fn run_until(
        typewriter: &mut Typewriter<Recorder>,
        scheduler: &mut VirtualScheduler<Message>,
        ms: u64,
    ) {
        let horizon = Duration::from_millis(ms);
        while let Some(message) = scheduler.next_due(horizon) {
            typewriter.handle_message(&message, scheduler);
        }
        scheduler.settle_at(horizon);
    }

    #[test]
    fn empty_phrase_list_is_a_no_op() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter = Typewriter::new(Vec::new(), Recorder::default());

        assert!(typewriter.start(&mut scheduler).is_none());
        assert_eq!(scheduler.pending_count(), 0);
        assert!(!typewriter.is_running());
        assert!(typewriter.sink().writes.is_empty());
    }

    #[test]
    fn first_step_waits_for_start_delay() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter = Typewriter::new(phrases(&["AB"]), Recorder::default());
        typewriter.start(&mut scheduler);

        run_until(&mut typewriter, &mut scheduler, 999);
        assert!(typewriter.sink().writes.is_empty());

        run_until(&mut typewriter, &mut scheduler, 1000);
        assert_eq!(typewriter.sink().writes, vec!["A"]);
    }

    #[test]
    fn single_phrase_cycle_timing() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter = Typewriter::new(phrases(&["AB"]), Recorder::default());
        typewriter.start(&mut scheduler);

        // Grow: 1000 "A", 1100 "AB"
        run_until(&mut typewriter, &mut scheduler, 1100);
        assert_eq!(typewriter.displayed_text(), "AB");
        assert_eq!(typewriter.mode(), Mode::Shrinking);

        // Hold 2000 ms, then shrink: 3100 "A", 3150 ""
        run_until(&mut typewriter, &mut scheduler, 3099);
        assert_eq!(typewriter.displayed_text(), "AB");
        run_until(&mut typewriter, &mut scheduler, 3150);
        assert_eq!(typewriter.displayed_text(), "");
        assert_eq!(typewriter.mode(), Mode::Growing);
        assert_eq!(typewriter.phrase_index(), 0);

        // Pause 500 ms, then type again.
        run_until(&mut typewriter, &mut scheduler, 3649);
        assert_eq!(typewriter.displayed_text(), "");
        run_until(&mut typewriter, &mut scheduler, 3650);
        assert_eq!(typewriter.displayed_text(), "A");

        assert_eq!(
            typewriter.sink().writes,
            vec!["A", "AB", "A", "", "A"]
        );
    }

    #[test]
    fn advances_and_wraps_phrase_index() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter = Typewriter::new(phrases(&["A", "BB"]), Recorder::default());
        typewriter.start(&mut scheduler);

        // "A" typed at 1000, held until 3000, erased at 3000.
        run_until(&mut typewriter, &mut scheduler, 3000);
        assert_eq!(typewriter.phrase_index(), 1);
        assert_eq!(typewriter.current_phrase(), Some("BB"));

        // 3500 "B", 3600 "BB", hold to 5600 "B", 5650 "" -> wrap.
        run_until(&mut typewriter, &mut scheduler, 3600);
        assert_eq!(typewriter.displayed_text(), "BB");
        run_until(&mut typewriter, &mut scheduler, 5650);
        assert_eq!(typewriter.displayed_text(), "");
        assert_eq!(typewriter.phrase_index(), 0);

        assert_eq!(
            typewriter.sink().writes,
            vec!["A", "", "B", "BB", "B", ""]
        );
    }

    #[test]
    fn displayed_text_is_always_a_prefix() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter =
            Typewriter::new(phrases(&["héllo wörld", "日本"]), Recorder::default());
        typewriter.start(&mut scheduler);

        for ms in (1000..20_000).step_by(25) {
            run_until(&mut typewriter, &mut scheduler, ms);
            let phrase = typewriter.current_phrase().expect("phrases present");
            assert!(phrase.starts_with(typewriter.displayed_text()));
        }
    }

    #[test]
    fn empty_phrase_in_list_is_skipped_through() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter = Typewriter::new(phrases(&["", "Z"]), Recorder::default());
        typewriter.start(&mut scheduler);

        // 1000: "" complete -> hold 2000; 3000: erase nothing -> next phrase.
        run_until(&mut typewriter, &mut scheduler, 3000);
        assert_eq!(typewriter.phrase_index(), 1);
        run_until(&mut typewriter, &mut scheduler, 3500);
        assert_eq!(typewriter.displayed_text(), "Z");
    }

    #[test]
    fn stop_cancels_pending_step() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter = Typewriter::new(phrases(&["AB"]), Recorder::default());
        let handle = typewriter.start(&mut scheduler).expect("phrases present");

        run_until(&mut typewriter, &mut scheduler, 1000);
        assert!(typewriter.stop(handle, &mut scheduler));
        assert!(!typewriter.is_running());
        assert_eq!(scheduler.pending_count(), 0);

        run_until(&mut typewriter, &mut scheduler, 10_000);
        assert_eq!(typewriter.sink().writes, vec!["A"]);
    }

    #[test]
    fn stale_step_after_restart_is_ignored() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter = Typewriter::new(phrases(&["AB"]), Recorder::default());
        let first = typewriter.start(&mut scheduler).expect("phrases present");
        let second = typewriter.start(&mut scheduler).expect("phrases present");
        assert_ne!(first, second);

        // A step from the first run delivered late must not advance the text.
        typewriter.handle_message(&Message::Step(first), &mut scheduler);
        assert_eq!(typewriter.displayed_text(), "");
        assert!(!typewriter.stop(first, &mut scheduler));

        run_until(&mut typewriter, &mut scheduler, 1000);
        assert_eq!(typewriter.sink().writes, vec!["A"]);
    }

    #[test]
    fn string_sink_holds_latest_text() {
        let mut scheduler = VirtualScheduler::<Message>::new();
        let mut typewriter = Typewriter::new(phrases(&["Hi"]), String::new());
        typewriter.start(&mut scheduler);

        let horizon = Duration::from_millis(1100);
        while let Some(message) = scheduler.next_due(horizon) {
            typewriter.handle_message(&message, &mut scheduler);
        }
        assert_eq!(typewriter.into_sink(), "Hi");
    }
}
