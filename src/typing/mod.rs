//! Typing animation for the hero headline
//!
//! A rotating list of phrases is typed one character at a time, held for a
//! pause, deleted at double speed, then the next phrase starts. The animator is
//! a plain state machine: callers feed it the current time and read back the
//! text to draw. `driver` runs it on a tokio task for the TUI.
//!
//! Lifecycle has two phases. Until `mount` is called the first phrase is shown
//! in full with a steady caret, so the first frame never renders an empty
//! headline. After mount the machine starts from an empty string.

pub mod driver;

pub use driver::{TypingDriver, TypingSnapshot};

use crate::effects::easing::there_and_back;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Caret blink period (1 -> 0 -> 1)
pub const CARET_PERIOD: Duration = Duration::from_secs(1);

/// Upper bound on ticks applied by a single `advance` call
const MAX_CATCH_UP: usize = 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypingError {
    #[error("phrase list is empty")]
    Empty,
}

/// Ordered, non-empty, immutable list of phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    pub fn new<I, S>(phrases: I) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypingError::Empty);
        }
        Ok(Self { phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index`, wrapping around the list
    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    pub fn first(&self) -> &str {
        self.get(0)
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }
}

/// Typing interval and pause length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Time per typed character
    pub speed: Duration,
    /// Hold time once a phrase is complete
    pub delay: Duration,
}

impl TypingTiming {
    /// Timing used by the hero headline
    pub const HERO: TypingTiming = TypingTiming {
        speed: Duration::from_millis(80),
        delay: Duration::from_millis(2500),
    };

    pub fn new(speed: Duration, delay: Duration) -> Self {
        Self { speed, delay }
    }

    /// Deleting runs at twice the typing speed
    pub fn delete_interval(&self) -> Duration {
        self.speed / 2
    }
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(100),
            delay: Duration::from_millis(2000),
        }
    }
}

/// Mutable part of the machine while running
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    /// Number of chars of the current phrase on screen
    pub displayed_chars: usize,
    pub is_deleting: bool,
    pub is_paused: bool,
}

impl TypingState {
    /// Apply one tick
    pub fn step(&mut self, phrases: &PhraseList) {
        let len = phrases.get(self.phrase_index).chars().count();

        if self.is_paused {
            self.is_paused = false;
            self.is_deleting = true;
        } else if !self.is_deleting {
            if self.displayed_chars < len {
                self.displayed_chars += 1;
            }
            if self.displayed_chars >= len {
                self.is_paused = true;
            }
            return;
        }

        // deleting (including the tick that ends the pause)
        self.displayed_chars = self.displayed_chars.saturating_sub(1);
        if self.displayed_chars == 0 {
            self.is_deleting = false;
            self.phrase_index = phrases.next_index(self.phrase_index);
        }
    }

    /// Wait before the tick after this state
    pub fn next_delay(&self, timing: &TypingTiming) -> Duration {
        if self.is_paused {
            timing.delay
        } else if self.is_deleting {
            timing.delete_interval()
        } else {
            timing.speed
        }
    }

    pub fn text<'a>(&self, phrases: &'a PhraseList) -> &'a str {
        char_prefix(phrases.get(self.phrase_index), self.displayed_chars)
    }
}

#[derive(Debug, Clone)]
pub enum Lifecycle {
    /// Not yet mounted: first phrase in full, steady caret
    Initial,
    Running {
        state: TypingState,
        next_tick: Instant,
        mounted_at: Instant,
    },
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: PhraseList,
    timing: TypingTiming,
    lifecycle: Lifecycle,
}

impl TypingAnimator {
    pub fn new(phrases: PhraseList, timing: TypingTiming) -> Self {
        Self {
            phrases,
            timing,
            lifecycle: Lifecycle::Initial,
        }
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn timing(&self) -> TypingTiming {
        self.timing
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Running { .. })
    }

    /// Start the machine. Calling it again has no effect.
    pub fn mount(&mut self, now: Instant) {
        if self.is_mounted() {
            return;
        }
        self.lifecycle = Lifecycle::Running {
            state: TypingState::default(),
            next_tick: now + self.timing.speed,
            mounted_at: now,
        };
    }

    /// Apply every tick due at `now`. Returns true if the text changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Lifecycle::Running {
            state, next_tick, ..
        } = &mut self.lifecycle
        else {
            return false;
        };

        let before = state.displayed_chars;
        let before_index = state.phrase_index;
        let mut applied = 0;
        while *next_tick <= now {
            if applied == MAX_CATCH_UP {
                // Too far behind (suspended process); resume from now
                *next_tick = now + state.next_delay(&self.timing);
                break;
            }
            state.step(&self.phrases);
            *next_tick += state.next_delay(&self.timing);
            applied += 1;
        }

        applied > 0 && (state.displayed_chars != before || state.phrase_index != before_index)
    }

    /// Text to render right now
    pub fn display(&self) -> &str {
        match &self.lifecycle {
            Lifecycle::Initial => self.phrases.first(),
            Lifecycle::Running { state, .. } => state.text(&self.phrases),
        }
    }

    pub fn state(&self) -> Option<&TypingState> {
        match &self.lifecycle {
            Lifecycle::Initial => None,
            Lifecycle::Running { state, .. } => Some(state),
        }
    }

    pub fn next_tick(&self) -> Option<Instant> {
        match &self.lifecycle {
            Lifecycle::Initial => None,
            Lifecycle::Running { next_tick, .. } => Some(*next_tick),
        }
    }

    pub fn mounted_at(&self) -> Option<Instant> {
        match &self.lifecycle {
            Lifecycle::Initial => None,
            Lifecycle::Running { mounted_at, .. } => Some(*mounted_at),
        }
    }

    pub fn caret_opacity(&self, now: Instant) -> f32 {
        self.mounted_at()
            .map(|mounted_at| caret_opacity(mounted_at, now))
            .unwrap_or(1.0)
    }

    pub fn caret_visible(&self, now: Instant) -> bool {
        self.caret_opacity(now) >= 0.5
    }
}

/// Blink curve since `mounted_at`, independent of typing progress
pub fn caret_opacity(mounted_at: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(mounted_at).as_secs_f32();
    let period = CARET_PERIOD.as_secs_f32();
    1.0 - there_and_back((elapsed % period) / period)
}

/// First `n` chars of `s`
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
