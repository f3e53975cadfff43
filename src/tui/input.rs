// Key repeat and debounce
//
// Terminals differ: some send Press/Repeat/Release, most only send repeated
// Press events while a key is held. Scroll keys repeat after an initial
// delay; action keys (copy, open, filter) fire once per press so a held key
// doesn't open and close the project modal in a loop.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Window in which a repeated press of an action key is ignored when the
/// terminal never sends a release
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire once per press
    Action,
    /// Fire on press, then every `interval` once `delay` has passed
    Repeat { delay: Duration, interval: Duration },
}

impl KeyBehavior {
    pub const SCROLL: KeyBehavior = KeyBehavior::Repeat {
        delay: Duration::from_millis(400),
        interval: Duration::from_millis(40),
    };

    pub const PAGE: KeyBehavior = KeyBehavior::Repeat {
        delay: Duration::from_millis(300),
        interval: Duration::from_millis(80),
    };
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    /// Key behaviors for the portfolio page
    pub fn for_page() -> Self {
        let mut handler = Self::default();
        for key in [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Char('j'),
            KeyCode::Char('k'),
        ] {
            handler.behaviors.insert(key, KeyBehavior::SCROLL);
        }
        for key in [KeyCode::PageUp, KeyCode::PageDown, KeyCode::Char(' ')] {
            handler.behaviors.insert(key, KeyBehavior::PAGE);
        }
        handler
    }

    pub fn behavior(&self, key: KeyCode) -> KeyBehavior {
        self.behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Action)
    }

    /// Returns true when the press should trigger its action
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    pub fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self.behavior(key);
        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            KeyBehavior::Action => now.duration_since(held.last_fired) >= ACTION_DEBOUNCE,
            KeyBehavior::Repeat { delay, interval } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= interval
            }
        };
        if fire {
            held.last_fired = now;
            if behavior == KeyBehavior::Action {
                // No release seen; treat this as a fresh press
                held.since = now;
            }
        }
        fire
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Forget everything held (focus moved into a modal or the form)
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_fires_once_per_press() {
        let mut input = InputHandler::for_page();
        let t0 = Instant::now();
        assert!(input.press_at(KeyCode::Enter, t0));
        assert!(!input.press_at(KeyCode::Enter, t0 + Duration::from_millis(30)));

        input.release(KeyCode::Enter);
        assert!(input.press_at(KeyCode::Enter, t0 + Duration::from_millis(40)));
    }

    #[test]
    fn test_action_debounce_without_release() {
        let mut input = InputHandler::for_page();
        let t0 = Instant::now();
        assert!(input.press_at(KeyCode::Char('c'), t0));
        assert!(input.press_at(KeyCode::Char('c'), t0 + ACTION_DEBOUNCE));
    }

    #[test]
    fn test_scroll_key_repeats_after_delay() {
        let mut input = InputHandler::for_page();
        let t0 = Instant::now();
        assert!(input.press_at(KeyCode::Down, t0));
        assert!(!input.press_at(KeyCode::Down, t0 + Duration::from_millis(100)));
        assert!(input.press_at(KeyCode::Down, t0 + Duration::from_millis(400)));
        assert!(!input.press_at(KeyCode::Down, t0 + Duration::from_millis(420)));
        assert!(input.press_at(KeyCode::Down, t0 + Duration::from_millis(440)));
    }

    #[test]
    fn test_unconfigured_keys_are_actions() {
        let input = InputHandler::for_page();
        assert_eq!(input.behavior(KeyCode::Char('f')), KeyBehavior::Action);
        assert_eq!(input.behavior(KeyCode::Down), KeyBehavior::SCROLL);
    }
}
