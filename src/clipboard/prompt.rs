//! Last-resort surface: show the text so the user can copy it by hand

use tokio::sync::mpsc;

pub const MANUAL_COPY_HINT: &str = "Copy this text manually (Ctrl+C/Cmd+C):";
pub const COPY_UNAVAILABLE: &str =
    "Copy functionality is not available. The text has been logged to the console.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Shown,
    NoSurface,
}

pub trait ManualPrompt: Send + Sync {
    fn show(&self, text: &str) -> PromptOutcome;
}

/// Headless: nowhere to show anything
#[derive(Debug, Default)]
pub struct NoPrompt;

impl ManualPrompt for NoPrompt {
    fn show(&self, _text: &str) -> PromptOutcome {
        PromptOutcome::NoSurface
    }
}

/// Forwards the text to the TUI, which opens the manual-copy modal
#[derive(Debug, Clone)]
pub struct ChannelPrompt {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelPrompt {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl ManualPrompt for ChannelPrompt {
    fn show(&self, text: &str) -> PromptOutcome {
        match self.tx.send(text.to_string()) {
            Ok(()) => PromptOutcome::Shown,
            Err(_) => PromptOutcome::NoSurface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_prompt_forwards_text() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let prompt = ChannelPrompt::new(tx);
        assert_eq!(prompt.show("alex@example.com"), PromptOutcome::Shown);
        assert_eq!(rx.try_recv().unwrap(), "alex@example.com");
    }

    #[test]
    fn closed_channel_means_no_surface() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        assert_eq!(ChannelPrompt::new(tx).show("x"), PromptOutcome::NoSurface);
    }
}
