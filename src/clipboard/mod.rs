//! Copy-to-clipboard with layered fallbacks
//!
//! `TierChain` walks the tiers in order (native clipboard, then an external
//! clipboard command) and falls back to a manual prompt, or to the log when no
//! prompt surface exists. `ClipboardService` wraps a chain with the `copied`
//! flag shown next to copy buttons, which resets 2 s after the last success.
//!
//! Copies can settle out of order when run on the blocking pool, so every
//! attempt takes a ticket and only the newest ticket may touch the flag.

pub mod prompt;
pub mod tiers;

pub use prompt::{ChannelPrompt, ManualPrompt, NoPrompt, PromptOutcome};
pub use tiers::{CopyTier, LegacyCommand, NativeClipboard, TierOutcome};

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

/// How long `copied` stays true after a success
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Identifies one copy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CopyTicket(u64);

/// The `copied` flag with last-write-wins settlement
#[derive(Debug, Default)]
pub struct CopyStatus {
    copied_until: Option<Instant>,
    latest: u64,
}

impl CopyStatus {
    /// Start an attempt; clears any standing `copied`
    pub fn begin(&mut self) -> CopyTicket {
        self.latest += 1;
        self.copied_until = None;
        CopyTicket(self.latest)
    }

    /// Record the result of `ticket`. Stale tickets are ignored (returns false).
    pub fn settle(&mut self, ticket: CopyTicket, success: bool, now: Instant) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        if success {
            self.copied_until = Some(now + COPIED_RESET);
        }
        true
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        matches!(self.copied_until, Some(until) if now < until)
    }

    pub fn reset_at(&self) -> Option<Instant> {
        self.copied_until
    }
}

/// How a copy request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResolution {
    Copied { tier: &'static str },
    /// Text handed to the manual prompt
    ManualPrompt,
    /// Nothing worked; text written to the log
    Logged,
}

impl CopyResolution {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyResolution::Copied { .. })
    }
}

pub struct TierChain {
    tiers: Vec<Box<dyn CopyTier>>,
    prompt: Box<dyn ManualPrompt>,
}

impl TierChain {
    pub fn new(tiers: Vec<Box<dyn CopyTier>>, prompt: Box<dyn ManualPrompt>) -> Self {
        Self { tiers, prompt }
    }

    /// Native clipboard, then the detected clipboard command
    pub fn system(prompt: Box<dyn ManualPrompt>) -> Self {
        Self::new(
            vec![Box::new(NativeClipboard), Box::new(LegacyCommand::detect())],
            prompt,
        )
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|t| t.name()).collect()
    }

    pub fn run(&self, text: &str) -> CopyResolution {
        for tier in &self.tiers {
            match tier.copy(text) {
                TierOutcome::Success => {
                    tracing::debug!("Copied {} chars via {}", text.chars().count(), tier.name());
                    return CopyResolution::Copied { tier: tier.name() };
                }
                TierOutcome::Unavailable => {
                    tracing::debug!("Clipboard tier {} unavailable", tier.name());
                }
                TierOutcome::Failed(reason) => {
                    tracing::warn!("Clipboard tier {} failed: {}", tier.name(), reason);
                }
            }
        }

        match self.prompt.show(text) {
            PromptOutcome::Shown => CopyResolution::ManualPrompt,
            PromptOutcome::NoSurface => {
                tracing::warn!(text = %text, "{}", prompt::COPY_UNAVAILABLE);
                CopyResolution::Logged
            }
        }
    }
}

/// Copy button state: a shared tier chain plus this element's own status
#[derive(Clone)]
pub struct ClipboardService {
    chain: Arc<TierChain>,
    status: Arc<Mutex<CopyStatus>>,
}

impl ClipboardService {
    pub fn new(chain: Arc<TierChain>) -> Self {
        Self {
            chain,
            status: Arc::new(Mutex::new(CopyStatus::default())),
        }
    }

    /// Copy synchronously. Returns true only when a tier succeeded.
    pub fn copy(&self, text: &str) -> bool {
        self.copy_detailed(text).is_success()
    }

    pub fn copy_detailed(&self, text: &str) -> CopyResolution {
        let ticket = self.status().begin();
        let resolution = self.chain.run(text);
        self.status()
            .settle(ticket, resolution.is_success(), Instant::now());
        resolution
    }

    /// Run the tiers on the blocking pool; the UI keeps drawing meanwhile.
    /// `None` when a newer copy started before this one settled.
    pub async fn copy_async(&self, text: String) -> Option<CopyResolution> {
        let ticket = self.status().begin();
        let chain = Arc::clone(&self.chain);
        let resolution = match tokio::task::spawn_blocking(move || chain.run(&text)).await {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::error!("Clipboard task failed: {}", e);
                CopyResolution::Logged
            }
        };
        let current = self
            .status()
            .settle(ticket, resolution.is_success(), Instant::now());
        current.then_some(resolution)
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.status().is_copied(now)
    }

    fn status(&self) -> MutexGuard<'_, CopyStatus> {
        self.status.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct FakeTier {
        name: &'static str,
        outcome: TierOutcome,
        calls: Arc<AtomicUsize>,
    }

    impl FakeTier {
        fn boxed(name: &'static str, outcome: TierOutcome) -> (Box<dyn CopyTier>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let tier = FakeTier {
                name,
                outcome,
                calls: Arc::clone(&calls),
            };
            (Box::new(tier), calls)
        }
    }

    impl CopyTier for FakeTier {
        fn name(&self) -> &'static str {
            self.name
        }
        fn copy(&self, _text: &str) -> TierOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    #[derive(Default, Clone)]
    struct RecordingPrompt {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl ManualPrompt for RecordingPrompt {
        fn show(&self, text: &str) -> PromptOutcome {
            self.seen.lock().unwrap().push(text.to_string());
            PromptOutcome::Shown
        }
    }

    fn service(tiers: Vec<Box<dyn CopyTier>>, prompt: Box<dyn ManualPrompt>) -> ClipboardService {
        ClipboardService::new(Arc::new(TierChain::new(tiers, prompt)))
    }

    #[test]
    fn first_successful_tier_stops_the_chain() {
        let (native, native_calls) = FakeTier::boxed("native", TierOutcome::Success);
        let (legacy, legacy_calls) = FakeTier::boxed("legacy", TierOutcome::Success);
        let svc = service(vec![native, legacy], Box::new(NoPrompt));

        assert_eq!(svc.copy_detailed("hi"), CopyResolution::Copied { tier: "native" });
        assert_eq!(native_calls.load(Ordering::SeqCst), 1);
        assert_eq!(legacy_calls.load(Ordering::SeqCst), 0);
        assert!(svc.is_copied(Instant::now()));
    }

    #[test]
    fn failed_native_falls_through_to_legacy() {
        let (native, _) = FakeTier::boxed("native", TierOutcome::Failed("denied".into()));
        let (legacy, legacy_calls) = FakeTier::boxed("legacy", TierOutcome::Success);
        let svc = service(vec![native, legacy], Box::new(NoPrompt));

        assert!(svc.copy("hi"));
        assert_eq!(legacy_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exhausted_tiers_without_prompt_log_and_return_false() {
        let (native, _) = FakeTier::boxed("native", TierOutcome::Unavailable);
        let (legacy, _) = FakeTier::boxed("legacy", TierOutcome::Unavailable);
        let svc = service(vec![native, legacy], Box::new(NoPrompt));

        assert_eq!(svc.copy_detailed("secret"), CopyResolution::Logged);
        assert!(!svc.is_copied(Instant::now()));
    }

    #[test]
    fn exhausted_tiers_hand_text_to_prompt() {
        let (native, _) = FakeTier::boxed("native", TierOutcome::Unavailable);
        let (legacy, _) = FakeTier::boxed("legacy", TierOutcome::Failed("exit 1".into()));
        let prompt = RecordingPrompt::default();
        let svc = service(vec![native, legacy], Box::new(prompt.clone()));

        assert!(!svc.copy("alex@example.com"));
        assert_eq!(*prompt.seen.lock().unwrap(), vec!["alex@example.com".to_string()]);
        assert!(!svc.is_copied(Instant::now()));
    }

    #[test]
    fn stale_ticket_cannot_settle() {
        let mut status = CopyStatus::default();
        let now = Instant::now();
        let first = status.begin();
        let second = status.begin();
        assert!(!status.settle(first, true, now));
        assert!(!status.is_copied(now));
        assert!(status.settle(second, false, now));
        assert!(!status.is_copied(now));
    }

    #[test]
    fn begin_clears_standing_copied() {
        let mut status = CopyStatus::default();
        let now = Instant::now();
        let t = status.begin();
        status.settle(t, true, now);
        assert!(status.is_copied(now));
        status.begin();
        assert!(!status.is_copied(now));
    }

    #[test]
    fn copied_resets_after_window() {
        let mut status = CopyStatus::default();
        let now = Instant::now();
        let t = status.begin();
        status.settle(t, true, now);
        assert_eq!(status.reset_at(), Some(now + COPIED_RESET));
        assert!(status.is_copied(now + Duration::from_millis(1999)));
        assert!(!status.is_copied(now + COPIED_RESET));
    }

    #[tokio::test(start_paused = true)]
    async fn second_copy_restarts_the_window() {
        let (native, _) = FakeTier::boxed("native", TierOutcome::Success);
        let svc = service(vec![native], Box::new(NoPrompt));

        assert!(svc.copy("one"));
        tokio::time::advance(Duration::from_millis(1500)).await;
        assert!(svc.copy("two"));

        tokio::time::advance(Duration::from_millis(1000)).await;
        assert!(svc.is_copied(Instant::now()));
        tokio::time::advance(Duration::from_millis(1000)).await;
        assert!(!svc.is_copied(Instant::now()));
    }

    #[tokio::test]
    async fn async_copy_settles_status() {
        let (native, _) = FakeTier::boxed("native", TierOutcome::Success);
        let svc = service(vec![native], Box::new(NoPrompt));

        let resolution = svc.copy_async("later".to_string()).await;
        assert!(resolution.is_some_and(|r| r.is_success()));
        assert!(svc.is_copied(Instant::now()));
    }

    /// Blocks copies of "slow" until released
    struct GatedTier {
        entered: Arc<AtomicBool>,
        gate: Mutex<std::sync::mpsc::Receiver<()>>,
    }

    impl CopyTier for GatedTier {
        fn name(&self) -> &'static str {
            "gated"
        }
        fn copy(&self, text: &str) -> TierOutcome {
            if text == "slow" {
                self.entered.store(true, Ordering::SeqCst);
                let _ = self.gate.lock().unwrap().recv();
            }
            TierOutcome::Success
        }
    }

    #[tokio::test]
    async fn superseded_async_copy_reports_nothing() {
        let (release, gate) = std::sync::mpsc::channel();
        let entered = Arc::new(AtomicBool::new(false));
        let tier = GatedTier {
            entered: Arc::clone(&entered),
            gate: Mutex::new(gate),
        };
        let svc = service(vec![Box::new(tier)], Box::new(NoPrompt));

        let first = tokio::spawn({
            let svc = svc.clone();
            async move { svc.copy_async("slow".to_string()).await }
        });
        while !entered.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let second = svc.copy_async("fast".to_string()).await;
        assert_eq!(second, Some(CopyResolution::Copied { tier: "gated" }));

        release.send(()).unwrap();
        assert_eq!(first.await.unwrap(), None);
        assert!(svc.is_copied(Instant::now()));
    }
}
