// Application state for the portfolio page
//
// App owns every mounted component: the hero typing animation, the gallery
// controller, the pointer effects, one clipboard status per copy element,
// and the contact form. Components never talk to each other; the event loop
// routes input to them and the views read them back.

use crate::clipboard::prompt::COPY_UNAVAILABLE;
use crate::clipboard::{ChannelPrompt, ClipboardService, CopyResolution, TierChain};
use crate::config::Config;
use crate::content::Portfolio;
use crate::effects::particles::DEFAULT_PARTICLES;
use crate::effects::{Bounds, CursorTrail, MagneticHover, ParticleField, Vec2};
use crate::gallery::GalleryController;
use crate::logging::LogBuffer;
use crate::page::PageSurface;
use crate::relay::client::ContactClient;
use crate::relay::ContactSubmission;
use crate::tui::components::Toast;
use crate::tui::form::ContactForm;
use crate::tui::input::InputHandler;
use crate::tui::layout::Breakpoint;
use crate::tui::modal::Modal;
use crate::tui::scroll::{PageScroll, ScrollMove};
use crate::tui::theme::Theme;
use crate::typing::driver::TypingDriver;
use crate::typing::TypingAnimator;
use anyhow::Result;
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Largest magnetic displacement drawn, in cells
const MAX_PULL_CELLS: f32 = 3.0;

/// Pointer-reactive elements on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    ViewWork,
    GetInTouch,
    CopyEmail,
    CopyPhone,
}

impl Target {
    pub const ALL: [Target; 4] = [
        Target::ViewWork,
        Target::GetInTouch,
        Target::CopyEmail,
        Target::CopyPhone,
    ];

    fn is_hero(self) -> bool {
        matches!(self, Target::ViewWork | Target::GetInTouch)
    }
}

/// Elements with their own copy button (and so their own "Copied" state)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Email,
    Phone,
    Link,
}

impl CopyTarget {
    pub fn label(self) -> &'static str {
        match self {
            CopyTarget::Email => "email",
            CopyTarget::Phone => "phone number",
            CopyTarget::Link => "link",
        }
    }
}

/// Results coming back from background tasks
#[derive(Debug)]
pub enum AppEvent {
    CopyFinished(CopyTarget, CopyResolution),
    FormFinished(Result<String, String>),
}

/// Where keyboard input goes when no overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Form,
}

/// Hero headline: a static first phrase until mounted, then a live driver
pub enum HeroTyping {
    Initial(TypingAnimator),
    Running(TypingDriver),
}

impl HeroTyping {
    pub fn text(&self) -> String {
        match self {
            HeroTyping::Initial(animator) => animator.display().to_string(),
            HeroTyping::Running(driver) => driver.snapshot().text,
        }
    }

    /// Static (fully visible) caret before mount
    pub fn caret_opacity(&self, now: Instant) -> f32 {
        match self {
            HeroTyping::Initial(_) => 1.0,
            HeroTyping::Running(driver) => driver.snapshot().caret_opacity(now),
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, HeroTyping::Running(_))
    }
}

#[derive(Debug)]
struct Magnet {
    hover: MagneticHover,
    bounds: Option<Bounds>,
}

pub struct App {
    pub config: Config,
    pub content: Arc<Portfolio>,
    pub theme: Theme,
    pub log_buffer: LogBuffer,

    // Page document
    pub page: PageSurface,
    pub scroll: PageScroll,
    pub gallery: GalleryController,
    /// Section id ("about", "projects", ...) -> first line in the document
    pub anchors: HashMap<String, usize>,
    pub breakpoint: Breakpoint,

    // Hero
    pub typing: HeroTyping,
    pub particles: ParticleField,
    pub mounted_at: Option<Instant>,

    // Pointer
    pub trail: CursorTrail,
    pub pointer: Option<Vec2>,
    magnets: HashMap<Target, Magnet>,

    // Copy buttons
    copy: HashMap<CopyTarget, ClipboardService>,

    // Overlays
    pub modal: Option<Modal>,
    pub project_scroll: u16,
    /// Screen area of the project overlay (for backdrop clicks)
    pub overlay_area: Option<Rect>,
    pub toast: Option<Toast>,

    // Contact form
    pub form: ContactForm,
    pub focus: Focus,
    client: Option<ContactClient>,

    pub input: InputHandler,
    pub show_logs: bool,
    pub should_quit: bool,

    events_tx: mpsc::UnboundedSender<AppEvent>,
    last_tick: Instant,
}

impl App {
    pub fn new(
        config: Config,
        content: Arc<Portfolio>,
        log_buffer: LogBuffer,
        events_tx: mpsc::UnboundedSender<AppEvent>,
        prompt_tx: mpsc::UnboundedSender<String>,
    ) -> Result<Self> {
        let phrases = content.phrase_list()?;
        let animator = TypingAnimator::new(phrases, config.typing.timing());

        let page = PageSurface::new();
        let gallery = GalleryController::new(content.projects.clone(), page.clone());

        // One tier chain, one status per copy element
        let chain = Arc::new(TierChain::system(Box::new(ChannelPrompt::new(prompt_tx))));
        let copy = [CopyTarget::Email, CopyTarget::Phone, CopyTarget::Link]
            .into_iter()
            .map(|target| (target, ClipboardService::new(Arc::clone(&chain))))
            .collect();

        let magnets = Target::ALL
            .into_iter()
            .map(|target| {
                let strength = if target.is_hero() {
                    config.effects.magnetic_strength
                } else {
                    config.effects.element_strength
                };
                let magnet = Magnet {
                    hover: MagneticHover::new(strength),
                    bounds: None,
                };
                (target, magnet)
            })
            .collect();

        let client = match ContactClient::new(&config.relay_url()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("Contact form disabled: {}", e);
                None
            }
        };

        let mut trail = CursorTrail::new();
        trail.set_enabled(config.effects.cursor_trail);

        Ok(Self {
            theme: Theme::by_name(&config.theme),
            config,
            content,
            log_buffer,
            scroll: PageScroll::new(page.clone()),
            page,
            gallery,
            anchors: HashMap::new(),
            breakpoint: Breakpoint::Normal,
            typing: HeroTyping::Initial(animator),
            particles: ParticleField::empty(),
            mounted_at: None,
            trail,
            pointer: None,
            magnets,
            copy,
            modal: None,
            project_scroll: 0,
            overlay_area: None,
            toast: None,
            form: ContactForm::new(),
            focus: Focus::Page,
            client,
            input: InputHandler::for_page(),
            show_logs: false,
            should_quit: false,
            events_tx,
            last_tick: Instant::now(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Called once after the first frame is on screen
    pub fn mount(&mut self, now: Instant) {
        if self.mounted_at.is_some() {
            return;
        }
        self.mounted_at = Some(now);

        if let HeroTyping::Initial(animator) = &self.typing {
            self.typing = HeroTyping::Running(TypingDriver::spawn(animator.clone()));
        }
        if self.config.effects.particles {
            self.particles = ParticleField::generate(DEFAULT_PARTICLES, &mut rand::thread_rng());
        }
        tracing::debug!("Page mounted");
    }

    /// Frame tick: springs, filter transition, toast expiry
    pub fn tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        for magnet in self.magnets.values_mut() {
            magnet.hover.step(dt);
        }
        self.trail.step(dt);
        self.gallery.tick(now);

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        if breakpoint == self.breakpoint {
            return;
        }
        self.breakpoint = breakpoint;
        self.trail
            .set_enabled(self.config.effects.cursor_trail && !breakpoint.is_compact());
    }

    pub fn particles_elapsed(&self, now: Instant) -> std::time::Duration {
        self.mounted_at
            .map(|at| now.saturating_duration_since(at))
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────────────────────

    /// Screen bounds of a target for this frame (`None` when off screen)
    pub fn set_target_bounds(&mut self, target: Target, bounds: Option<Bounds>) {
        if let Some(magnet) = self.magnets.get_mut(&target) {
            magnet.bounds = bounds;
            if bounds.is_none() && magnet.hover.is_hovering() {
                magnet.hover.pointer_leave();
            }
        }
    }

    pub fn pointer_moved(&mut self, column: u16, row: u16, now: Instant) {
        let position = Vec2::new(column as f32, row as f32);
        self.pointer = Some(position);
        self.trail.pointer_move(position, now);

        // No pull while an overlay covers the page
        let covered = self.gallery.is_open() || self.modal.is_some();
        for magnet in self.magnets.values_mut() {
            match magnet.bounds {
                Some(bounds) if !covered => magnet.hover.track(position, bounds),
                _ if magnet.hover.is_hovering() => magnet.hover.pointer_leave(),
                _ => {}
            }
        }
    }

    /// Horizontal displacement of a target, whole cells
    pub fn pull(&self, target: Target) -> i16 {
        self.magnets
            .get(&target)
            .map(|m| m.hover.offset().x.clamp(-MAX_PULL_CELLS, MAX_PULL_CELLS).round() as i16)
            .unwrap_or(0)
    }

    pub fn is_hovering(&self, target: Target) -> bool {
        self.magnets
            .get(&target)
            .is_some_and(|m| m.hover.is_hovering())
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let point = Vec2::new(column as f32, row as f32);
        Target::ALL.into_iter().find(|target| {
            self.magnets
                .get(target)
                .and_then(|m| m.bounds)
                .is_some_and(|b| b.contains(point))
        })
    }

    pub fn click(&mut self, column: u16, row: u16) {
        if self.gallery.is_open() {
            // Backdrop click closes the project overlay
            let inside = self.overlay_area.is_some_and(|area| {
                column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
            });
            if !inside {
                self.close_project();
            }
            return;
        }
        if self.modal.is_some() {
            return;
        }
        if let Some(target) = self.target_at(column, row) {
            self.activate(target);
        }
    }

    pub fn activate(&mut self, target: Target) {
        match target {
            Target::ViewWork => self.jump_to("projects"),
            Target::GetInTouch => self.jump_to("contact"),
            Target::CopyEmail => self.copy(CopyTarget::Email),
            Target::CopyPhone => self.copy(CopyTarget::Phone),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Page scroll
    // ─────────────────────────────────────────────────────────────────────────

    pub fn scroll(&mut self, movement: ScrollMove) {
        if !self.scroll.apply(movement) {
            tracing::trace!("Scroll ignored while locked");
        }
    }

    /// Scroll a section to the top of the viewport
    pub fn jump_to(&mut self, section: &str) {
        let id = section.trim_start_matches('#');
        match self.anchors.get(id).copied() {
            Some(line) => self.scroll(ScrollMove::To(line)),
            None => tracing::debug!("No section named {}", id),
        }
    }

    /// Jump to the nth navigation entry (0-based)
    pub fn jump_to_nav(&mut self, index: usize) {
        if let Some(href) = self.content.navigation.get(index).map(|n| n.href.clone()) {
            self.jump_to(&href);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_filter(&mut self, now: Instant) {
        let next = self.gallery.filter().toggled();
        self.gallery.set_filter(next, now, self.breakpoint);
    }

    pub fn open_highlighted(&mut self) {
        match self.gallery.open_highlighted() {
            Ok(true) => self.project_scroll = 0,
            Ok(false) => {}
            Err(e) => tracing::warn!("Could not open project: {}", e),
        }
    }

    pub fn close_project(&mut self) {
        self.gallery.close_project();
        self.overlay_area = None;
        self.project_scroll = 0;
    }

    /// Escape goes to the gallery's listener first
    pub fn escape(&mut self) -> bool {
        let consumed = self.gallery.handle_key(crossterm::event::KeyCode::Esc);
        if consumed {
            self.overlay_area = None;
            self.project_scroll = 0;
        }
        consumed
    }

    /// Switch the open overlay to a neighbouring visible project
    pub fn step_project(&mut self, delta: isize) {
        let Some(current) = self.gallery.selected_project_id() else {
            return;
        };
        let visible = self.gallery.visible_projects();
        let Some(index) = visible.iter().position(|p| p.id == current) else {
            return;
        };
        let len = visible.len() as isize;
        let next = (index as isize + delta).rem_euclid(len) as usize;
        let id = visible[next].id.clone();
        if let Err(e) = self.gallery.open_project(&id) {
            tracing::warn!("Could not switch project: {}", e);
        }
        self.project_scroll = 0;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────────────────

    /// Text a copy button puts on the clipboard
    pub fn copy_text(&self, target: CopyTarget) -> Option<String> {
        let contact = &self.content.personal.contact;
        match target {
            CopyTarget::Email => Some(contact.email.clone()),
            CopyTarget::Phone => contact.phone.clone(),
            CopyTarget::Link => self
                .gallery
                .selected_project()
                .and_then(|p| p.buttons.first())
                .map(|b| b.url.clone()),
        }
    }

    /// Copy on the blocking pool; the result comes back as an AppEvent
    pub fn copy(&mut self, target: CopyTarget) {
        let Some(text) = self.copy_text(target) else {
            self.show_toast(format!("No {} to copy", target.label()));
            return;
        };
        let Some(service) = self.copy.get(&target).cloned() else {
            return;
        };
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            match service.copy_async(text).await {
                Some(resolution) => {
                    let _ = tx.send(AppEvent::CopyFinished(target, resolution));
                }
                None => tracing::debug!("Superseded {} copy dropped", target.label()),
            }
        });
    }

    pub fn is_copied(&self, target: CopyTarget, now: Instant) -> bool {
        self.copy.get(&target).is_some_and(|s| s.is_copied(now))
    }

    pub fn show_manual_copy(&mut self, text: String) {
        self.modal = Some(Modal::ManualCopy(text));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contact form
    // ─────────────────────────────────────────────────────────────────────────

    pub fn submit_form(&mut self, submission: ContactSubmission) {
        let Some(client) = self.client.clone() else {
            self.form
                .finish(Err("The contact form is unavailable right now.".to_string()));
            return;
        };
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.submit(&submission).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::FormFinished(result));
        });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Background results
    // ─────────────────────────────────────────────────────────────────────────

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CopyFinished(target, CopyResolution::Copied { tier }) => {
                tracing::debug!("Copied {} via {}", target.label(), tier);
                self.show_toast(format!("✓ Copied {} to clipboard", target.label()));
            }
            // The prompt channel opens the overlay
            AppEvent::CopyFinished(_, CopyResolution::ManualPrompt) => {}
            AppEvent::CopyFinished(_, CopyResolution::Logged) => {
                self.show_toast(COPY_UNAVAILABLE);
            }
            AppEvent::FormFinished(result) => {
                match &result {
                    Ok(_) => self.show_toast("✓ Message sent"),
                    Err(e) => tracing::warn!("Contact form failed: {}", e),
                }
                self.form.finish(result);
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn cycle_theme(&mut self) {
        let names = Theme::NAMES;
        let current = names.iter().position(|n| *n == self.theme.name).unwrap_or(0);
        self.theme = Theme::by_name(names[(current + 1) % names.len()]);
        self.show_toast(format!("Theme: {}", self.theme.name));
    }
}
