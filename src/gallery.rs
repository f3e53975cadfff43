//! Project gallery: filter, selection and the project modal
//!
//! Opening the modal takes a scroll lock and an Escape listener from the page.
//! Both are owned by the open `ModalSession`, so closing (button or Escape),
//! replacing the controller, or dropping it all release them exactly once.

use crate::content::Project;
use crate::page::{KeyListener, PageSurface, ScrollLock};
use crate::tui::layout::Breakpoint;
use crossterm::event::KeyCode;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// How long cards stay in their transition state after a filter change
pub const FILTER_SETTLE: Duration = Duration::from_millis(400);
pub const FILTER_SETTLE_COMPACT: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Featured => "Featured",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ProjectFilter::All => ProjectFilter::Featured,
            ProjectFilter::Featured => ProjectFilter::All,
        }
    }

    fn admits(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("no project with id {0:?}")]
    UnknownProject(String),
}

/// An open modal and the page resources it holds
#[derive(Debug)]
struct ModalSession {
    project_id: String,
    _scroll_lock: ScrollLock,
    escape: KeyListener,
}

pub struct GalleryController {
    catalog: Vec<Project>,
    page: PageSurface,
    filter: ProjectFilter,
    settle_at: Option<Instant>,
    modal: Option<ModalSession>,
    /// Highlighted card, index into `visible_projects()`
    cursor: usize,
}

impl GalleryController {
    pub fn new(catalog: Vec<Project>, page: PageSurface) -> Self {
        Self {
            catalog,
            page,
            filter: ProjectFilter::default(),
            settle_at: None,
            modal: None,
            cursor: 0,
        }
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn is_transitioning(&self) -> bool {
        self.settle_at.is_some()
    }

    /// Switch filters. Returns false (and does nothing) if already active.
    pub fn set_filter(&mut self, filter: ProjectFilter, now: Instant, viewport: Breakpoint) -> bool {
        if filter == self.filter {
            return false;
        }
        let settle = if viewport.is_compact() {
            FILTER_SETTLE_COMPACT
        } else {
            FILTER_SETTLE
        };
        self.filter = filter;
        self.settle_at = Some(now + settle);
        self.cursor = self.cursor.min(self.visible_count().saturating_sub(1));
        tracing::debug!("Gallery filter -> {:?}", filter);
        true
    }

    /// Clear the transition once its deadline passes. Returns true when it just did.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.settle_at {
            Some(deadline) if now >= deadline => {
                self.settle_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn catalog(&self) -> &[Project] {
        &self.catalog
    }

    /// Projects passing the filter, in catalog order
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.catalog
            .iter()
            .filter(|p| self.filter.admits(p))
            .collect()
    }

    fn visible_count(&self) -> usize {
        self.catalog.iter().filter(|p| self.filter.admits(p)).count()
    }

    /// "4 Projects", "1 Project • Featured"
    pub fn count_label(&self) -> String {
        let n = self.visible_count();
        let noun = if n == 1 { "Project" } else { "Projects" };
        match self.filter {
            ProjectFilter::All => format!("{n} {noun}"),
            ProjectFilter::Featured => format!("{n} {noun} • Featured"),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Card cursor
    // ─────────────────────────────────────────────────────────────────────────

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> Option<&Project> {
        self.visible_projects().get(self.cursor).copied()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, count as isize - 1) as usize;
    }

    /// Open the highlighted card. Returns false when the filter shows nothing.
    pub fn open_highlighted(&mut self) -> Result<bool, GalleryError> {
        let Some(id) = self.highlighted().map(|p| p.id.clone()) else {
            return Ok(false);
        };
        self.open_project(&id)?;
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Modal
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn selected_project_id(&self) -> Option<&str> {
        self.modal.as_ref().map(|m| m.project_id.as_str())
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected_project_id()?;
        self.catalog.iter().find(|p| p.id == id)
    }

    pub fn open_project(&mut self, id: &str) -> Result<(), GalleryError> {
        if !self.catalog.iter().any(|p| p.id == id) {
            return Err(GalleryError::UnknownProject(id.to_string()));
        }

        match &mut self.modal {
            // Already open: swap the project, keep the page tokens
            Some(session) => session.project_id = id.to_string(),
            None => {
                self.modal = Some(ModalSession {
                    project_id: id.to_string(),
                    _scroll_lock: self.page.lock_scroll(),
                    escape: self.page.listen(KeyCode::Esc),
                });
            }
        }
        tracing::debug!("Opened project {}", id);
        Ok(())
    }

    /// Close the modal; tokens are released as the session drops
    pub fn close_project(&mut self) -> bool {
        self.modal.take().is_some()
    }

    /// Route a key to the modal's Escape listener. Returns true if consumed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let fires = self
            .modal
            .as_ref()
            .is_some_and(|session| session.escape.matches(key));
        if fires {
            self.close_project();
        }
        fires
    }
}

impl Drop for GalleryController {
    fn drop(&mut self) {
        self.close_project();
    }
}
