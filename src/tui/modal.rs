// Modal overlays
//
// Help and manual-copy overlays live in App::modal. The project detail
// overlay is owned by the gallery controller (it holds the scroll lock and
// the escape listener); its keys are mapped here too so all overlay input
// goes through ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing to do
    None,
    Close,
    ScrollUp,
    ScrollDown,
    /// Project overlay: switch to the previous/next visible project
    PrevProject,
    NextProject,
    /// Project overlay: copy the first button's URL
    CopyLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Every clipboard tier failed; show the text to copy by hand
    ManualCopy(String),
}

impl Modal {
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::ManualCopy(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Keyboard Shortcuts ",
            Modal::ManualCopy(_) => " Copy Manually ",
        }
    }

    /// Keys for the project overlay. Escape is not mapped: it is delivered to
    /// the gallery's escape listener instead.
    pub fn project_input(key: KeyCode) -> ModalAction {
        match key {
            KeyCode::Char('x') | KeyCode::Char('q') => ModalAction::Close,
            KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
            KeyCode::Left | KeyCode::Char('h') => ModalAction::PrevProject,
            KeyCode::Right | KeyCode::Char('l') => ModalAction::NextProject,
            KeyCode::Char('y') => ModalAction::CopyLink,
            _ => ModalAction::None,
        }
    }
}
