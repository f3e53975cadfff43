// TUI module - Terminal User Interface
//
// This module manages the terminal page using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, animation ticks)
// - Rendering the page
// - Receiving results from background copy and form tasks

pub mod app;
pub mod components;
pub mod form;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::content::Portfolio;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, AppEvent, CopyTarget, Focus};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use form::FormAction;
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use scroll::ScrollMove;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// ~30 FPS keeps the caret blink and springs smooth
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done (also when the loop fails).
pub async fn run_tui(config: Config, content: Arc<Portfolio>, log_buffer: LogBuffer) -> Result<()> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (prompt_tx, mut prompt_rx) = mpsc::unbounded_channel::<String>();
    let mut app = App::new(config, content, log_buffer, events_tx, prompt_tx)?;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut events_rx, &mut prompt_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input, the frame ticker, and the two background
/// channels (copy/form results and manual-copy prompts), redrawing after
/// each wake-up.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    prompt_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(FRAME_INTERVAL);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        // Animations start once the first frame is up
        app.mount(Instant::now());

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }

            Some(event) = events_rx.recv() => {
                app.handle_app_event(event);
            }

            Some(text) = prompt_rx.recv() => {
                app.show_manual_copy(text);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Overlay → Form → Page
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Always process Release events to keep InputHandler in sync
    if key_event.kind == KeyEventKind::Release {
        app.input.release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_overlay_input(app, &key_event) {
        return;
    }

    if app.focus == Focus::Form {
        match app.form.handle_key(key_event) {
            FormAction::None => {}
            FormAction::Leave => {
                app.focus = Focus::Page;
                app.input.reset();
            }
            FormAction::Submit(submission) => app.submit_form(submission),
        }
        return;
    }

    handle_page_keys(app, key_event.code);
}

/// Overlays absorb all input while open - returns true if one did
fn handle_overlay_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if let Some(ref mut modal) = app.modal {
        if modal.handle_input(key_event.code) == ModalAction::Close {
            app.modal = None;
            app.input.reset();
        }
        return true;
    }

    if !app.gallery.is_open() {
        return false;
    }

    // Escape belongs to the gallery's listener
    if key_event.code == KeyCode::Esc {
        app.escape();
        return true;
    }

    match Modal::project_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.close_project(),
        ModalAction::ScrollUp => app.project_scroll = app.project_scroll.saturating_sub(1),
        ModalAction::ScrollDown => app.project_scroll = app.project_scroll.saturating_add(1),
        ModalAction::PrevProject => app.step_project(-1),
        ModalAction::NextProject => app.step_project(1),
        ModalAction::CopyLink => app.copy(CopyTarget::Link),
    }
    true
}

fn handle_page_keys(app: &mut App, key: KeyCode) {
    // Debounce / hold-to-repeat
    if !app.input.press(key) {
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(Modal::Help),

        KeyCode::Up | KeyCode::Char('k') => app.scroll(ScrollMove::Up),
        KeyCode::Down | KeyCode::Char('j') => app.scroll(ScrollMove::Down),
        KeyCode::PageUp => app.scroll(ScrollMove::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll(ScrollMove::PageDown),
        KeyCode::Home | KeyCode::Char('g') => app.scroll(ScrollMove::Top),
        KeyCode::End | KeyCode::Char('G') => app.scroll(ScrollMove::Bottom),
        KeyCode::Char(c @ '1'..='9') => app.jump_to_nav(c as usize - '1' as usize),

        KeyCode::Left | KeyCode::Char('h') => app.gallery.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.gallery.move_cursor(1),
        KeyCode::Enter => app.open_highlighted(),
        KeyCode::Char('f') => app.toggle_filter(Instant::now()),
        KeyCode::Esc => {
            app.escape();
        }

        KeyCode::Char('c') => app.copy(CopyTarget::Email),
        KeyCode::Char('p') => app.copy(CopyTarget::Phone),
        KeyCode::Char('i') => {
            app.focus = Focus::Form;
            app.input.reset();
            app.jump_to("contact");
        }

        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('L') => app.show_logs = !app.show_logs,
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let overlay = app.modal.is_some() || app.gallery.is_open();
    match mouse_event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer_moved(mouse_event.column, mouse_event.row, Instant::now());
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollUp if overlay => {
            app.project_scroll = app.project_scroll.saturating_sub(1);
        }
        MouseEventKind::ScrollDown if overlay => {
            app.project_scroll = app.project_scroll.saturating_add(1);
        }
        MouseEventKind::ScrollUp => app.scroll(ScrollMove::Up),
        MouseEventKind::ScrollDown => app.scroll(ScrollMove::Down),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let (events_tx, _) = mpsc::unbounded_channel();
        let (prompt_tx, _) = mpsc::unbounded_channel();
        App::new(
            Config::default(),
            Arc::new(Portfolio::bundled().unwrap()),
            LogBuffer::new(),
            events_tx,
            prompt_tx,
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        let mut release = KeyEvent::new(code, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(app, release);
    }

    #[tokio::test]
    async fn test_help_overlay_absorbs_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.name, "Folio Dark");

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[tokio::test]
    async fn test_form_focus_captures_letters() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.focus, Focus::Form);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.form.value(form::FormField::Name), "q");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Page);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_escape_closes_project_and_unlocks_scroll() {
        let mut app = app();
        app.open_highlighted();
        assert!(app.gallery.is_open());
        assert!(app.page.is_scroll_locked());

        press(&mut app, KeyCode::Esc);
        assert!(!app.gallery.is_open());
        assert!(!app.page.is_scroll_locked());
    }
}
