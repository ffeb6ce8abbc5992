//! Keyboard event handling.
//!
//! Keys in normal mode:
//! - `h`/`l` or arrows: move the codon cursor
//! - `0` or `Home`: first codon, `$` or `End`: last codon
//! - `f`: next reading frame
//! - `s`: switch strand
//! - `Space`: play/pause the translation walk
//! - `r`: reset the walk
//! - `+`/`-`: faster/slower walk
//! - `t`: one-letter/three-letter protein
//! - `:`: enter command mode
//!   - `:q` or `:quit`: quit the application
//!   - `:<number>`: go to codon

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::model::{AppMode, AppState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Move cursor one codon left
    MoveLeft,
    /// Move cursor one codon right
    MoveRight,
    /// Go to first codon (0 or Home)
    GotoFirstCodon,
    /// Go to last codon ($ or End)
    GotoLastCodon,
    /// Select the next reading frame
    CycleFrame,
    /// Switch between forward and reverse strand
    ToggleStrand,
    /// Play or pause the translation walk
    TogglePlayback,
    /// Stop and rewind the translation walk
    ResetPlayback,
    /// Shorter step interval
    SpeedUp,
    /// Longer step interval
    SlowDown,
    /// Switch one-letter/three-letter protein display
    ToggleThreeLetter,
    /// Enter command mode
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    /// Execute current command
    ExecuteCommand,
    /// Cancel command mode
    CancelCommand,
    /// Backspace in command mode
    CommandBackspace,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, mode),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode) -> Action {
    match mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Command(_) => handle_command_mode(key),
    }
}

/// Handles key events in normal mode.
fn handle_normal_mode(key: KeyEvent) -> Action {
    // Handle Ctrl+C for emergency quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('h') | KeyCode::Left => Action::MoveLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::MoveRight,
        KeyCode::Char('0') | KeyCode::Home => Action::GotoFirstCodon,
        KeyCode::Char('$') | KeyCode::End => Action::GotoLastCodon,

        KeyCode::Char('f') => Action::CycleFrame,
        KeyCode::Char('s') => Action::ToggleStrand,
        KeyCode::Char(' ') => Action::TogglePlayback,
        KeyCode::Char('r') => Action::ResetPlayback,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::SpeedUp,
        KeyCode::Char('-') => Action::SlowDown,
        KeyCode::Char('t') => Action::ToggleThreeLetter,

        KeyCode::Char(':') => Action::EnterCommandMode,

        _ => Action::None,
    }
}

/// Handles key events in command mode.
fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action, now: Instant) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::MoveLeft => {
            state.move_left();
        }
        Action::MoveRight => {
            state.move_right();
        }
        Action::GotoFirstCodon => {
            state.goto_first_codon();
        }
        Action::GotoLastCodon => {
            state.goto_last_codon();
        }
        Action::CycleFrame => {
            state.cycle_frame();
        }
        Action::ToggleStrand => {
            state.toggle_strand();
        }
        Action::TogglePlayback => {
            state.toggle_playback(now);
        }
        Action::ResetPlayback => {
            state.reset_playback();
        }
        Action::SpeedUp => {
            state.speed_up();
        }
        Action::SlowDown => {
            state.slow_down();
        }
        Action::ToggleThreeLetter => {
            state.toggle_three_letter();
        }
        Action::EnterCommandMode => {
            state.enter_command_mode();
        }
        Action::CommandChar(c) => {
            state.command_input(c);
        }
        Action::ExecuteCommand => {
            state.execute_command();
        }
        Action::CancelCommand => {
            state.cancel_command();
        }
        Action::CommandBackspace => {
            state.command_backspace();
        }
        Action::Resize(_, _) => {
            // Resize is handled in the main loop with actual terminal dimensions
        }
    }

    !state.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SequenceType;
    use crate::codon::{Frame, Strand};
    use crate::model::ViewSettings;
    use crate::sanitize::sanitize;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_navigation() {
        let mode = AppMode::Normal;
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &mode), Action::MoveLeft);
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &mode), Action::MoveRight);
        assert_eq!(handle_key_event(key(KeyCode::Left), &mode), Action::MoveLeft);
        assert_eq!(handle_key_event(key(KeyCode::End), &mode), Action::GotoLastCodon);
        assert_eq!(handle_key_event(key(KeyCode::Char('0')), &mode), Action::GotoFirstCodon);
    }

    #[test]
    fn test_translation_controls() {
        let mode = AppMode::Normal;
        assert_eq!(handle_key_event(key(KeyCode::Char('f')), &mode), Action::CycleFrame);
        assert_eq!(handle_key_event(key(KeyCode::Char('s')), &mode), Action::ToggleStrand);
        assert_eq!(handle_key_event(key(KeyCode::Char(' ')), &mode), Action::TogglePlayback);
        assert_eq!(handle_key_event(key(KeyCode::Char('r')), &mode), Action::ResetPlayback);
        assert_eq!(handle_key_event(key(KeyCode::Char('+')), &mode), Action::SpeedUp);
        assert_eq!(handle_key_event(key(KeyCode::Char('-')), &mode), Action::SlowDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &mode), Action::ToggleThreeLetter);
    }

    #[test]
    fn test_command_mode_input() {
        let mode = AppMode::Command(String::new());
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mode), Action::CommandChar('q'));
        assert_eq!(handle_key_event(key(KeyCode::Char('f')), &mode), Action::CommandChar('f'));
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode), Action::ExecuteCommand);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode), Action::CancelCommand);
        assert_eq!(handle_key_event(key(KeyCode::Backspace), &mode), Action::CommandBackspace);
    }

    #[test]
    fn test_ctrl_c_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key, &AppMode::Normal), Action::Quit);
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(handle_event(Event::Resize(80, 24), &AppMode::Normal), Action::Resize(80, 24));
    }

    #[test]
    fn test_apply_actions() {
        let mut state = AppState::new(
            "test",
            sanitize("CATGAAATAG"),
            SequenceType::Nucleotide,
            None,
            ViewSettings::default(),
        );
        let now = Instant::now();

        assert!(apply_action(&mut state, Action::CycleFrame, now));
        assert_eq!(state.view.frame, Frame::One);
        assert!(apply_action(&mut state, Action::ToggleStrand, now));
        assert_eq!(state.view.strand, Strand::Reverse);
        assert!(apply_action(&mut state, Action::ToggleThreeLetter, now));
        assert!(state.three_letter);
        assert!(!apply_action(&mut state, Action::Quit, now));
    }
}
