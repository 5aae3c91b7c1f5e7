//! Key mapping from terminal events to game commands.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key press the run loop must act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forward to the engine
    Action(GameAction),
    /// Ctrl-C: end the game as interrupted
    Interrupt,
}

/// Map keyboard input to a command.
///
/// Only presses count: releases, auto-repeats and unknown keys map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_interrupt(key) {
        return Some(KeyCommand::Interrupt);
    }

    let action = match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            GameAction::MoveCursor(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            GameAction::MoveCursor(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            GameAction::MoveCursor(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            GameAction::MoveCursor(Direction::Right)
        }

        // Selection
        KeyCode::Char(c @ '1'..='4') => GameAction::Select(c as u8 - b'0'),

        // Actions
        KeyCode::Char(' ') => GameAction::Place,
        KeyCode::Char('r') | KeyCode::Char('R') => GameAction::Dig,
        KeyCode::Char('p') | KeyCode::Char('P') => GameAction::Pause,
        KeyCode::Char('q') | KeyCode::Char('Q') => GameAction::Quit,

        _ => return None,
    };
    Some(KeyCommand::Action(action))
}

/// Check if key is the interrupt chord (Ctrl-C).
///
/// Raw mode swallows SIGINT, so the chord arrives as an ordinary key event.
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
