//! Key mapping from terminal events to game actions.
//!
//! Letters are answer text while playing, so global hotkeys sit on function
//! keys (F9 pause, F11 sound, F12 learning mode) and quitting is Esc/Ctrl-C
//! only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, Screen};

/// Map a key press to a game action, given the screen it landed on.
pub fn map_key(screen: Screen, key: KeyEvent) -> Option<GameAction> {
    // Global toggles work on every screen.
    match key.code {
        KeyCode::F(9) => return Some(GameAction::PauseToggle),
        KeyCode::F(11) => return Some(GameAction::SoundToggle),
        KeyCode::F(12) => return Some(GameAction::LearningToggle),
        _ => {}
    }

    match screen {
        Screen::Menu => match key.code {
            KeyCode::Tab => Some(GameAction::NextField),
            KeyCode::Enter => Some(GameAction::StartNormal),
            KeyCode::F(2) => Some(GameAction::StartClear),
            KeyCode::Backspace => Some(GameAction::DeleteLast),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(GameAction::Insert(ch))
            }
            _ => None,
        },
        Screen::Playing => match key.code {
            KeyCode::Enter => Some(GameAction::Submit),
            KeyCode::Backspace => Some(GameAction::DeleteLast),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(GameAction::Insert(ch))
            }
            _ => None,
        },
        // Everything except the global toggles is swallowed while paused.
        Screen::Paused => None,
        Screen::GameOver => match key.code {
            KeyCode::Enter => Some(GameAction::Restart),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::MainMenu),
            _ => None,
        },
    }
}

/// Check if the key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_global_toggles_work_everywhere() {
        for screen in [
            Screen::Menu,
            Screen::Playing,
            Screen::Paused,
            Screen::GameOver,
        ] {
            assert_eq!(
                map_key(screen, KeyEvent::from(KeyCode::F(9))),
                Some(GameAction::PauseToggle)
            );
            assert_eq!(
                map_key(screen, KeyEvent::from(KeyCode::F(11))),
                Some(GameAction::SoundToggle)
            );
            assert_eq!(
                map_key(screen, KeyEvent::from(KeyCode::F(12))),
                Some(GameAction::LearningToggle)
            );
        }
    }

    #[test]
    fn test_playing_keys_edit_and_submit() {
        assert_eq!(
            map_key(Screen::Playing, KeyEvent::from(KeyCode::Char('x'))),
            Some(GameAction::Insert('x'))
        );
        assert_eq!(
            map_key(Screen::Playing, KeyEvent::from(KeyCode::Backspace)),
            Some(GameAction::DeleteLast)
        );
        assert_eq!(
            map_key(Screen::Playing, KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Submit)
        );
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            map_key(Screen::Menu, KeyEvent::from(KeyCode::Tab)),
            Some(GameAction::NextField)
        );
        assert_eq!(
            map_key(Screen::Menu, KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::StartNormal)
        );
        assert_eq!(
            map_key(Screen::Menu, KeyEvent::from(KeyCode::F(2))),
            Some(GameAction::StartClear)
        );
        assert_eq!(
            map_key(Screen::Menu, KeyEvent::from(KeyCode::Char('9'))),
            Some(GameAction::Insert('9'))
        );
    }

    #[test]
    fn test_game_over_keys() {
        assert_eq!(
            map_key(Screen::GameOver, KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Restart)
        );
        assert_eq!(
            map_key(Screen::GameOver, KeyEvent::from(KeyCode::Char('m'))),
            Some(GameAction::MainMenu)
        );
        assert_eq!(
            map_key(Screen::GameOver, KeyEvent::from(KeyCode::Char('M'))),
            Some(GameAction::MainMenu)
        );
        assert_eq!(
            map_key(Screen::GameOver, KeyEvent::from(KeyCode::Char('x'))),
            None
        );
    }

    #[test]
    fn test_paused_swallows_answer_text() {
        assert_eq!(
            map_key(Screen::Paused, KeyEvent::from(KeyCode::Char('x'))),
            None
        );
        assert_eq!(
            map_key(Screen::Paused, KeyEvent::from(KeyCode::Enter)),
            None
        );
    }

    #[test]
    fn test_control_chords_are_not_text() {
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(Screen::Playing, ctrl_x), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
