//! Key mapping from terminal events to editor actions.

use crate::types::EditorAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to editor actions.
///
/// Arrows and hjkl move the cursor; Shift+arrows (or HJKL) nudge the whole
/// glyph instead. File actions are lowercase letters; quitting is handled by
/// [`should_quit`], not here.
pub fn action_for_key(key: KeyEvent) -> Option<EditorAction> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        // Cursor movement / glyph nudges (shift variant).
        KeyCode::Left if shift => Some(EditorAction::NudgeLeft),
        KeyCode::Right if shift => Some(EditorAction::NudgeRight),
        KeyCode::Up if shift => Some(EditorAction::NudgeUp),
        KeyCode::Down if shift => Some(EditorAction::NudgeDown),
        KeyCode::Left | KeyCode::Char('h') => Some(EditorAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(EditorAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') => Some(EditorAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(EditorAction::CursorDown),
        KeyCode::Char('H') => Some(EditorAction::NudgeLeft),
        KeyCode::Char('L') => Some(EditorAction::NudgeRight),
        KeyCode::Char('K') => Some(EditorAction::NudgeUp),
        KeyCode::Char('J') => Some(EditorAction::NudgeDown),

        // Painting
        KeyCode::Char(' ') | KeyCode::Enter => Some(EditorAction::ToggleCell),
        KeyCode::Char('v') => Some(EditorAction::TogglePaint),

        // Character navigation
        KeyCode::Tab | KeyCode::Char(']') => Some(EditorAction::NextGlyph),
        KeyCode::BackTab | KeyCode::Char('[') => Some(EditorAction::PrevGlyph),

        // Glyph transforms
        KeyCode::Char('f') => Some(EditorAction::FlipHorizontal),
        KeyCode::Char('F') => Some(EditorAction::FlipVertical),
        KeyCode::Char('i') => Some(EditorAction::MirrorLeftToRight),
        KeyCode::Char('I') => Some(EditorAction::MirrorTopToBottom),

        // Clipboard
        KeyCode::Char('x') => Some(EditorAction::ClearGlyph),
        KeyCode::Char('y') => Some(EditorAction::CopyGlyph),
        KeyCode::Char('p') => Some(EditorAction::PasteGlyph),
        KeyCode::Char('m') => Some(EditorAction::MergeGlyph),

        // Files
        KeyCode::Char('w') => Some(EditorAction::Save),
        KeyCode::Char('e') => Some(EditorAction::ExportHeader),
        KeyCode::Char('r') => Some(EditorAction::Reload),

        _ => None,
    }
}

/// Check if a key should quit the editor.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || key.code == KeyCode::Esc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Left)),
            Some(EditorAction::CursorLeft)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(EditorAction::CursorLeft)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(EditorAction::CursorDown)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('k'))),
            Some(EditorAction::CursorUp)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('l'))),
            Some(EditorAction::CursorRight)
        );
    }

    #[test]
    fn test_shift_arrows_nudge() {
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT)),
            Some(EditorAction::NudgeLeft)
        );
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT)),
            Some(EditorAction::NudgeDown)
        );
        // Uppercase letters arrive with the SHIFT modifier set.
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT)),
            Some(EditorAction::NudgeUp)
        );
    }

    #[test]
    fn test_paint_keys() {
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(EditorAction::ToggleCell)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Enter)),
            Some(EditorAction::ToggleCell)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('v'))),
            Some(EditorAction::TogglePaint)
        );
    }

    #[test]
    fn test_glyph_navigation_keys() {
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Tab)),
            Some(EditorAction::NextGlyph)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::BackTab)),
            Some(EditorAction::PrevGlyph)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char(']'))),
            Some(EditorAction::NextGlyph)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('['))),
            Some(EditorAction::PrevGlyph)
        );
    }

    #[test]
    fn test_transform_and_file_keys() {
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('f'))),
            Some(EditorAction::FlipHorizontal)
        );
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT)),
            Some(EditorAction::FlipVertical)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(EditorAction::Save)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('e'))),
            Some(EditorAction::ExportHeader)
        );
        assert_eq!(action_for_key(KeyEvent::from(KeyCode::Char('?'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
