use crate::app::ReaderAction;
use crossterm::event::KeyCode;

/// Maps a key pressed in the reading view to its action.
pub fn reader_action(code: KeyCode) -> Option<ReaderAction> {
    let action = match code {
        KeyCode::Char(' ') => ReaderAction::TogglePlay,
        KeyCode::Esc => ReaderAction::Pause,
        KeyCode::Left => ReaderAction::SeekBack,
        KeyCode::Right => ReaderAction::SeekForward,
        KeyCode::Home => ReaderAction::SeekStart,
        KeyCode::End => ReaderAction::SeekEnd,
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => ReaderAction::Faster,
        KeyCode::Down | KeyCode::Char('-') => ReaderAction::Slower,
        KeyCode::Char(']') => ReaderAction::LargerChunk,
        KeyCode::Char('[') => ReaderAction::SmallerChunk,
        KeyCode::Char('r') => ReaderAction::Restart,
        KeyCode::Char('f') => ReaderAction::CycleFontSize,
        KeyCode::Char('c') => ReaderAction::CycleSpotColor,
        KeyCode::Char('q') | KeyCode::Backspace => ReaderAction::Stop,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_keyboard_contract() {
        assert_eq!(reader_action(KeyCode::Char(' ')), Some(ReaderAction::TogglePlay));
        assert_eq!(reader_action(KeyCode::Left), Some(ReaderAction::SeekBack));
        assert_eq!(reader_action(KeyCode::Right), Some(ReaderAction::SeekForward));
        assert_eq!(reader_action(KeyCode::Esc), Some(ReaderAction::Pause));
    }

    #[test]
    fn test_leaving_the_reader() {
        assert_eq!(reader_action(KeyCode::Char('q')), Some(ReaderAction::Stop));
        assert_eq!(reader_action(KeyCode::Backspace), Some(ReaderAction::Stop));
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(reader_action(KeyCode::Char('z')), None);
        assert_eq!(reader_action(KeyCode::Tab), None);
    }
}
