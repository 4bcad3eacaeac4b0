/// Application events produced by the command deck
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    /// Raw text typed or pasted into the deck
    ReadText(String),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}

/// Actions available while a reading session is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderAction {
    TogglePlay,
    Pause,
    SeekBack,
    SeekForward,
    SeekStart,
    SeekEnd,
    Restart,
    Faster,
    Slower,
    LargerChunk,
    SmallerChunk,
    CycleFontSize,
    CycleSpotColor,
    /// Leave the session and return to the command deck
    Stop,
}
