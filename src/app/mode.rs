/// Top-level screen of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Command deck: paste text or load a source
    Command,
    /// A reading session is active
    Reading,
    Quit,
}
