use crate::app::mode::AppMode;
use crate::engine::{FontSize, PlaybackSnapshot, SpotColor, Visibility};

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    /// Present only while a session is open
    pub playback: Option<PlaybackSnapshot>,
    /// Current contents of the command deck
    pub input: String,
    pub status: Option<String>,
    pub show_help: bool,
    pub font_size: FontSize,
    pub spot_color: SpotColor,
    pub visibility: Visibility,
}

impl RenderState {
    /// Whether the progress/top bar is drawn this frame.
    pub fn show_top(&self) -> bool {
        !(self.is_playing() && self.visibility.hide_top_while_playing)
    }

    pub fn show_speed(&self) -> bool {
        !(self.is_playing() && self.visibility.hide_speed_while_playing)
    }

    pub fn show_controls(&self) -> bool {
        !(self.is_playing() && self.visibility.hide_controls_while_playing)
    }

    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(|p| p.is_playing)
    }

    /// 1-based position and total, as shown in the top bar.
    pub fn progress(&self) -> (usize, usize) {
        match &self.playback {
            Some(p) => ((p.cursor + 1).min(p.total), p.total),
            None => (0, 0),
        }
    }
}
