// Configuration for the Readster engine and UI
// Out-of-range values are clamped to the nearest bound, never rejected

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::reading::PivotBands;

/// Allowed reading rates in words per minute.
pub const WPM_RANGE: RangeInclusive<u32> = 100..=1000;

/// Allowed tokens per chunk.
pub const CHUNK_SIZE_RANGE: RangeInclusive<usize> = 1..=5;

/// Text size of the chunk display. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Next size up, wrapping to the smallest.
    pub fn cycle(self) -> Self {
        match self {
            FontSize::Small => FontSize::Medium,
            FontSize::Medium => FontSize::Large,
            FontSize::Large => FontSize::Small,
        }
    }
}

impl FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontSize::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown font size: {s}"))
    }
}

/// Highlight colour of the pivot character. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpotColor {
    #[default]
    Red,
    Orange,
    Green,
    Blue,
    Purple,
}

impl SpotColor {
    pub const ALL: [SpotColor; 5] = [
        SpotColor::Red,
        SpotColor::Orange,
        SpotColor::Green,
        SpotColor::Blue,
        SpotColor::Purple,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SpotColor::Red => "red",
            SpotColor::Orange => "orange",
            SpotColor::Green => "green",
            SpotColor::Blue => "blue",
            SpotColor::Purple => "purple",
        }
    }

    pub fn cycle(self) -> Self {
        let index = SpotColor::ALL.iter().position(|&c| c == self).unwrap_or(0);
        SpotColor::ALL[(index + 1) % SpotColor::ALL.len()]
    }
}

impl FromStr for SpotColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpotColor::ALL
            .into_iter()
            .find(|color| color.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown spot color: {s}"))
    }
}

/// Which chrome to hide while playback is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub hide_top_while_playing: bool,
    pub hide_speed_while_playing: bool,
    pub hide_controls_while_playing: bool,
}

/// Reader configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Words per minute (default 300, clamped to `WPM_RANGE`)
    pub rate_wpm: u32,

    /// Tokens per chunk and per-tick cursor step (default 1, clamped to `CHUNK_SIZE_RANGE`)
    pub chunk_size: usize,

    pub font_size: FontSize,
    pub spot_color: SpotColor,
    pub visibility: Visibility,

    /// Enter Playing straight from `start` instead of waiting in Ready
    pub auto_play: bool,

    /// Tokens skipped by a relative seek (ArrowLeft/ArrowRight)
    pub seek_step: usize,

    /// WPM change per speed key press
    pub wpm_step: u32,

    pub pivot_bands: PivotBands,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            rate_wpm: 300,
            chunk_size: 1,
            font_size: FontSize::default(),
            spot_color: SpotColor::default(),
            visibility: Visibility::default(),
            auto_play: false,
            seek_step: 10,
            wpm_step: 25,
            pivot_bands: PivotBands::default(),
        }
    }
}

impl ReaderConfig {
    pub fn with_rate_wpm(mut self, wpm: u32) -> Self {
        self.rate_wpm = clamp_wpm(wpm);
        self
    }

    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = clamp_chunk_size(size);
        self
    }

    pub fn with_seek_step(mut self, step: usize) -> Self {
        self.seek_step = step.clamp(1, isize::MAX as usize);
        self
    }

    pub fn with_wpm_step(mut self, step: u32) -> Self {
        self.wpm_step = step.max(1);
        self
    }

    /// Re-applies every bound, for configs built field by field.
    pub fn clamped(self) -> Self {
        let rate_wpm = self.rate_wpm;
        let chunk_size = self.chunk_size;
        let seek_step = self.seek_step;
        let wpm_step = self.wpm_step;
        self.with_rate_wpm(rate_wpm)
            .with_chunk_size(chunk_size)
            .with_seek_step(seek_step)
            .with_wpm_step(wpm_step)
    }
}

pub fn clamp_wpm(wpm: u32) -> u32 {
    wpm.clamp(*WPM_RANGE.start(), *WPM_RANGE.end())
}

pub fn clamp_chunk_size(size: usize) -> usize {
    size.clamp(*CHUNK_SIZE_RANGE.start(), *CHUNK_SIZE_RANGE.end())
}
