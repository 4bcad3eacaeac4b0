use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::event::{AppEvent, ReaderAction};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{PlaybackPhase, PlaybackScheduler, ReaderConfig, TickOutcome};
use crate::input::{self, LoadError, LoadedText};
use crate::reading::TokenStream;
use crate::ui::command::{command_to_app_event, parse_command};

pub const HELP_TEXT: &str = "Paste text and press Enter to read it. \
@file loads a file, @@ loads the clipboard, :q quits. \
While reading: Space play/pause, ←/→ skip, Esc pause, q back.";

const FINISHED_STATUS: &str = "Finished. Press r to restart.";

pub struct App {
    mode: AppMode,
    config: ReaderConfig,
    scheduler: PlaybackScheduler,
    input: String,
    status: Option<String>,
    show_help: bool,
}

impl App {
    pub fn new(config: ReaderConfig) -> Self {
        let config = config.clamped();
        Self {
            mode: AppMode::Command,
            scheduler: PlaybackScheduler::new(&config),
            config,
            input: String::new(),
            status: None,
            show_help: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &PlaybackScheduler {
        &self.scheduler
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::LoadFile(path) => {
                let result = input::file::load_file(Path::new(&path));
                self.start_from(result, now);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.start_from(result, now);
            }
            AppEvent::ReadText(text) => {
                let result = LoadedText::new(text, "prompt");
                self.start_from(result, now);
            }
            AppEvent::Quit => self.quit(),
            AppEvent::Help => {
                self.show_help = !self.show_help;
            }
            AppEvent::InvalidCommand(command) => {
                if !command.is_empty() {
                    self.status = Some(format!("Unknown command: {command}"));
                }
            }
            AppEvent::None => {}
        }
    }

    /// Opens a reading session on `loaded`.
    ///
    /// Returns `false` (and stays on the deck) when the text has no words.
    pub fn start_reading(&mut self, loaded: LoadedText, now: Instant) -> bool {
        let stream = TokenStream::from_text(&loaded.text);
        if !self.scheduler.start(stream, now) {
            self.status = Some(format!("Nothing to read in {}", loaded.source));
            return false;
        }

        info!(
            source = %loaded.source,
            tokens = self.scheduler.total(),
            "reading session opened"
        );
        self.mode = AppMode::Reading;
        self.input.clear();
        self.show_help = false;
        self.status = Some(format!("Reading {}", loaded.source));
        true
    }

    fn start_from(&mut self, result: Result<LoadedText, LoadError>, now: Instant) {
        match result {
            Ok(loaded) => {
                self.start_reading(loaded, now);
            }
            Err(e) => {
                warn!(error = %e, "could not load text");
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn handle_action(&mut self, action: ReaderAction, now: Instant) {
        if self.mode != AppMode::Reading {
            return;
        }
        let seek_step = isize::try_from(self.config.seek_step).unwrap_or(isize::MAX);
        let wpm_step = i32::try_from(self.config.wpm_step).unwrap_or(i32::MAX);

        match action {
            ReaderAction::TogglePlay => self.scheduler.toggle_play(now),
            ReaderAction::Pause => self.scheduler.pause(),
            ReaderAction::SeekBack => self.scheduler.seek_by(-seek_step, now),
            ReaderAction::SeekForward => self.scheduler.seek_by(seek_step, now),
            ReaderAction::SeekStart => self.scheduler.seek_to(0),
            ReaderAction::SeekEnd => {
                let last = self.scheduler.total().saturating_sub(1);
                self.scheduler.seek_to(last);
            }
            ReaderAction::Restart => self.scheduler.restart(),
            ReaderAction::Faster => self.scheduler.adjust_wpm(wpm_step, now),
            ReaderAction::Slower => self.scheduler.adjust_wpm(-wpm_step, now),
            ReaderAction::LargerChunk => self.scheduler.adjust_chunk_size(1, now),
            ReaderAction::SmallerChunk => self.scheduler.adjust_chunk_size(-1, now),
            ReaderAction::CycleFontSize => {
                self.config.font_size = self.config.font_size.cycle();
            }
            ReaderAction::CycleSpotColor => {
                self.config.spot_color = self.config.spot_color.cycle();
            }
            ReaderAction::Stop => self.stop_reading(),
        }

        self.config.rate_wpm = self.scheduler.rate_wpm();
        self.config.chunk_size = self.scheduler.chunk_size();
        if self.scheduler.phase() != PlaybackPhase::Finished
            && self.status.as_deref() == Some(FINISHED_STATUS)
        {
            self.status = None;
        }
    }

    /// Closes the session and returns to the command deck.
    pub fn stop_reading(&mut self) {
        self.scheduler.stop();
        self.mode = AppMode::Command;
        self.status = None;
    }

    pub fn quit(&mut self) {
        self.scheduler.stop();
        self.mode = AppMode::Quit;
    }

    /// Advances playback if the pending tick is due.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let outcome = self.scheduler.poll(now);
        if outcome == TickOutcome::Finished {
            self.status = Some(FINISHED_STATUS.to_string());
        }
        outcome
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_tick(now)
    }

    pub fn push_char(&mut self, c: char) {
        if self.mode == AppMode::Command {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.mode == AppMode::Command {
            self.input.pop();
        }
    }

    /// Submits the command deck line.
    pub fn submit(&mut self, now: Instant) {
        if self.mode != AppMode::Command {
            return;
        }
        let line = std::mem::take(&mut self.input);
        let event = command_to_app_event(parse_command(&line));
        self.status = None;
        self.handle_event(event, now);
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            playback: self.scheduler.snapshot(),
            input: self.input.clone(),
            status: self.status.clone(),
            show_help: self.show_help,
            font_size: self.config.font_size,
            spot_color: self.config.spot_color,
            visibility: self.config.visibility,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.scheduler.phase()
    }
}
