//! Playback scheduler: the RSVP state machine
//!
//! Owns the token stream, the cursor, the play flag and the advance timer of
//! one reading session. Nothing else writes to them; the UI only calls the
//! operations below and reads [`PlaybackSnapshot`]s back.
//!
//! Phases are derived from the session rather than stored:
//! - no session → `Idle`
//! - cursor at or past the end → `Finished`
//! - playing → `Playing`
//! - otherwise → `Ready`
//!
//! Every operation that stops motion cancels the timer, and every operation
//! that changes the pace while playing re-arms it, so two ticks can never be
//! pending at once.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::engine::config::{clamp_chunk_size, clamp_wpm, ReaderConfig};
use crate::engine::timer::TickTimer;
use crate::reading::{chunk_interval, resolve_pivot_with, PivotBands, PivotResult, TokenStream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Ready,
    Playing,
    Finished,
}

/// What a call to [`PlaybackScheduler::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session is active.
    Idle,
    /// Paused, or the next tick is not due yet.
    Waiting,
    /// The cursor moved forward and another tick is scheduled.
    Advanced,
    /// The cursor reached the end; playback stopped.
    Finished,
}

/// Cursor and pace of the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub cursor: usize,
    pub is_playing: bool,
    pub rate_wpm: u32,
    pub chunk_size: usize,
}

/// Everything the UI needs to draw one frame of playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub phase: PlaybackPhase,
    pub cursor: usize,
    pub chunk_size: usize,
    pub total: usize,
    pub rate_wpm: u32,
    pub is_playing: bool,
    pub chunk: String,
    pub pivot: PivotResult,
}

#[derive(Debug)]
struct Session {
    stream: TokenStream,
    cursor: usize,
    is_playing: bool,
}

impl Session {
    fn is_finished(&self) -> bool {
        self.cursor >= self.stream.len()
    }
}

#[derive(Debug)]
pub struct PlaybackScheduler {
    session: Option<Session>,
    rate_wpm: u32,
    chunk_size: usize,
    auto_play: bool,
    pivot_bands: PivotBands,
    timer: TickTimer,
}

impl PlaybackScheduler {
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            session: None,
            rate_wpm: clamp_wpm(config.rate_wpm),
            chunk_size: clamp_chunk_size(config.chunk_size),
            auto_play: config.auto_play,
            pivot_bands: config.pivot_bands.clone(),
            timer: TickTimer::new(),
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        match &self.session {
            None => PlaybackPhase::Idle,
            Some(session) if session.is_finished() => PlaybackPhase::Finished,
            Some(session) if session.is_playing => PlaybackPhase::Playing,
            Some(_) => PlaybackPhase::Ready,
        }
    }

    pub fn state(&self) -> Option<PlaybackState> {
        self.session.as_ref().map(|session| PlaybackState {
            cursor: session.cursor,
            is_playing: session.is_playing,
            rate_wpm: self.rate_wpm,
            chunk_size: self.chunk_size,
        })
    }

    pub fn is_playing(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_playing)
    }

    pub fn rate_wpm(&self) -> u32 {
        self.rate_wpm
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Length of the active token stream, zero when idle.
    pub fn total(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.stream.len())
    }

    pub fn stream(&self) -> Option<&TokenStream> {
        self.session.as_ref().map(|s| &s.stream)
    }

    /// Time between ticks at the current rate and chunk size.
    pub fn interval(&self) -> Duration {
        chunk_interval(self.rate_wpm, self.chunk_size)
    }

    /// How long the event loop may sleep before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    pub fn has_pending_tick(&self) -> bool {
        self.timer.is_armed()
    }

    /// The chunk at the cursor; empty once finished.
    pub fn current_chunk(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| s.stream.chunk(s.cursor, self.chunk_size))
    }

    pub fn snapshot(&self) -> Option<PlaybackSnapshot> {
        let session = self.session.as_ref()?;
        let chunk = session.stream.chunk(session.cursor, self.chunk_size);
        let pivot = resolve_pivot_with(&chunk, &self.pivot_bands);
        Some(PlaybackSnapshot {
            phase: self.phase(),
            cursor: session.cursor,
            chunk_size: self.chunk_size,
            total: session.stream.len(),
            rate_wpm: self.rate_wpm,
            is_playing: session.is_playing,
            chunk,
            pivot,
        })
    }

    /// Begins a new session at the first token.
    ///
    /// Returns `false` and leaves everything untouched for an empty stream.
    pub fn start(&mut self, stream: TokenStream, now: Instant) -> bool {
        if stream.is_empty() {
            debug!("start rejected: empty token stream");
            return false;
        }

        self.timer.cancel();
        debug!(tokens = stream.len(), auto_play = self.auto_play, "session started");
        self.session = Some(Session {
            stream,
            cursor: 0,
            is_playing: false,
        });

        if self.auto_play {
            self.set_playing(true, now);
        }
        true
    }

    /// Flips between Ready and Playing. Does nothing when finished or idle.
    pub fn toggle_play(&mut self, now: Instant) {
        let Some(session) = &self.session else {
            return;
        };
        if session.stream.is_empty() || session.is_finished() {
            return;
        }
        let playing = !session.is_playing;
        self.set_playing(playing, now);
    }

    /// Forces playback to stop without moving the cursor.
    pub fn pause(&mut self) {
        if let Some(session) = &mut self.session {
            if session.is_playing {
                debug!(cursor = session.cursor, "paused");
            }
            session.is_playing = false;
        }
        self.timer.cancel();
    }

    /// Fires the pending tick if it is due.
    pub fn poll(&mut self, now: Instant) -> TickOutcome {
        if self.session.is_none() {
            self.timer.cancel();
            return TickOutcome::Idle;
        }
        if !self.timer.fire_if_due(now) {
            return TickOutcome::Waiting;
        }
        self.tick(now)
    }

    fn tick(&mut self, now: Instant) -> TickOutcome {
        let chunk_size = self.chunk_size;
        let Some(session) = &mut self.session else {
            return TickOutcome::Idle;
        };
        if !session.is_playing || session.is_finished() {
            return TickOutcome::Waiting;
        }

        session.cursor += chunk_size;
        if session.is_finished() {
            session.is_playing = false;
            self.timer.cancel();
            debug!(cursor = session.cursor, "reached end of stream");
            return TickOutcome::Finished;
        }

        self.timer.arm(now, self.interval());
        TickOutcome::Advanced
    }

    /// Moves the cursor by `delta` tokens, clamped to the stream.
    ///
    /// Keeps the play state; while playing, the next tick is rescheduled a full
    /// interval from now.
    pub fn seek_by(&mut self, delta: isize, now: Instant) {
        let Some(session) = &mut self.session else {
            return;
        };
        let target = session.cursor.saturating_add_signed(delta);
        session.cursor = clamp_cursor(target, session.stream.len());
        let playing = session.is_playing;
        debug!(cursor = session.cursor, delta, "seek");

        if playing {
            self.timer.arm(now, self.interval());
        }
    }

    /// Jumps to `index` (clamped) and pauses.
    pub fn seek_to(&mut self, index: usize) {
        let Some(session) = &mut self.session else {
            return;
        };
        session.cursor = clamp_cursor(index, session.stream.len());
        session.is_playing = false;
        self.timer.cancel();
        debug!(cursor = session.cursor, "scrub");
    }

    /// Rewinds a finished session to the first token.
    pub fn restart(&mut self) {
        if self.phase() != PlaybackPhase::Finished {
            return;
        }
        if let Some(session) = &mut self.session {
            session.cursor = 0;
            session.is_playing = false;
            debug!("restarted");
        }
        self.timer.cancel();
    }

    /// Ends the session. Safe to call when already idle.
    pub fn stop(&mut self) {
        if self.session.take().is_some() {
            debug!("session stopped");
        }
        self.timer.cancel();
    }

    pub fn set_rate_wpm(&mut self, wpm: u32, now: Instant) {
        self.rate_wpm = clamp_wpm(wpm);
        self.reschedule(now);
    }

    pub fn adjust_wpm(&mut self, delta: i32, now: Instant) {
        let wpm = self.rate_wpm.saturating_add_signed(delta);
        self.set_rate_wpm(wpm, now);
    }

    pub fn set_chunk_size(&mut self, size: usize, now: Instant) {
        self.chunk_size = clamp_chunk_size(size);
        self.reschedule(now);
    }

    pub fn adjust_chunk_size(&mut self, delta: isize, now: Instant) {
        let size = self.chunk_size.saturating_add_signed(delta);
        self.set_chunk_size(size, now);
    }

    fn set_playing(&mut self, playing: bool, now: Instant) {
        let interval = self.interval();
        if let Some(session) = &mut self.session {
            session.is_playing = playing;
            debug!(cursor = session.cursor, playing, "play state changed");
        }
        if playing {
            self.timer.arm(now, interval);
        } else {
            self.timer.cancel();
        }
    }

    /// Re-arms a pending tick with the current interval.
    fn reschedule(&mut self, now: Instant) {
        debug!(
            rate_wpm = self.rate_wpm,
            chunk_size = self.chunk_size,
            "pace changed"
        );
        if self.is_playing() {
            self.timer.arm(now, self.interval());
        }
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
