//! Readster: a Rapid Serial Visual Presentation (RSVP) reader.
//!
//! - [`reading`]: tokenizer, pivot (ORP) resolution and timing math
//! - [`engine`]: configuration and the playback state machine
//! - [`input`]: text sources (files, clipboard, relay inbox)
//! - [`app`] and [`ui`]: the terminal front end

pub mod app;
pub mod engine;
pub mod input;
pub mod logging;
pub mod reading;
pub mod ui;
