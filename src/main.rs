//! Readster terminal RSVP reader.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use readster::app::App;
use readster::engine::{FontSize, ReaderConfig, SpotColor, Visibility};
use readster::input::{self, relay, LoadedText};
use readster::logging::{init_logging, LogFormat};
use readster::reading::PivotBands;
use readster::ui::TuiManager;

/// Read text one fixation at a time.
#[derive(Debug, Parser)]
#[command(name = "readster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to read, or `-` for standard input
    input: Option<PathBuf>,

    /// Reading rate in words per minute (100-1000)
    #[arg(short, long, default_value_t = 300)]
    wpm: u32,

    /// Words shown per fixation (1-5)
    #[arg(short, long, default_value_t = 1)]
    chunk_size: usize,

    /// Chunk text size: small, medium or large
    #[arg(long, default_value = "medium")]
    font_size: FontSize,

    /// Pivot highlight: red, orange, green, blue or purple
    #[arg(long, default_value = "red")]
    spot_color: SpotColor,

    /// Hide the position and progress bar while playing
    #[arg(long)]
    hide_top: bool,

    /// Hide the WPM readout while playing
    #[arg(long)]
    hide_speed: bool,

    /// Hide the key hints while playing
    #[arg(long)]
    hide_controls: bool,

    /// Start playing as soon as text is loaded
    #[arg(long)]
    auto_play: bool,

    /// Words skipped by the left/right arrow keys
    #[arg(long, default_value_t = 10)]
    seek_step: usize,

    /// Comma-separated word lengths at which the pivot moves one letter right
    #[arg(long, value_delimiter = ',', default_value = "2,6,10,14")]
    pivot_bands: Vec<usize>,

    /// Relay inbox to take a freshly handed-over selection from
    #[arg(long)]
    relay: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log format (json or text)
    #[arg(long, default_value = "text")]
    log_format: LogFormat,
}

impl Cli {
    fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            font_size: self.font_size,
            spot_color: self.spot_color,
            visibility: Visibility {
                hide_top_while_playing: self.hide_top,
                hide_speed_while_playing: self.hide_speed,
                hide_controls_while_playing: self.hide_controls,
            },
            auto_play: self.auto_play,
            pivot_bands: PivotBands::new(self.pivot_bands.clone()),
            ..ReaderConfig::default()
        }
        .with_rate_wpm(self.wpm)
        .with_chunk_size(self.chunk_size)
        .with_seek_step(self.seek_step)
    }
}

/// Text to open on launch: a fresh relay hand-off wins over the input argument.
fn initial_text(cli: &Cli) -> Result<Option<LoadedText>> {
    if let Some(inbox) = &cli.relay {
        match relay::take_pending(inbox, relay::now_ms()) {
            Ok(Some(loaded)) => return Ok(Some(loaded)),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "discarding relay payload"),
        }
    }

    let Some(path) = &cli.input else {
        return Ok(None);
    };
    let loaded = if path.as_path() == Path::new("-") {
        input::file::load_stdin().context("reading standard input")?
    } else {
        input::file::load_file(path).with_context(|| format!("loading {}", path.display()))?
    };
    Ok(Some(loaded))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_file) = &cli.log_file {
        init_logging(log_file, &cli.log_level, cli.log_format)
            .with_context(|| format!("opening log file {}", log_file.display()))?;
    }

    let config = cli.reader_config();
    info!(
        rate_wpm = config.rate_wpm,
        chunk_size = config.chunk_size,
        "starting readster"
    );

    let mut app = App::new(config);
    if let Some(loaded) = initial_text(&cli)? {
        app.start_reading(loaded, Instant::now());
    }

    let mut tui = TuiManager::new().context("initialising terminal")?;
    let result = tui.run_event_loop(&mut app);
    app.quit();
    drop(tui);

    result.context("terminal event loop failed")?;
    info!("exited cleanly");
    Ok(())
}
