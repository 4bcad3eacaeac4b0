use readster::app::{App, AppEvent, AppMode, ReaderAction};
use readster::engine::{PlaybackPhase, PlaybackScheduler, ReaderConfig, TickOutcome};
use readster::input::file::load_file;
use readster::input::relay::{self, RelayPayload};
use readster::reading::{collapse_whitespace, resolve_pivot, TokenStream};
use std::fs::{self, File};
use std::io::Write;
use std::time::{Duration, Instant};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("readster_it_{}_{}", std::process::id(), name))
}

#[test]
fn end_to_end_reading() {
    let test_file = temp_path("e2e.txt");
    let content = "Hello   world!\nThis is a test of the RSVP reader.";

    let mut file = File::create(&test_file).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let loaded = load_file(&test_file).expect("Should load file successfully");
    let stream = TokenStream::from_text(&loaded.text);
    assert_eq!(stream.len(), 10);
    assert_eq!(stream.chunk(0, stream.len()), collapse_whitespace(content));

    let config = ReaderConfig::default().with_rate_wpm(600);
    let mut scheduler = PlaybackScheduler::new(&config);
    let mut now = Instant::now();
    assert!(scheduler.start(stream, now));
    scheduler.toggle_play(now);

    let mut seen = vec![scheduler.snapshot().unwrap().chunk];
    while let Some(wait) = scheduler.time_until_tick(now) {
        now += wait;
        if scheduler.poll(now) == TickOutcome::Advanced {
            seen.push(scheduler.snapshot().unwrap().chunk);
        }
    }
    assert_eq!(seen.len(), 10);
    assert_eq!(seen[0], "Hello");
    assert_eq!(seen[9], "reader.");
    assert_eq!(scheduler.phase(), PlaybackPhase::Finished);

    fs::remove_file(&test_file).unwrap();
}

#[test]
fn relay_hand_off_opens_session() {
    let inbox = temp_path("relay.json");
    let now_ms = relay::now_ms();
    relay::write_pending(&inbox, &RelayPayload::new("selected text from a page", now_ms)).unwrap();

    let loaded = relay::take_pending(&inbox, now_ms + 1_000).unwrap().unwrap();
    let mut app = App::new(ReaderConfig::default());
    assert!(app.start_reading(loaded, Instant::now()));
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.scheduler().total(), 5);

    // a reload must not replay the same hand-off
    assert!(relay::take_pending(&inbox, now_ms + 2_000).unwrap().is_none());
}

#[test]
fn chunked_session_with_pivots() {
    let now = Instant::now();
    let config = ReaderConfig::default().with_chunk_size(2);
    let mut app = App::new(config);
    app.handle_event(AppEvent::ReadText("a b c d e".to_string()), now);
    app.handle_action(ReaderAction::TogglePlay, now);

    let mut t = now;
    let mut chunks = Vec::new();
    loop {
        let snapshot = app.get_render_state().playback.unwrap();
        if snapshot.phase == PlaybackPhase::Finished {
            break;
        }
        assert_eq!(snapshot.pivot, resolve_pivot(&snapshot.chunk));
        assert_ne!(snapshot.pivot.pivot_char, " ");
        chunks.push(snapshot.chunk);
        t += app.scheduler().interval();
        app.tick(t);
    }
    assert_eq!(chunks, vec!["a b", "c d", "e"]);
}

#[test]
fn leaving_the_reader_cancels_pending_tick() {
    let now = Instant::now();
    let mut app = App::new(ReaderConfig {
        auto_play: true,
        ..ReaderConfig::default()
    });
    app.handle_event(AppEvent::ReadText("one two three".to_string()), now);
    assert_eq!(app.scheduler().phase(), PlaybackPhase::Playing);

    app.handle_action(ReaderAction::Stop, now);
    assert_eq!(app.time_until_tick(now), None);
    assert_eq!(app.tick(now + Duration::from_secs(10)), TickOutcome::Idle);
    assert_eq!(app.mode(), AppMode::Command);
}
