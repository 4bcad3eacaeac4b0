use crate::app::app::HELP_TEXT;
use crate::app::{AppMode, RenderState};
use crate::engine::PlaybackPhase;
use crate::ui::reader::view::{
    render_chunk, render_controls_hint, render_finished, render_placeholder, render_progress_bar,
    render_top_bar,
};
use crate::ui::theme::{colors, spot_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draws one full frame for `state`.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    match state.mode {
        AppMode::Reading => draw_reader(frame, area, state),
        AppMode::Command | AppMode::Quit => draw_command_deck(frame, area, state),
    }
}

fn draw_reader(frame: &mut Frame, area: Rect, state: &RenderState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    if state.show_top() {
        frame.render_widget(render_top_bar(state), rows[0]);
        frame.render_widget(render_progress_bar(state.progress()), rows[1]);
    }

    if let Some(playback) = &state.playback {
        if playback.phase == PlaybackPhase::Finished {
            let middle = centered_row(rows[2]);
            frame.render_widget(render_finished(), middle);
        } else {
            render_chunk(frame, rows[2], playback, state);
        }
    }

    if state.show_controls() {
        frame.render_widget(render_controls_hint(state), rows[3]);
    }
    if let Some(status) = &state.status {
        frame.render_widget(status_line(status), rows[4]);
    }
}

fn draw_command_deck(frame: &mut Frame, area: Rect, state: &RenderState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let body = if state.show_help {
        Paragraph::new(HELP_TEXT)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::text()).bg(colors::background()))
    } else {
        render_placeholder()
    };
    frame.render_widget(body, centered_row(rows[0]));

    if let Some(status) = &state.status {
        frame.render_widget(status_line(status), rows[1]);
    }

    let deck = rows[2];
    frame.render_widget(Clear, deck);
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(deck);

    let accent_bar = Paragraph::new("▌")
        .style(Style::default().fg(spot_color(state.spot_color)).bg(colors::surface()));
    frame.render_widget(accent_bar, layout[0]);

    let input = Paragraph::new(format!(" {}▏", state.input))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()));
    frame.render_widget(input, layout[1]);
}

fn status_line(status: &str) -> Paragraph<'_> {
    Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

/// The middle rows of `area`, tall enough for a two-line message.
fn centered_row(area: Rect) -> Rect {
    let height = area.height.min(2);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, AppEvent, ReaderAction};
    use crate::engine::ReaderConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let height = terminal.backend().buffer().area.height;
        (0..height)
            .map(|y| row_text(terminal, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_reader_pins_pivot_to_centre_column() {
        let mut app = App::new(ReaderConfig::default());
        app.handle_event(AppEvent::ReadText("reading".to_string()), Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let state = app.get_render_state();
        terminal.draw(|frame| draw(frame, &state)).unwrap();

        // chunk area spans rows 2..10, centre row 2 + 8 / 2 = 6
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(20, 6)].symbol(), "a");
        assert_eq!(buffer[(18, 6)].symbol(), "r");
        assert_eq!(buffer[(20, 5)].symbol(), "╷");
        assert_eq!(buffer[(20, 7)].symbol(), "╵");
    }

    #[test]
    fn test_reader_shows_position_and_speed() {
        let mut app = App::new(ReaderConfig::default());
        app.handle_event(AppEvent::ReadText("one two three".to_string()), Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        let state = app.get_render_state();
        terminal.draw(|frame| draw(frame, &state)).unwrap();

        let top = row_text(&terminal, 0);
        assert!(top.contains("1 / 3"), "top bar was {:?}", top);
        assert!(top.contains("300 WPM"));
    }

    #[test]
    fn test_finished_screen() {
        let now = Instant::now();
        let mut app = App::new(ReaderConfig::default());
        app.handle_event(AppEvent::ReadText("end".to_string()), now);
        app.handle_action(ReaderAction::TogglePlay, now);
        let due = now + app.scheduler().interval();
        app.tick(due);

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let state = app.get_render_state();
        terminal.draw(|frame| draw(frame, &state)).unwrap();
        assert!(screen_text(&terminal).contains("Finished"));
    }

    #[test]
    fn test_command_deck_echoes_input() {
        let mut app = App::new(ReaderConfig::default());
        for c in "@notes.txt".chars() {
            app.push_char(c);
        }
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let state = app.get_render_state();
        terminal.draw(|frame| draw(frame, &state)).unwrap();
        assert!(screen_text(&terminal).contains("@notes.txt"));
    }
}
