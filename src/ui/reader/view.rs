use crate::app::RenderState;
use crate::engine::{FontSize, PlaybackPhase, PlaybackSnapshot, SpotColor};
use crate::reading::PivotResult;
use crate::ui::theme::{colors, spot_color};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Column where a chunk must start so its pivot lands on `center_col`.
pub fn pivot_start_column(center_col: u16, left: &str) -> u16 {
    let prefix_width = UnicodeWidthStr::width(left) as u16;
    center_col.saturating_sub(prefix_width)
}

/// Left, pivot and right text as drawn for `font_size`.
///
/// Terminals can't scale glyphs, so the large size is approximated with
/// letter spacing.
pub fn display_segments(pivot: &PivotResult, font_size: FontSize) -> (String, String, String) {
    if font_size != FontSize::Large {
        return (
            pivot.left.clone(),
            pivot.pivot_char.clone(),
            pivot.right.clone(),
        );
    }

    let spaced = |s: &str| s.graphemes(true).collect::<Vec<_>>().join(" ");
    let left = if pivot.left.is_empty() {
        String::new()
    } else {
        format!("{} ", spaced(&pivot.left))
    };
    let right = if pivot.right.is_empty() {
        String::new()
    } else {
        format!(" {}", spaced(&pivot.right))
    };
    (left, pivot.pivot_char.clone(), right)
}

pub fn chunk_line(pivot: &PivotResult, font_size: FontSize, spot: SpotColor) -> Line<'static> {
    let (left, pivot_char, right) = display_segments(pivot, font_size);

    let mut text_style = Style::default().fg(colors::text());
    if font_size != FontSize::Small {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    let pivot_style = Style::default()
        .fg(spot_color(spot))
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(left, text_style),
        Span::styled(pivot_char, pivot_style),
        Span::styled(right, text_style),
    ])
}

/// Draws the chunk with its pivot pinned to the horizontal centre of `area`,
/// with fixation ticks above and below the pivot.
pub fn render_chunk(frame: &mut Frame, area: Rect, snapshot: &PlaybackSnapshot, state: &RenderState) {
    if area.height < 3 || area.width == 0 {
        return;
    }

    let center_col = area.x + area.width / 2;
    let center_row = area.y + area.height / 2;

    let (left, _, _) = display_segments(&snapshot.pivot, state.font_size);
    let start_col = pivot_start_column(center_col, &left).max(area.x);
    let line = chunk_line(&snapshot.pivot, state.font_size, state.spot_color);

    let tick_style = Style::default().fg(spot_color(state.spot_color));
    let buffer = frame.buffer_mut();
    buffer.set_line(start_col, center_row, &line, area.x + area.width - start_col);
    buffer.set_string(center_col, center_row - 1, "╷", tick_style);
    buffer.set_string(center_col, center_row + 1, "╵", tick_style);
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    let (current, total) = progress;
    let ratio = if total == 0 {
        0.0
    } else {
        current as f64 / total as f64
    };

    let filled_len = ((ratio * 20.0) as usize).min(20);
    let empty_len = 20 - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(colors::text())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ])
    .alignment(Alignment::Center)
}

/// "12 / 340" position, plus pace when speed display is visible.
pub fn render_top_bar(state: &RenderState) -> Paragraph<'static> {
    let (current, total) = state.progress();
    let mut spans = vec![
        Span::styled(format!("{current}"), Style::default().fg(colors::text())),
        Span::styled(" / ", Style::default().fg(colors::dimmed())),
        Span::styled(format!("{total}"), Style::default().fg(colors::text())),
    ];

    if let Some(playback) = state.playback.as_ref().filter(|_| state.show_speed()) {
        spans.push(Span::raw("    "));
        spans.push(Span::styled(
            format!("{}", playback.rate_wpm),
            Style::default().fg(colors::text()),
        ));
        spans.push(Span::styled(" WPM", Style::default().fg(colors::dimmed())));
        if playback.chunk_size > 1 {
            spans.push(Span::styled(
                format!("  ×{}", playback.chunk_size),
                Style::default().fg(colors::dimmed()),
            ));
        }
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

pub fn render_controls_hint(state: &RenderState) -> Paragraph<'static> {
    let phase = state.playback.as_ref().map(|p| p.phase);
    let text = match phase {
        Some(PlaybackPhase::Playing) => "Space to pause · ←/→ skip · q back",
        Some(PlaybackPhase::Finished) => "r to restart · ← to step back · q back",
        _ => "Space to play · ←/→ skip · +/- speed · [/] chunk · q back",
    };
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

pub fn render_finished() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("Finished", Style::default().fg(colors::text())),
        Span::styled("  ·  r to restart", Style::default().fg(colors::dimmed())),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(colors::background()))
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "Paste or type text and press Enter to start\n@file to load a file · @@ for the clipboard · :h help · :q quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}
