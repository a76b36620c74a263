//! Array pane: one bar per element
//!
//! Bar height is the element's distance from the smallest element, scaled onto
//! `1..=BAR_SCALE`, which keeps negative values and the full `i64` range
//! drawable. The bar's label shows the real value. Each bar is colored by the
//! step's resolved highlight; elements outside the step's active window are
//! dimmed.

use crate::snapshot::{Highlight, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Height of the tallest bar before the chart fits it to the pane
const BAR_SCALE: u64 = 1_000;

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, is_playing: bool) {
    let border_style = if is_playing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(step) = step.filter(|s| !s.is_empty()) else {
        let paragraph = Paragraph::new("(nothing loaded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let min = step.array.iter().copied().min().unwrap_or(0);
    let span = step.array.iter().map(|v| v.abs_diff(min)).max().unwrap_or(0);
    let highlights = step.highlight_map();

    let bars: Vec<Bar> = step
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_color(step, index, highlights.get(&index).copied());
            Bar::default()
                .value(bar_height(value, min, span))
                .text_value(value.to_string())
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area.width, bars.len()))
        .bar_gap(1)
        .max(BAR_SCALE)
        .label_style(Style::default().fg(DEFAULT_THEME.comment));

    frame.render_widget(chart, area);
}

fn bar_color(step: &Step, index: usize, highlight: Option<Highlight>) -> Color {
    match highlight {
        Some(h) => DEFAULT_THEME.highlight(h),
        None => match step.bounds {
            Some(bounds) if !bounds.contains(index) => DEFAULT_THEME.out_of_range,
            _ => DEFAULT_THEME.bar,
        },
    }
}

/// `value`'s height given the array minimum and the widest distance from it
fn bar_height(value: i64, min: i64, span: u64) -> u64 {
    if span == 0 {
        return BAR_SCALE;
    }
    let scaled = u128::from(value.abs_diff(min)) * u128::from(BAR_SCALE - 1) / u128::from(span);
    scaled as u64 + 1
}

/// Widest bar that fits `count` bars and their gaps inside the borders
fn bar_width(area_width: u16, count: usize) -> u16 {
    let inner = area_width.saturating_sub(2) as usize;
    let per_bar = inner / count.max(1);
    per_bar.saturating_sub(1).clamp(1, 9) as u16
}
