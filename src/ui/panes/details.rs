//! Step details pane: algorithm metadata, the current step, and a legend

use crate::algorithms::catalog::AlgorithmInfo;
use crate::snapshot::{Highlight, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the details pane
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    info: Option<&AlgorithmInfo>,
    step: Option<&Step>,
) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();

    if let Some(info) = info {
        lines.push(Line::from(Span::styled(
            info.name,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        lines.push(field("Time", info.complexity_summary()));
        lines.push(field("Space", info.space.to_string()));
        lines.push(field("Stable", if info.stable { "yes" } else { "no" }.to_string()));
        lines.push(Line::default());
    }

    if let Some(step) = step {
        lines.push(field("Step", format!("{:?}", step.kind)));
        lines.push(Line::from(Span::styled(
            step.message.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
        lines.push(Line::default());
        lines.push(field("Comparisons", step.comparisons.to_string()));
        lines.push(field("Swaps", step.swaps.to_string()));
        lines.push(field("Elapsed", format!("{:.3} ms", step.elapsed_ms)));
        if let Some(target) = step.target {
            lines.push(field("Target", target.to_string()));
        }
        if let Some(bounds) = step.bounds {
            lines.push(field("Window", format!("[{}, {}]", bounds.low, bounds.high)));
        }
        if let Some(index) = step.found_index {
            lines.push(field("Found at", index.to_string()));
        }
        lines.push(Line::default());
    }

    lines.push(legend());

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{name}: "),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Highlight names in priority order, each in its own color
fn legend() -> Line<'static> {
    let spans: Vec<Span> = Highlight::PRIORITY
        .into_iter()
        .flat_map(|h| {
            [
                Span::styled("■ ", Style::default().fg(DEFAULT_THEME.highlight(h))),
                Span::styled(
                    format!("{} ", h.label()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]
        })
        .collect();
    Line::from(spans)
}
