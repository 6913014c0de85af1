//! Frame drawing: prompt input, evaluation results and status bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Evaluation;
use crate::score::ScoreTier;
use crate::state::{Focus, ReviewState, SPINNER_FRAMES};

const VERSION_COLORS: [Color; 3] = [Color::Blue, Color::Green, Color::Magenta];
const BAR_WIDTH: usize = 30;

pub fn draw_ui(f: &mut Frame, state: &ReviewState) {
    // Input pane grows with the draft, up to five visible lines
    let input_height = state.input_line_count().min(5) as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // header
            Constraint::Length(input_height), // prompt input
            Constraint::Min(0),               // results
            Constraint::Length(1),            // status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0]);
    draw_input(f, chunks[1], state);
    draw_results(f, chunks[2], state);
    draw_status_bar(f, chunks[3], state);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("Prompt Reviewer v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Rgb(150, 200, 255)),
        ),
        Span::styled(
            "  8-dimension prompt evaluation",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_input(f: &mut Frame, area: Rect, state: &ReviewState) {
    let focused = state.focus == Focus::Input;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let (cursor_row, cursor_col) = state.cursor_line_col();
    // Scroll window so the cursor stays visible on long or tall drafts
    let vscroll = cursor_row.saturating_sub(inner_height.saturating_sub(1));
    let hscroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

    let input = Paragraph::new(state.input.as_str())
        .scroll((vscroll as u16, hscroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Prompt "),
        );
    f.render_widget(input, area);

    if focused {
        let x = area.x + 1 + (cursor_col - hscroll) as u16;
        let y = area.y + 1 + (cursor_row - vscroll) as u16;
        f.set_cursor(
            x.min(area.x + area.width.saturating_sub(2)),
            y.min(area.y + area.height.saturating_sub(2)),
        );
    }
}

fn draw_results(f: &mut Frame, area: Rect, state: &ReviewState) {
    let focused = state.focus == Focus::Results;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let width = area.width.saturating_sub(2) as usize;

    let lines = if state.is_loading {
        vec![
            Line::default(),
            Line::from(Span::styled(
                format!(
                    " {} Evaluating prompt…",
                    SPINNER_FRAMES[state.spinner_frame]
                ),
                Style::default().fg(Color::Cyan),
            )),
        ]
    } else if let Some(error) = &state.error {
        let mut lines = vec![Line::default()];
        lines.extend(wrap_styled(error, width, Style::default().fg(Color::Red), " "));
        lines
    } else if let Some(evaluation) = &state.evaluation {
        evaluation_lines(evaluation, state, width)
    } else {
        vec![
            Line::default(),
            Line::from(Span::styled(
                " Type a prompt above and press Enter to evaluate it.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let results = Paragraph::new(lines)
        .scroll((state.scroll_offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Evaluation "),
        );
    f.render_widget(results, area);
}

fn evaluation_lines(
    evaluation: &Evaluation,
    state: &ReviewState,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let text_style = Style::default().fg(Color::Gray);
    let heading = Style::default().add_modifier(Modifier::BOLD);

    // Overall score and rating badge
    let overall_tier = ScoreTier::classify(evaluation.total_score, evaluation.max_score);
    let badge_tier = ScoreTier::from_rating(&evaluation.rating);
    lines.push(Line::from(Span::styled("Overall Score".to_string(), heading)));
    lines.push(Line::from(vec![
        Span::styled(
            format!(
                "{}/{}",
                fmt_score(evaluation.total_score),
                fmt_score(evaluation.max_score)
            ),
            Style::default()
                .fg(overall_tier.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", evaluation.rating),
            Style::default().fg(Color::Black).bg(badge_tier.color()),
        ),
    ]));
    lines.push(Line::default());
    lines.extend(wrap_styled(&evaluation.overall_feedback, width, text_style, ""));

    // Priority improvements
    if !evaluation.priority_improvements.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Priority Improvements".to_string(),
            heading.fg(Color::Yellow),
        )));
        for improvement in &evaluation.priority_improvements {
            lines.extend(bullet_lines("•", improvement, width, Color::Yellow, text_style));
        }
    }

    // Dimension breakdown
    if !evaluation.dimensions.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Dimension Breakdown".to_string(),
            heading,
        )));
        for dimension in &evaluation.dimensions {
            let tier = ScoreTier::classify(dimension.score, dimension.max_score);
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(dimension.name.clone(), heading),
                Span::raw("  "),
                Span::styled(
                    format!(
                        "{}/{}",
                        fmt_score(dimension.score),
                        fmt_score(dimension.max_score)
                    ),
                    Style::default().fg(tier.color()).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(score_bar(dimension.score, dimension.max_score, tier));
            lines.extend(wrap_styled(&dimension.feedback, width, text_style, ""));
            for improvement in &dimension.improvements {
                lines.extend(bullet_lines("→", improvement, width, Color::Blue, text_style));
            }
        }
    }

    // Improved prompt samples
    if !evaluation.improved_prompts.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Improved Prompt Samples".to_string(),
            heading,
        )));
        for (index, sample) in evaluation.improved_prompts.iter().enumerate() {
            let color = VERSION_COLORS[index % VERSION_COLORS.len()];
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", sample.version),
                    Style::default().fg(Color::Black).bg(color),
                ),
                Span::raw("  "),
                if state.is_copied(index) {
                    Span::styled(
                        "Copied!".to_string(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(
                        format!("press {} to copy", index + 1),
                        Style::default().fg(Color::DarkGray),
                    )
                },
            ]));
            lines.extend(wrap_styled(&sample.explanation, width, text_style, ""));
            if !sample.improvements.is_empty() {
                lines.push(Line::from(Span::styled(
                    "Improvements Applied:".to_string(),
                    text_style.add_modifier(Modifier::BOLD),
                )));
                for improvement in &sample.improvements {
                    lines.extend(bullet_lines("✓", improvement, width, color, text_style));
                }
            }
            lines.extend(wrap_styled(
                &sample.prompt,
                width.saturating_sub(2),
                Style::default().fg(Color::White),
                "  ",
            ));
        }
    }

    lines
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &ReviewState) {
    let content = if let Some(note) = &state.status_note {
        Span::styled(format!(" {note}"), Style::default().fg(Color::Yellow))
    } else if state.is_loading {
        Span::styled(
            " Evaluating… resubmission disabled",
            Style::default().fg(Color::Cyan),
        )
    } else {
        let hints = match state.focus {
            Focus::Input => {
                " Enter evaluate · Alt+Enter newline · Tab results · Ctrl+U clear · Ctrl+C quit"
            }
            Focus::Results => " ↑/↓ scroll · 1-3 copy rewrite · Tab input · q quit",
        };
        Span::styled(hints, Style::default().fg(Color::DarkGray))
    };
    f.render_widget(Paragraph::new(Line::from(content)), area);
}

/// Proportional fill bar for one dimension.
fn score_bar(score: f64, max_score: f64, tier: ScoreTier) -> Line<'static> {
    let fraction = if max_score > 0.0 {
        (score / max_score).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(tier.color())),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn fmt_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn wrap_styled(text: &str, width: usize, style: Style, indent: &str) -> Vec<Line<'static>> {
    let width = width.saturating_sub(indent.len()).max(10);
    text.lines()
        .flat_map(|raw| {
            if raw.is_empty() {
                vec![Line::default()]
            } else {
                textwrap::wrap(raw, width)
                    .into_iter()
                    .map(|piece| {
                        Line::from(Span::styled(format!("{indent}{piece}"), style))
                    })
                    .collect()
            }
        })
        .collect()
}

fn bullet_lines(
    marker: &str,
    text: &str,
    width: usize,
    marker_color: Color,
    text_style: Style,
) -> Vec<Line<'static>> {
    let wrapped = wrap_styled(text, width.saturating_sub(2), text_style, "");
    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 {
                Span::styled(format!("{marker} "), Style::default().fg(marker_color))
            } else {
                Span::raw("  ")
            };
            let mut spans = vec![prefix];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}
