use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::{Difficulty, Theme};
use crate::game::GameState;

/// Read-only values the HUD shows alongside the session state.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    pub player_name: &'a str,
    pub difficulty: Difficulty,
    pub theme: &'a Theme,
    /// High score on record before the current run, used by the game-over
    /// dialog to decide whether to celebrate a new one.
    pub prior_high_score: u32,
}

/// Renders the two-line HUD below the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) {
    let [score_row, help_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let theme = info.theme;
    let score_line = Line::from(vec![
        Span::styled(
            format!("{}'s score: ", info.player_name),
            Style::default().fg(theme.hud_fg),
        ),
        Span::styled(
            state.score.to_string(),
            Style::default()
                .fg(theme.hud_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   high: {}", state.high_score),
            Style::default().fg(theme.hud_muted),
        ),
        Span::styled(
            format!("   len: {}", state.snake.len()),
            Style::default().fg(theme.hud_muted),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(score_line).alignment(Alignment::Left),
        score_row,
    );

    let help_line = Line::from(format!(
        "arrows/wasd move · p pause · r restart · t theme ({}) · q quit · {}",
        theme.name,
        info.difficulty.label(),
    ));
    frame.render_widget(
        Paragraph::new(help_line)
            .alignment(Alignment::Left)
            .style(Style::default().fg(theme.hud_muted)),
        help_row,
    );
}
