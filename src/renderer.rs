use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    GLYPH_FRUIT, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GridSize, Theme,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
///
/// The wall ring occupies the border cells of the board rectangle, so the
/// block border *is* the wall: interior cell `(1, 1)` lands just inside it.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo<'_>) {
    let area = frame.area();
    let theme = info.theme;
    let board = board_area(area, state.bounds());

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_fruit(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    let hud_area = Rect {
        x: area.x,
        y: board.bottom(),
        width: area.width,
        height: area.bottom().saturating_sub(board.bottom()).min(2),
    };
    if hud_area.height == 2 {
        render_hud(frame, hud_area, state, info);
    }

    if state.is_start_screen() {
        render_start_menu(frame, board, state.high_score, theme);
        return;
    }

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, board, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            board,
            state.score,
            info.prior_high_score,
            state.death_reason,
            theme,
        ),
        GameStatus::Playing => {}
    }
}

fn render_fruit(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.fruit.position()) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FRUIT, Style::new().fg(theme.fruit));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn board_area(area: Rect, bounds: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: bounds.width.min(area.width),
        height: bounds.height.min(area.height.saturating_sub(2)),
    }
}

/// Maps an interior cell (`x, y >= 1`) to terminal coordinates inside the
/// bordered block. Wall-ring and out-of-view positions map to `None`, which
/// also hides the fruit's pre-spawn `(0, 0)` sentinel.
fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x.checked_sub(1)?).ok()?;
    let y_offset = u16::try_from(position.y.checked_sub(1)?).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
