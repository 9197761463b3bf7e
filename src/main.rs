use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use grid_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_POINTS_PER_FRUIT, Difficulty,
    FRAME_INTERVAL_MS, GridSize, Settings, THEMES, theme_index,
};
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::score::{load_high_score, save_high_score_if_beaten};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(name = "grid-snake", version, about = "Classic bounded-grid snake for the terminal")]
struct Cli {
    /// Grid width in cells, wall ring included.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells, wall ring included.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Player name shown in the HUD.
    #[arg(long)]
    name: Option<String>,

    /// Speed preset.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Score awarded per fruit.
    #[arg(long)]
    points_per_fruit: Option<u32>,

    /// Starting color theme.
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Warning: ignoring settings file: {error}");
            Settings::default()
        }
    };

    let player_name = cli
        .name
        .or(settings.player_name)
        .unwrap_or_else(|| "Player".to_owned());
    let difficulty = cli.difficulty.or(settings.difficulty).unwrap_or_default();
    let points_per_fruit = cli
        .points_per_fruit
        .or(settings.points_per_fruit)
        .unwrap_or(DEFAULT_POINTS_PER_FRUIT);
    let mut theme_idx = cli
        .theme
        .as_deref()
        .or(settings.theme.as_deref())
        .and_then(theme_index)
        .unwrap_or(0);

    let bounds = GridSize {
        width: cli.width,
        height: cli.height,
    };
    let mut state = GameState::new(bounds, points_per_fruit)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    // Hold on the start screen until the player confirms.
    state.status = GameStatus::Paused;

    let persisted_high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Warning: could not read high score: {error}");
            0
        }
    };
    state.high_score = persisted_high_score;

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    let tick_interval = difficulty.tick_interval();
    let mut last_tick = Instant::now();
    let mut last_status = state.status;
    let mut saved_high_score = persisted_high_score;
    let mut run_start_high_score = persisted_high_score;
    let mut save_warning = None;

    'game: loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                &state,
                &HudInfo {
                    player_name: &player_name,
                    difficulty,
                    theme: &THEMES[theme_idx],
                    prior_high_score: run_start_high_score,
                },
            );
        })?;

        // Drain everything queued since the previous frame; the reversal
        // rule in Snake makes the last valid direction win.
        while let Some(event) = input.poll_input()? {
            if !handle_input(
                &mut state,
                event,
                &mut theme_idx,
                &mut run_start_high_score,
            ) {
                break 'game;
            }
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }

        if state.status != last_status {
            if state.status == GameStatus::GameOver {
                match save_high_score_if_beaten(state.high_score, saved_high_score) {
                    Ok(persisted) => {
                        saved_high_score = persisted;
                        save_warning = None;
                    }
                    Err(error) => save_warning = Some(error),
                }
            }
            last_status = state.status;
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }

    drop(session);

    // A record beaten mid-run is persisted even when the player quits
    // before the session ends.
    match save_high_score_if_beaten(state.high_score, saved_high_score) {
        Ok(_) => save_warning = None,
        Err(error) => save_warning = Some(error),
    }

    if let Some(error) = save_warning {
        eprintln!("Warning: failed to save high score: {error}");
    }
    println!(
        "{player_name}'s final score: {} (best: {})",
        state.score, state.high_score
    );
    Ok(())
}

/// Applies one decoded input to the loop-owned state. Returns `false` when
/// the player asked to quit.
fn handle_input(
    state: &mut GameState,
    event: GameInput,
    theme_idx: &mut usize,
    run_start_high_score: &mut u32,
) -> bool {
    match event {
        GameInput::Quit => return false,
        GameInput::CycleTheme => *theme_idx = (*theme_idx + 1) % THEMES.len(),
        GameInput::Confirm if state.is_start_screen() => {
            state.status = GameStatus::Playing;
        }
        GameInput::Confirm if state.status == GameStatus::GameOver => {
            *run_start_high_score = state.high_score;
            state.reset();
        }
        GameInput::Restart => {
            *run_start_high_score = state.high_score;
            state.reset();
        }
        // The start menu advertises Enter/Space only; Esc must not start
        // a run by toggling the pause state.
        GameInput::Pause if state.is_start_screen() => {}
        other => state.apply_input(other),
    }
    true
}
