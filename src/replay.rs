//! Non-interactive replay of a move sequence.

use anyhow::{Context, Result};
use rewind_tictactoe::{Cell, DisplayOrder, GameHistory, GameView, Position};
use tracing::{info, instrument};

/// A scripted game: moves to apply, then an optional jump.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplayScript {
    /// Cells to play, as indices or labels.
    pub moves: Vec<String>,
    /// Step to jump to afterwards.
    pub jump: Option<usize>,
    /// Order of the printed move list.
    pub order: DisplayOrder,
}

/// Runs a script and returns the resulting view.
///
/// Unlike interactive play, an illegal move or jump is an error here:
/// a script that does not apply as written is reported, not skipped.
#[instrument(skip(script), fields(moves = script.moves.len()))]
pub fn run_script(script: &ReplayScript) -> Result<GameView> {
    let mut history = GameHistory::with_order(script.order);

    for (n, raw) in script.moves.iter().enumerate() {
        let position = Position::from_label_or_number(raw)
            .with_context(|| format!("Move {}: unrecognized cell '{}'", n + 1, raw))?;
        history
            .try_apply_move(position.to_index())
            .with_context(|| format!("Move {} ({}) rejected", n + 1, position))?;
    }

    if let Some(step) = script.jump {
        history
            .try_jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    info!(step = history.step(), status = %history.status(), "Replay finished");
    Ok(GameView::from_history(&history))
}

/// Formats a view as plain text: board, status, and move list.
///
/// Winning cells are wrapped in `*`, the current move is marked with `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();

    for row in 0..3 {
        let line: Vec<String> = (0..3)
            .filter_map(|col| view.cell(row * 3 + col))
            .map(|cell| {
                let mark = match cell.cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                if cell.winning {
                    format!("*{}*", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&line.join("|"));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(view.status_text());
    out.push('\n');

    for entry in view.moves() {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step + 1, entry.label));
    }
    out
}
