//! Stateless rendering of game views.

use rewind_tictactoe::{Board, GameView};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How views are written out.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Grid, status line and move list.
    #[default]
    Text,
    /// One JSON object per view, one per line.
    Json,
}

/// Renders a view, ending with a newline.
#[instrument(skip(view))]
pub fn render(view: &GameView, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => {
            let mut line = serde_json::to_string(view)?;
            line.push('\n');
            Ok(line)
        }
    }
}

fn render_text(view: &GameView) -> String {
    let mut out = Board::from_cells(view.board).display();
    out.push('\n');
    out.push_str(&view.status);
    out.push('\n');

    let current = view.moves.len().saturating_sub(1);
    for entry in &view.moves {
        let marker = if entry.ply == current { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}\n", marker, entry.ply, entry.label));
    }
    out
}
