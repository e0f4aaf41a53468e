//! Formatting utilities for terminal output

use crate::core::MoveTier;
use crate::error::MoveRejection;
use crate::game::{AcceptedMove, GameSession};
use colored::{ColoredString, Colorize};

/// Colored label for a move tier
#[must_use]
pub fn tier_label(tier: MoveTier) -> ColoredString {
    match tier {
        MoveTier::Normal => "normal".green(),
        MoveTier::Transposed => "transposed".yellow(),
        MoveTier::LastLetter => "last letter".bright_red(),
    }
}

/// One-line summary of an accepted move
#[must_use]
pub fn format_accepted(accepted: &AcceptedMove) -> String {
    format!(
        "✓ {} ({} move): {:.2} x {} = {}   total {}",
        accepted.word.bright_white().bold(),
        tier_label(accepted.tier),
        accepted.base_score,
        accepted.multiplier,
        format!("{:.2}", accepted.final_score).bright_yellow(),
        format!("{:.2}", accepted.total_score).bright_cyan().bold()
    )
}

/// Player-facing explanation of a rejection
#[must_use]
pub fn format_rejection(rejection: &MoveRejection) -> String {
    format!("✗ {rejection}")
}

/// Words played so far, opening word first
#[must_use]
pub fn format_history(session: &GameSession) -> String {
    let chain = session.used_words().join(" → ");
    format!(
        "{chain}\nmoves: {}, total {:.2}",
        session.moves_played(),
        session.total_score()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
