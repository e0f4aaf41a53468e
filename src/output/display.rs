//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{RankResult, ScoreReport};
use colored::Colorize;

/// Print a word's score breakdown
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Scoring: {}", report.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if !report.in_lexicon {
        println!("{}", "  (not in the dictionary, cannot be played)".bright_black());
    }

    if report.pairs.is_empty() {
        println!("  No letter pairs: words shorter than two letters score 0");
    }

    for pair in &report.pairs {
        println!(
            "  {}   freq {:>10.4}   +{:.2}",
            pair.pair.bright_white().bold(),
            pair.frequency,
            pair.contribution
        );
    }

    println!(
        "\n  Total: {}",
        format!("{:.2}", report.total).bright_yellow().bold()
    );
}

/// Print the rarest words of the lexicon
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RAREST WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let top = result.entries.first().map_or(0.0, |(_, score)| *score);

    for (i, (word, score)) in result.entries.iter().enumerate() {
        let bar = create_progress_bar(*score, top, 20);
        println!(
            "  {:>3}. {:<16} {} {:.2}",
            i + 1,
            word,
            bar.green(),
            score
        );
    }

    println!(
        "\n  Scored {} words in {:.2}s",
        result.considered,
        result.duration.as_secs_f64()
    );
}
