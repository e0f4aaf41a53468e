//! Interactive play mode
//!
//! Text-based game loop: the computer opens, the player chains words.

use crate::error::MoveRejection;
use crate::game::{GameEngine, GameSession};
use crate::output::formatters::{format_accepted, format_history, format_rejection};
use crate::scoring::Scorer;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// What the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    History,
    Word(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "quit" | "q" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "history" | "h" => Self::History,
            _ => Self::Word(line.to_string()),
        }
    }
}

/// Summary of a finished play session
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    pub games: usize,
    pub moves: usize,
    pub best_total: f64,
}

/// Run the game loop until the player quits or input ends
///
/// Reads one line per turn from `input` and writes all prompts and results
/// to `out`.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the lexicon has no
/// words to open a game with.
pub fn run_play<S, R, I, W>(
    engine: &GameEngine<'_, S>,
    rng: &mut R,
    mut input: I,
    out: &mut W,
) -> Result<PlayOutcome>
where
    S: Scorer,
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "  Word Chain".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "Start your word with the last two letters of mine.\n\
         Swapped letters score x0.5, just the last letter scores x0.25.\n\
         Commands: 'history', 'new', 'quit'\n"
    )?;

    let mut outcome = PlayOutcome {
        games: 0,
        moves: 0,
        best_total: 0.0,
    };
    let mut session = open_game(engine, rng, out, &mut outcome)?;
    let mut line = String::new();

    loop {
        write!(out, "{} > ", session.last_word().bright_yellow().bold())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match Input::parse(&line) {
            Input::Quit => break,
            Input::NewGame => {
                finish_game(&session, out, &mut outcome)?;
                session = open_game(engine, rng, out, &mut outcome)?;
            }
            Input::History => writeln!(out, "{}", format_history(&session))?,
            Input::Word(word) => match engine.attempt_move(&mut session, &word) {
                Ok(accepted) => {
                    outcome.moves += 1;
                    writeln!(out, "{}", format_accepted(&accepted))?;
                }
                Err(MoveRejection::EmptyInput) => {}
                Err(rejection) => writeln!(out, "{}", format_rejection(&rejection).red())?,
            },
        }
    }

    finish_game(&session, out, &mut outcome)?;
    writeln!(out, "\nThanks for playing!")?;
    Ok(outcome)
}

fn open_game<S: Scorer, R: Rng + ?Sized, W: Write>(
    engine: &GameEngine<'_, S>,
    rng: &mut R,
    out: &mut W,
    outcome: &mut PlayOutcome,
) -> Result<GameSession> {
    let session = engine.start(rng)?;
    outcome.games += 1;
    writeln!(
        out,
        "Game {}: my word is {}\n",
        outcome.games,
        session.last_word().bright_yellow().bold()
    )?;
    Ok(session)
}

fn finish_game<W: Write>(
    session: &GameSession,
    out: &mut W,
    outcome: &mut PlayOutcome,
) -> Result<()> {
    outcome.best_total = outcome.best_total.max(session.total_score());
    writeln!(
        out,
        "Game over after {} moves, total score {:.2}",
        session.moves_played(),
        session.total_score()
    )?;
    Ok(())
}
