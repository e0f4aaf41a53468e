//! Game state machine
//!
//! A game is either not started (no `GameSession` exists yet) or in
//! progress. `GameEngine::start` performs the only transition between the
//! two; `GameEngine::attempt_move` advances an in-progress session.

mod engine;
mod session;

pub use engine::{AcceptedMove, GameEngine};
pub use session::GameSession;
