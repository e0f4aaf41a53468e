//! Word Chain
//!
//! A two-player word-chain game: each word must start with the last two
//! letters of the previous one, and words are scored by how rare their
//! letter pairs are.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_chain::game::GameEngine;
//! use word_chain::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::fallback();
//! let engine = GameEngine::new(&lexicon);
//!
//! let mut session = engine.start(&mut StdRng::seed_from_u64(7)).unwrap();
//! match engine.attempt_move(&mut session, "торт") {
//!     Ok(accepted) => println!("+{} points", accepted.final_score),
//!     Err(rejection) => println!("{rejection}"),
//! }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word set and pair frequencies
pub mod lexicon;

// Rarity scoring
pub mod scoring;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
