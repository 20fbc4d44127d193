//! # Four in a Row
//!
//! A two-player connection game on a fixed grid: after a free first
//! placement, each mark must be placed adjacent to one of the player's
//! existing marks, and the first straight run of exactly the win length
//! wins. Ships a fixed-depth full-width minimax engine with a run-counting
//! heuristic, plus human and random agents behind a common trait.
//!
//! ## Modules
//!
//! - [`game`] — Board, move legality, win detection, game session
//! - [`eval`] — Maximal-run extraction and the cutoff heuristic
//! - [`ai`] — Agent trait, minimax engine, human and random agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
