//! Interactive play over a generated puzzle.
//!
//! - `Session`: turn cycle, opponent replies, strikes and resets
//! - `HostSignals`: pass/strike callbacks into the host
//! - `SessionConfig`: pacing the host applies between steps

pub mod config;
pub mod controller;

pub use config::SessionConfig;
pub use controller::{Advance, HostSignals, MoveOutcome, Session, SessionPhase};
