//! Game rules: win-conditions, the rule-seeded lookup table, and boards.
//!
//! - `WinCondition` / `WinConditionPool`: the universe of eligible patterns
//! - `SeedTable`: which pattern a colored piece activates, fixed by a seed
//! - `Board`: immutable nine-cell snapshot with its active patterns

pub mod board;
pub mod seed_table;
pub mod win_condition;

pub use board::Board;
pub use seed_table::{SeedTable, MIN_POOL_SIZE, TABLE_COLUMNS};
pub use win_condition::{WinCondition, WinConditionPool};
