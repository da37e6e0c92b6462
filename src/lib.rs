//! # Chess Move Generation
//!
//! Magic-bitboard attack tables, pseudo-legal move generation with a
//! copy-make legality filter, and the offline magic-number search that
//! produced the fixed constants the tables are built from.
pub mod board;
pub mod buildutils;
pub mod core;
pub mod utils;

pub use crate::board::movegen::{AttackTables, MoveList, Slider, init_attack_tables};
pub use crate::board::{PiecePlanes, Position, apply_move};
pub use crate::core::*;
