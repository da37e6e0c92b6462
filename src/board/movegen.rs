//! # Module: `movegen`
//!
//! Attack tables and move generation.
//!
//! ## Overview
//!
//! - **Attack Generation**: per-square tables for pawns (per colour), knights and
//!   kings, and magic-hashed tables for bishops and rooks. Queens are the union
//!   of the two slider lookups.
//! - **Attack Queries**: whether one square is attacked by a colour, and the full
//!   set of squares a colour attacks.
//! - **Pseudo-legal Generation**: every move the pieces can make, including
//!   castling, en passant and all four promotions.
//! - **Legal Filtering**: copy-make. Each candidate is played on a copy of the
//!   planes and dropped if it leaves the mover's king attacked.
//!
//! ## Usage
//!
//! Build the tables once, then share them by reference:
//!
//! ```ignore
//! let tables = init_attack_tables();
//! let moves = tables.generate_legal_moves(&Position::startpos());
//! assert_eq!(moves.len(), 20);
//! ```
//!
//! ## Submodules
//!
//! - `leapers`: set-wise pawn, knight and king attacks and their tables.
//! - `rays`: ray casting and relevant-occupancy masks for sliders.
//! - `magic`: the fixed magic numbers and the slider lookup tables.
//! - `tables`: [`AttackTables`], the owner of every lookup table.
//! - `query`, `pseudo`, `legal`: attack queries and move generation.

mod leapers;
mod legal;
mod magic;
mod move_list;
mod pseudo;
mod query;
pub(crate) mod rays;
mod tables;

pub use leapers::{king_attacks_bb, knight_attacks_bb, pawn_attacks_bb};
pub use magic::{BISHOP_MAGIC_NUMS, Magic, ROOK_MAGIC_NUMS, Slider, SliderTable};
pub use move_list::{MAX_MOVES, MoveList};
pub use rays::{occupancy_from_index, relevant_mask, slider_attacks_on_the_fly};
pub use tables::{AttackTables, init_attack_tables};
