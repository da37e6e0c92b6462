//! Offline tooling. Nothing here runs during move generation: the magic
//! search produced the fixed constants the attack tables are built from, and
//! is kept so they can be regenerated and checked.

pub mod magic_search;

pub use magic_search::{
    MagicSet, SearchConfig, find_all_magics, find_magic, format_magic_array, verify_magic,
};
