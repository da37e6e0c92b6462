use std::mem::MaybeUninit;
use std::slice;

use crate::core::Move;

/// Upper bound on moves in one list. Reachable positions have at most 218
/// legal moves; the slack also covers pseudo-legal lists.
pub const MAX_MOVES: usize = 256;

/// Fixed capacity, append-only list of moves filled by one generation call
pub struct MoveList {
    moves: [MaybeUninit<Move>; MAX_MOVES],
    num_moves: usize,
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.num_moves, "MoveList index out of bounds");

        // Safety: every slot below num_moves has been written
        unsafe { self.moves[index].assume_init_ref() }
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveList {
    #[inline]
    pub fn new() -> MoveList {
        MoveList {
            moves: [MaybeUninit::uninit(); MAX_MOVES],
            num_moves: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, move_: Move) {
        debug_assert!(self.num_moves < MAX_MOVES);

        self.moves[self.num_moves].write(move_);

        self.num_moves += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.num_moves
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_moves == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        // Safety: the first num_moves slots are initialised, and MaybeUninit<Move>
        // has the same layout as Move
        unsafe { slice::from_raw_parts(self.moves.as_ptr() as *const Move, self.num_moves) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn contains(&self, move_: &Move) -> bool {
        self.as_slice().contains(move_)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
