use super::magic::Slider;
use crate::core::*;

/******************************************\
|==========================================|
|            Attacks on the fly            |
|==========================================|
\******************************************/

/// # Attacks on the fly
/// - Walks each of the slider's four rays one masked shift at a time until the
///   ray falls off the board or lands on an occupied square.
/// - The blocker is included: it is a potential capture.
/// - Slow. Used to populate and verify the magic tables, never during generation.
pub const fn slider_attacks_on_the_fly(slider: Slider, sq: Square, occ: Bitboard) -> Bitboard {
    let dirs = slider.directions();

    let mut attacks = Bitboard::EMPTY;
    let mut i = 0;
    while i < dirs.len() {
        let mut ray = sq.bb();
        loop {
            ray = ray.shift(dirs[i]);
            // Off the board (the shift masks drop file wraps too)
            if ray.is_empty() {
                break;
            }
            attacks.0 |= ray.0;
            if ray.0 & occ.0 != 0 {
                break;
            }
        }
        i += 1;
    }
    attacks
}

/******************************************\
|==========================================|
|           Relevant Occupancy             |
|==========================================|
\******************************************/

/// Board edges that cannot block anything for a piece on `sq`. The edges the
/// square itself stands on are kept, since a rook on a1 can be blocked on a2..a7.
pub const fn edge_mask(sq: Square) -> Bitboard {
    let rank_edges = Bitboard::RANK_1.0 | Bitboard::RANK_8.0;
    let file_edges = Bitboard::FILE_A.0 | Bitboard::FILE_H.0;

    let rank_mask = rank_edges & !sq.rank().bb().0;
    let file_mask = file_edges & !sq.file().bb().0;

    Bitboard(rank_mask | file_mask)
}

/// Squares whose occupancy can change `slider`'s attacks from `sq`
pub const fn relevant_mask(slider: Slider, sq: Square) -> Bitboard {
    Bitboard(slider_attacks_on_the_fly(slider, sq, Bitboard::EMPTY).0 & !edge_mask(sq).0)
}

/// The `index`-th subset of `mask`: bit `i` of `index` decides whether the
/// `i`-th lowest square of the mask is occupied. Maps `0..2^k` one-to-one onto
/// the subsets of a `k`-square mask.
pub fn occupancy_from_index(index: usize, mask: Bitboard) -> Bitboard {
    let mut occ = Bitboard::EMPTY;

    for (i, sq) in mask.enumerate() {
        if index & (1 << i) != 0 {
            occ.set(sq);
        }
    }

    occ
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_rays_stop_on_blockers() {
        let occ = Bitboard::from([Square::D6, Square::B4, Square::D2, Square::G7]);
        let attacks = slider_attacks_on_the_fly(Slider::Rook, Square::D4, occ);

        let expected = Bitboard::from([
            Square::D5,
            Square::D6,
            Square::C4,
            Square::B4,
            Square::E4,
            Square::F4,
            Square::G4,
            Square::H4,
            Square::D3,
            Square::D2,
        ]);
        assert_eq!(attacks, expected);
    }

    #[test]
    fn test_bishop_rays_do_not_wrap() {
        let attacks = slider_attacks_on_the_fly(Slider::Bishop, Square::H4, Bitboard::EMPTY);

        let expected = Bitboard::from([
            Square::G5,
            Square::F6,
            Square::E7,
            Square::D8,
            Square::G3,
            Square::F2,
            Square::E1,
        ]);
        assert_eq!(attacks, expected);
    }

    #[test]
    fn test_origin_occupancy_is_ignored() {
        let empty = slider_attacks_on_the_fly(Slider::Rook, Square::A1, Bitboard::EMPTY);
        let own = slider_attacks_on_the_fly(Slider::Rook, Square::A1, Square::A1.bb());

        assert_eq!(empty, own);
        assert_eq!(empty.count_bits(), 14);
    }

    #[test]
    fn test_relevant_masks() {
        assert_eq!(
            relevant_mask(Slider::Rook, Square::A1),
            Bitboard(0x0001_0101_0101_017E)
        );
        assert_eq!(
            relevant_mask(Slider::Rook, Square::E4),
            Bitboard(0x0010_1010_6E10_1000)
        );
        assert_eq!(
            relevant_mask(Slider::Bishop, Square::D4),
            Bitboard(0x0040_2214_0014_2200)
        );
    }

    #[test]
    fn test_occupancy_from_index_covers_all_subsets() {
        let mask = relevant_mask(Slider::Bishop, Square::C1);
        let bits = mask.count_bits();

        let mut seen = std::collections::HashSet::new();
        for i in 0..1usize << bits {
            let occ = occupancy_from_index(i, mask);
            assert_eq!(occ & !mask, Bitboard::EMPTY);
            assert!(seen.insert(occ.0));
        }

        assert_eq!(seen.len(), 1 << bits);
        assert_eq!(occupancy_from_index(0, mask), Bitboard::EMPTY);
        assert_eq!(occupancy_from_index((1 << bits) - 1, mask), mask);
    }
}
