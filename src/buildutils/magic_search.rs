use crate::board::movegen::{Slider, occupancy_from_index, relevant_mask, slider_attacks_on_the_fly};
use crate::core::*;
use crate::utils::PRNG;

/******************************************\
|==========================================|
|              Search Config               |
|==========================================|
\******************************************/

/// Parameters of one magic-number search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Seed of the candidate generator. Equal seeds reproduce equal magics.
    pub seed: u64,

    /// Candidates to try per square before giving up
    pub max_attempts: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: PRNG::DEFAULT_SEED,
            max_attempts: 100_000_000,
        }
    }
}

/// Outcome of a full 64-square search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicSet {
    pub slider: Slider,

    pub magics: [u64; Square::NUM],

    /// Candidates tried per square
    pub attempts: [u64; Square::NUM],
}

/******************************************\
|==========================================|
|             Reference Tables             |
|==========================================|
\******************************************/

/// Every occupancy subset of a square's relevant mask with the attacks it produces
struct Reference {
    bits: u32,
    mask: Bitboard,
    occupancy: Vec<Bitboard>,
    attacks: Vec<Bitboard>,
}

impl Reference {
    fn new(slider: Slider, sq: Square) -> Self {
        let mask = relevant_mask(slider, sq);
        let bits = mask.count_bits();

        let occupancy: Vec<Bitboard> = (0..1usize << bits)
            .map(|i| occupancy_from_index(i, mask))
            .collect();
        let attacks = occupancy
            .iter()
            .map(|&occ| slider_attacks_on_the_fly(slider, sq, occ))
            .collect();

        Self {
            bits,
            mask,
            occupancy,
            attacks,
        }
    }

    #[inline]
    fn index(&self, occ: Bitboard, magic: u64) -> usize {
        (occ.0.wrapping_mul(magic) >> (64 - self.bits)) as usize
    }
}

/******************************************\
|==========================================|
|               Verification               |
|==========================================|
\******************************************/

/// Checks that `magic` hashes every occupancy subset of `sq`'s relevant mask to
/// an index that no subset with different attacks also reaches.
pub fn verify_magic(slider: Slider, sq: Square, magic: u64) -> bool {
    let reference = Reference::new(slider, sq);
    let mut table: Vec<Option<Bitboard>> = vec![None; reference.occupancy.len()];

    for (&occ, &attacks) in reference.occupancy.iter().zip(&reference.attacks) {
        let idx = reference.index(occ, magic);

        match table[idx] {
            Some(stored) if stored != attacks => return false,
            Some(_) => {}
            None => table[idx] = Some(attacks),
        }
    }

    true
}

/******************************************\
|==========================================|
|                  Search                  |
|==========================================|
\******************************************/

/// Searches for a collision-free magic for one square, drawing candidates from `rng`.
///
/// Returns the magic and the number of candidates tried.
pub fn find_magic(
    slider: Slider,
    sq: Square,
    rng: &mut PRNG,
    max_attempts: u64,
) -> Result<(u64, u64), MagicSearchError> {
    let reference = Reference::new(slider, sq);
    let size = reference.occupancy.len();

    let mut table = vec![Bitboard::EMPTY; size];
    // Slot i holds a value from this attempt only if epoch[i] == attempt,
    // which saves clearing the table for every candidate
    let mut epoch = vec![0u64; size];

    for attempt in 1..=max_attempts {
        let magic = rng.random_sparse_u64();

        // Too few bits reach the top byte to spread the index
        if (reference.mask.0.wrapping_mul(magic) >> 56).count_ones() < 6 {
            continue;
        }

        let mut collision = false;

        for (&occ, &attacks) in reference.occupancy.iter().zip(&reference.attacks) {
            let idx = reference.index(occ, magic);

            if epoch[idx] < attempt {
                epoch[idx] = attempt;
                table[idx] = attacks;
            } else if table[idx] != attacks {
                collision = true;
                break;
            }
        }

        if !collision {
            return Ok((magic, attempt));
        }
    }

    Err(MagicSearchError::Exhausted {
        slider,
        square: sq,
        attempts: max_attempts,
    })
}

/// Searches all 64 squares of one slider in square order from a single
/// generator, verifying every result independently before accepting it.
pub fn find_all_magics(slider: Slider, config: &SearchConfig) -> Result<MagicSet, MagicSearchError> {
    let mut rng = PRNG::new(config.seed);
    let mut magics = [0; Square::NUM];
    let mut attempts = [0; Square::NUM];

    for sq in Square::iter() {
        let (magic, tried) = find_magic(slider, sq, &mut rng, config.max_attempts)?;

        if !verify_magic(slider, sq, magic) {
            return Err(MagicSearchError::Collision {
                slider,
                square: sq,
                magic,
            });
        }

        magics[sq.index()] = magic;
        attempts[sq.index()] = tried;
    }

    Ok(MagicSet {
        slider,
        magics,
        attempts,
    })
}

/******************************************\
|==========================================|
|                  Output                  |
|==========================================|
\******************************************/

/// Formats magics as a Rust constant array, four per line
pub fn format_magic_array(name: &str, magics: &[u64; Square::NUM]) -> String {
    let rows = magics
        .chunks(4)
        .map(|row| {
            let items: Vec<String> = row.iter().map(|m| format!("{m:#X},")).collect();
            format!("    {}", items.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("pub const {name}: [u64; Square::NUM] = [\n{rows}\n];\n")
}
