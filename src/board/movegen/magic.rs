use super::rays::{relevant_mask, slider_attacks_on_the_fly};
use crate::core::*;

/******************************************\
|==========================================|
|                 Sliders                  |
|==========================================|
\******************************************/

/// The two sliding piece kinds with their own attack table. A queen is the
/// union of both.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    /// Number of elements in the Slider enum
    pub const NUM: usize = 2;

    /// The four ray directions of the slider
    #[inline]
    pub const fn directions(self) -> [Direction; 4] {
        use Direction::*;
        match self {
            Slider::Bishop => [NE, NW, SE, SW],
            Slider::Rook => [N, S, E, W],
        }
    }

    /// Total number of entries over all 64 squares: the sum of `2^bits`
    pub const fn table_size(self) -> usize {
        match self {
            Slider::Bishop => BISHOP_TABLE_SIZE,
            Slider::Rook => ROOK_TABLE_SIZE,
        }
    }

    /// The fixed magic multipliers for the slider
    pub const fn magic_numbers(self) -> &'static [u64; Square::NUM] {
        match self {
            Slider::Bishop => &BISHOP_MAGIC_NUMS,
            Slider::Rook => &ROOK_MAGIC_NUMS,
        }
    }
}

crate::impl_from_to_primitive!(Slider);
crate::impl_enum_iter!(Slider);

const BISHOP_TABLE_SIZE: usize = 0x1480;

const ROOK_TABLE_SIZE: usize = 0x19000;

/******************************************\
|==========================================|
|             Magics Definition            |
|==========================================|
\******************************************/

/// Per-square hashing parameters: `((occ & mask) * magic) >> shift` is a dense
/// index in `0..2^bits`, and `offset` places that square's block in the shared table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Magic {
    pub mask: Bitboard,

    pub magic: u64,

    pub shift: u8,

    pub offset: usize,
}

impl Magic {
    /// Number of relevant occupancy bits
    #[inline]
    pub const fn bits(&self) -> u32 {
        64 - self.shift as u32
    }

    /// Index into the shared table for occupancy `occ`
    #[inline]
    pub const fn index(&self, occ: Bitboard) -> usize {
        ((occ.0 & self.mask.0).wrapping_mul(self.magic) >> self.shift) as usize + self.offset
    }
}

/******************************************\
|==========================================|
|               Magic Numbers              |
|==========================================|
\******************************************/

#[rustfmt::skip]
pub const BISHOP_MAGIC_NUMS: [u64; Square::NUM] = [
    0x11410121040100, 0x2084820928010, 0xA010208481080040, 0x214240082000610,
    0x4D104000400480, 0x1012010804408, 0x42044101452000C, 0x2844804050104880,
    0x814204290A0A00, 0x10280688224500, 0x1080410101010084, 0x10020A108408004,
    0x2482020210C80080, 0x480104A0040400, 0x411006404200810, 0x1024010908024292,
    0x1004401001011A, 0x810006081220080, 0x1040404206004100, 0x58080000820041CE,
    0x3406000422010890, 0x1A004100520210, 0x202A000048040400, 0x225004441180110,
    0x8064240102240, 0x1424200404010402, 0x1041100041024200, 0x8082002012008200,
    0x1010008104000, 0x8808004000806000, 0x380A000080C400, 0x31040100042D0101,
    0x110109008082220, 0x4010880204201, 0x4006462082100300, 0x4002010040140041,
    0x40090200250880, 0x2010100C40C08040, 0x12800AC01910104, 0x10B20051020100,
    0x210894104828C000, 0x50440220004800, 0x1002011044180800, 0x4220404010410204,
    0x1002204A2020401, 0x21021001000210, 0x4880081009402, 0xC208088C088E0040,
    0x4188464200080, 0x3810440618022200, 0xC020310401040420, 0x2000008208800E0,
    0x4C910240020, 0x425100A8602A0, 0x20C4206A0C030510, 0x4C10010801184000,
    0x200202020A026200, 0x6000004400841080, 0xC14004121082200, 0x400324804208800,
    0x1802200040504100, 0x1820000848488820, 0x8620682A908400, 0x8010600084204240,
];

#[rustfmt::skip]
pub const ROOK_MAGIC_NUMS: [u64; Square::NUM] = [
    0x2080008040002010, 0x40200010004000, 0x100090010200040, 0x2080080010000480,
    0x880040080080102, 0x8200106200042108, 0x410041000408B200, 0x100009A00402100,
    0x5800800020804000, 0x848404010002000, 0x101001820010041, 0x10A0040100420080,
    0x8A02002006001008, 0x926000844110200, 0x8000800200800100, 0x28060001008C2042,
    0x10818002204000, 0x10004020004001, 0x110002008002400, 0x11A020010082040,
    0x2001010008000410, 0x42010100080400, 0x4004040008020110, 0x820000840041,
    0x400080208000, 0x2080200040005000, 0x8000200080100080, 0x4400080180500080,
    0x4900080080040080, 0x4004004480020080, 0x8006000200040108, 0xC481000100006396,
    0x1000400080800020, 0x201004400040, 0x10008010802000, 0x204012000A00,
    0x800400800802, 0x284000200800480, 0x3000403000200, 0x840A6000514,
    0x4080C000228012, 0x10002000444010, 0x620001000808020, 0xC210010010009,
    0x100C001008010100, 0xC10020004008080, 0x20100802040001, 0x808008305420014,
    0xC010800840043080, 0x208401020890100, 0x10B0081020028280, 0x6087001001220900,
    0xC080011000500, 0x9810200040080, 0x2000010882100400, 0x2000050880540200,
    0x800020104200810A, 0x6220250242008016, 0x9180402202900A, 0x40210500100009,
    0x6000814102026, 0x410100080A040013, 0x10405008022D1184, 0x1000009400410822,
];
/******************************************\
|==========================================|
|               Slider Table               |
|==========================================|
\******************************************/

/// Attack lookup for one slider kind: the 64 per-square magics and the flat
/// table they hash into.
#[derive(Debug, Clone)]
pub struct SliderTable {
    magics: [Magic; Square::NUM],

    table: Box<[Bitboard]>,
}

impl SliderTable {
    /// Builds the table from the slider's fixed magic numbers
    pub fn new(slider: Slider) -> Self {
        Self::with_magics(slider, slider.magic_numbers())
    }

    /// Builds the table from caller supplied magics. Every magic must be
    /// collision free for its square.
    pub fn with_magics(slider: Slider, magic_numbers: &[u64; Square::NUM]) -> Self {
        let mut magics = [Magic::default(); Square::NUM];
        let mut offset = 0;

        for sq in Square::iter() {
            let mask = relevant_mask(slider, sq);

            magics[sq.index()] = Magic {
                mask,
                magic: magic_numbers[sq.index()],
                shift: (64 - mask.count_bits()) as u8,
                offset,
            };

            offset += 1 << mask.count_bits();
        }

        debug_assert_eq!(offset, slider.table_size());
        let mut table = vec![Bitboard::EMPTY; offset].into_boxed_slice();

        for sq in Square::iter() {
            let m = magics[sq.index()];

            // Carry-rippler walk over every subset of the mask, starting and ending at empty
            let mut occ = Bitboard::EMPTY;
            loop {
                table[m.index(occ)] = slider_attacks_on_the_fly(slider, sq, occ);

                occ = Bitboard(occ.0.wrapping_sub(m.mask.0) & m.mask.0);
                if occ.is_empty() {
                    break;
                }
            }
        }

        Self { magics, table }
    }

    /// Attacks from `sq` given the full board occupancy `occ`
    #[inline]
    pub fn attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        let index = self.magics[sq.index()].index(occ);
        // Safety: index is below offset + 2^bits, which never exceeds the table length
        unsafe { *self.table.get_unchecked(index) }
    }

    /// Hashing parameters of `sq`
    #[inline]
    pub fn magic(&self, sq: Square) -> &Magic {
        &self.magics[sq.index()]
    }
}
