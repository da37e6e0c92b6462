/******************************************\
|==========================================|
|        Macro: impl_from_to_primitive     |
|==========================================|
\******************************************/

/// Generates `from_unchecked` and `index` for a fieldless `#[repr(u8)]` enum whose
/// discriminants run contiguously from zero up to `Self::NUM - 1`.
///
/// - `unsafe fn from_unchecked(index: u8) -> Self`: converts a raw discriminant back
///   into the enum. The caller guarantees `index < Self::NUM`.
/// - `const fn index(&self) -> usize`: the discriminant as an array index.
#[macro_export]
macro_rules! impl_from_to_primitive {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Converts primitive type u8 to ", stringify!($enum_name))]
            /// ## Safety
            /// - `index` must be a valid discriminant (`index < Self::NUM`)
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!((index as usize) < Self::NUM, "Index out of bounds");
                unsafe { std::mem::transmute::<u8, Self>(index) }
            }

            #[doc=concat!("Converts ", stringify!($enum_name), " to primitive type usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates `iter()` over every variant of an enum that already has `NUM` and
/// `from_unchecked` (see [`impl_from_to_primitive`]).
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns iterator for all the elements in ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
                // Safety: the range never leaves 0..NUM
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}

/******************************************\
|==========================================|
|           Macro: impl_bit_ops            |
|==========================================|
\******************************************/

/// Implements `&`, `|`, `^`, their assignment forms and `!` for a tuple struct
/// wrapping a single integer (`Bitboard(u64)`, `Castling(u8)`).
///
/// The optional second argument is a mask applied after `!` so that types using
/// only some of their bits (castling rights use four) stay canonical.
#[macro_export]
macro_rules! impl_bit_ops {
    ($struct_name:ident) => {
        $crate::impl_bit_ops!($struct_name, !0);
    };
    ($struct_name:ident, $not_mask:expr) => {
        impl std::ops::BitAnd for $struct_name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self::Output {
                Self(self.0 & rhs.0)
            }
        }

        impl std::ops::BitOr for $struct_name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self::Output {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitXor for $struct_name {
            type Output = Self;

            #[inline]
            fn bitxor(self, rhs: Self) -> Self::Output {
                Self(self.0 ^ rhs.0)
            }
        }

        impl std::ops::BitAndAssign for $struct_name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl std::ops::BitOrAssign for $struct_name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl std::ops::BitXorAssign for $struct_name {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0;
            }
        }

        impl std::ops::Not for $struct_name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self::Output {
                Self(!self.0 & $not_mask)
            }
        }
    };
}
