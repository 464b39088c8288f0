// Copyright © 2016–2017 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

use crate::bigint::limbs::{self, Sign};
use crate::BigInt;
use az::{Cast, CheckedCast, OverflowingCast, SaturatingCast, WrappingCast};
use std::cmp::Ordering;

macro_rules! cast_int {
    ($Prim:ty, $fits:path) => {
        impl Cast<BigInt> for $Prim {
            #[inline]
            fn cast(self) -> BigInt {
                BigInt::from(self)
            }
        }

        impl Cast<$Prim> for BigInt {
            #[inline]
            fn cast(self) -> $Prim {
                (&self).cast()
            }
        }
        impl Cast<$Prim> for &'_ BigInt {
            #[inline]
            fn cast(self) -> $Prim {
                let (wrapped, overflow) = self.overflowing_cast();
                debug_assert!(!overflow, "overflow");
                wrapped
            }
        }
        impl CheckedCast<$Prim> for BigInt {
            #[inline]
            fn checked_cast(self) -> Option<$Prim> {
                (&self).checked_cast()
            }
        }
        impl CheckedCast<$Prim> for &'_ BigInt {
            #[inline]
            fn checked_cast(self) -> Option<$Prim> {
                if $fits(self) {
                    Some(self.wrapping_cast())
                } else {
                    None
                }
            }
        }
        impl SaturatingCast<$Prim> for BigInt {
            #[inline]
            fn saturating_cast(self) -> $Prim {
                (&self).saturating_cast()
            }
        }
        impl SaturatingCast<$Prim> for &'_ BigInt {
            #[inline]
            fn saturating_cast(self) -> $Prim {
                if $fits(self) {
                    self.wrapping_cast()
                } else if self.cmp0() == Ordering::Less {
                    <$Prim>::MIN
                } else {
                    <$Prim>::MAX
                }
            }
        }
        impl WrappingCast<$Prim> for BigInt {
            #[inline]
            fn wrapping_cast(self) -> $Prim {
                (&self).wrapping_cast()
            }
        }
        impl WrappingCast<$Prim> for &'_ BigInt {
            #[inline]
            fn wrapping_cast(self) -> $Prim {
                let abs = limbs::mag_wrapping_u128(&self.limbs);
                let val = if self.sign == Sign::Negative {
                    abs.wrapping_neg()
                } else {
                    abs
                };
                val as $Prim
            }
        }
        impl OverflowingCast<$Prim> for BigInt {
            #[inline]
            fn overflowing_cast(self) -> ($Prim, bool) {
                (&self).overflowing_cast()
            }
        }
        impl OverflowingCast<$Prim> for &'_ BigInt {
            #[inline]
            fn overflowing_cast(self) -> ($Prim, bool) {
                (self.wrapping_cast(), !$fits(self))
            }
        }
    };
}

impl Cast<BigInt> for bool {
    #[inline]
    fn cast(self) -> BigInt {
        if self {
            BigInt::from(1u32)
        } else {
            BigInt::new()
        }
    }
}

cast_int! { i8, limbs::fits_i8 }
cast_int! { i16, limbs::fits_i16 }
cast_int! { i32, limbs::fits_i32 }
cast_int! { i64, limbs::fits_i64 }
cast_int! { i128, limbs::fits_i128 }
cast_int! { isize, limbs::fits_isize }
cast_int! { u8, limbs::fits_u8 }
cast_int! { u16, limbs::fits_u16 }
cast_int! { u32, limbs::fits_u32 }
cast_int! { u64, limbs::fits_u64 }
cast_int! { u128, limbs::fits_u128 }
cast_int! { usize, limbs::fits_usize }

#[cfg(test)]
mod tests {
    use crate::BigInt;
    use az::{
        Az, Cast, CheckedAs, CheckedCast, OverflowingAs, OverflowingCast,
        SaturatingAs, SaturatingCast, WrappingAs, WrappingCast,
    };
    use std::borrow::Borrow;
    use std::fmt::Debug;

    #[test]
    fn check_bool() {
        let zero = BigInt::new();
        let one = BigInt::from(1);
        assert_eq!(false.az::<BigInt>(), zero);
        assert_eq!(true.az::<BigInt>(), one);
    }

    fn check_there_and_back<T>(min: T, max: T)
    where
        T: Copy + Debug + Eq + Cast<BigInt>,
        for<'a> &'a BigInt: Cast<T>
            + CheckedCast<T>
            + SaturatingCast<T>
            + WrappingCast<T>
            + OverflowingCast<T>,
    {
        let min_int: BigInt = min.az::<BigInt>();
        let max_int: BigInt = max.az::<BigInt>();
        assert_eq!(min_int.borrow().az::<T>(), min);
        assert_eq!(max_int.borrow().az::<T>(), max);
        assert_eq!(min_int.borrow().checked_as::<T>(), Some(min));
        assert_eq!(max_int.borrow().checked_as::<T>(), Some(max));
        assert_eq!(min_int.borrow().saturating_as::<T>(), min);
        assert_eq!(max_int.borrow().saturating_as::<T>(), max);
        assert_eq!(min_int.borrow().wrapping_as::<T>(), min);
        assert_eq!(max_int.borrow().wrapping_as::<T>(), max);
        assert_eq!(min_int.borrow().overflowing_as::<T>(), (min, false));
        assert_eq!(max_int.borrow().overflowing_as::<T>(), (max, false));

        let too_small: BigInt = min_int - BigInt::from(1);
        let too_large: BigInt = max_int + BigInt::from(1);
        assert_eq!(too_small.borrow().checked_as::<T>(), None);
        assert_eq!(too_large.borrow().checked_as::<T>(), None);
        assert_eq!(too_small.borrow().saturating_as::<T>(), min);
        assert_eq!(too_large.borrow().saturating_as::<T>(), max);
        assert_eq!(too_small.borrow().wrapping_as::<T>(), max);
        assert_eq!(too_large.borrow().wrapping_as::<T>(), min);
        assert_eq!(too_small.borrow().overflowing_as::<T>(), (max, true));
        assert_eq!(too_large.borrow().overflowing_as::<T>(), (min, true));
    }

    #[test]
    fn check_integers() {
        check_there_and_back(i8::MIN, i8::MAX);
        check_there_and_back(i16::MIN, i16::MAX);
        check_there_and_back(i32::MIN, i32::MAX);
        check_there_and_back(i64::MIN, i64::MAX);
        check_there_and_back(i128::MIN, i128::MAX);
        check_there_and_back(isize::MIN, isize::MAX);
        check_there_and_back(u8::MIN, u8::MAX);
        check_there_and_back(u16::MIN, u16::MAX);
        check_there_and_back(u32::MIN, u32::MAX);
        check_there_and_back(u64::MIN, u64::MAX);
        check_there_and_back(u128::MIN, u128::MAX);
        check_there_and_back(usize::MIN, usize::MAX);
    }

    #[test]
    fn check_wrapping_negative_to_unsigned() {
        let minus_one = BigInt::from(-1);
        assert_eq!(minus_one.borrow().wrapping_as::<u8>(), u8::MAX);
        assert_eq!(minus_one.borrow().wrapping_as::<u64>(), u64::MAX);
        assert_eq!(minus_one.borrow().wrapping_as::<u128>(), u128::MAX);
        assert_eq!(BigInt::from(-1).checked_as::<u32>(), None);
    }
}
