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

// Generates a unary operator family from an in-place kernel with
// signature `fn(&mut BigInt)`.
macro_rules! arith_unary {
    (
        $func:path;
        $Imp:ident { $method:ident }
        $ImpAssign:ident { $method_assign:ident }
    ) => {
        impl $Imp for BigInt {
            type Output = BigInt;
            #[inline]
            fn $method(mut self) -> BigInt {
                $func(&mut self);
                self
            }
        }

        impl $Imp for &BigInt {
            type Output = BigInt;
            #[inline]
            fn $method(self) -> BigInt {
                let mut ret = self.clone();
                $func(&mut ret);
                ret
            }
        }

        impl $ImpAssign for BigInt {
            #[inline]
            fn $method_assign(&mut self) {
                $func(self);
            }
        }
    };
}

// Generates a binary operator family from a kernel with signature
// `fn(&BigInt, &BigInt) -> BigInt`: the four owned/borrowed operand
// combinations, the assignment form, and the `*From` form that
// assigns to the rhs operand.
macro_rules! arith_binary {
    (
        $func:path;
        $Imp:ident { $method:ident }
        $ImpAssign:ident { $method_assign:ident }
        $ImpFrom:ident { $method_from:ident }
    ) => {
        impl $Imp<BigInt> for BigInt {
            type Output = BigInt;
            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }

        impl $Imp<&BigInt> for BigInt {
            type Output = BigInt;
            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }

        impl $Imp<BigInt> for &BigInt {
            type Output = BigInt;
            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }

        impl $Imp<&BigInt> for &BigInt {
            type Output = BigInt;
            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }

        impl $ImpAssign<BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, rhs: BigInt) {
                *self = $func(&*self, &rhs);
            }
        }

        impl $ImpAssign<&BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, rhs: &BigInt) {
                *self = $func(&*self, rhs);
            }
        }

        impl $ImpFrom<BigInt> for BigInt {
            #[inline]
            fn $method_from(&mut self, lhs: BigInt) {
                *self = $func(&lhs, &*self);
            }
        }

        impl $ImpFrom<&BigInt> for BigInt {
            #[inline]
            fn $method_from(&mut self, lhs: &BigInt) {
                *self = $func(lhs, &*self);
            }
        }
    };
}

// Comparisons against primitives convert the primitive operand first;
// a small number of `From` conversions replaces a wall of per-type
// kernels.
macro_rules! cmp_prim {
    ($($T:ty)*) => { $(
        impl PartialEq<$T> for BigInt {
            #[inline]
            fn eq(&self, other: &$T) -> bool {
                *self == BigInt::from(*other)
            }
        }

        impl PartialEq<BigInt> for $T {
            #[inline]
            fn eq(&self, other: &BigInt) -> bool {
                other.eq(self)
            }
        }

        impl PartialOrd<$T> for BigInt {
            #[inline]
            fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                Some(self.cmp(&BigInt::from(*other)))
            }
        }

        impl PartialOrd<BigInt> for $T {
            #[inline]
            fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )* };
}

macro_rules! from_unsigned {
    ($($T:ty)*) => { $(
        impl From<$T> for BigInt {
            #[inline]
            fn from(val: $T) -> BigInt {
                BigInt::from_u128_parts(false, val as u128)
            }
        }

        impl Assign<$T> for BigInt {
            #[inline]
            fn assign(&mut self, val: $T) {
                *self = BigInt::from(val);
            }
        }
    )* };
}

macro_rules! from_signed {
    ($($T:ty)*) => { $(
        impl From<$T> for BigInt {
            #[inline]
            fn from(val: $T) -> BigInt {
                BigInt::from_u128_parts(val < 0, val.unsigned_abs() as u128)
            }
        }

        impl Assign<$T> for BigInt {
            #[inline]
            fn assign(&mut self, val: $T) {
                *self = BigInt::from(val);
            }
        }
    )* };
}
