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

use crate::bigint::{division, limbs};
use crate::ops::{
    AddFrom, DivFrom, MulFrom, NegAssign, Pow, PowAssign, RemFrom, SubFrom,
};
use crate::BigInt;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

arith_unary! {
    limbs::neg;
    Neg { neg }
    NegAssign { neg_assign }
}
arith_binary! {
    limbs::add;
    Add { add }
    AddAssign { add_assign }
    AddFrom { add_from }
}
arith_binary! {
    limbs::sub;
    Sub { sub }
    SubAssign { sub_assign }
    SubFrom { sub_from }
}
arith_binary! {
    limbs::mul;
    Mul { mul }
    MulAssign { mul_assign }
    MulFrom { mul_from }
}
arith_binary! {
    division::tdiv_q;
    Div { div }
    DivAssign { div_assign }
    DivFrom { div_from }
}
arith_binary! {
    division::tdiv_r;
    Rem { rem }
    RemAssign { rem_assign }
    RemFrom { rem_from }
}

impl Pow<u32> for BigInt {
    type Output = BigInt;
    #[inline]
    fn pow(self, exp: u32) -> BigInt {
        limbs::pow_u32(&self, exp)
    }
}

impl Pow<u32> for &BigInt {
    type Output = BigInt;
    #[inline]
    fn pow(self, exp: u32) -> BigInt {
        limbs::pow_u32(self, exp)
    }
}

impl PowAssign<u32> for BigInt {
    #[inline]
    fn pow_assign(&mut self, exp: u32) {
        *self = limbs::pow_u32(self, exp);
    }
}

impl Pow<i32> for BigInt {
    type Output = BigInt;
    #[inline]
    fn pow(self, exp: i32) -> BigInt {
        (&self).pow(exp)
    }
}

impl Pow<i32> for &BigInt {
    type Output = BigInt;
    /// # Panics
    ///
    /// Panics if `exp` is negative.
    #[inline]
    fn pow(self, exp: i32) -> BigInt {
        assert!(exp >= 0, "negative exponent");
        limbs::pow_u32(self, exp as u32)
    }
}

impl PowAssign<i32> for BigInt {
    #[inline]
    fn pow_assign(&mut self, exp: i32) {
        *self = (&*self).pow(exp);
    }
}

impl<T> Sum<T> for BigInt
where
    BigInt: AddAssign<T>,
{
    fn sum<I>(iter: I) -> BigInt
    where
        I: Iterator<Item = T>,
    {
        let mut ret = BigInt::new();
        for i in iter {
            ret.add_assign(i);
        }
        ret
    }
}

impl<T> Product<T> for BigInt
where
    BigInt: MulAssign<T>,
{
    fn product<I>(iter: I) -> BigInt
    where
        I: Iterator<Item = T>,
    {
        let mut ret = BigInt::from(1);
        for i in iter {
            ret.mul_assign(i);
        }
        ret
    }
}
