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

//! Operations on numbers.
//!
//! See the documentation for each trait method to see a usage example.

/// Compound negation and assignment.
pub trait NegAssign {
    /// Performs the negation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::ops::NegAssign;
    /// use decint::BigInt;
    /// let mut i = BigInt::from(-42);
    /// i.neg_assign();
    /// assert_eq!(i, 42);
    /// ```
    fn neg_assign(&mut self);
}

/// Compound addition and assignment to the rhs operand.
///
/// `rhs.add_from(lhs)` has the same effect as `rhs = lhs + rhs`.
pub trait AddFrom<Lhs = Self> {
    /// Performs the addition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::ops::AddFrom;
    /// use decint::BigInt;
    /// let mut rhs = BigInt::from(10);
    /// rhs.add_from(BigInt::from(100));
    /// // rhs = 100 + 10
    /// assert_eq!(rhs, 110);
    /// ```
    fn add_from(&mut self, lhs: Lhs);
}

/// Compound subtraction and assignment to the rhs operand.
///
/// `rhs.sub_from(lhs)` has the same effect as `rhs = lhs - rhs`.
pub trait SubFrom<Lhs = Self> {
    /// Performs the subtraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::ops::SubFrom;
    /// use decint::BigInt;
    /// let mut rhs = BigInt::from(10);
    /// rhs.sub_from(BigInt::from(100));
    /// // rhs = 100 - 10
    /// assert_eq!(rhs, 90);
    /// ```
    fn sub_from(&mut self, lhs: Lhs);
}

/// Compound multiplication and assignment to the rhs operand.
///
/// `rhs.mul_from(lhs)` has the same effect as `rhs = lhs * rhs`.
pub trait MulFrom<Lhs = Self> {
    /// Performs the multiplication.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::ops::MulFrom;
    /// use decint::BigInt;
    /// let mut rhs = BigInt::from(5);
    /// rhs.mul_from(BigInt::from(50));
    /// // rhs = 50 * 5
    /// assert_eq!(rhs, 250);
    /// ```
    fn mul_from(&mut self, lhs: Lhs);
}

/// Compound division and assignment to the rhs operand.
///
/// `rhs.div_from(lhs)` has the same effect as `rhs = lhs / rhs`.
pub trait DivFrom<Lhs = Self> {
    /// Performs the division.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::ops::DivFrom;
    /// use decint::BigInt;
    /// let lhs = BigInt::from(50);
    /// let mut rhs = BigInt::from(5);
    /// rhs.div_from(lhs);
    /// // rhs = 50 / 5
    /// assert_eq!(rhs, 10);
    /// ```
    fn div_from(&mut self, lhs: Lhs);
}

/// Compound remainder operation and assignment to the rhs operand.
///
/// `rhs.rem_from(lhs)` has the same effect as `rhs = lhs % rhs`.
pub trait RemFrom<Lhs = Self> {
    /// Performs the remainder operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::ops::RemFrom;
    /// use decint::BigInt;
    /// let lhs = BigInt::from(17);
    /// let mut rhs = BigInt::from(2);
    /// rhs.rem_from(&lhs);
    /// // rhs = 17 % 2
    /// assert_eq!(rhs, 1);
    /// ```
    fn rem_from(&mut self, lhs: Lhs);
}

/// The power operation.
pub trait Pow<Rhs> {
    /// The resulting type after the power operation.
    type Output;
    /// Performs the power operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::ops::Pow;
    /// use decint::BigInt;
    /// let base = BigInt::from(10);
    /// let power = base.pow(5u32);
    /// assert_eq!(power, 100_000);
    /// ```
    fn pow(self, rhs: Rhs) -> Self::Output;
}

/// Compound power operation and assignment.
pub trait PowAssign<Rhs> {
    /// Performs the power operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::ops::PowAssign;
    /// use decint::BigInt;
    /// let mut i = BigInt::from(5);
    /// i.pow_assign(3u32);
    /// assert_eq!(i, 125);
    /// ```
    fn pow_assign(&mut self, rhs: Rhs);
}
