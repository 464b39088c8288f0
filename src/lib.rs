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

//! # Arbitrary-precision decimal integers
//!
//! The `decint` crate provides the [`BigInt`](struct.BigInt.html) type,
//! an arbitrary-precision signed integer whose magnitude is stored as
//! base-10<sup>18</sup> limbs. Because the radix is a power of ten,
//! conversions to and from decimal text are exact, which makes the
//! type a good fit for workloads dominated by decimal I/O.
//!
//! ## Basic use
//!
//! You can construct a `BigInt` from primitive integer types or parse
//! one from a decimal string, and use the standard arithmetic
//! operators. Comparisons against primitive integer types are also
//! supported; the primitive operand is converted first.
//!
//! ```rust
//! use decint::{Assign, BigInt};
//! // Create an integer initialized as zero.
//! let mut int = BigInt::new();
//! assert!(int == 0);
//! int.assign(14);
//! assert!(int == 14);
//! assert_eq!(int.to_i32(), Some(14));
//! ```
//!
//! To initialize a very large `BigInt`, parse a string literal.
//!
//! ```rust
//! use decint::BigInt;
//! let i = "1234567890123456789012345".parse::<BigInt>().unwrap();
//! assert_eq!(i.to_string(), "1234567890123456789012345");
//! let sum = &i + &i;
//! assert_eq!(sum.to_string(), "2469135780246913578024690");
//! ```
//!
//! Operators are implemented for every combination of owned and
//! borrowed operands, so no operand has to be cloned just to keep it
//! alive.
//!
//! ```rust
//! use decint::ops::Pow;
//! use decint::BigInt;
//! let base = BigInt::from(2u32);
//! let power = base.pow(64u32);
//! assert_eq!(power.to_string(), "18446744073709551616");
//! ```
//!
//! ## Optional feature
//!
//! The `serde` feature implements serialization through the canonical
//! decimal string, the crate's only interchange format. The feature is
//! disabled by default.

#[macro_use]
mod macros;
mod bigint;
pub mod ops;

pub use crate::bigint::{BigInt, ParseBigIntError};

/// Assigns to a number from another value.
pub trait Assign<Src = Self> {
    /// Performs the assignment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::{Assign, BigInt};
    /// let mut i = BigInt::from(15);
    /// assert_eq!(i, 15);
    /// i.assign(23);
    /// assert_eq!(i, 23);
    /// ```
    fn assign(&mut self, src: Src);
}

#[cfg(test)]
mod tests {
    pub const U32: &[u32] = &[0, 1, 1000, 1001, u32::MAX - 1, u32::MAX];
    pub const I32: &[i32] = &[i32::MIN, -1001, -1000, -1, 0, 1, 1000, 1001, i32::MAX];
    pub const U64: &[u64] = &[0, 1, 1000, 1001, u64::MAX - 1, u64::MAX];
    pub const I64: &[i64] = &[i64::MIN, -1001, -1000, -1, 0, 1, 1000, 1001, i64::MAX];
    pub const U128: &[u128] = &[0, 1, 1000, 1001, u128::MAX - 1, u128::MAX];
    pub const I128: &[i128] =
        &[i128::MIN, -1001, -1000, -1, 0, 1, 1000, 1001, i128::MAX];
}
