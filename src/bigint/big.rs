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

use crate::bigint::division;
use crate::bigint::limbs::{self, Sign, BASE};
use crate::ops::Pow;
use az::CheckedCast;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An arbitrary-precision signed integer.
///
/// The magnitude is stored as little-endian base-10<sup>18</sup>
/// limbs, so each limb holds 18 decimal digits and decimal I/O never
/// rounds. Standard arithmetic operations and comparisons are
/// supported; in comparisons you can mix `BigInt` and primitive
/// integer types.
///
/// # Examples
///
/// ```rust
/// use decint::BigInt;
///
/// let a = "123456789012345678901234567890".parse::<BigInt>().unwrap();
/// let b = BigInt::from(-99_999_999_999_999_999_i64);
/// let sum = &a + &b;
/// assert_eq!(sum.to_string(), "123456789012245678901234567891");
/// assert!(b < 0 && a > b);
/// ```
///
/// Every value observable from outside is normalized: no redundant
/// most-significant zero limbs, and zero is non-negative.
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<u64>,
}

impl Clone for BigInt {
    #[inline]
    fn clone(&self) -> BigInt {
        BigInt {
            sign: self.sign,
            limbs: self.limbs.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &BigInt) {
        self.sign = source.sign;
        self.limbs.clone_from(&source.limbs);
    }
}

impl BigInt {
    /// Constructs a new arbitrary-precision integer with value 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let i = BigInt::new();
    /// assert_eq!(i, 0);
    /// ```
    #[inline]
    pub fn new() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            limbs: vec![0],
        }
    }

    /// Constructs a new arbitrary-precision integer with value 0 and
    /// with storage for at least the specified number of limbs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let i = BigInt::with_capacity(10);
    /// assert!(i.capacity() >= 10);
    /// assert_eq!(i, 0);
    /// ```
    pub fn with_capacity(limbs: usize) -> BigInt {
        let mut store = Vec::with_capacity(limbs.max(1));
        store.push(0);
        BigInt {
            sign: Sign::Positive,
            limbs: store,
        }
    }

    /// Returns the number of limbs that can be stored without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limbs.capacity()
    }

    /// Constructs a `BigInt` from a sign and a little-endian limb
    /// sequence, each limb below 10<sup>18</sup>, and normalizes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let i = BigInt::from_limbs(true, vec![1, 2]);
    /// assert_eq!(i.to_string(), "-2000000000000000001");
    /// // high zero limbs and the sign of zero are normalized away
    /// let z = BigInt::from_limbs(true, vec![0, 0]);
    /// assert_eq!(z, 0);
    /// ```
    pub fn from_limbs(negative: bool, limbs: Vec<u64>) -> BigInt {
        debug_assert!(
            limbs.iter().all(|&limb| limb < BASE),
            "limb out of range"
        );
        let mut ret = BigInt {
            sign: if negative {
                Sign::Negative
            } else {
                Sign::Positive
            },
            limbs,
        };
        ret.normalize();
        ret
    }

    pub(crate) fn from_u128_parts(negative: bool, abs: u128) -> BigInt {
        let mut ret = BigInt {
            sign: if negative {
                Sign::Negative
            } else {
                Sign::Positive
            },
            limbs: limbs::limbs_from_u128(abs),
        };
        ret.normalize();
        ret
    }

    /// Re-establishes the representation invariants: strips
    /// most-significant zero limbs, represents zero as a single zero
    /// limb, and forces the sign of zero to non-negative.
    pub fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        if self.limbs.len() == 1 && self.limbs[0] == 0 {
            self.sign = Sign::Positive;
        }
    }

    /// Parses a decimal string and assigns the value to `self`.
    ///
    /// The string must match `-?[0-9]+`; a plus sign is not accepted.
    /// On error `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let mut i = BigInt::new();
    /// i.assign_str("-12345678901234567890").unwrap();
    /// assert_eq!(i.to_string(), "-12345678901234567890");
    /// let ret = i.assign_str("malformed");
    /// assert!(ret.is_err());
    /// ```
    pub fn assign_str(&mut self, src: &str) -> Result<(), ParseBigIntError> {
        use self::ParseErrorKind as Kind;
        use self::ParseBigIntError as Error;

        let bytes = src.as_bytes();
        let (sign, digits) = match bytes.first() {
            Some(&b'-') => (Sign::Negative, &bytes[1..]),
            _ => (Sign::Positive, bytes),
        };
        if digits.is_empty() {
            return Err(Error {
                kind: Kind::NoDigits,
            });
        }
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(Error {
                kind: Kind::InvalidDigit,
            });
        }
        self.sign = sign;
        self.limbs = limbs::parse_mag(digits);
        self.normalize();
        Ok(())
    }

    /// Returns the sign of `self` relative to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// use std::cmp::Ordering;
    /// assert_eq!(BigInt::from(-5).cmp0(), Ordering::Less);
    /// assert_eq!(BigInt::new().cmp0(), Ordering::Equal);
    /// assert_eq!(BigInt::from(5).cmp0(), Ordering::Greater);
    /// ```
    #[inline]
    pub fn cmp0(&self) -> Ordering {
        if self.is_zero() {
            Ordering::Equal
        } else if self.sign.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Computes the absolute value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let i = BigInt::from(-100);
    /// assert_eq!(i.abs(), 100);
    /// ```
    #[inline]
    pub fn abs(mut self) -> BigInt {
        self.abs_mut();
        self
    }

    /// Computes the absolute value in place.
    #[inline]
    pub fn abs_mut(&mut self) {
        self.sign = Sign::Positive;
    }

    /// Returns a `BigInt` with value −1, 0 or 1 according to the sign
    /// of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// assert_eq!(BigInt::from(-100).signum(), -1);
    /// assert_eq!(BigInt::new().signum(), 0);
    /// assert_eq!(BigInt::from(100).signum(), 1);
    /// ```
    pub fn signum(&self) -> BigInt {
        match self.cmp0() {
            Ordering::Less => BigInt::from(-1),
            Ordering::Equal => BigInt::new(),
            Ordering::Greater => BigInt::from(1),
        }
    }

    /// Adds one to `self`, with full sign handling across zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let mut i = BigInt::from(-1);
    /// i.incr();
    /// assert_eq!(i, 0);
    /// i.incr();
    /// assert_eq!(i, 1);
    /// ```
    pub fn incr(&mut self) {
        if self.sign.is_negative() {
            limbs::decr_abs(&mut self.limbs);
            self.normalize();
        } else {
            limbs::incr_abs(&mut self.limbs);
        }
    }

    /// Subtracts one from `self`, with full sign handling across zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let mut i = BigInt::new();
    /// i.decr();
    /// assert_eq!(i, -1);
    /// ```
    pub fn decr(&mut self) {
        if self.sign.is_negative() {
            limbs::incr_abs(&mut self.limbs);
        } else if self.is_zero() {
            self.sign = Sign::Negative;
            self.limbs[0] = 1;
        } else {
            limbs::decr_abs(&mut self.limbs);
            self.normalize();
        }
    }

    /// Performs a division producing both the quotient and remainder,
    /// truncating toward zero.
    ///
    /// The remainder has the sign of the dividend, except that a zero
    /// remainder is non-negative.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let dividend = BigInt::from(-17);
    /// let divisor = BigInt::from(5);
    /// let (quotient, rem) = dividend.div_rem(&divisor);
    /// assert_eq!(quotient, -3);
    /// assert_eq!(rem, -2);
    /// ```
    #[inline]
    pub fn div_rem(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        division::tdiv_qr(self, divisor)
    }

    /// Converts to an `i32` if the value fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let fits = BigInt::from(-50);
    /// assert_eq!(fits.to_i32(), Some(-50));
    /// let does_not_fit = BigInt::from(-123_456_789_012_345_i64);
    /// assert_eq!(does_not_fit.to_i32(), None);
    /// ```
    #[inline]
    pub fn to_i32(&self) -> Option<i32> {
        self.checked_cast()
    }

    /// Converts to an `i64` if the value fits.
    #[inline]
    pub fn to_i64(&self) -> Option<i64> {
        self.checked_cast()
    }

    /// Converts to a `u32` if the value fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// assert_eq!(BigInt::from(1234).to_u32(), Some(1234));
    /// assert_eq!(BigInt::from(-1).to_u32(), None);
    /// ```
    #[inline]
    pub fn to_u32(&self) -> Option<u32> {
        self.checked_cast()
    }

    /// Converts to a `u64` if the value fits.
    #[inline]
    pub fn to_u64(&self) -> Option<u64> {
        self.checked_cast()
    }

    /// Creates a `BigInt` from an `f32` if it is finite, rounding
    /// towards zero.
    #[inline]
    pub fn from_f32(val: f32) -> Option<BigInt> {
        BigInt::from_f64(f64::from(val))
    }

    /// Creates a `BigInt` from an `f64` if it is finite, rounding
    /// towards zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// let i = BigInt::from_f64(-5.6).unwrap();
    /// assert_eq!(i, -5);
    /// let neg_inf = BigInt::from_f64(f64::NEG_INFINITY);
    /// assert!(neg_inf.is_none());
    /// ```
    pub fn from_f64(val: f64) -> Option<BigInt> {
        if !val.is_finite() {
            return None;
        }
        let negative = val.is_sign_negative();
        let val = val.abs();
        if val < 1.0 {
            return Some(BigInt::new());
        }
        // val >= 1, so it is a normal float; decompose it into an
        // integer mantissa and a power of two
        let bits = val.to_bits();
        let exp = ((bits >> 52) & 0x7ff) as i64 - 1075;
        let mant = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        let mut ret = if exp >= 0 {
            BigInt::from(mant) * BigInt::from(2u32).pow(exp as u32)
        } else {
            BigInt::from(mant >> -exp)
        };
        if negative {
            ret = -ret;
        }
        Some(ret)
    }

    /// Converts to an `f32`, rounding to the nearest. Values too large
    /// in magnitude convert to infinities.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.to_string().parse().unwrap_or(f32::INFINITY)
    }

    /// Converts to an `f64`, rounding to the nearest. Values too large
    /// in magnitude convert to infinities.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decint::BigInt;
    /// assert_eq!(BigInt::from(255).to_f64(), 255.0);
    /// let huge = "9".repeat(400).parse::<BigInt>().unwrap();
    /// assert!(huge.to_f64().is_infinite());
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::INFINITY)
    }
}

pub(crate) fn fmt_decimal(i: &BigInt, f: &mut Formatter<'_>) -> fmt::Result {
    let mag = limbs::mag_to_string(&i.limbs);
    f.pad_integral(!i.sign.is_negative(), "", &mag)
}

/// An error which can be returned when parsing a [`BigInt`].
///
/// # Examples
///
/// ```rust
/// use decint::{BigInt, ParseBigIntError};
/// let error: ParseBigIntError = match "-12e4".parse::<BigInt>() {
///     Ok(_) => unreachable!(),
///     Err(error) => error,
/// };
/// println!("parse failed: {}", error);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseBigIntError {
    kind: ParseErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum ParseErrorKind {
    InvalidDigit,
    NoDigits,
}

impl Display for ParseBigIntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let desc = match self.kind {
            ParseErrorKind::InvalidDigit => "invalid digit found in string",
            ParseErrorKind::NoDigits => "string has no digits",
        };
        f.write_str(desc)
    }
}

impl Error for ParseBigIntError {}
