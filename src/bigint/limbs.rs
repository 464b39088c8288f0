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

//! Limb-level kernels.
//!
//! The functions here implement the arithmetic on the sign and
//! magnitude representation; the operator impls in `arith` are
//! generated from them. Magnitudes are little-endian `u64` slices
//! with every limb below [`BASE`].

use crate::BigInt;
use std::cmp::Ordering;

/// The radix of the limb representation.
pub(crate) const BASE: u64 = 1_000_000_000_000_000_000;
/// Number of decimal digits per limb.
pub(crate) const EXP: usize = 18;
/// Operands with fewer decimal digits than this multiply natively;
/// the product of two nine-digit numbers still fits in one limb.
const KARATSUBA_CUTOFF: usize = 10;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Sign {
    Negative,
    Positive,
}

impl Sign {
    #[inline]
    pub(crate) fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    #[inline]
    pub(crate) fn negate(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }

    /// The sign of a product or quotient of operands with these signs.
    #[inline]
    pub(crate) fn product(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Compares two normalized magnitudes.
pub(crate) fn cmp_abs(lhs: &[u64], rhs: &[u64]) -> Ordering {
    // a shorter normalized magnitude is always smaller
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

/// School-book addition of magnitudes.
pub(crate) fn add_abs(lhs: &[u64], rhs: &[u64]) -> Vec<u64> {
    let (short, long) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = false;
    for (i, &limb) in short.iter().enumerate() {
        let mut s = limb + long[i] + u64::from(carry);
        carry = s >= BASE;
        if carry {
            s -= BASE;
        }
        sum.push(s);
    }
    // the x + 0 columns of the longer operand
    for &limb in &long[short.len()..] {
        let mut s = limb + u64::from(carry);
        carry = s >= BASE;
        if carry {
            s -= BASE;
        }
        sum.push(s);
    }
    if carry {
        sum.push(1);
    }
    sum
}

/// School-book subtraction of magnitudes; `lhs` must not be smaller
/// than `rhs`.
pub(crate) fn sub_abs(lhs: &[u64], rhs: &[u64]) -> Vec<u64> {
    debug_assert!(cmp_abs(lhs, rhs) != Ordering::Less);
    let mut minuend = lhs.to_vec();
    let mut difference = Vec::with_capacity(lhs.len());
    for (i, &limb) in rhs.iter().enumerate() {
        if minuend[i] < limb {
            // borrow from the next non-zero limb, turning the zero
            // limbs along the way into BASE - 1
            minuend[i] += BASE;
            let mut j = i + 1;
            while minuend[j] == 0 {
                minuend[j] = BASE - 1;
                j += 1;
            }
            minuend[j] -= 1;
        }
        difference.push(minuend[i] - limb);
    }
    // the x - 0 columns
    difference.extend_from_slice(&minuend[rhs.len()..]);
    difference
}

/// Adds one to a magnitude.
pub(crate) fn incr_abs(limbs: &mut Vec<u64>) {
    for limb in limbs.iter_mut() {
        if *limb == BASE - 1 {
            *limb = 0;
        } else {
            *limb += 1;
            return;
        }
    }
    // the carry ran off the top
    limbs.push(1);
}

/// Subtracts one from a non-zero magnitude; the caller normalizes.
pub(crate) fn decr_abs(limbs: &mut [u64]) {
    for limb in limbs.iter_mut() {
        if *limb == 0 {
            *limb = BASE - 1;
        } else {
            *limb -= 1;
            break;
        }
    }
}

/// Multiplies a magnitude by a single limb.
pub(crate) fn mul_abs_limb(limbs: &[u64], scalar: u64) -> Vec<u64> {
    debug_assert!(scalar < BASE);
    let mut out = Vec::with_capacity(limbs.len() + 1);
    let mut carry: u64 = 0;
    for &limb in limbs {
        let t = u128::from(limb) * u128::from(scalar) + u128::from(carry);
        out.push((t % u128::from(BASE)) as u64);
        carry = (t / u128::from(BASE)) as u64;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Divides a magnitude by a single limb, returning quotient limbs and
/// the remainder.
pub(crate) fn div_abs_limb(limbs: &[u64], divisor: u64) -> (Vec<u64>, u64) {
    debug_assert!(divisor > 0);
    let mut out = vec![0; limbs.len()];
    let mut rem: u64 = 0;
    for (i, &limb) in limbs.iter().enumerate().rev() {
        let cur = u128::from(rem) * u128::from(BASE) + u128::from(limb);
        out[i] = (cur / u128::from(divisor)) as u64;
        rem = (cur % u128::from(divisor)) as u64;
    }
    (out, rem)
}

/// Parses a validated magnitude into limbs, scanning right to left in
/// chunks of [`EXP`] digits; the leftmost chunk may be short.
pub(crate) fn parse_mag(digits: &[u8]) -> Vec<u64> {
    debug_assert!(!digits.is_empty());
    debug_assert!(digits.iter().all(u8::is_ascii_digit));
    let mut limbs = Vec::with_capacity(digits.len() / EXP + 1);
    let mut rest = digits;
    while rest.len() > EXP {
        let (head, tail) = rest.split_at(rest.len() - EXP);
        limbs.push(parse_chunk(tail));
        rest = head;
    }
    limbs.push(parse_chunk(rest));
    limbs
}

fn parse_chunk(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0, |acc, &b| acc * 10 + u64::from(b - b'0'))
}

/// Formats a magnitude: the most-significant limb without padding,
/// every lower limb zero-padded to [`EXP`] digits.
pub(crate) fn mag_to_string(limbs: &[u64]) -> String {
    let mut str = String::with_capacity(limbs.len() * EXP);
    let mut iter = limbs.iter().rev();
    if let Some(first) = iter.next() {
        str.push_str(&first.to_string());
    }
    for limb in iter {
        str.push_str(&format!("{:0width$}", limb, width = EXP));
    }
    str
}

pub(crate) fn limbs_from_u128(val: u128) -> Vec<u64> {
    let base = u128::from(BASE);
    let mut limbs = Vec::with_capacity(3);
    let mut val = val;
    loop {
        limbs.push((val % base) as u64);
        val /= base;
        if val == 0 {
            break;
        }
    }
    limbs
}

/// The magnitude as a `u128`, or `None` if it does not fit.
pub(crate) fn mag_checked_u128(limbs: &[u64]) -> Option<u128> {
    let mut val: u128 = 0;
    for &limb in limbs.iter().rev() {
        val = val
            .checked_mul(u128::from(BASE))?
            .checked_add(u128::from(limb))?;
    }
    Some(val)
}

/// The magnitude reduced modulo 2^128.
pub(crate) fn mag_wrapping_u128(limbs: &[u64]) -> u128 {
    let mut val: u128 = 0;
    for &limb in limbs.iter().rev() {
        val = val
            .wrapping_mul(u128::from(BASE))
            .wrapping_add(u128::from(limb));
    }
    val
}

macro_rules! fits_unsigned_fn {
    ($fn:ident, $T:ty) => {
        pub(crate) fn $fn(i: &BigInt) -> bool {
            i.sign == Sign::Positive
                && matches!(
                    mag_checked_u128(&i.limbs),
                    Some(v) if v <= <$T>::MAX as u128
                )
        }
    };
}

macro_rules! fits_signed_fn {
    ($fn:ident, $T:ty) => {
        pub(crate) fn $fn(i: &BigInt) -> bool {
            match mag_checked_u128(&i.limbs) {
                None => false,
                Some(v) => match i.sign {
                    Sign::Negative => v <= <$T>::MIN.unsigned_abs() as u128,
                    Sign::Positive => v <= <$T>::MAX as u128,
                },
            }
        }
    };
}

fits_signed_fn! { fits_i8, i8 }
fits_signed_fn! { fits_i16, i16 }
fits_signed_fn! { fits_i32, i32 }
fits_signed_fn! { fits_i64, i64 }
fits_signed_fn! { fits_i128, i128 }
fits_signed_fn! { fits_isize, isize }
fits_unsigned_fn! { fits_u8, u8 }
fits_unsigned_fn! { fits_u16, u16 }
fits_unsigned_fn! { fits_u32, u32 }
fits_unsigned_fn! { fits_u64, u64 }
fits_unsigned_fn! { fits_u128, u128 }
fits_unsigned_fn! { fits_usize, usize }

/// Flips the sign; zero keeps its canonical non-negative sign.
pub(crate) fn neg(rop: &mut BigInt) {
    if !rop.is_zero() {
        rop.sign = rop.sign.negate();
    }
}

pub(crate) fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.sign == rhs.sign {
        let mut ret = BigInt {
            sign: lhs.sign,
            limbs: add_abs(&lhs.limbs, &rhs.limbs),
        };
        ret.normalize();
        return ret;
    }
    // mixed signs reduce to a subtraction of magnitudes
    let (sign, limbs) = match cmp_abs(&lhs.limbs, &rhs.limbs) {
        Ordering::Less => (rhs.sign, sub_abs(&rhs.limbs, &lhs.limbs)),
        Ordering::Equal => return BigInt::new(),
        Ordering::Greater => (lhs.sign, sub_abs(&lhs.limbs, &rhs.limbs)),
    };
    let mut ret = BigInt { sign, limbs };
    ret.normalize();
    ret
}

pub(crate) fn sub(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.sign != rhs.sign {
        // a - (-b) = a + b and (-a) - b = -(a + b)
        let mut ret = BigInt {
            sign: lhs.sign,
            limbs: add_abs(&lhs.limbs, &rhs.limbs),
        };
        ret.normalize();
        return ret;
    }
    let (sign, limbs) = match cmp_abs(&lhs.limbs, &rhs.limbs) {
        Ordering::Less => (lhs.sign.negate(), sub_abs(&rhs.limbs, &lhs.limbs)),
        Ordering::Equal => return BigInt::new(),
        Ordering::Greater => (lhs.sign, sub_abs(&lhs.limbs, &rhs.limbs)),
    };
    let mut ret = BigInt { sign, limbs };
    ret.normalize();
    ret
}

pub(crate) fn mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.is_zero() || rhs.is_zero() {
        return BigInt::new();
    }
    let mut ret = karatsuba(
        &mag_to_string(&lhs.limbs),
        &mag_to_string(&rhs.limbs),
    );
    ret.sign = lhs.sign.product(rhs.sign);
    ret
}

/// Karatsuba multiplication over decimal magnitude strings. Splitting
/// and shifting are string operations, so the recursion never has to
/// align anything to limb boundaries.
fn karatsuba(lhs: &str, rhs: &str) -> BigInt {
    if lhs.bytes().all(|b| b == b'0') || rhs.bytes().all(|b| b == b'0') {
        return BigInt::new();
    }
    if lhs.len() < KARATSUBA_CUTOFF && rhs.len() < KARATSUBA_CUTOFF {
        let product = parse_chunk(lhs.as_bytes()) * parse_chunk(rhs.as_bytes());
        return BigInt {
            sign: Sign::Positive,
            limbs: vec![product],
        };
    }

    let m = lhs.len().max(rhs.len());
    let n = m / 2;
    // low halves get exactly n digits; a short operand contributes a
    // zero high half
    let (a, b) = split_at_low(lhs, n);
    let (c, d) = split_at_low(rhs, n);

    let ac = karatsuba(a, c);
    let bd = karatsuba(b, d);
    let ab = add(&from_decimal(a), &from_decimal(b));
    let cd = add(&from_decimal(c), &from_decimal(d));
    let mid = sub(
        &sub(&karatsuba(&ab.to_string(), &cd.to_string()), &ac),
        &bd,
    );

    let high = from_decimal(&shift10(&ac.to_string(), 2 * n));
    let middle = from_decimal(&shift10(&mid.to_string(), n));
    add(&add(&high, &middle), &bd)
}

fn split_at_low(digits: &str, n: usize) -> (&str, &str) {
    if digits.len() > n {
        digits.split_at(digits.len() - n)
    } else {
        ("0", digits)
    }
}

fn from_decimal(digits: &str) -> BigInt {
    let mut ret = BigInt {
        sign: Sign::Positive,
        limbs: parse_mag(digits.as_bytes()),
    };
    ret.normalize();
    ret
}

fn shift10(digits: &str, zeros: usize) -> String {
    let mut shifted = String::with_capacity(digits.len() + zeros);
    shifted.push_str(digits);
    shifted.extend(std::iter::repeat('0').take(zeros));
    shifted
}

/// Square-and-multiply over the binary digits of the exponent.
pub(crate) fn pow_u32(base: &BigInt, exp: u32) -> BigInt {
    // the exponent check comes first so that 0^0 == 1
    if exp == 0 {
        return BigInt::from(1u32);
    }
    if base.is_zero() {
        return BigInt::new();
    }
    let mut base = base.clone();
    let mut exp = exp;
    let mut res = BigInt::from(1u32);
    while exp > 0 {
        if exp % 2 == 1 {
            res = mul(&res, &base);
        }
        base = mul(&base, &base);
        exp /= 2;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_cmp_abs() {
        assert_eq!(cmp_abs(&[0], &[0]), Ordering::Equal);
        assert_eq!(cmp_abs(&[1], &[2]), Ordering::Less);
        assert_eq!(cmp_abs(&[5, 1], &[9]), Ordering::Greater);
        assert_eq!(cmp_abs(&[9, 1], &[0, 2]), Ordering::Less);
        assert_eq!(cmp_abs(&[0, 1, 2], &[5, 0, 2]), Ordering::Less);
        assert_eq!(cmp_abs(&[5, 0, 2], &[5, 0, 2]), Ordering::Equal);
    }

    #[test]
    fn check_add_abs_carry_chain() {
        // (BASE - 1) + 1 carries into a new limb
        assert_eq!(add_abs(&[BASE - 1], &[1]), [0, 1]);
        // carry propagates across every limb
        assert_eq!(
            add_abs(&[BASE - 1, BASE - 1, BASE - 1], &[1]),
            [0, 0, 0, 1]
        );
        assert_eq!(add_abs(&[2, 1], &[3]), [5, 1]);
    }

    #[test]
    fn check_sub_abs_borrow_chain() {
        // borrowing across zero limbs writes BASE - 1 through them;
        // the high zero limb is left for the caller to normalize
        assert_eq!(sub_abs(&[0, 0, 1], &[1]), [BASE - 1, BASE - 1, 0]);
        assert_eq!(sub_abs(&[5, 7], &[6]), [BASE - 1, 6]);
        assert_eq!(sub_abs(&[5, 7], &[5, 7]), [0, 0]);
    }

    #[test]
    fn check_incr_decr_abs() {
        let mut limbs = vec![BASE - 1];
        incr_abs(&mut limbs);
        assert_eq!(limbs, [0, 1]);
        decr_abs(&mut limbs);
        assert_eq!(limbs, [BASE - 1, 0]);

        let mut limbs = vec![41];
        incr_abs(&mut limbs);
        assert_eq!(limbs, [42]);
    }

    #[test]
    fn check_scalar_ops() {
        assert_eq!(mul_abs_limb(&[BASE - 1], BASE - 1), [1, BASE - 2]);
        assert_eq!(mul_abs_limb(&[7, 3], 2), [14, 6]);
        let (q, r) = div_abs_limb(&[14, 6], 2);
        assert_eq!(q, [7, 3]);
        assert_eq!(r, 0);
        let (q, r) = div_abs_limb(&[1, 1], 2);
        assert_eq!(q, [500_000_000_000_000_000, 0]);
        assert_eq!(r, 1);
    }

    #[test]
    fn check_parse_format_mag() {
        let limbs = parse_mag(b"1234567890123456789012345");
        assert_eq!(limbs, [890_123_456_789_012_345, 1_234_567]);
        assert_eq!(mag_to_string(&limbs), "1234567890123456789012345");
        assert_eq!(parse_mag(b"0"), [0]);
        assert_eq!(mag_to_string(&[0]), "0");
        // lower limbs are zero-padded to the full limb width
        assert_eq!(mag_to_string(&[1, 1]), "1000000000000000000001");
    }

    #[test]
    fn check_u128_conversions() {
        assert_eq!(limbs_from_u128(0), [0]);
        assert_eq!(limbs_from_u128(u128::from(BASE)), [0, 1]);
        assert_eq!(mag_checked_u128(&[0, 1]), Some(u128::from(BASE)));
        assert_eq!(mag_checked_u128(&limbs_from_u128(u128::MAX)), Some(u128::MAX));
        // four limbs are always out of u128 range
        assert_eq!(mag_checked_u128(&[0, 0, 0, 1]), None);
        assert_eq!(
            mag_wrapping_u128(&limbs_from_u128(u128::MAX)),
            u128::MAX
        );
    }

    #[test]
    fn check_karatsuba_native_case() {
        let i = karatsuba("123456789", "987654321");
        assert_eq!(mag_to_string(&i.limbs), "121932631112635269");
    }

    #[test]
    fn check_karatsuba_recursive() {
        // 19 digits forces at least one split
        let i = karatsuba("1234567890123456789", "9876543210987654321");
        assert_eq!(
            mag_to_string(&i.limbs),
            "12193263113702179522374638011112635269"
        );
        let sq = karatsuba("99999999999999999999", "99999999999999999999");
        assert_eq!(
            mag_to_string(&sq.limbs),
            "9999999999999999999800000000000000000001"
        );
        assert!(karatsuba("000000000000000000000", "5").is_zero());
    }

    #[test]
    fn check_pow() {
        assert_eq!(pow_u32(&BigInt::new(), 0), 1);
        assert_eq!(pow_u32(&BigInt::new(), 5), 0);
        assert_eq!(pow_u32(&BigInt::from(7), 0), 1);
        assert_eq!(pow_u32(&BigInt::from(2), 10), 1024);
        assert_eq!(pow_u32(&BigInt::from(-3), 3), -27);
        assert_eq!(pow_u32(&BigInt::from(-2), 8), 256);
        assert_eq!(
            pow_u32(&BigInt::from(10), 20).to_string(),
            "100000000000000000000"
        );
    }
}
