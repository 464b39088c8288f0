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

//! Normalized long division.

use crate::bigint::limbs::{self, Sign, BASE};
use crate::BigInt;
use std::cmp::Ordering;

pub(crate) fn tdiv_q(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    tdiv_qr(lhs, rhs).0
}

pub(crate) fn tdiv_r(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    tdiv_qr(lhs, rhs).1
}

/// School-book long division on normalized magnitudes, truncating
/// toward zero. The quotient is non-negative when the operand signs
/// agree; the remainder takes the dividend's sign, except that a zero
/// remainder is non-negative.
///
/// # Panics
///
/// Panics if `divisor` is zero.
pub(crate) fn tdiv_qr(dividend: &BigInt, divisor: &BigInt) -> (BigInt, BigInt) {
    assert!(!divisor.is_zero(), "division by zero");

    let quotient_sign = dividend.sign.product(divisor.sign);

    match limbs::cmp_abs(&dividend.limbs, &divisor.limbs) {
        Ordering::Less => return (BigInt::new(), dividend.clone()),
        Ordering::Equal => {
            let quotient = BigInt {
                sign: quotient_sign,
                limbs: vec![1],
            };
            return (quotient, BigInt::new());
        }
        Ordering::Greater => {}
    }
    if divisor.limbs.len() == 1 && divisor.limbs[0] == 1 {
        let mut quotient = dividend.clone();
        quotient.sign = quotient_sign;
        return (quotient, BigInt::new());
    }

    // Scale both magnitudes so the divisor's top limb reaches
    // BASE / 2; the two-word trial digit below then overshoots by at
    // most two.
    let top = divisor.limbs[divisor.limbs.len() - 1];
    let scale = BASE / (top + 1);
    let mut rem = BigInt {
        sign: Sign::Positive,
        limbs: limbs::mul_abs_limb(&dividend.limbs, scale),
    };
    let div = BigInt {
        sign: Sign::Positive,
        limbs: limbs::mul_abs_limb(&divisor.limbs, scale),
    };

    let n = div.limbs.len();
    let m = rem.limbs.len() - n;
    let top_div = div.limbs[n - 1];

    // After scaling the quotient digit at position m can only be 0 or
    // 1, so it is resolved by one compare-and-subtract.
    let mut digits = Vec::with_capacity(m + 1);
    let shifted = shift_limbs(&div, m);
    if limbs::cmp_abs(&rem.limbs, &shifted.limbs) != Ordering::Less {
        rem = limbs::sub(&rem, &shifted);
        digits.push(1);
    } else {
        digits.push(0);
    }

    for j in (0..m).rev() {
        let hi = limb_at(&rem, n + j);
        let lo = limb_at(&rem, n + j - 1);
        let num = u128::from(hi) * u128::from(BASE) + u128::from(lo);
        let mut qhat = (num / u128::from(top_div)) as u64;
        if qhat > BASE - 1 {
            qhat = BASE - 1;
        }
        let step = shift_limbs(&div, j);
        if qhat > 0 {
            rem = limbs::sub(&rem, &limb_multiple(&step, qhat));
            while rem.sign.is_negative() {
                qhat -= 1;
                rem = limbs::add(&rem, &step);
            }
        }
        digits.push(qhat);
    }

    digits.reverse();
    let mut quotient = BigInt {
        sign: quotient_sign,
        limbs: digits,
    };
    quotient.normalize();

    // undo the scaling; this single-limb division is exact
    let (unscaled, _) = limbs::div_abs_limb(&rem.limbs, scale);
    let mut remainder = BigInt {
        sign: dividend.sign,
        limbs: unscaled,
    };
    remainder.normalize();
    (quotient, remainder)
}

#[inline]
fn limb_at(i: &BigInt, index: usize) -> u64 {
    i.limbs.get(index).copied().unwrap_or(0)
}

/// `i` shifted left by `count` limbs.
fn shift_limbs(i: &BigInt, count: usize) -> BigInt {
    let mut limbs = Vec::with_capacity(i.limbs.len() + count);
    limbs.resize(count, 0);
    limbs.extend_from_slice(&i.limbs);
    BigInt {
        sign: i.sign,
        limbs,
    }
}

fn limb_multiple(i: &BigInt, scalar: u64) -> BigInt {
    BigInt {
        sign: i.sign,
        limbs: limbs::mul_abs_limb(&i.limbs, scalar),
    }
}

#[cfg(test)]
mod tests {
    use super::tdiv_qr;
    use crate::BigInt;
    use std::cmp::Ordering;

    fn check_identity(a: &BigInt, b: &BigInt) {
        let (q, r) = tdiv_qr(a, b);
        assert_eq!(&q * b + &r, *a, "identity failed for {} / {}", a, b);
        // |r| < |b|
        assert!(
            r.clone().abs() < b.clone().abs(),
            "remainder {} too large for divisor {}",
            r,
            b
        );
        // the remainder has the dividend's sign unless it is zero
        if r.cmp0() != Ordering::Equal {
            assert_eq!(r.cmp0(), a.cmp0());
        }
        // operator forms agree with the combined form
        assert_eq!(a / b, q);
        assert_eq!(a % b, r);
    }

    #[test]
    fn check_identity_grid() {
        let strings = [
            "1",
            "2",
            "3",
            "7",
            "10",
            "6857",
            "999999999999999999",
            "1000000000000000000",
            "1000000000000000001",
            "18446744073709551616",
            "123456789123456789123456789",
            "999999999999999999999999999999999999",
            "1000000000000000000000000000000000000000000000000001",
        ];
        let mut values = Vec::new();
        for s in strings {
            let i = s.parse::<BigInt>().unwrap();
            values.push(-i.clone());
            values.push(i);
        }
        for a in &values {
            for b in &values {
                check_identity(a, b);
            }
        }
    }

    #[test]
    fn check_short_paths() {
        // |a| < |b|
        let (q, r) = tdiv_qr(&BigInt::from(5), &BigInt::from(-7));
        assert_eq!(q, 0);
        assert_eq!(r, 5);
        // |a| == |b|
        let (q, r) = tdiv_qr(&BigInt::from(-7), &BigInt::from(7));
        assert_eq!(q, -1);
        assert_eq!(r, 0);
        // b == 1 and b == -1
        let big = "123456789012345678901234567890".parse::<BigInt>().unwrap();
        let (q, r) = tdiv_qr(&big, &BigInt::from(1));
        assert_eq!(q, big);
        assert_eq!(r, 0);
        let (q, r) = tdiv_qr(&big, &BigInt::from(-1));
        assert_eq!(q, -big.clone());
        assert_eq!(r, 0);
    }

    #[test]
    fn check_truncation_signs() {
        let (q, r) = tdiv_qr(&BigInt::from(-7), &BigInt::from(3));
        assert_eq!(q, -2);
        assert_eq!(r, -1);
        let (q, r) = tdiv_qr(&BigInt::from(7), &BigInt::from(-3));
        assert_eq!(q, -2);
        assert_eq!(r, 1);
        let (q, r) = tdiv_qr(&BigInt::from(-7), &BigInt::from(-3));
        assert_eq!(q, 2);
        assert_eq!(r, -1);
    }

    #[test]
    fn check_long_division() {
        let dividend = "1000000000000000000000".parse::<BigInt>().unwrap();
        let (q, r) = tdiv_qr(&dividend, &BigInt::from(3));
        assert_eq!(q.to_string(), "333333333333333333333");
        assert_eq!(r, 1);

        // divisor with a small top limb exercises the scaling step
        let dividend = "98765432109876543210987654321098765432109876543210"
            .parse::<BigInt>()
            .unwrap();
        let divisor = "1000000000000000000000000000000001"
            .parse::<BigInt>()
            .unwrap();
        let (q, r) = tdiv_qr(&dividend, &divisor);
        assert_eq!(&q * &divisor + &r, dividend);
        assert_eq!(q, "98765432109876543".parse::<BigInt>().unwrap());

        // quotient digits of BASE - 1
        let base_minus_1 = BigInt::from(crate::bigint::limbs::BASE - 1);
        let divisor = "1000000000000000000000000000000000000"
            .parse::<BigInt>()
            .unwrap();
        let dividend = &divisor * &base_minus_1 + &base_minus_1;
        let (q, r) = tdiv_qr(&dividend, &divisor);
        assert_eq!(q, base_minus_1);
        assert_eq!(r, base_minus_1);
    }

    #[test]
    fn check_largest_prime_factor() {
        // trial division of 600851475143 terminates at 6857
        let mut n = "600851475143".parse::<BigInt>().unwrap();
        let mut i = BigInt::from(2);
        while &i * &i <= n {
            if (&n % &i).cmp0() == Ordering::Equal {
                n /= &i;
            } else {
                i.incr();
            }
        }
        assert_eq!(n, 6857);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn check_division_by_zero() {
        let _ = tdiv_qr(&BigInt::from(42), &BigInt::new());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn check_rem_by_zero() {
        let _ = BigInt::from(42) % BigInt::new();
    }
}
