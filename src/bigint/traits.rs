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

use crate::bigint::big::{self, ParseBigIntError};
use crate::{Assign, BigInt};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt::new()
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        big::fmt_decimal(self, f)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        big::fmt_decimal(self, f)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;
    fn from_str(src: &str) -> Result<BigInt, ParseBigIntError> {
        let mut i = BigInt::new();
        i.assign_str(src)?;
        Ok(i)
    }
}

impl Assign for BigInt {
    #[inline]
    fn assign(&mut self, mut src: BigInt) {
        mem::swap(self, &mut src);
    }
}

impl Assign<&BigInt> for BigInt {
    #[inline]
    fn assign(&mut self, src: &BigInt) {
        self.clone_from(src);
    }
}

from_signed! { i8 i16 i32 i64 i128 isize }
from_unsigned! { u8 u16 u32 u64 u128 usize }

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.limbs.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Assign, BigInt};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn check_from_primitives() {
        assert_eq!(BigInt::from(0u8), 0);
        assert_eq!(BigInt::from(-1i8), -1);
        assert_eq!(BigInt::from(i32::MIN).to_string(), "-2147483648");
        assert_eq!(
            BigInt::from(u64::MAX).to_string(),
            "18446744073709551615"
        );
        assert_eq!(
            BigInt::from(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728"
        );
        assert_eq!(
            BigInt::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
        assert_eq!(BigInt::from(usize::MIN), 0);
    }

    #[test]
    fn check_assign() {
        let mut i = BigInt::new();
        i.assign(12i32);
        assert_eq!(i, 12);
        i.assign(BigInt::from(-5));
        assert_eq!(i, -5);
        let other = BigInt::from(1000);
        i.assign(&other);
        assert_eq!(i, 1000);
        assert_eq!(other, 1000);
    }

    #[test]
    fn check_default() {
        assert_eq!(BigInt::default(), BigInt::new());
    }

    #[test]
    fn check_from_matches_primitive_display() {
        use crate::tests::{I128, I32, I64, U128, U32, U64};
        for &x in U32 {
            assert_eq!(BigInt::from(x).to_string(), x.to_string());
        }
        for &x in I32 {
            assert_eq!(BigInt::from(x).to_string(), x.to_string());
        }
        for &x in U64 {
            assert_eq!(BigInt::from(x).to_string(), x.to_string());
        }
        for &x in I64 {
            assert_eq!(BigInt::from(x).to_string(), x.to_string());
        }
        for &x in U128 {
            assert_eq!(BigInt::from(x).to_string(), x.to_string());
        }
        for &x in I128 {
            assert_eq!(BigInt::from(x).to_string(), x.to_string());
        }
    }

    fn hash_of<T: Hash>(t: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn check_hash_consistent_with_eq() {
        let a = "123456789012345678901234567890".parse::<BigInt>().unwrap();
        let b = "0123456789012345678901234567890".parse::<BigInt>().unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        let zero_a = "0".parse::<BigInt>().unwrap();
        let zero_b = "-0000".parse::<BigInt>().unwrap();
        assert_eq!(zero_a, zero_b);
        assert_eq!(hash_of(&zero_a), hash_of(&zero_b));
    }
}
