use core::{
    cmp::{Ord, Ordering, PartialOrd},
    fmt::{Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::{One, Zero};
use unroll::unroll_for_loops;

use crate::{
    biginteger::{arithmetic as fa, BigInteger as _BigInteger, BigInteger384 as BigInteger},
    fields::{DoubleFp384, Field, FpParameters, LegendreSymbol, PrimeField, SquareRootField},
};

pub trait Fp384Parameters: FpParameters<BigInt = BigInteger> {}

/// An element of a prime field of up to 384 bits, in Montgomery
/// representation. Every public routine takes and returns fully reduced
/// values.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Hash(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Fp384<P>(
    pub BigInteger,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub PhantomData<P>,
);

impl<P> Fp384<P> {
    #[inline]
    pub const fn new(element: BigInteger) -> Self {
        Self(element, PhantomData)
    }
}

impl<P: Fp384Parameters> Fp384<P> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.0 < P::MODULUS
    }

    /// Subtracts the modulus once; correct whenever the backing value is
    /// below `2 * P::MODULUS`.
    #[inline]
    fn reduce(&mut self) {
        if !self.is_valid() {
            self.0.sub_noborrow(&P::MODULUS);
        }
    }

}

impl<P: Fp384Parameters> Zero for Fp384<P> {
    #[inline]
    fn zero() -> Self {
        Fp384::<P>(BigInteger::from(0), PhantomData)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<P: Fp384Parameters> One for Fp384<P> {
    #[inline]
    fn one() -> Self {
        Fp384::<P>(P::R, PhantomData)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == P::R
    }
}

impl<P: Fp384Parameters> Field for Fp384<P> {
    #[inline]
    fn characteristic<'a>() -> &'a [u64] {
        P::MODULUS.as_ref()
    }

    #[inline]
    fn double(&self) -> Self {
        let mut temp = *self;
        temp.double_in_place();
        temp
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        // This cannot exceed the backing capacity.
        self.0.mul2();
        // However, it may need to be reduced.
        self.reduce();
        self
    }

    #[inline]
    fn halve(&self) -> Self {
        let mut temp = *self;
        temp.halve_in_place();
        temp
    }

    #[inline]
    fn halve_in_place(&mut self) -> &mut Self {
        let carry = if self.0.is_odd() {
            self.0.add_nocarry(&P::MODULUS)
        } else {
            false
        };
        self.0.div2();
        if carry {
            (self.0).0[5] |= 1 << 63;
        }
        self
    }

    #[inline]
    fn square(&self) -> Self {
        let mut temp = *self;
        temp.square_in_place();
        temp
    }

    #[inline]
    #[unroll_for_loops]
    #[allow(unused_braces)]
    fn square_in_place(&mut self) -> &mut Self {
        let mut r = [0u64; 12];

        let mut carry = 0;
        for i in 0..6 {
            if i < 5 {
                for j in 0..6 {
                    if j >= i + 1 {
                        r[i + j] =
                            fa::mac_with_carry(r[i + j], (self.0).0[i], (self.0).0[j], &mut carry);
                    }
                }
                r[6 + i] = carry;
                carry = 0;
            }
        }
        r[11] = r[10] >> 63;
        for i in 0..6 {
            r[10 - i] = (r[10 - i] << 1) | (r[9 - i] >> 63);
        }
        for i in 3..6 {
            r[7 - i] = (r[7 - i] << 1) | (r[6 - i] >> 63);
        }
        r[1] <<= 1;

        for i in 0..6 {
            r[2 * i] = fa::mac_with_carry(r[2 * i], (self.0).0[i], (self.0).0[i], &mut carry);
            r[2 * i + 1] = fa::adc(r[2 * i + 1], 0, &mut carry);
        }
        // Montgomery reduction
        let mut _carry2 = 0;
        for i in 0..6 {
            let k = r[i].wrapping_mul(P::INV);
            let mut carry = 0;
            fa::mac_with_carry(r[i], k, P::MODULUS.0[0], &mut carry);
            for j in 1..6 {
                r[j + i] = fa::mac_with_carry(r[j + i], k, P::MODULUS.0[j], &mut carry);
            }
            r[6 + i] = fa::adc(r[6 + i], _carry2, &mut carry);
            _carry2 = carry;
        }
        (self.0).0.copy_from_slice(&r[6..]);
        self.reduce();
        self
    }

    #[inline]
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Guajardo Kumar Paar Pelzl
            // Efficient Software-Implementation of Finite Fields with
            // Applications to Cryptography
            // Algorithm 16 (BEA for Inversion in Fp)

            let one = BigInteger::from(1);

            let mut u = self.0;
            let mut v = P::MODULUS;
            let mut b = Fp384::<P>(P::R2, PhantomData); // Avoids unnecessary reduction step.
            let mut c = Self::zero();

            while u != one && v != one {
                while u.is_even() {
                    u.div2();

                    if b.0.is_even() {
                        b.0.div2();
                    } else {
                        b.0.add_nocarry(&P::MODULUS);
                        b.0.div2();
                    }
                }

                while v.is_even() {
                    v.div2();

                    if c.0.is_even() {
                        c.0.div2();
                    } else {
                        c.0.add_nocarry(&P::MODULUS);
                        c.0.div2();
                    }
                }

                if v < u {
                    u.sub_noborrow(&v);
                    b.sub_assign(&c);
                } else {
                    v.sub_noborrow(&u);
                    c.sub_assign(&b);
                }
            }

            if u == one {
                Some(b)
            } else {
                Some(c)
            }
        }
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        if let Some(inverse) = self.inverse() {
            *self = inverse;
            Some(self)
        } else {
            None
        }
    }

    #[inline]
    fn frobenius_map(&mut self, _: usize) {
        // No-op: No effect in a prime field.
    }
}

impl<P: Fp384Parameters> PrimeField for Fp384<P> {
    type Params = P;
    type BigInt = BigInteger;
    type Double = DoubleFp384<P>;

    /// The full product of the backing representations, without the
    /// Montgomery reduction. Feeding several of these into a double-width
    /// accumulator and reducing once is what the lazy-reduction tower
    /// variants are built on.
    #[inline]
    #[unroll_for_loops]
    fn mul_unreduced(&self, other: &Self) -> DoubleFp384<P> {
        let mut r = [0u64; 12];

        for i in 0..6 {
            let mut carry = 0;
            for j in 0..6 {
                r[j + i] = fa::mac_with_carry(r[j + i], (self.0).0[i], (other.0).0[j], &mut carry);
            }
            r[6 + i] = carry;
        }

        DoubleFp384::from_limbs(r)
    }

    /// The square of the backing representation, without the Montgomery
    /// reduction.
    #[inline]
    #[unroll_for_loops]
    fn square_unreduced(&self) -> DoubleFp384<P> {
        let mut r = [0u64; 12];

        let mut carry = 0;
        for i in 0..6 {
            if i < 5 {
                for j in 0..6 {
                    if j >= i + 1 {
                        r[i + j] =
                            fa::mac_with_carry(r[i + j], (self.0).0[i], (self.0).0[j], &mut carry);
                    }
                }
                r[6 + i] = carry;
                carry = 0;
            }
        }
        r[11] = r[10] >> 63;
        for i in 0..6 {
            r[10 - i] = (r[10 - i] << 1) | (r[9 - i] >> 63);
        }
        for i in 3..6 {
            r[7 - i] = (r[7 - i] << 1) | (r[6 - i] >> 63);
        }
        r[1] <<= 1;

        for i in 0..6 {
            r[2 * i] = fa::mac_with_carry(r[2 * i], (self.0).0[i], (self.0).0[i], &mut carry);
            r[2 * i + 1] = fa::adc(r[2 * i + 1], 0, &mut carry);
        }

        DoubleFp384::from_limbs(r)
    }

    #[inline]
    fn from_repr(r: BigInteger) -> Self {
        let mut r = Fp384(r, PhantomData);
        if r.is_valid() {
            r.mul_assign(&Fp384(P::R2, PhantomData));
            r
        } else {
            Self::zero()
        }
    }

    #[inline]
    #[unroll_for_loops]
    fn into_repr(&self) -> BigInteger {
        let mut tmp = self.0;
        let mut r = tmp.0;
        // Montgomery Reduction
        for i in 0..6 {
            let k = r[i].wrapping_mul(P::INV);
            let mut carry = 0;

            fa::mac_with_carry(r[i], k, P::MODULUS.0[0], &mut carry);
            for j in 1..6 {
                r[(j + i) % 6] = fa::mac_with_carry(r[(j + i) % 6], k, P::MODULUS.0[j], &mut carry);
            }
            r[i % 6] = carry;
        }
        tmp.0 = r;
        tmp
    }

    #[inline]
    fn multiplicative_generator() -> Self {
        Fp384::<P>(P::GENERATOR, PhantomData)
    }

    #[inline]
    fn root_of_unity() -> Self {
        Fp384::<P>(P::ROOT_OF_UNITY, PhantomData)
    }
}

impl<P: Fp384Parameters> SquareRootField for Fp384<P> {
    #[inline]
    fn legendre(&self) -> LegendreSymbol {
        use crate::fields::LegendreSymbol::*;

        if self.is_zero() {
            return Zero;
        }

        // s = self^((MODULUS - 1) // 2)
        let s = self.pow(P::MODULUS_MINUS_ONE_DIV_TWO);
        if s.is_one() {
            QuadraticResidue
        } else {
            QuadraticNonResidue
        }
    }

    #[inline]
    fn sqrt(&self) -> Option<Self> {
        use crate::fields::LegendreSymbol::*;
        // Tonelli-Shanks; since `P::GENERATOR` is a quadratic non-residue,
        // `P::ROOT_OF_UNITY = P::GENERATOR ^ t` is also one (`t` is odd).
        match self.legendre() {
            Zero => Some(*self),
            QuadraticNonResidue => None,
            QuadraticResidue => {
                let mut z = Self::qnr_to_t();
                let mut w = self.pow(P::T_MINUS_ONE_DIV_TWO);
                let mut x = w * self;
                let mut b = x * &w;

                let mut v = P::TWO_ADICITY as usize;

                while !b.is_one() {
                    let mut k = 0usize;

                    let mut b2k = b;
                    while !b2k.is_one() {
                        // invariant: b2k = b^(2^k) after entering this loop
                        b2k.square_in_place();
                        k += 1;
                    }

                    let j = v - k - 1;
                    w = z;
                    for _ in 0..j {
                        w.square_in_place();
                    }

                    z = w.square();
                    b *= &z;
                    x *= &w;
                    v = k;
                }

                Some(x)
            }
        }
    }

    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        (*self).sqrt().map(|sqrt| {
            *self = sqrt;
            self
        })
    }
}

impl<P: Fp384Parameters> Ord for Fp384<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_repr().cmp(&other.into_repr())
    }
}

impl<P: Fp384Parameters> PartialOrd for Fp384<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Fp384Parameters> From<u64> for Fp384<P> {
    fn from(other: u64) -> Self {
        Self::from_repr(BigInteger::from(other))
    }
}

impl<P: Fp384Parameters> From<BigInteger> for Fp384<P> {
    fn from(other: BigInteger) -> Self {
        Self::from_repr(other)
    }
}

impl<P: Fp384Parameters> rand::distributions::Distribution<Fp384<P>>
    for rand::distributions::Standard
{
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Fp384<P> {
        loop {
            let mut tmp = Fp384(rng.sample(rand::distributions::Standard), PhantomData);
            // Mask away the unused bits at the beginning.
            if let Some(val) = tmp.0.as_mut().last_mut() {
                *val &= core::u64::MAX >> P::REPR_SHAVE_BITS;
            }

            if tmp.is_valid() {
                return tmp;
            }
        }
    }
}

impl<P: Fp384Parameters> Display for Fp384<P> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp384({})", self.into_repr())
    }
}

impl<P: Fp384Parameters> Neg for Fp384<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        if !self.is_zero() {
            let mut tmp = P::MODULUS;
            tmp.sub_noborrow(&self.0);
            Fp384::<P>(tmp, PhantomData)
        } else {
            self
        }
    }
}

impl<'a, P: Fp384Parameters> Add<&'a Fp384<P>> for Fp384<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &Self) -> Self {
        let mut result = self;
        result.add_assign(other);
        result
    }
}

impl<'a, P: Fp384Parameters> Sub<&'a Fp384<P>> for Fp384<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &Self) -> Self {
        let mut result = self;
        result.sub_assign(other);
        result
    }
}

impl<'a, P: Fp384Parameters> Mul<&'a Fp384<P>> for Fp384<P> {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(other);
        result
    }
}

impl<'a, P: Fp384Parameters> Div<&'a Fp384<P>> for Fp384<P> {
    type Output = Self;

    #[inline]
    fn div(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(&other.inverse().unwrap());
        result
    }
}

impl_additive_ops_from_ref!(Fp384, Fp384Parameters);
impl_multiplicative_ops_from_ref!(Fp384, Fp384Parameters);

impl<'a, P: Fp384Parameters> AddAssign<&'a Self> for Fp384<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        // This cannot exceed the backing capacity.
        self.0.add_nocarry(&other.0);
        // However, it may need to be reduced
        self.reduce();
    }
}

impl<'a, P: Fp384Parameters> SubAssign<&'a Self> for Fp384<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        // If `other` is larger than `self`, add the modulus to self first.
        if other.0 > self.0 {
            self.0.add_nocarry(&P::MODULUS);
        }
        self.0.sub_noborrow(&other.0);
    }
}

impl<'a, P: Fp384Parameters> MulAssign<&'a Self> for Fp384<P> {
    /// Montgomery multiplication, using the "no-carry optimization" of the
    /// CIOS schedule when `P::MODULUS` has (a) a zero MSB, and (b) at
    /// least one zero bit in the rest of the modulus.
    #[inline]
    #[unroll_for_loops]
    fn mul_assign(&mut self, other: &Self) {
        // Checking the modulus at compile time
        let first_bit_set = P::MODULUS.0[5] >> 63 != 0;
        let mut all_bits_set = P::MODULUS.0[5] == !0 - (1 << 63);
        for i in 1..6 {
            all_bits_set &= P::MODULUS.0[6 - i - 1] == !0u64;
        }
        let _no_carry: bool = !(first_bit_set || all_bits_set);

        // No-carry optimisation applied to CIOS
        if _no_carry {
            let mut r = [0u64; 6];
            let mut carry1 = 0u64;
            let mut carry2 = 0u64;

            for i in 0..6 {
                r[0] = fa::mac(r[0], (self.0).0[0], (other.0).0[i], &mut carry1);
                let k = r[0].wrapping_mul(P::INV);
                fa::mac_discard(r[0], k, P::MODULUS.0[0], &mut carry2);
                for j in 1..6 {
                    r[j] = fa::mac_with_carry(r[j], (self.0).0[j], (other.0).0[i], &mut carry1);
                    r[j - 1] = fa::mac_with_carry(r[j], k, P::MODULUS.0[j], &mut carry2);
                }
                r[5] = carry1 + carry2;
            }
            (self.0).0 = r;
            self.reduce();
        // Alternative implementation
        } else {
            let mut r = [0u64; 12];

            for i in 0..6 {
                let mut carry = 0;
                for j in 0..6 {
                    r[j + i] =
                        fa::mac_with_carry(r[j + i], (self.0).0[i], (other.0).0[j], &mut carry);
                }
                r[6 + i] = carry;
            }
            // Montgomery reduction
            let mut _carry2 = 0;
            for i in 0..6 {
                let k = r[i].wrapping_mul(P::INV);
                let mut carry = 0;
                fa::mac_with_carry(r[i], k, P::MODULUS.0[0], &mut carry);
                for j in 1..6 {
                    r[j + i] = fa::mac_with_carry(r[j + i], k, P::MODULUS.0[j], &mut carry);
                }
                r[6 + i] = fa::adc(r[6 + i], _carry2, &mut carry);
                _carry2 = carry;
            }
            (self.0).0.copy_from_slice(&r[6..]);
            self.reduce();
        }
    }
}

impl<'a, P: Fp384Parameters> DivAssign<&'a Self> for Fp384<P> {
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        self.mul_assign(&other.inverse().unwrap());
    }
}
