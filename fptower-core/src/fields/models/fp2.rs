use crate::UniformRand;
use core::{
    cmp::{Ord, Ordering, PartialOrd},
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::{One, Zero};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::fields::{
    DoubleFp2, DoubleWidth, Field, FpParameters, LegendreSymbol, PrimeField, SquareRootField,
};

pub trait Fp2Parameters: 'static + Send + Sync {
    type Fp: PrimeField + SquareRootField;

    /// The quadratic non-residue of the base prime field adjoined as `u`.
    const NONRESIDUE: Self::Fp;

    /// A quadratic non-residue of this extension, used by the square root.
    const QUADRATIC_NONRESIDUE: (Self::Fp, Self::Fp);

    /// Coefficients for the Frobenius automorphism.
    const FROBENIUS_COEFF_FP2_C1: &'static [Self::Fp];

    /// log2 of the scalar part of the adjoined non-residue one level up,
    /// for primes with p = 7 (mod 8). Unused otherwise.
    const NONRESIDUE_SHIFT: u32 = 0;

    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * fe
    }

    /// The non-residue twist in the double-width accumulator domain.
    fn mul_fp_by_nonresidue_double(
        fe: &<Self::Fp as PrimeField>::Double,
    ) -> <Self::Fp as PrimeField>::Double;
}

#[derive(Derivative)]
#[derivative(
    Default(bound = "P: Fp2Parameters"),
    Hash(bound = "P: Fp2Parameters"),
    Clone(bound = "P: Fp2Parameters"),
    Copy(bound = "P: Fp2Parameters"),
    Debug(bound = "P: Fp2Parameters"),
    PartialEq(bound = "P: Fp2Parameters"),
    Eq(bound = "P: Fp2Parameters")
)]
pub struct Fp2<P: Fp2Parameters> {
    pub c0: P::Fp,
    pub c1: P::Fp,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: Fp2Parameters> Fp2<P> {
    pub fn new(c0: P::Fp, c1: P::Fp) -> Self {
        Fp2 {
            c0,
            c1,
            _parameters: PhantomData,
        }
    }

    /// Norm of Fp2 over Fp: Norm(a) = a.c0^2 - beta * a.c1^2
    pub fn norm(&self) -> P::Fp {
        let t0 = self.c0.square();
        let mut t1 = self.c1.square();
        t1 = -P::mul_fp_by_nonresidue(&t1);
        t1.add_assign(&t0);
        t1
    }

    /// Multiplication by the adjoined root `u`: (c0 + c1 u) u =
    /// beta c1 + c0 u.
    pub fn mul_by_u(&self) -> Self {
        Self::new(P::mul_fp_by_nonresidue(&self.c1), self.c0)
    }

    /// Multiplication by the non-residue adjoined one level up, derived
    /// from the residue class of the prime alone: u for p = 5 (mod 8),
    /// 1 + u for p = 3 (mod 8), 2^k + u for p = 7 (mod 8) with the
    /// configured k. A prime in a new residue class needs a new match arm.
    pub fn mul_by_nonresidue_via_mod8(&self) -> Self {
        match <<P::Fp as PrimeField>::Params as FpParameters>::MODULUS_MOD_8 {
            5 => self.mul_by_u(),
            3 => self.mul_by_u() + self,
            7 => {
                let mut t = *self;
                for _ in 0..P::NONRESIDUE_SHIFT {
                    t.double_in_place();
                }
                t + &self.mul_by_u()
            }
            m => panic!("no non-residue ladder for p = {} (mod 8)", m),
        }
    }

    /// Karatsuba multiplication reducing after every base-field product.
    pub fn mul_basic(&self, other: &Self) -> Self {
        let mut result = *self;
        result.mul_assign(other);
        result
    }

    /// Karatsuba multiplication accumulating in double width; each output
    /// coordinate is reduced exactly once.
    pub fn mul_lazy(&self, other: &Self) -> Self {
        self.mul_unreduced(other).reduce()
    }

    /// The full extension product in the accumulator domain.
    pub fn mul_unreduced(&self, other: &Self) -> DoubleFp2<P> {
        let u0 = self.c0.mul_unreduced(&other.c0);
        let u1 = self.c1.mul_unreduced(&other.c1);
        let t0 = self.c0 + &self.c1;
        let t1 = other.c0 + &other.c1;

        let f = t0.mul_unreduced(&t1).sub_mod(&u0).sub_mod(&u1);
        let e = P::mul_fp_by_nonresidue_double(&u1).add_mod(&u0);
        DoubleFp2::new(e, f)
    }

    /// Squaring reducing after every base-field product.
    pub fn square_basic(&self) -> Self {
        let mut result = *self;
        result.square_in_place();
        result
    }

    /// Squaring in the accumulator domain, one reduction per coordinate.
    pub fn square_lazy(&self) -> Self {
        self.square_unreduced().reduce()
    }

    /// The extension square in the accumulator domain.
    pub fn square_unreduced(&self) -> DoubleFp2<P> {
        let u0 = self.c0.square_unreduced();
        let u1 = self.c1.square_unreduced();
        let t = self.c0 + &self.c1;

        let e = P::mul_fp_by_nonresidue_double(&u1).add_mod(&u0);
        let f = t.square_unreduced().sub_mod(&u0.add_mod(&u1));
        DoubleFp2::new(e, f)
    }
}

impl<P: Fp2Parameters> Zero for Fp2<P> {
    fn zero() -> Self {
        Fp2::new(P::Fp::zero(), P::Fp::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

impl<P: Fp2Parameters> One for Fp2<P> {
    fn one() -> Self {
        Fp2::new(P::Fp::one(), P::Fp::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }
}

impl<P: Fp2Parameters> Field for Fp2<P> {
    #[inline]
    fn characteristic<'a>() -> &'a [u64] {
        P::Fp::characteristic()
    }

    fn double(&self) -> Self {
        let mut result = *self;
        result.double_in_place();
        result
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    fn halve(&self) -> Self {
        let mut result = *self;
        result.halve_in_place();
        result
    }

    fn halve_in_place(&mut self) -> &mut Self {
        self.c0.halve_in_place();
        self.c1.halve_in_place();
        self
    }

    fn square(&self) -> Self {
        let mut result = *self;
        result.square_in_place();
        result
    }

    fn square_in_place(&mut self) -> &mut Self {
        // v0 = c0 - c1
        let mut v0 = self.c0 - &self.c1;
        // v3 = c0 - beta * c1
        let v3 = self.c0 - &P::mul_fp_by_nonresidue(&self.c1);
        // v2 = c0 * c1
        let v2 = self.c0 * &self.c1;

        // v0 = (v0 * v3) + v2
        v0 *= &v3;
        v0 += &v2;

        self.c1 = v2.double();
        self.c0 = v0 + &P::mul_fp_by_nonresidue(&v2);

        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Guide to Pairing-based Cryptography, Algorithm 5.19.
            // v0 = c0.square()
            let mut v0 = self.c0.square();
            // v1 = c1.square()
            let v1 = self.c1.square();
            // v0 = v0 - beta * v1
            v0 -= &P::mul_fp_by_nonresidue(&v1);
            v0.inverse().map(|v1| {
                let c0 = self.c0 * &v1;
                let c1 = -(self.c1 * &v1);
                Self::new(c0, c1)
            })
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

    fn frobenius_map(&mut self, power: usize) {
        self.c1.mul_assign(&P::FROBENIUS_COEFF_FP2_C1[power % 2]);
    }
}

impl<P: Fp2Parameters> SquareRootField for Fp2<P> {
    fn legendre(&self) -> LegendreSymbol {
        self.norm().legendre()
    }

    fn sqrt(&self) -> Option<Self> {
        use crate::fields::LegendreSymbol::*;
        if self.c1.is_zero() {
            return self.c0.sqrt().map(|c0| Self::new(c0, P::Fp::zero()));
        }
        match self.legendre() {
            // Square root based on the complex method. See
            // https://eprint.iacr.org/2012/685.pdf (page 15, algorithm 8)
            Zero => Some(*self),
            QuadraticNonResidue => None,
            QuadraticResidue => {
                let two_inv = P::Fp::one()
                    .double()
                    .inverse()
                    .expect("Two should always have an inverse");
                let alpha = self
                    .norm()
                    .sqrt()
                    .expect("We are in the QR case, the norm should have a square root");
                let mut delta = (alpha + &self.c0) * &two_inv;
                if delta.legendre().is_qnr() {
                    delta -= &alpha;
                }
                let c0 = delta.sqrt().expect("Delta must have a square root");
                let c0_inv = c0.inverse().expect("c0 must have an inverse");
                Some(Self::new(c0, self.c1 * &two_inv * &c0_inv))
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

/// `Fp2` elements are ordered lexicographically.
impl<P: Fp2Parameters> Ord for Fp2<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.c1.cmp(&other.c1) {
            Ordering::Greater => Ordering::Greater,
            Ordering::Less => Ordering::Less,
            Ordering::Equal => self.c0.cmp(&other.c0),
        }
    }
}

impl<P: Fp2Parameters> PartialOrd for Fp2<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Fp2Parameters> Neg for Fp2<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut res = self;
        res.c0 = res.c0.neg();
        res.c1 = res.c1.neg();
        res
    }
}

impl<P: Fp2Parameters> Distribution<Fp2<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp2<P> {
        Fp2::new(UniformRand::rand(rng), UniformRand::rand(rng))
    }
}

impl<'a, P: Fp2Parameters> Add<&'a Fp2<P>> for Fp2<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &Self) -> Self {
        let mut result = self;
        result.add_assign(other);
        result
    }
}

impl<'a, P: Fp2Parameters> Sub<&'a Fp2<P>> for Fp2<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &Self) -> Self {
        let mut result = self;
        result.sub_assign(other);
        result
    }
}

impl<'a, P: Fp2Parameters> Mul<&'a Fp2<P>> for Fp2<P> {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(other);
        result
    }
}

impl<'a, P: Fp2Parameters> Div<&'a Fp2<P>> for Fp2<P> {
    type Output = Self;

    #[inline]
    fn div(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(&other.inverse().unwrap());
        result
    }
}

impl_additive_ops_from_ref!(Fp2, Fp2Parameters);
impl_multiplicative_ops_from_ref!(Fp2, Fp2Parameters);

impl<'a, P: Fp2Parameters> AddAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }
}

impl<'a, P: Fp2Parameters> SubAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }
}

impl<'a, P: Fp2Parameters> MulAssign<&'a Self> for Fp2<P> {
    /// Karatsuba multiplication;
    /// Guide to Pairing-based cryptography, Algorithm 5.16.
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;

        self.c1 += &self.c0;
        self.c1 *= &(other.c0 + &other.c1);
        self.c1 -= &v0;
        self.c1 -= &v1;
        self.c0 = v0 + &P::mul_fp_by_nonresidue(&v1);
    }
}

impl<'a, P: Fp2Parameters> DivAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        self.mul_assign(&other.inverse().unwrap());
    }
}

impl<P: Fp2Parameters> fmt::Display for Fp2<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp2({} + {} * u)", self.c0, self.c1)
    }
}
