use core::marker::PhantomData;

use crate::{
    biginteger::{arithmetic as fa, BigInteger as _BigInteger, BigInteger384, BigInteger768},
    fields::{
        DoubleWidth, Fp2, Fp2Parameters, Fp384, Fp384Parameters, Fp6, Fp6Parameters, PrimeField,
    },
};

/// A double-width accumulator over `Fp384`: the plain integer value of one
/// or more unreduced limb products. Invariant: the value stays below
/// p * 2^384, the tolerance of the Montgomery reduction.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct DoubleFp384<P>(
    pub BigInteger768,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub PhantomData<P>,
);

impl<P: Fp384Parameters> DoubleFp384<P> {
    #[inline]
    pub const fn from_limbs(limbs: [u64; 12]) -> Self {
        Self(BigInteger768(limbs), PhantomData)
    }

    #[inline]
    fn high_half_needs_correction(r: &[u64; 12]) -> bool {
        for i in (0..6).rev() {
            if r[6 + i] > P::MODULUS.0[i] {
                return true;
            }
            if r[6 + i] < P::MODULUS.0[i] {
                return false;
            }
        }
        true
    }

    /// Subtracts p * 2^384, i.e. the modulus from the high limbs.
    #[inline]
    fn sub_modulus_from_high(r: &mut [u64; 12]) {
        let mut borrow = 0;
        for i in 0..6 {
            r[6 + i] = fa::sbb(r[6 + i], P::MODULUS.0[i], &mut borrow);
        }
    }

    /// Adds p * 2^384, i.e. the modulus onto the high limbs. The final
    /// carry cancels against the borrow that triggered the correction.
    #[inline]
    fn add_modulus_onto_high(r: &mut [u64; 12]) {
        let mut carry = 0;
        for i in 0..6 {
            r[6 + i] = fa::adc(r[6 + i], P::MODULUS.0[i], &mut carry);
        }
    }
}

impl<P: Fp384Parameters> DoubleWidth for DoubleFp384<P> {
    type Field = Fp384<P>;

    #[inline]
    fn zero() -> Self {
        Self(BigInteger768([0u64; 12]), PhantomData)
    }

    #[inline]
    fn add_unchecked(&self, other: &Self) -> Self {
        let mut r = (self.0).0;
        let mut carry = 0;
        for i in 0..12 {
            r[i] = fa::adc(r[i], (other.0).0[i], &mut carry);
        }
        debug_assert!(carry == 0);
        Self::from_limbs(r)
    }

    #[inline]
    fn add_mod(&self, other: &Self) -> Self {
        let mut r = (self.0).0;
        let mut carry = 0;
        for i in 0..12 {
            r[i] = fa::adc(r[i], (other.0).0[i], &mut carry);
        }
        debug_assert!(carry == 0);
        if Self::high_half_needs_correction(&r) {
            Self::sub_modulus_from_high(&mut r);
        }
        Self::from_limbs(r)
    }

    #[inline]
    fn sub_mod(&self, other: &Self) -> Self {
        let mut r = (self.0).0;
        let mut borrow = 0;
        for i in 0..12 {
            r[i] = fa::sbb(r[i], (other.0).0[i], &mut borrow);
        }
        if borrow != 0 {
            Self::add_modulus_onto_high(&mut r);
        }
        Self::from_limbs(r)
    }

    /// The Montgomery reduction of the accumulator, yielding a fully
    /// reduced field element.
    #[inline]
    fn reduce(&self) -> Fp384<P> {
        let mut r = (self.0).0;
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
        let mut out = BigInteger384([r[6], r[7], r[8], r[9], r[10], r[11]]);
        if out >= P::MODULUS {
            out.sub_noborrow(&P::MODULUS);
        }
        Fp384::new(out)
    }
}

/// A pair of double-width accumulators holding an unreduced quadratic
/// extension product. Intermediate only: it never leaves the lazy-reduction
/// routines in fully composed calls.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Fp2Parameters"),
    Copy(bound = "P: Fp2Parameters"),
    Debug(bound = "P: Fp2Parameters"),
    PartialEq(bound = "P: Fp2Parameters"),
    Eq(bound = "P: Fp2Parameters")
)]
pub struct DoubleFp2<P: Fp2Parameters> {
    pub c0: <P::Fp as PrimeField>::Double,
    pub c1: <P::Fp as PrimeField>::Double,
}

impl<P: Fp2Parameters> DoubleFp2<P> {
    #[inline]
    pub fn new(c0: <P::Fp as PrimeField>::Double, c1: <P::Fp as PrimeField>::Double) -> Self {
        Self { c0, c1 }
    }

    #[inline]
    pub fn add_unchecked(&self, other: &Self) -> Self {
        Self::new(
            self.c0.add_unchecked(&other.c0),
            self.c1.add_unchecked(&other.c1),
        )
    }

    #[inline]
    pub fn add_mod(&self, other: &Self) -> Self {
        Self::new(self.c0.add_mod(&other.c0), self.c1.add_mod(&other.c1))
    }

    #[inline]
    pub fn sub_mod(&self, other: &Self) -> Self {
        Self::new(self.c0.sub_mod(&other.c0), self.c1.sub_mod(&other.c1))
    }

    #[inline]
    pub fn double_mod(&self) -> Self {
        self.add_mod(self)
    }

    #[inline]
    pub fn reduce(&self) -> Fp2<P> {
        Fp2::new(self.c0.reduce(), self.c1.reduce())
    }
}

/// A triple of double-width quadratic accumulators: the unreduced result of
/// a cubic-extension multiplication.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Fp6Parameters"),
    Copy(bound = "P: Fp6Parameters"),
    Debug(bound = "P: Fp6Parameters"),
    PartialEq(bound = "P: Fp6Parameters"),
    Eq(bound = "P: Fp6Parameters")
)]
pub struct DoubleFp6<P: Fp6Parameters> {
    pub c0: DoubleFp2<P::Fp2Params>,
    pub c1: DoubleFp2<P::Fp2Params>,
    pub c2: DoubleFp2<P::Fp2Params>,
}

impl<P: Fp6Parameters> DoubleFp6<P> {
    #[inline]
    pub fn new(
        c0: DoubleFp2<P::Fp2Params>,
        c1: DoubleFp2<P::Fp2Params>,
        c2: DoubleFp2<P::Fp2Params>,
    ) -> Self {
        Self { c0, c1, c2 }
    }

    #[inline]
    pub fn add_mod(&self, other: &Self) -> Self {
        Self::new(
            self.c0.add_mod(&other.c0),
            self.c1.add_mod(&other.c1),
            self.c2.add_mod(&other.c2),
        )
    }

    #[inline]
    pub fn sub_mod(&self, other: &Self) -> Self {
        Self::new(
            self.c0.sub_mod(&other.c0),
            self.c1.sub_mod(&other.c1),
            self.c2.sub_mod(&other.c2),
        )
    }

    /// Multiplication by the adjoined cubic root at double width: a cyclic
    /// rotation with the non-residue twist on the wrapped coefficient.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(
            P::mul_fp2_by_nonresidue_double(&self.c2),
            self.c0,
            self.c1,
        )
    }

    #[inline]
    pub fn reduce(&self) -> Fp6<P> {
        Fp6::new(self.c0.reduce(), self.c1.reduce(), self.c2.reduce())
    }
}
