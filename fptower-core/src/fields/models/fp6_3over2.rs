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

use crate::fields::{DoubleFp2, DoubleFp6, Field, Fp2, Fp2Parameters};

pub trait Fp6Parameters: 'static + Send + Sync + Copy {
    type Fp2Params: Fp2Parameters;

    /// The cubic non-residue of the quadratic extension adjoined as `v`.
    const NONRESIDUE: Fp2<Self::Fp2Params>;

    /// Coefficients for the Frobenius automorphism.
    const FROBENIUS_COEFF_FP6_C1: &'static [Fp2<Self::Fp2Params>];
    const FROBENIUS_COEFF_FP6_C2: &'static [Fp2<Self::Fp2Params>];

    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Params>) -> Fp2<Self::Fp2Params> {
        Self::NONRESIDUE * fe
    }

    /// The non-residue twist in the double-width accumulator domain.
    fn mul_fp2_by_nonresidue_double(fe: &DoubleFp2<Self::Fp2Params>)
        -> DoubleFp2<Self::Fp2Params>;
}

#[derive(Derivative)]
#[derivative(
    Default(bound = "P: Fp6Parameters"),
    Hash(bound = "P: Fp6Parameters"),
    Clone(bound = "P: Fp6Parameters"),
    Copy(bound = "P: Fp6Parameters"),
    Debug(bound = "P: Fp6Parameters"),
    PartialEq(bound = "P: Fp6Parameters"),
    Eq(bound = "P: Fp6Parameters")
)]
pub struct Fp6<P: Fp6Parameters> {
    pub c0: Fp2<P::Fp2Params>,
    pub c1: Fp2<P::Fp2Params>,
    pub c2: Fp2<P::Fp2Params>,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: Fp6Parameters> Fp6<P> {
    pub fn new(c0: Fp2<P::Fp2Params>, c1: Fp2<P::Fp2Params>, c2: Fp2<P::Fp2Params>) -> Self {
        Fp6 {
            c0,
            c1,
            c2,
            _parameters: PhantomData,
        }
    }

    /// Multiplication by the adjoined root `v`: a cyclic rotation with the
    /// non-residue twist on the wrapped coefficient.
    pub fn mul_by_v(&self) -> Self {
        Self::new(P::mul_fp2_by_nonresidue(&self.c2), self.c0, self.c1)
    }

    pub fn mul_assign_by_fp2(&mut self, other: Fp2<P::Fp2Params>) {
        self.c0.mul_assign(&other);
        self.c1.mul_assign(&other);
        self.c2.mul_assign(&other);
    }

    /// Karatsuba multiplication reducing after every Fp2 product.
    /// Devegili OhEig Scott Dahab --- Multiplication and Squaring on
    /// Pairing-Friendly Fields; Section 4 (Karatsuba).
    pub fn mul_basic(&self, other: &Self) -> Self {
        let a = other.c0;
        let b = other.c1;
        let c = other.c2;

        let d = self.c0;
        let e = self.c1;
        let f = self.c2;

        let ad = d * &a;
        let be = e * &b;
        let cf = f * &c;

        let x = (e + &f) * &(b + &c) - &be - &cf;
        let y = (d + &e) * &(a + &b) - &ad - &be;
        let z = (d + &f) * &(a + &c) - &ad + &be - &cf;

        Self::new(
            ad + &P::mul_fp2_by_nonresidue(&x),
            y + &P::mul_fp2_by_nonresidue(&cf),
            z,
        )
    }

    /// Karatsuba multiplication with double-width accumulators; each of
    /// the three output coordinates is reduced exactly once.
    pub fn mul_lazy(&self, other: &Self) -> Self {
        self.mul_unreduced(other).reduce()
    }

    /// The full cubic-extension product in the accumulator domain.
    pub fn mul_unreduced(&self, other: &Self) -> DoubleFp6<P> {
        let v0 = self.c0.mul_unreduced(&other.c0);
        let v1 = self.c1.mul_unreduced(&other.c1);
        let v2 = self.c2.mul_unreduced(&other.c2);

        let t0 = (self.c1 + &self.c2)
            .mul_unreduced(&(other.c1 + &other.c2))
            .sub_mod(&v1)
            .sub_mod(&v2);
        let c0 = P::mul_fp2_by_nonresidue_double(&t0).add_mod(&v0);

        let t1 = (self.c0 + &self.c1)
            .mul_unreduced(&(other.c0 + &other.c1))
            .sub_mod(&v0)
            .sub_mod(&v1);
        let c1 = t1.add_mod(&P::mul_fp2_by_nonresidue_double(&v2));

        let t2 = (self.c0 + &self.c2)
            .mul_unreduced(&(other.c0 + &other.c2))
            .sub_mod(&v0)
            .sub_mod(&v2);
        let c2 = t2.add_mod(&v1);

        DoubleFp6::new(c0, c1, c2)
    }

    /// Chung-Hasan squaring reducing after every Fp2 product.
    /// Devegili OhEig Scott Dahab --- Multiplication and Squaring on
    /// Pairing-Friendly Fields; Section 4 (CH-SQR3).
    pub fn square_basic(&self) -> Self {
        let a = self.c0;
        let b = self.c1;
        let c = self.c2;

        let s0 = a.square();
        let ab = a * &b;
        let s1 = ab.double();
        let s2 = (a - &b + &c).square();
        let bc = b * &c;
        let s3 = bc.double();
        let s4 = c.square();

        Self::new(
            s0 + &P::mul_fp2_by_nonresidue(&s3),
            s1 + &P::mul_fp2_by_nonresidue(&s4),
            s1 + &s2 + &s3 - &s0 - &s4,
        )
    }

    /// Chung-Hasan squaring with double-width accumulators.
    pub fn square_lazy(&self) -> Self {
        let s0 = self.c0.square_unreduced();
        let s1 = self.c0.mul_unreduced(&self.c1).double_mod();
        let s2 = (self.c0 - &self.c1 + &self.c2).square_unreduced();
        let s3 = self.c1.mul_unreduced(&self.c2).double_mod();
        let s4 = self.c2.square_unreduced();

        let c0 = P::mul_fp2_by_nonresidue_double(&s3).add_mod(&s0);
        let c1 = P::mul_fp2_by_nonresidue_double(&s4).add_mod(&s1);
        let c2 = s1.add_mod(&s2).add_mod(&s3).sub_mod(&s0).sub_mod(&s4);

        Self::new(c0.reduce(), c1.reduce(), c2.reduce())
    }

    /// Sparse multiplication by an element with only the `v` coefficient
    /// set.
    pub fn mul_by_1(&mut self, c1: &Fp2<P::Fp2Params>) {
        let mut b_b = self.c1;
        b_b.mul_assign(c1);

        let mut t1 = *c1;
        {
            let mut tmp = self.c1;
            tmp.add_assign(&self.c2);

            t1.mul_assign(&tmp);
            t1.sub_assign(&b_b);
            t1 = P::mul_fp2_by_nonresidue(&t1);
        }

        let mut t2 = *c1;
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c1);

            t2.mul_assign(&tmp);
            t2.sub_assign(&b_b);
        }

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = b_b;
    }

    /// Sparse multiplication by an element with a zero `v^2` coefficient.
    pub fn mul_by_01(&mut self, c0: &Fp2<P::Fp2Params>, c1: &Fp2<P::Fp2Params>) {
        let mut a_a = self.c0;
        let mut b_b = self.c1;
        a_a.mul_assign(c0);
        b_b.mul_assign(c1);

        let mut t1 = *c1;
        {
            let mut tmp = self.c1;
            tmp.add_assign(&self.c2);

            t1.mul_assign(&tmp);
            t1.sub_assign(&b_b);
            t1 = P::mul_fp2_by_nonresidue(&t1);
            t1.add_assign(&a_a);
        }

        let mut t3 = *c0;
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c2);

            t3.mul_assign(&tmp);
            t3.sub_assign(&a_a);
            t3.add_assign(&b_b);
        }

        let mut t2 = *c0 + c1;
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c1);

            t2.mul_assign(&tmp);
            t2.sub_assign(&a_a);
            t2.sub_assign(&b_b);
        }

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }
}

impl<P: Fp6Parameters> Zero for Fp6<P> {
    fn zero() -> Self {
        Fp6::new(Fp2::zero(), Fp2::zero(), Fp2::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl<P: Fp6Parameters> One for Fp6<P> {
    fn one() -> Self {
        Fp6::new(Fp2::one(), Fp2::zero(), Fp2::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl<P: Fp6Parameters> Field for Fp6<P> {
    #[inline]
    fn characteristic<'a>() -> &'a [u64] {
        Fp2::<P::Fp2Params>::characteristic()
    }

    fn double(&self) -> Self {
        let mut result = *self;
        result.double_in_place();
        result
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self.c2.double_in_place();
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
        self.c2.halve_in_place();
        self
    }

    fn square(&self) -> Self {
        let mut result = *self;
        result.square_in_place();
        result
    }

    fn square_in_place(&mut self) -> &mut Self {
        *self = if cfg!(feature = "lazy-reduction") {
            self.square_lazy()
        } else {
            self.square_basic()
        };
        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // From "High-Speed Software Implementation of the Optimal Ate
            // Pairing over Barreto-Naehrig Curves"; Algorithm 17
            let t0 = self.c0.square();
            let t1 = self.c1.square();
            let t2 = self.c2.square();
            let mut t3 = self.c0;
            t3.mul_assign(&self.c1);
            let mut t4 = self.c0;
            t4.mul_assign(&self.c2);
            let mut t5 = self.c1;
            t5.mul_assign(&self.c2);
            let n5 = P::mul_fp2_by_nonresidue(&t5);

            let mut s0 = t0;
            s0.sub_assign(&n5);
            let mut s1 = P::mul_fp2_by_nonresidue(&t2);
            s1.sub_assign(&t3);
            let mut s2 = t1;
            s2.sub_assign(&t4);

            let mut a1 = self.c2;
            a1.mul_assign(&s1);
            let mut a2 = self.c1;
            a2.mul_assign(&s2);
            let mut a3 = a1;
            a3.add_assign(&a2);
            a3 = P::mul_fp2_by_nonresidue(&a3);
            let mut t6 = self.c0;
            t6.mul_assign(&s0);
            t6.add_assign(&a3);

            t6.inverse().map(|t6| {
                let mut c0 = t6;
                c0.mul_assign(&s0);
                let mut c1 = t6;
                c1.mul_assign(&s1);
                let mut c2 = t6;
                c2.mul_assign(&s2);

                Self::new(c0, c1, c2)
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
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c2.frobenius_map(power);

        self.c1.mul_assign(&P::FROBENIUS_COEFF_FP6_C1[power % 6]);
        self.c2.mul_assign(&P::FROBENIUS_COEFF_FP6_C2[power % 6]);
    }
}

/// `Fp6` elements are ordered lexicographically.
impl<P: Fp6Parameters> Ord for Fp6<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        let c2_cmp = self.c2.cmp(&other.c2);
        let c1_cmp = self.c1.cmp(&other.c1);
        let c0_cmp = self.c0.cmp(&other.c0);
        if c2_cmp == Ordering::Equal {
            if c1_cmp == Ordering::Equal {
                c0_cmp
            } else {
                c1_cmp
            }
        } else {
            c2_cmp
        }
    }
}

impl<P: Fp6Parameters> PartialOrd for Fp6<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Fp6Parameters> Neg for Fp6<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut res = self;
        res.c0 = res.c0.neg();
        res.c1 = res.c1.neg();
        res.c2 = res.c2.neg();
        res
    }
}

impl<P: Fp6Parameters> Distribution<Fp6<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp6<P> {
        Fp6::new(
            UniformRand::rand(rng),
            UniformRand::rand(rng),
            UniformRand::rand(rng),
        )
    }
}

impl<'a, P: Fp6Parameters> Add<&'a Fp6<P>> for Fp6<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &Self) -> Self {
        let mut result = self;
        result.add_assign(other);
        result
    }
}

impl<'a, P: Fp6Parameters> Sub<&'a Fp6<P>> for Fp6<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &Self) -> Self {
        let mut result = self;
        result.sub_assign(other);
        result
    }
}

impl<'a, P: Fp6Parameters> Mul<&'a Fp6<P>> for Fp6<P> {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(other);
        result
    }
}

impl<'a, P: Fp6Parameters> Div<&'a Fp6<P>> for Fp6<P> {
    type Output = Self;

    #[inline]
    fn div(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(&other.inverse().unwrap());
        result
    }
}

impl_additive_ops_from_ref!(Fp6, Fp6Parameters);
impl_multiplicative_ops_from_ref!(Fp6, Fp6Parameters);

impl<'a, P: Fp6Parameters> AddAssign<&'a Self> for Fp6<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
        self.c2.add_assign(&other.c2);
    }
}

impl<'a, P: Fp6Parameters> SubAssign<&'a Self> for Fp6<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
        self.c2.sub_assign(&other.c2);
    }
}

impl<'a, P: Fp6Parameters> MulAssign<&'a Self> for Fp6<P> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        if cfg!(feature = "lazy-reduction") {
            *self = self.mul_lazy(other);
        } else {
            *self = self.mul_basic(other);
        }
    }
}

impl<'a, P: Fp6Parameters> DivAssign<&'a Self> for Fp6<P> {
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        self.mul_assign(&other.inverse().unwrap());
    }
}

impl<P: Fp6Parameters> fmt::Display for Fp6<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp6({}, {}, {})", self.c0, self.c1, self.c2)
    }
}
