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

use crate::fields::{batch_inversion, DoubleFp2, Field, Fp2, Fp6, Fp6Parameters};

type Fp2Params<P> = <<P as Fp12Parameters>::Fp6Params as Fp6Parameters>::Fp2Params;

pub trait Fp12Parameters: 'static + Send + Sync + Copy {
    type Fp6Params: Fp6Parameters;

    /// This *must* equal (0, 1, 0);
    /// see [[DESD06, Section 6.1]](https://eprint.iacr.org/2006/471.pdf).
    const NONRESIDUE: Fp6<Self::Fp6Params>;

    /// Coefficients for the Frobenius automorphism.
    const FROBENIUS_COEFF_FP12_C1: &'static [Fp2<Fp2Params<Self>>];

    /// Multiply by the quadratic non-residue `v`: a cyclic rotation with
    /// the cubic non-residue twist on the wrapped coefficient.
    #[inline(always)]
    fn mul_fp6_by_nonresidue(fe: &Fp6<Self::Fp6Params>) -> Fp6<Self::Fp6Params> {
        // see [[DESD06, Section 6.1]](https://eprint.iacr.org/2006/471.pdf).
        let new_c0 = Self::Fp6Params::mul_fp2_by_nonresidue(&fe.c2);
        Fp6::new(new_c0, fe.c0, fe.c1)
    }
}

#[derive(Derivative)]
#[derivative(
    Default(bound = "P: Fp12Parameters"),
    Hash(bound = "P: Fp12Parameters"),
    Clone(bound = "P: Fp12Parameters"),
    Copy(bound = "P: Fp12Parameters"),
    Debug(bound = "P: Fp12Parameters"),
    PartialEq(bound = "P: Fp12Parameters"),
    Eq(bound = "P: Fp12Parameters")
)]
pub struct Fp12<P: Fp12Parameters> {
    pub c0: Fp6<P::Fp6Params>,
    pub c1: Fp6<P::Fp6Params>,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

/// The square of the Fp4 element (a + b s), s^2 = xi, in the accumulator
/// domain.
fn fp4_square_unreduced<P: Fp12Parameters>(
    a: &Fp2<Fp2Params<P>>,
    b: &Fp2<Fp2Params<P>>,
) -> (DoubleFp2<Fp2Params<P>>, DoubleFp2<Fp2Params<P>>) {
    let u0 = a.square_unreduced();
    let u1 = b.square_unreduced();
    let t = *a + b;

    // c = a^2 + b^2 * xi
    let c = P::Fp6Params::mul_fp2_by_nonresidue_double(&u1).add_mod(&u0);
    // d = (a + b)^2 - a^2 - b^2 = 2 a b
    let d = t.square_unreduced().sub_mod(&u1.add_mod(&u0));
    (c, d)
}

/// The product of the Fp4 elements (a + b s) and (c + d s) in the
/// accumulator domain.
fn fp4_mul_unreduced<P: Fp12Parameters>(
    a: &Fp2<Fp2Params<P>>,
    b: &Fp2<Fp2Params<P>>,
    c: &Fp2<Fp2Params<P>>,
    d: &Fp2<Fp2Params<P>>,
) -> (DoubleFp2<Fp2Params<P>>, DoubleFp2<Fp2Params<P>>) {
    let u0 = a.mul_unreduced(c);
    let u1 = b.mul_unreduced(d);
    let t0 = *c + d;
    let t1 = *a + b;

    let f = t1.mul_unreduced(&t0).sub_mod(&u0).sub_mod(&u1);
    let e = P::Fp6Params::mul_fp2_by_nonresidue_double(&u1).add_mod(&u0);
    (e, f)
}

impl<P: Fp12Parameters> Fp12<P> {
    pub fn new(c0: Fp6<P::Fp6Params>, c1: Fp6<P::Fp6Params>) -> Self {
        Fp12 {
            c0,
            c1,
            _parameters: PhantomData,
        }
    }

    /// This is only to be used when the element is *known* to be in the
    /// cyclotomic subgroup or another unit-norm coset.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    /// The inverse of a unitary element: negation of the `w` coefficient.
    pub fn unitary_inverse(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Karatsuba multiplication reducing after every Fp6 product.
    pub fn mul_basic(&self, other: &Self) -> Self {
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;

        let mut c1 = self.c1 + &self.c0;
        c1 *= &(other.c0 + &other.c1);
        c1 -= &v0;
        c1 -= &v1;
        let c0 = v0 + &P::mul_fp6_by_nonresidue(&v1);
        Self::new(c0, c1)
    }

    /// Karatsuba multiplication with double-width accumulators; each of
    /// the six output coordinates is reduced exactly once.
    pub fn mul_lazy(&self, other: &Self) -> Self {
        let u0 = self.c0.mul_unreduced(&other.c0);
        let u1 = self.c1.mul_unreduced(&other.c1);
        let t0 = self.c0 + &self.c1;
        let t1 = other.c0 + &other.c1;

        let c1 = t0.mul_unreduced(&t1).sub_mod(&u0).sub_mod(&u1).reduce();
        let c0 = u1.mul_by_nonresidue().add_mod(&u0).reduce();
        Self::new(c0, c1)
    }

    /// Complex squaring reducing after every Fp6 product.
    pub fn square_basic(&self) -> Self {
        // v0 = c0 - c1
        let mut v0 = self.c0 - &self.c1;
        // v3 = c0 - v * c1
        let v3 = self.c0 - &P::mul_fp6_by_nonresidue(&self.c1);
        // v2 = c0 * c1
        let v2 = self.c0 * &self.c1;

        // v0 = (v0 * v3) + v2
        v0 *= &v3;
        v0 += &v2;

        Self::new(v0 + &P::mul_fp6_by_nonresidue(&v2), v2.double())
    }

    /// Squaring over the three Fp4 pairs (c0.c0, c1.c1), (c1.c0, c0.c2),
    /// (c0.c1, c1.c2) with double-width accumulators.
    pub fn square_lazy(&self) -> Self {
        let nor = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;

        // (t0, t1) = a0^2
        let (u0, u1) = fp4_square_unreduced::<P>(&self.c0.c0, &self.c1.c1);
        let t0 = u0.reduce();
        let t1 = u1.reduce();

        // (t2, t3) = 2 a1 a2
        let (u2, u3) = fp4_mul_unreduced::<P>(&self.c1.c0, &self.c0.c2, &self.c0.c1, &self.c1.c2);
        let t2 = u2.double_mod().reduce();
        let t3 = u3.double_mod().reduce();

        // (t4, t5) = a2^2
        let (u4, u5) = fp4_square_unreduced::<P>(&self.c0.c1, &self.c1.c2);
        let t4 = u4.reduce();
        let t5 = u5.reduce();

        // a0 + a2
        let s0 = self.c0.c0 + &self.c0.c1;
        let s1 = self.c1.c1 + &self.c1.c2;

        // (t6, t7) = (a0 + a2 + a1)^2
        let (u6, u7) = fp4_square_unreduced::<P>(&(s0 + &self.c1.c0), &(s1 + &self.c0.c2));
        let t6 = u6.reduce();
        let t7 = u7.reduce();

        // (t8, t9) = ((a0 + a2 - a1)^2 + (t6, t7)) / 2
        let (u8, u9) = fp4_square_unreduced::<P>(&(s0 - &self.c1.c0), &(s1 - &self.c0.c2));
        let t8 = (u8.reduce() + &t6).halve();
        let t9 = (u9.reduce() + &t7).halve();

        // (t6, t7) = (t6, t7) - (t8, t9) - (t2, t3)
        let t6 = t6 - &t8 - &t2;
        let t7 = t7 - &t9 - &t3;

        // c2 = (t8, t9) - (t0, t1) - (t4, t5)
        let t8 = t8 - &t0;
        let t9 = t9 - &t1;

        let mut result = Self::zero();
        result.c0.c1 = t8 - &t4;
        result.c1.c2 = t9 - &t5;

        // c1 = (t6, t7) + (t4, t5) * s
        result.c1.c0 = t6 + &nor(&t5);
        result.c0.c2 = t7 + &t4;

        // c0 = (t0, t1) + (t2, t3) * s
        result.c0.c0 = t0 + &nor(&t3);
        result.c1.c1 = t1 + &t2;

        result
    }

    /// Sparse multiplication by an element whose Fp2 coordinates other
    /// than (0, 3, 4) are zero.
    pub fn mul_by_034(
        &mut self,
        c0: &Fp2<Fp2Params<P>>,
        c3: &Fp2<Fp2Params<P>>,
        c4: &Fp2<Fp2Params<P>>,
    ) {
        let a0 = self.c0.c0 * c0;
        let a1 = self.c0.c1 * c0;
        let a2 = self.c0.c2 * c0;
        let a = Fp6::new(a0, a1, a2);
        let mut b = self.c1;
        b.mul_by_01(c3, c4);

        let c0 = *c0 + c3;
        let c1 = c4;
        let mut e = self.c0 + &self.c1;
        e.mul_by_01(&c0, c1);
        self.c1 = e - &(a + &b);
        self.c0 = a + &P::mul_fp6_by_nonresidue(&b);
    }

    /// Sparse multiplication by an element whose Fp2 coordinates other
    /// than (0, 1, 4) are zero.
    pub fn mul_by_014(
        &mut self,
        c0: &Fp2<Fp2Params<P>>,
        c1: &Fp2<Fp2Params<P>>,
        c4: &Fp2<Fp2Params<P>>,
    ) {
        let mut aa = self.c0;
        aa.mul_by_01(c0, c1);
        let mut bb = self.c1;
        bb.mul_by_1(c4);
        let mut o = *c1;
        o.add_assign(c4);
        self.c1.add_assign(&self.c0);
        self.c1.mul_by_01(c0, &o);
        self.c1.sub_assign(&aa);
        self.c1.sub_assign(&bb);
        self.c0 = bb;
        self.c0 = P::mul_fp6_by_nonresidue(&self.c0);
        self.c0.add_assign(&aa);
    }

    /// Membership in the cyclotomic subgroup: a^(p^4 - p^2 + 1) = 1,
    /// verified through the Frobenius as a^(p^4) * a = a^(p^2).
    pub fn is_cyclotomic(&self) -> bool {
        let mut t = *self;
        t.frobenius_map(4);
        t *= self;

        let mut u = *self;
        u.frobenius_map(2);
        t == u
    }

    /// Maps into the cyclotomic subgroup: a^((p^6 - 1)(p^2 + 1)).
    /// Returns `None` on zero.
    pub fn to_cyclotomic(&self) -> Option<Self> {
        self.inverse().map(|inv| {
            // a^(p^6 - 1)
            let mut t = self.unitary_inverse();
            t *= &inv;
            // raise to (p^2 + 1)
            let mut u = t;
            u.frobenius_map(2);
            t * &u
        })
    }

    /// Maps onto the unit-norm coset: a^(p^6 - 1). Returns `None` on zero.
    pub fn to_unitary(&self) -> Option<Self> {
        self.inverse().map(|inv| self.unitary_inverse() * &inv)
    }

    /// Squaring of a cyclotomic element.
    pub fn cyclotomic_square(&self) -> Self {
        if cfg!(feature = "lazy-reduction") {
            self.cyclotomic_square_lazy()
        } else {
            self.cyclotomic_square_basic()
        }
    }

    /// Faster Squaring in the Cyclotomic Subgroup of Sixth Degree
    /// Extensions - Robert Granger and Michael Scott.
    pub fn cyclotomic_square_basic(&self) -> Self {
        let fp2_nr = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;

        let mut result = Self::zero();

        let mut z0 = self.c0.c0;
        let mut z4 = self.c0.c1;
        let mut z3 = self.c0.c2;
        let mut z2 = self.c1.c0;
        let mut z1 = self.c1.c1;
        let mut z5 = self.c1.c2;

        // t0 + t1*y = (z0 + z1*y)^2 = a^2
        let mut tmp = z0 * &z1;
        let t0 = (z0 + &z1) * &(z0 + &fp2_nr(&z1)) - &tmp - &fp2_nr(&tmp);
        let t1 = tmp.double();

        // t2 + t3*y = (z2 + z3*y)^2 = b^2
        tmp = z2 * &z3;
        let t2 = (z2 + &z3) * &(z2 + &fp2_nr(&z3)) - &tmp - &fp2_nr(&tmp);
        let t3 = tmp.double();

        // t4 + t5*y = (z4 + z5*y)^2 = c^2
        tmp = z4 * &z5;
        let t4 = (z4 + &z5) * &(z4 + &fp2_nr(&z5)) - &tmp - &fp2_nr(&tmp);
        let t5 = tmp.double();

        // for A

        // z0 = 3 * t0 - 2 * z0
        z0 = t0 - &z0;
        z0 = z0 + &z0;
        result.c0.c0 = z0 + &t0;

        // z1 = 3 * t1 + 2 * z1
        z1 = t1 + &z1;
        z1 = z1 + &z1;
        result.c1.c1 = z1 + &t1;

        // for B

        // z2 = 3 * (xi * t5) + 2 * z2
        tmp = fp2_nr(&t5);
        z2 = tmp + &z2;
        z2 = z2 + &z2;
        result.c1.c0 = z2 + &tmp;

        // z3 = 3 * t4 - 2 * z3
        z3 = t4 - &z3;
        z3 = z3 + &z3;
        result.c0.c2 = z3 + &t4;

        // for C

        // z4 = 3 * t2 - 2 * z4
        z4 = t2 - &z4;
        z4 = z4 + &z4;
        result.c0.c1 = z4 + &t2;

        // z5 = 3 * t3 + 2 * z5
        z5 = t3 + &z5;
        z5 = z5 + &z5;
        result.c1.c2 = z5 + &t3;

        result
    }

    /// The Granger-Scott schedule with double-width accumulators.
    pub fn cyclotomic_square_lazy(&self) -> Self {
        let nor = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;
        let nor_d = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue_double;

        let mut result = Self::zero();

        // (z0 + z1 y)^2
        let u2 = self.c0.c0.square_unreduced();
        let u3 = self.c1.c1.square_unreduced();
        let s = self.c0.c0 + &self.c1.c1;

        let t0 = nor_d(&u3).add_mod(&u2).reduce();
        let t1 = s.square_unreduced().sub_mod(&u2.add_mod(&u3)).reduce();

        let mut z0 = t0 - &self.c0.c0;
        z0.double_in_place();
        result.c0.c0 = t0 + &z0;

        let mut z1 = t1 + &self.c1.c1;
        z1.double_in_place();
        result.c1.c1 = t1 + &z1;

        // 2 z4 z5 and the remaining squares
        let u0 = self.c0.c1.square_unreduced();
        let u1 = self.c1.c2.square_unreduced();
        let s = self.c0.c1 + &self.c1.c2;

        let t0 = s.square_unreduced().sub_mod(&u0.add_mod(&u1)).reduce();

        let s = self.c1.c0 + &self.c0.c2;
        let u5 = s.square_unreduced();
        let u2 = self.c1.c0.square_unreduced();

        let t1 = nor(&t0);
        let mut z2 = t1 + &self.c1.c0;
        z2.double_in_place();
        result.c1.c0 = z2 + &t1;

        let t0 = nor_d(&u1).add_mod(&u0).reduce();
        let mut z3 = t0 - &self.c0.c2;
        z3.double_in_place();
        result.c0.c2 = z3 + &t0;

        let u1 = self.c0.c2.square_unreduced();

        let t0 = nor_d(&u1).add_mod(&u2).reduce();
        let mut z4 = t0 - &self.c0.c1;
        z4.double_in_place();
        result.c0.c1 = z4 + &t0;

        let t0 = u5.sub_mod(&u2.add_mod(&u1)).reduce();
        let mut z5 = t0 + &self.c1.c2;
        z5.double_in_place();
        result.c1.c2 = t0 + &z5;

        result
    }

    /// Squaring of a compressed cyclotomic element: only the four
    /// compressed Fp2 coordinates of the result are computed; the two
    /// recoverable ones are zeroed.
    pub fn compressed_square(&self) -> Self {
        if cfg!(feature = "lazy-reduction") {
            self.compressed_square_lazy()
        } else {
            self.compressed_square_basic()
        }
    }

    pub fn compressed_square_basic(&self) -> Self {
        let nor = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;

        let mut result = Self::zero();

        let t0 = self.c0.c1.square();
        let t1 = self.c1.c2.square();
        let t2 = (self.c0.c1 + &self.c1.c2).square();

        // 2 g4 g5
        let t3 = t2 - &(t0 + &t1);

        let t6 = self.c1.c0 + &self.c0.c2;
        let t7 = t6.square();
        let t8 = self.c1.c0.square();

        let t6 = nor(&t3);
        let mut t5 = t6 + &self.c1.c0;
        t5.double_in_place();
        result.c1.c0 = t5 + &t6;

        let t4 = nor(&t1);
        let t5 = t0 + &t4;
        let mut t6 = t5 - &self.c0.c2;

        let t1 = self.c0.c2.square();

        t6.double_in_place();
        result.c0.c2 = t6 + &t5;

        let t4 = nor(&t1);
        let t5 = t8 + &t4;
        let mut t6 = t5 - &self.c0.c1;
        t6.double_in_place();
        result.c0.c1 = t6 + &t5;

        let t0 = t8 + &t1;
        let t5 = t7 - &t0;
        let mut t6 = t5 + &self.c1.c2;
        t6.double_in_place();
        result.c1.c2 = t5 + &t6;

        result
    }

    pub fn compressed_square_lazy(&self) -> Self {
        let nor = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;
        let nor_d = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue_double;

        let mut result = Self::zero();

        let u0 = self.c0.c1.square_unreduced();
        let u1 = self.c1.c2.square_unreduced();
        let s = self.c0.c1 + &self.c1.c2;
        let u2 = s.square_unreduced();

        // 2 g4 g5
        let t0 = u2.sub_mod(&u0.add_mod(&u1)).reduce();

        let s = self.c1.c0 + &self.c0.c2;
        let u3 = s.square_unreduced();
        let u4 = self.c1.c0.square_unreduced();

        let t1 = nor(&t0);
        let mut t2 = t1 + &self.c1.c0;
        t2.double_in_place();
        result.c1.c0 = t2 + &t1;

        let t0 = nor_d(&u1).add_mod(&u0).reduce();
        let mut t2 = t0 - &self.c0.c2;

        let u5 = self.c0.c2.square_unreduced();

        t2.double_in_place();
        result.c0.c2 = t2 + &t0;

        let t0 = nor_d(&u5).add_mod(&u4).reduce();
        let mut t2 = t0 - &self.c0.c1;
        t2.double_in_place();
        result.c0.c1 = t2 + &t0;

        let t0 = u3.sub_mod(&u4.add_mod(&u5)).reduce();
        let mut t2 = t0 + &self.c1.c2;
        t2.double_in_place();
        result.c1.c2 = t0 + &t2;

        result
    }

    #[inline]
    fn decompression_denominator(&self) -> Fp2<Fp2Params<P>> {
        let g2 = self.c0.c1;
        if !g2.is_zero() {
            g2.double().double()
        } else {
            self.c1.c0
        }
    }

    fn decompress_with_inverse(&self, denom_inv: &Fp2<Fp2Params<P>>) -> Self {
        let nor = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;

        let g2 = self.c0.c1;
        let g3 = self.c1.c0;
        let g4 = self.c0.c2;
        let g5 = self.c1.c2;

        let g1 = if !g2.is_zero() {
            // g1 = (g5^2 xi + 3 g4^2 - 2 g3) / 4 g2
            let g4_sq = g4.square();
            let num = nor(&g5.square()) + &(g4_sq.double() + &g4_sq) - &g3.double();
            num * denom_inv
        } else {
            // g1 = 2 g4 g5 / g3
            (g4 * &g5).double() * denom_inv
        };

        // g0 = (2 g1^2 + g2 g5 - 3 g3 g4) xi + 1
        let g3_g4 = g3 * &g4;
        let g0 = nor(&(g1.square().double() + &(g2 * &g5) - &(g3_g4.double() + &g3_g4)))
            + &Fp2::one();

        Self::new(Fp6::new(g0, g2, g4), Fp6::new(g3, g1, g5))
    }

    /// Recovers the two elided coordinates of a compressed cyclotomic
    /// element. A vanishing denominator only arises for the identity,
    /// which decompresses to one.
    pub fn decompress(&self) -> Self {
        let inv = self
            .decompression_denominator()
            .inverse()
            .unwrap_or_else(Fp2::zero);
        self.decompress_with_inverse(&inv)
    }

    /// Decompresses `elements` in place with a single batch inversion.
    pub fn decompress_batch(elements: &mut [Self]) {
        let mut denoms = elements
            .iter()
            .map(Self::decompression_denominator)
            .collect::<Vec<_>>();
        batch_inversion(&mut denoms);

        for (g, denom_inv) in elements.iter_mut().zip(&denoms) {
            *g = g.decompress_with_inverse(denom_inv);
        }
    }

    /// Exponentiation of a cyclotomic element: signed-digit
    /// square-and-multiply whose squarings are cyclotomic and whose
    /// negative digits multiply by the unitary inverse.
    pub fn cyclotomic_exp(&self, exponent: impl AsRef<[u64]>) -> Self {
        let mut res = Self::one();
        let self_inverse = self.unitary_inverse();

        let mut found_nonzero = false;
        let naf = crate::biginteger::arithmetic::find_wnaf(exponent.as_ref());

        for &value in naf.iter().rev() {
            if found_nonzero {
                res = res.cyclotomic_square();
            }

            if value != 0 {
                found_nonzero = true;

                if value > 0 {
                    res *= self;
                } else {
                    res *= &self_inverse;
                }
            }
        }
        res
    }

    /// Exponentiation of a cyclotomic element by an exponent given as the
    /// ascending list of its set-bit positions. Compressed squarings run
    /// between consecutive positions; one batch decompression recovers
    /// every accumulated factor.
    pub fn cyclotomic_exp_sparse(&self, bits: &[usize]) -> Self {
        let highest = match bits.last() {
            Some(&b) => b,
            None => return Self::one(),
        };

        let mut factors = Vec::with_capacity(bits.len());
        let mut next = if bits[0] == 0 { 1 } else { 0 };
        let mut t = *self;
        for i in 1..=highest {
            t = t.compressed_square();
            if next < bits.len() && bits[next] == i {
                factors.push(t);
                next += 1;
            }
        }
        Self::decompress_batch(&mut factors);

        let mut res = if bits[0] == 0 { *self } else { Self::one() };
        for f in &factors {
            res *= f;
        }
        res
    }
}

impl<P: Fp12Parameters> Zero for Fp12<P> {
    fn zero() -> Self {
        Fp12::new(Fp6::zero(), Fp6::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

impl<P: Fp12Parameters> One for Fp12<P> {
    fn one() -> Self {
        Fp12::new(Fp6::one(), Fp6::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }
}

impl<P: Fp12Parameters> Field for Fp12<P> {
    #[inline]
    fn characteristic<'a>() -> &'a [u64] {
        Fp6::<P::Fp6Params>::characteristic()
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
            // Guide to Pairing-based Cryptography, Algorithm 5.19.
            let mut v0 = self.c0.square();
            let v1 = self.c1.square();
            v0 -= &P::mul_fp6_by_nonresidue(&v1);
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
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c1
            .mul_assign_by_fp2(P::FROBENIUS_COEFF_FP12_C1[power % 12]);
    }
}

/// `Fp12` elements are ordered lexicographically.
impl<P: Fp12Parameters> Ord for Fp12<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.c1.cmp(&other.c1) {
            Ordering::Greater => Ordering::Greater,
            Ordering::Less => Ordering::Less,
            Ordering::Equal => self.c0.cmp(&other.c0),
        }
    }
}

impl<P: Fp12Parameters> PartialOrd for Fp12<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Fp12Parameters> Neg for Fp12<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut res = self;
        res.c0 = res.c0.neg();
        res.c1 = res.c1.neg();
        res
    }
}

impl<P: Fp12Parameters> Distribution<Fp12<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp12<P> {
        Fp12::new(UniformRand::rand(rng), UniformRand::rand(rng))
    }
}

impl<'a, P: Fp12Parameters> Add<&'a Fp12<P>> for Fp12<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &Self) -> Self {
        let mut result = self;
        result.add_assign(other);
        result
    }
}

impl<'a, P: Fp12Parameters> Sub<&'a Fp12<P>> for Fp12<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &Self) -> Self {
        let mut result = self;
        result.sub_assign(other);
        result
    }
}

impl<'a, P: Fp12Parameters> Mul<&'a Fp12<P>> for Fp12<P> {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(other);
        result
    }
}

impl<'a, P: Fp12Parameters> Div<&'a Fp12<P>> for Fp12<P> {
    type Output = Self;

    #[inline]
    fn div(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(&other.inverse().unwrap());
        result
    }
}

impl_additive_ops_from_ref!(Fp12, Fp12Parameters);
impl_multiplicative_ops_from_ref!(Fp12, Fp12Parameters);

impl<'a, P: Fp12Parameters> AddAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }
}

impl<'a, P: Fp12Parameters> SubAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }
}

impl<'a, P: Fp12Parameters> MulAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        if cfg!(feature = "lazy-reduction") {
            *self = self.mul_lazy(other);
        } else {
            *self = self.mul_basic(other);
        }
    }
}

impl<'a, P: Fp12Parameters> DivAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        self.mul_assign(&other.inverse().unwrap());
    }
}

impl<P: Fp12Parameters> fmt::Display for Fp12<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp12({} + {} * w)", self.c0, self.c1)
    }
}
