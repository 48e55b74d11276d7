use fptower_core::{
    biginteger::{BigInteger, BigInteger384},
    fields::{
        batch_inversion, DoubleWidth, Field, Fp2Parameters, Fp6Parameters, PrimeField,
        SquareRootField,
    },
    One, UniformRand, Zero,
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::{
    bls12_381::{Fq, Fq12, Fq2, Fq2Parameters, Fq6, Fq6Parameters},
    tests::fields::{field_test, frobenius_test, primefield_test, sqrt_field_test},
};

pub(crate) const ITERATIONS: usize = 10;

fn test_rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(1231275789u64)
}

#[test]
fn test_fq() {
    let mut rng = test_rng();
    let a: Fq = UniformRand::rand(&mut rng);
    let b: Fq = UniformRand::rand(&mut rng);
    field_test(a, b);
    primefield_test::<Fq>();
    sqrt_field_test::<Fq>();
}

#[test]
fn test_fq2() {
    let mut rng = test_rng();
    let a: Fq2 = UniformRand::rand(&mut rng);
    let b: Fq2 = UniformRand::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test::<Fq2>();
    frobenius_test::<Fq2>(Fq::characteristic(), 13);
}

#[test]
fn test_fq6() {
    let mut rng = test_rng();
    let a: Fq6 = UniformRand::rand(&mut rng);
    let b: Fq6 = UniformRand::rand(&mut rng);
    field_test(a, b);
    frobenius_test::<Fq6>(Fq::characteristic(), 13);
}

#[test]
fn test_fq12() {
    let mut rng = test_rng();
    let a: Fq12 = UniformRand::rand(&mut rng);
    let b: Fq12 = UniformRand::rand(&mut rng);
    field_test(a, b);
    frobenius_test::<Fq12>(Fq::characteristic(), 13);
}

#[test]
fn test_fq_double_width_accumulator() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq = UniformRand::rand(&mut rng);
        let b: Fq = UniformRand::rand(&mut rng);
        let c: Fq = UniformRand::rand(&mut rng);
        let d: Fq = UniformRand::rand(&mut rng);

        let ab = a.mul_unreduced(&b);
        let cd = c.mul_unreduced(&d);

        assert_eq!(ab.reduce(), a * &b);
        assert_eq!(a.square_unreduced().reduce(), a.square());

        let sum = a * &b + &(c * &d);
        assert_eq!(ab.add_unchecked(&cd).reduce(), sum);
        assert_eq!(ab.add_mod(&cd).reduce(), sum);
        assert_eq!(ab.sub_mod(&cd).reduce(), a * &b - &(c * &d));
        assert_eq!(ab.neg_mod().reduce(), -(a * &b));
    }
}

#[test]
fn test_fq2_mul_strategies_agree() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq2 = UniformRand::rand(&mut rng);
        let b: Fq2 = UniformRand::rand(&mut rng);

        let dense = a * &b;
        assert_eq!(dense, a.mul_basic(&b));
        assert_eq!(dense, a.mul_lazy(&b));

        let square = a.square();
        assert_eq!(square, a * &a);
        assert_eq!(square, a.square_basic());
        assert_eq!(square, a.square_lazy());
    }
}

#[test]
fn test_fq2_mul_by_u() {
    let mut rng = test_rng();
    let u = Fq2::new(Fq::zero(), Fq::one());
    for _ in 0..ITERATIONS {
        let a: Fq2 = UniformRand::rand(&mut rng);
        assert_eq!(a.mul_by_u(), a * &u);
    }
}

#[test]
fn test_fq2_nonresidue_forms_agree() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq2 = UniformRand::rand(&mut rng);

        let closed_form = Fq6Parameters::mul_fp2_by_nonresidue(&a);
        assert_eq!(closed_form, a * &Fq6Parameters::NONRESIDUE);
        assert_eq!(closed_form, a.mul_by_nonresidue_via_mod8());
    }
}

#[test]
fn test_fq2_sqrt_rejects_non_squares() {
    let mut rng = test_rng();
    let qnr = Fq2::new(
        Fq2Parameters::QUADRATIC_NONRESIDUE.0,
        Fq2Parameters::QUADRATIC_NONRESIDUE.1,
    );
    for _ in 0..ITERATIONS {
        let a: Fq2 = UniformRand::rand(&mut rng);
        let b = a.square() * &qnr;
        assert!(b.sqrt().is_none());
    }
}

#[test]
fn test_fq2_batch_inversion_matches_pointwise() {
    let mut rng = test_rng();
    let a: Fq2 = UniformRand::rand(&mut rng);
    let b: Fq2 = UniformRand::rand(&mut rng);

    let mut pair = [a, b];
    batch_inversion(&mut pair);
    assert_eq!(pair[0], a.inverse().unwrap());
    assert_eq!(pair[1], b.inverse().unwrap());

    let elements = (0..ITERATIONS)
        .map(|_| UniformRand::rand(&mut rng))
        .collect::<Vec<Fq2>>();
    let mut batched = elements.clone();
    batch_inversion(&mut batched);
    for (x, y) in elements.iter().zip(&batched) {
        assert_eq!(x.inverse().unwrap(), *y);
    }
}

#[test]
fn test_fq6_mul_strategies_agree() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq6 = UniformRand::rand(&mut rng);
        let b: Fq6 = UniformRand::rand(&mut rng);

        let dense = a * &b;
        assert_eq!(dense, a.mul_basic(&b));
        assert_eq!(dense, a.mul_lazy(&b));

        let square = a.square();
        assert_eq!(square, a * &a);
        assert_eq!(square, a.square_basic());
        assert_eq!(square, a.square_lazy());
    }
}

#[test]
fn test_fq6_mul_by_v() {
    let mut rng = test_rng();
    let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
    for _ in 0..ITERATIONS {
        let a: Fq6 = UniformRand::rand(&mut rng);
        assert_eq!(a.mul_by_v(), a * &v);
    }
}

#[test]
fn test_fq6_sparse_mul_matches_dense() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq6 = UniformRand::rand(&mut rng);
        let c0: Fq2 = UniformRand::rand(&mut rng);
        let c1: Fq2 = UniformRand::rand(&mut rng);

        let mut sparse = a;
        sparse.mul_by_1(&c1);
        assert_eq!(sparse, a * &Fq6::new(Fq2::zero(), c1, Fq2::zero()));

        let mut sparse = a;
        sparse.mul_by_01(&c0, &c1);
        assert_eq!(sparse, a * &Fq6::new(c0, c1, Fq2::zero()));
    }
}

#[test]
fn test_fq12_mul_strategies_agree() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let b: Fq12 = UniformRand::rand(&mut rng);

        let dense = a * &b;
        assert_eq!(dense, a.mul_basic(&b));
        assert_eq!(dense, a.mul_lazy(&b));

        let square = a.square();
        assert_eq!(square, a * &a);
        assert_eq!(square, a.square_basic());
        assert_eq!(square, a.square_lazy());
    }
}

#[test]
fn test_fq12_sparse_mul_matches_dense() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let c0: Fq2 = UniformRand::rand(&mut rng);
        let c1: Fq2 = UniformRand::rand(&mut rng);
        let c4: Fq2 = UniformRand::rand(&mut rng);

        let mut sparse = a;
        sparse.mul_by_014(&c0, &c1, &c4);
        let dense = Fq12::new(
            Fq6::new(c0, c1, Fq2::zero()),
            Fq6::new(Fq2::zero(), c4, Fq2::zero()),
        );
        assert_eq!(sparse, a * &dense);

        let mut sparse = a;
        sparse.mul_by_034(&c0, &c1, &c4);
        let dense = Fq12::new(
            Fq6::new(c0, Fq2::zero(), Fq2::zero()),
            Fq6::new(c1, c4, Fq2::zero()),
        );
        assert_eq!(sparse, a * &dense);
    }
}

#[test]
fn test_fq12_inverse_gives_identity() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let inv = a.inverse().unwrap();
        let product = a * &inv;
        assert_eq!(product, Fq12::one());
        assert_eq!(product.c0.c0.c0, Fq::one());
        assert!(product.c0.c0.c1.is_zero());
        assert!(product.c0.c1.is_zero());
        assert!(product.c0.c2.is_zero());
        assert!(product.c1.is_zero());
    }
}

#[test]
fn test_fq12_unitary_inverse() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let g = a.to_unitary().unwrap();
        assert_eq!(g.unitary_inverse(), g.inverse().unwrap());
        assert_eq!(g * &g.unitary_inverse(), Fq12::one());
    }
}

#[test]
fn test_fq12_cyclotomic_membership() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        assert!(!a.is_cyclotomic());

        let g = a.to_cyclotomic().unwrap();
        assert!(g.is_cyclotomic());
        assert_eq!(g * &g.unitary_inverse(), Fq12::one());
    }
}

#[test]
fn test_fq12_cyclotomic_squaring() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let g = a.to_cyclotomic().unwrap();

        let square = g.square();
        assert_eq!(square, g * &g);
        assert_eq!(square, g.cyclotomic_square());
        assert_eq!(square, g.cyclotomic_square_basic());
        assert_eq!(square, g.cyclotomic_square_lazy());
    }
}

#[test]
fn test_fq12_decompression_roundtrip() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let g = a.to_cyclotomic().unwrap();

        let mut compressed = g;
        compressed.c0.c0 = Fq2::zero();
        compressed.c1.c1 = Fq2::zero();
        assert_eq!(compressed.decompress(), g);
    }

    // One batch inversion for many elements.
    let mut originals = Vec::new();
    let mut compressed = Vec::new();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let g = a.to_cyclotomic().unwrap();
        let mut c = g;
        c.c0.c0 = Fq2::zero();
        c.c1.c1 = Fq2::zero();
        originals.push(g);
        compressed.push(c);
    }
    Fq12::decompress_batch(&mut compressed);
    assert_eq!(originals, compressed);
}

#[test]
fn test_fq12_compressed_squaring() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let g = a.to_cyclotomic().unwrap();

        let packed = g.compressed_square();
        assert_eq!(packed, g.compressed_square_basic());
        assert_eq!(packed, g.compressed_square_lazy());
        assert!(packed.c0.c0.is_zero());
        assert!(packed.c1.c1.is_zero());

        assert_eq!(packed.decompress(), g.square());
    }
}

#[test]
fn test_fq12_cyclotomic_exp_matches_pow() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let g = a.to_cyclotomic().unwrap();

        let mut e: BigInteger384 = UniformRand::rand(&mut rng);
        e.as_mut()[5] &= u64::MAX >> 3;

        assert_eq!(g.cyclotomic_exp(e), g.pow(e));
    }
}

#[test]
fn test_fq12_sparse_cyclotomic_exp_matches_pow() {
    let mut rng = test_rng();
    let max_bit = Fq::size_in_bits() - 1;
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let g = a.to_cyclotomic().unwrap();

        let mut middle = 0;
        while middle == 0 || middle == max_bit {
            middle = rng.gen_range(0, max_bit);
        }
        let bits = [0, middle, max_bit];

        let mut e = BigInteger384::default();
        for &b in &bits {
            e.set_bit(b, true);
        }

        assert_eq!(g.cyclotomic_exp_sparse(&bits), g.pow(e));
        assert_eq!(g.cyclotomic_exp(e), g.pow(e));
    }
}

#[test]
fn test_fq12_frobenius_matches_prime_power() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a: Fq12 = UniformRand::rand(&mut rng);

        let mut b = a;
        b.frobenius_map(1);
        assert_eq!(b, a.pow(Fq::characteristic()));

        let mut twice = b;
        twice.frobenius_map(1);
        let mut direct = a;
        direct.frobenius_map(2);
        assert_eq!(twice, direct);

        let mut thrice = twice;
        thrice.frobenius_map(1);
        let mut direct = a;
        direct.frobenius_map(3);
        assert_eq!(thrice, direct);
    }
}
