use criterion::{criterion_group, criterion_main, Criterion};

use chord_ec::{Curve, EcPoint, Rational};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_mul");

    let mut rng = StdRng::seed_from_u64(0xec);

    // modulus chosen near the i64 range so every multiplication exercises
    // the widened reduction; b chosen so that (5, 1) lies on the curve
    let p = 9223372036854775783_i64;
    let fp_curve = Curve::finite_field(2, p - 134, p);
    let fp_point = EcPoint::finite_field(5, 1);

    let real_curve = Curve::reals(-2.0, 2.0);
    let real_point = EcPoint::reals(1.0, 1.0);

    let q_curve = Curve::rationals(Rational::ONE, Rational::ONE);
    let q_point = EcPoint::rationals(Rational::ZERO, Rational::ONE);

    let n = 50_usize;
    let scalars: Vec<i64> = (0..n).map(|_| rng.gen_range(1..i64::MAX)).collect();
    // rational coordinate heights square with every doubling, so keep the
    // exact-arithmetic scalars small
    let small_scalars: Vec<i64> = (0..n).map(|_| rng.gen_range(1..8)).collect();

    group.bench_function("finite_field", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| fp_curve.scalar_mul(&fp_point, scalars[i]))
    });

    group.bench_function("reals", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| real_curve.scalar_mul(&real_point, scalars[i]))
    });

    group.bench_function("rationals", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| q_curve.scalar_mul(&q_point, small_scalars[i]))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar_mul);
criterion_main!(benches);
