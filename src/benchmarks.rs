use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decmul::karatsuba::karatsuba_mul;
use decmul::naive_mul::naive_mul;
use decmul::DigitSequence;
use rand::{Rng, SeedableRng};

fn random_digit_sequence(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> DigitSequence {
    let mut digits = vec![0; size];
    for x in digits.iter_mut() {
        *x = rng.gen_range(0..10);
    }
    DigitSequence::from_digits(digits).unwrap()
}

fn bench_naive_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut size = 4;
    while size <= 2048 {
        let a = random_digit_sequence(&mut rng, size);
        let b = random_digit_sequence(&mut rng, size);
        c.bench_function(&format!("naive_mul_{}", size), |bench| {
            bench.iter(|| naive_mul(black_box(&a), black_box(&b)))
        });
        size *= 2;
    }
}

fn bench_karatsuba_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut size = 4;
    while size <= 2048 {
        let a = random_digit_sequence(&mut rng, size);
        let b = random_digit_sequence(&mut rng, size);
        c.bench_function(&format!("karatsuba_mul_{}", size), |bench| {
            bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b)))
        });
        size *= 2;
    }
}

fn bench_add(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digit_sequence(&mut rng, 1000);
    let b = random_digit_sequence(&mut rng, 1000);
    c.bench_function("add_1k", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b));
    });
}

fn config() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = config();
    targets =
        bench_naive_mul,
        bench_karatsuba_mul,
        bench_add,
);
criterion_main!(benches);
