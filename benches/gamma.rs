use criterion::{criterion_group, criterion_main, Criterion};
use num_complex::Complex;

// ---------------------------------------------------------------------------
// Right half-plane: series only
// ---------------------------------------------------------------------------

fn gamma_right_half_plane(c: &mut Criterion) {
    let mut g = c.benchmark_group("gamma_right_half_plane");

    g.bench_function("real_f64", |b| {
        b.iter(|| cgamma::gamma(std::hint::black_box(3.7_f64)))
    });

    g.bench_function("complex_f64", |b| {
        let z = Complex::new(3.7_f64, 1.2);
        b.iter(|| cgamma::complex_gamma(std::hint::black_box(z)))
    });

    g.bench_function("complex_f32", |b| {
        let z = Complex::new(3.7_f32, 1.2);
        b.iter(|| cgamma::complex_gamma(std::hint::black_box(z)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Left half-plane: one division per unit shift
// ---------------------------------------------------------------------------

fn gamma_left_half_plane(c: &mut Criterion) {
    let mut g = c.benchmark_group("gamma_left_half_plane");

    for &re in &[-0.5_f64, -10.5, -100.5] {
        g.bench_function(format!("complex_f64_re{re}"), |b| {
            let z = Complex::new(re, 0.75);
            b.iter(|| cgamma::complex_gamma(std::hint::black_box(z)))
        });
    }

    g.bench_function("checked_f64", |b| {
        let z = Complex::new(-10.5_f64, 0.75);
        b.iter(|| cgamma::special::try_complex_gamma(std::hint::black_box(z)))
    });

    g.finish();
}

criterion_group!(benches, gamma_right_half_plane, gamma_left_half_plane);
criterion_main!(benches);
