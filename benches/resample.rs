use criterion::{black_box, criterion_group, criterion_main, Criterion};

use airfoil_resample::airfoil::generate::Naca4Digit;
use airfoil_resample::airfoil::resample::resample;
use airfoil_resample::airfoil::split::split;
use airfoil_resample::{process, ProcessParams, Profile, Spacing, SplitStrategy};

fn benchmark(c: &mut Criterion) {
    let naca = Naca4Digit::new(0.12, 0.02, 0.4).closed();
    let text = naca.to_selig("NACA 2412", 80, Spacing::Quadratic);
    let profile = Profile::parse(&text).expect("Failed parsing generated profile");
    let surfaces = split(&profile.points, SplitStrategy::Gradient).expect("Failed splitting");
    let params = ProcessParams::default().with_resolution(500);

    c.bench_function("Parse Selig", |b| b.iter(|| Profile::parse(black_box(&text))));
    c.bench_function("Hermite Resample", |b| {
        b.iter(|| resample(black_box(&surfaces), 500, Spacing::Quadratic))
    });
    c.bench_function("Full Pipeline", |b| {
        b.iter(|| process(black_box(&profile), black_box(&params)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
