use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glam::Vec3;
use meshforge_core::mesh::generators::{
    generate_cube, generate_cylinder, generate_icosphere, generate_square, CylinderDescriptor,
};

// ---------------------------------------------------------------------------
// Cylinder generation
// ---------------------------------------------------------------------------

fn bench_generate_cylinder_log(c: &mut Criterion) {
    c.bench_function("generate_cylinder_32x1", |b| {
        b.iter(|| {
            generate_cylinder(
                black_box(Vec3::new(0.0, -1.5, 0.0)),
                black_box(1.0),
                black_box(5.0),
                black_box(32),
                black_box(1),
            )
        });
    });
}

fn bench_generate_cylinder_dense(c: &mut Criterion) {
    let desc = CylinderDescriptor::new(Vec3::ZERO, 1.0, 5.0).with_segments(256, 64);
    c.bench_function("generate_cylinder_256x64", |b| {
        b.iter(|| black_box(desc).generate());
    });
}

// ---------------------------------------------------------------------------
// Other shapes
// ---------------------------------------------------------------------------

fn bench_generate_icosphere_default(c: &mut Criterion) {
    c.bench_function("generate_icosphere_5", |b| {
        b.iter(|| generate_icosphere(black_box(Vec3::ZERO), black_box(1.0), black_box(5)));
    });
}

fn bench_generate_icosphere_max(c: &mut Criterion) {
    c.bench_function("generate_icosphere_8", |b| {
        b.iter(|| generate_icosphere(black_box(Vec3::ZERO), black_box(1.0), black_box(8)));
    });
}

fn bench_generate_cube_and_square(c: &mut Criterion) {
    c.bench_function("generate_cube", |b| {
        b.iter(|| generate_cube(black_box(Vec3::ZERO), black_box(1.0)));
    });
    c.bench_function("generate_square", |b| {
        b.iter(|| generate_square(black_box(Vec3::ZERO), black_box(1.0)));
    });
}

criterion_group!(
    generators,
    bench_generate_cylinder_log,
    bench_generate_cylinder_dense,
    bench_generate_icosphere_default,
    bench_generate_icosphere_max,
    bench_generate_cube_and_square,
);
criterion_main!(generators);
