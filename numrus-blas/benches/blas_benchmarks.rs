use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numrus_blas::named::{daxpy, ddot, dgemv, dtrsm, sgemm, zgemm};
use numrus_blas::{Diag, Layout, Side, Transpose, Uplo, C64};

fn bench_ddot(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddot");
    for &n in &[64, 1024, 16384] {
        let x: Vec<f64> = (0..2 * n).map(|i| i as f64 * 0.001).collect();
        let y: Vec<f64> = (0..2 * n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::new("unit", n), &n, |b, &n| {
            b.iter(|| ddot(n, black_box(&x), 1, black_box(&y), 1));
        });
        group.bench_with_input(BenchmarkId::new("strided", n), &n, |b, &n| {
            b.iter(|| ddot(n, black_box(&x), 2, black_box(&y), -2));
        });
    }
    group.finish();
}

fn bench_daxpy(c: &mut Criterion) {
    let mut group = c.benchmark_group("daxpy");
    for &n in &[64, 1024, 16384] {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
        let mut y: Vec<f64> = (0..n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| daxpy(n, 2.0, black_box(&x), 1, &mut y, 1));
        });
    }
    group.finish();
}

fn bench_dgemv(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemv");
    for &n in &[64, 256, 1024] {
        let a: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.001).sin()).collect();
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).cos()).collect();
        let mut y = vec![0.0; n];
        for layout in [Layout::RowMajor, Layout::ColMajor] {
            group.bench_with_input(BenchmarkId::new(format!("{layout:?}"), n), &n, |b, &n| {
                b.iter(|| dgemv(layout, Transpose::NoTrans, n, n, 1.0, &a, n, &x, 1, 0.0, &mut y, 1));
            });
        }
    }
    group.finish();
}

fn bench_sgemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("sgemm");
    for &n in &[32, 64, 128, 256] {
        let a: Vec<f32> = (0..n * n).map(|i| (i as f32 * 0.001).sin()).collect();
        let b: Vec<f32> = (0..n * n).map(|i| (i as f32 * 0.002).cos()).collect();
        let mut c_mat = vec![0.0f32; n * n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                sgemm(
                    Layout::RowMajor,
                    Transpose::NoTrans,
                    Transpose::NoTrans,
                    n,
                    n,
                    n,
                    1.0,
                    &a,
                    n,
                    &b,
                    n,
                    0.0,
                    &mut c_mat,
                    n,
                );
            });
        });
    }
    group.finish();
}

fn bench_zgemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("zgemm");
    for &n in &[32, 64, 128] {
        let a: Vec<C64> = (0..n * n).map(|i| C64::new((i as f64).sin(), (i as f64).cos())).collect();
        let mut c_mat = vec![C64::new(0.0, 0.0); n * n];
        let (one, zero) = (C64::new(1.0, 0.0), C64::new(0.0, 0.0));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                zgemm(
                    Layout::ColMajor,
                    Transpose::ConjTrans,
                    Transpose::NoTrans,
                    n,
                    n,
                    n,
                    one,
                    &a,
                    n,
                    &a,
                    n,
                    zero,
                    &mut c_mat,
                    n,
                );
            });
        });
    }
    group.finish();
}

fn bench_dtrsm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtrsm");
    for &n in &[32, 128] {
        let mut a: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.003).sin() * 0.1).collect();
        for i in 0..n {
            a[i * n + i] = 2.0;
        }
        let rhs: Vec<f64> = (0..n * n).map(|i| (i % 7) as f64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                let mut b = rhs.clone();
                dtrsm(
                    Layout::RowMajor,
                    Side::Left,
                    Uplo::Lower,
                    Transpose::NoTrans,
                    Diag::NonUnit,
                    n,
                    n,
                    1.0,
                    &a,
                    n,
                    &mut b,
                    n,
                );
                b
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ddot,
    bench_daxpy,
    bench_dgemv,
    bench_sgemm,
    bench_zgemm,
    bench_dtrsm
);
criterion_main!(benches);
