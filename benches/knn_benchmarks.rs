use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sdr_knn::distance::{euclidean, manhattan, minkowski};
use sdr_knn::{Classifier, KNNClassifier, KnnConfig};

fn random_vectors(rng: &mut ChaCha8Rng, n: usize, dim: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..dim).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut group = c.benchmark_group("distance");
    for &dim in &[64, 1024, 2048] {
        let v = random_vectors(&mut rng, 2, dim);
        group.bench_with_input(BenchmarkId::new("euclidean", dim), &v, |b, v| {
            b.iter(|| euclidean(black_box(v[0].as_slice()), black_box(v[1].as_slice())))
        });
        group.bench_with_input(BenchmarkId::new("manhattan", dim), &v, |b, v| {
            b.iter(|| manhattan(black_box(v[0].as_slice()), black_box(v[1].as_slice())))
        });
        group.bench_with_input(BenchmarkId::new("minkowski_p3", dim), &v, |b, v| {
            b.iter(|| minkowski(black_box(v[0].as_slice()), black_box(v[1].as_slice()), 3))
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let train = random_vectors(&mut rng, 1000, 128);
    let labels: Vec<u32> = (0..train.len()).map(|_| rng.gen_range(0..10)).collect();
    let test = random_vectors(&mut rng, 100, 128);

    let sequential = KNNClassifier::new();
    let parallel = KNNClassifier::with_config(KnnConfig::new().with_parallel(true));

    let mut group = c.benchmark_group("classify");
    for &k in &[1, 5, 25] {
        group.bench_with_input(BenchmarkId::new("sequential", k), &k, |b, &k| {
            b.iter(|| sequential.classify(black_box(test.as_slice()), &train, &labels, k))
        });
        group.bench_with_input(BenchmarkId::new("parallel", k), &k, |b, &k| {
            b.iter(|| parallel.classify(black_box(test.as_slice()), &train, &labels, k))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distance, bench_classify);
criterion_main!(benches);
