use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use zkauth::{CurveName, ZeroKnowledge, ZkConfig};

fn engine(curve: CurveName) -> ZeroKnowledge {
    let mut rng = StdRng::seed_from_u64(42);
    ZeroKnowledge::from_config_with_rng(&mut rng, &ZkConfig::new(curve.as_str(), "sha3-256"))
        .expect("engine")
}

fn bench_create_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_signature");
    for curve in CurveName::ALL {
        let zk = engine(curve);
        group.bench_function(BenchmarkId::from_parameter(curve), |bencher| {
            bencher.iter(|| {
                let sig = zk.create_signature(black_box("password")).expect("signature");
                black_box(sig);
            })
        });
    }
    group.finish();
}

fn bench_create_proof(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("create_proof");
    for curve in CurveName::ALL {
        let zk = engine(curve);
        group.bench_function(BenchmarkId::from_parameter(curve), |bencher| {
            bencher.iter(|| {
                let data = zk
                    .sign_with_rng(&mut rng, black_box("password"), black_box("challenge"))
                    .expect("proof");
                black_box(data);
            })
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("verify");
    for curve in CurveName::ALL {
        let zk = engine(curve);
        let sig = zk.create_signature("password").expect("signature");
        let data = zk
            .sign_with_rng(&mut rng, "password", "challenge")
            .expect("proof");
        group.bench_function(BenchmarkId::from_parameter(curve), |bencher| {
            bencher.iter(|| black_box(zk.verify(black_box(&data), black_box(&sig))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_create_signature, bench_create_proof, bench_verify);
criterion_main!(benches);
