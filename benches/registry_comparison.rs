use core::hash::BuildHasher;
use core::hash::Hash;
use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownMap;
use hybrid_registry::HybridRegistry;
use hybrid_registry::RegistryKey;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

#[derive(Clone, Copy, Default)]
struct SipBuildHasher;

impl BuildHasher for SipBuildHasher {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new()
    }
}

trait BenchKey: RegistryKey + Hash + Clone {
    fn new(key: u64) -> Self;
}

impl BenchKey for u64 {
    fn new(key: u64) -> Self {
        black_box(key)
    }
}

impl BenchKey for String {
    fn new(key: u64) -> Self {
        black_box(format!("key_{:016X}", key))
    }
}

type Registry<K> = HybridRegistry<K, u64, SipBuildHasher>;

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 11),
    (1 << 12),
    (1 << 13),
    (1 << 14),
    (1 << 15),
    (1 << 16),
    (1 << 17),
];

fn random_keys<K: BenchKey>(count: usize) -> Vec<K> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| K::new(rng.try_next_u64().unwrap()))
        .collect()
}

fn filled<K: BenchKey>(keys: &[K]) -> (Registry<K>, HashbrownMap<K, u64, SipBuildHasher>) {
    let mut registry = Registry::with_capacity(keys.len());
    let mut map = HashbrownMap::with_capacity_and_hasher(keys.len(), SipBuildHasher);
    for (i, key) in keys.iter().enumerate() {
        registry.set(key.clone(), i as u64);
        map.insert(key.clone(), i as u64);
    }
    (registry, map)
}

fn bench_insert_preallocated<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_preallocated_{}",
        core::any::type_name::<K>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("hybrid_registry/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut registry = Registry::<K>::with_capacity(size);
                    for (i, key) in keys.into_iter().enumerate() {
                        registry.set(key, i as u64);
                    }
                    black_box(registry)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = HashbrownMap::with_capacity_and_hasher(size, SipBuildHasher);
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.insert(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_insert_with_growth<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_with_growth_{}",
        core::any::type_name::<K>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("hybrid_registry/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut registry = Registry::<K>::new();
                    for (i, key) in keys.into_iter().enumerate() {
                        if registry.needs_growth() || registry.len() == registry.capacity() {
                            registry = registry.grow();
                        }
                        registry.set(key, i as u64);
                    }
                    black_box(registry)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = HashbrownMap::with_hasher(SipBuildHasher);
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.insert(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_hit_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        let (registry, map) = filled(&keys);
        let mut lookups = keys.clone();
        lookups.shuffle(&mut SmallRng::from_os_rng());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("hybrid_registry/{size}"), |b| {
            b.iter(|| {
                for key in lookups.iter() {
                    black_box(registry.get(key));
                }
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in lookups.iter() {
                    black_box(map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_find_miss<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_miss_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        let (registry, map) = filled(&keys);
        let misses = random_keys::<K>(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("hybrid_registry/{size}"), |b| {
            b.iter(|| {
                for key in misses.iter() {
                    black_box(registry.get(key));
                }
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in misses.iter() {
                    black_box(map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_find_zipf<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!(
            "find_zipf_{:.01}_{}",
            exponent,
            core::any::type_name::<K>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        for &size in SIZES[..=MAX_SIZE].iter() {
            let keys = random_keys::<K>(size);
            let (registry, map) = filled(&keys);

            let mut rng = SmallRng::from_os_rng();
            let distr = Zipf::new(size as f64, exponent).unwrap();
            let lookups = (0..size)
                .map(|_| keys[rng.sample(distr) as usize - 1].clone())
                .collect::<Vec<K>>();

            group.throughput(Throughput::Elements(size as u64));
            group.bench_function(format!("hybrid_registry/{size}"), |b| {
                b.iter(|| {
                    for key in lookups.iter() {
                        black_box(registry.get(key));
                    }
                })
            });
            group.bench_function(format!("hashbrown/{size}"), |b| {
                b.iter(|| {
                    for key in lookups.iter() {
                        black_box(map.get(key));
                    }
                })
            });
        }

        group.finish();
    }
}

criterion_group!(
    benches,
    bench_insert_preallocated::<u64, 7>,
    bench_insert_preallocated::<String, 6>,
    bench_insert_with_growth::<u64, 7>,
    bench_insert_with_growth::<String, 6>,
    bench_find_hit::<u64, 7>,
    bench_find_hit::<String, 6>,
    bench_find_miss::<u64, 7>,
    bench_find_miss::<String, 6>,
    bench_find_zipf::<u64, 7>,
    bench_find_zipf::<String, 6>,
);

criterion_main!(benches);
