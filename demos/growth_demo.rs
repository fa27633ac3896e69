use clap::Parser;
use hybrid_registry::DefaultHashBuilder;
use hybrid_registry::HybridRegistry;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "initial_capacity", default_value_t = 16)]
    initial_capacity: usize,

    #[arg(short = 'n', long = "entries", default_value_t = 10_000)]
    entries: usize,
}

fn main() {
    let args = Args::parse();

    let mut registry: HybridRegistry<(u64, Option<String>), u64, DefaultHashBuilder> =
        HybridRegistry::with_capacity(args.initial_capacity);

    println!(
        "Requested capacity {}, actual capacity: {}",
        args.initial_capacity,
        registry.capacity()
    );

    let mut rejected = 0;
    let mut grown = 0;
    for i in 0..args.entries as u64 {
        if registry.needs_growth() {
            let before = registry.capacity();
            registry = registry.grow();
            grown += 1;
            println!(
                "Grew at {} entries: {} -> {}",
                registry.len(),
                before,
                registry.capacity()
            );
        }

        let name = (i % 3 != 0).then(|| format!("name_{i}"));
        if let Err(error) = registry.try_set((i / 3, name), i) {
            rejected += 1;
            registry = registry.grow();
            grown += 1;
            let (key, value) = error.into_inner();
            registry.set(key, value);
        }
    }

    println!("Inserted {} entries", registry.len());
    println!(
        "Final load factor: {:.2}%",
        (registry.len() as f64 / registry.capacity() as f64) * 100.0
    );
    println!("Grew {grown} times, {rejected} inserts hit a full table");

    registry.chain_histogram().print();
    registry.debug_stats().print();
}
