use criterion::{Criterion, criterion_group, criterion_main};

use venn_rs::entities::{RegionSpec, VennInstance};
use venn_rs::layout::solve;
use venn_rs::util::LayoutConfig;

/// Ring of `n` equally sized sets where each set overlaps its two neighbors
fn ring_instance(n: usize) -> VennInstance {
    let mut regions = vec![];
    for i in 0..n {
        regions.push(RegionSpec::new(vec![format!("s{i}")], 10.0));
    }
    for i in 0..n {
        regions.push(RegionSpec::new(
            vec![format!("s{i}"), format!("s{}", (i + 1) % n)],
            2.0,
        ));
    }
    VennInstance::new(&regions).unwrap()
}

fn layout_benchmark(c: &mut Criterion) {
    let config = LayoutConfig::default();

    let mut group = c.benchmark_group("layout");
    for n in [3, 5, 8] {
        let instance = ring_instance(n);
        group.bench_function(format!("ring_{n}"), |b| {
            b.iter(|| solve(&instance, &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, layout_benchmark);
criterion_main!(benches);
