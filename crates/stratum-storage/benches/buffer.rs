//! Buffer pool benchmarks.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stratum_storage::buffer::{BufferPool, BufferPoolConfig, FrameId, LruKReplacer};
use stratum_storage::disk::MemoryDiskManager;

fn replacer_record_access_benchmark(c: &mut Criterion) {
    c.bench_function("lru_k_record_access_4096", |b| {
        b.iter(|| {
            let mut replacer = LruKReplacer::new(1024, 2);
            for i in 0..4096usize {
                replacer.record_access(FrameId::new(i % 1024)).unwrap();
            }
            black_box(replacer.len())
        })
    });
}

fn replacer_evict_benchmark(c: &mut Criterion) {
    c.bench_function("lru_k_evict_1024", |b| {
        b.iter(|| {
            let mut replacer = LruKReplacer::new(1024, 2);
            for i in 0..1024usize {
                replacer.record_access(FrameId::new(i)).unwrap();
                replacer.set_evictable(FrameId::new(i), true);
            }
            let mut evicted = 0;
            while replacer.evict().is_some() {
                evicted += 1;
            }
            black_box(evicted)
        })
    });
}

fn pool_fetch_hit_benchmark(c: &mut Criterion) {
    let disk = Arc::new(MemoryDiskManager::new());
    let pool = BufferPool::new(BufferPoolConfig::new(128), disk).unwrap();

    let page_ids: Vec<_> = (0..128)
        .map(|_| pool.new_page().unwrap().page_id())
        .collect();

    c.bench_function("pool_fetch_hit_128", |b| {
        b.iter(|| {
            for &page_id in &page_ids {
                black_box(pool.fetch_page(page_id).unwrap());
            }
        })
    });
}

fn pool_eviction_churn_benchmark(c: &mut Criterion) {
    c.bench_function("pool_eviction_churn_256", |b| {
        b.iter(|| {
            let disk = Arc::new(MemoryDiskManager::new());
            let pool = BufferPool::new(BufferPoolConfig::new(64), disk).unwrap();
            for _ in 0..256 {
                let mut guard = pool.new_page().unwrap();
                guard.data_mut()[0] = 1;
            }
            black_box(pool.stats().evictions)
        })
    });
}

criterion_group!(
    benches,
    replacer_record_access_benchmark,
    replacer_evict_benchmark,
    pool_fetch_hit_benchmark,
    pool_eviction_churn_benchmark
);
criterion_main!(benches);
