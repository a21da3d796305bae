use criterion::{criterion_group, criterion_main, Criterion};
use unidna_ucd::{BidiClass, CompiledSet, CompiledTable, RangeRecord};

fn classify_lookup(c: &mut Criterion) {
    let mut records = Vec::new();
    let classes = [BidiClass::L, BidiClass::R, BidiClass::ON, BidiClass::EN];
    for i in 0..1000u32 {
        let start = i * 32;
        records.push(RangeRecord {
            start,
            end: start + 16,
            value: classes[(i % 4) as usize],
        });
    }
    let table = CompiledTable::compile(records);

    c.bench_function("classify", |bench| {
        let mut cp = 0u32;
        bench.iter(|| {
            cp = (cp + 7919) % 32000;
            table.classify(cp);
        });
    });
}

fn set_lookup(c: &mut Criterion) {
    let set = CompiledSet::compile((0..1000u32).map(|i| i * 13).collect());

    c.bench_function("contains", |bench| {
        let mut cp = 0u32;
        bench.iter(|| {
            cp = (cp + 7919) % 13000;
            set.contains(cp);
        });
    });
}

criterion_group!(benches, classify_lookup, set_lookup);
criterion_main!(benches);
