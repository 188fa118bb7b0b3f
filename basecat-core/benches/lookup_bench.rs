use basecat_core::{ProtocolCatalogue, ProtocolCategory};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_all_protocols(c: &mut Criterion) {
    let catalogue = ProtocolCatalogue::builtin().unwrap();
    c.bench_function("all_protocols", |b| b.iter(|| black_box(&catalogue).all_protocols().len()));
}

fn bench_category_filter(c: &mut Criterion) {
    let catalogue = ProtocolCatalogue::builtin().unwrap();
    c.bench_function("protocols_by_category", |b| {
        b.iter(|| catalogue.protocols_by_category(black_box(ProtocolCategory::Lending)).len())
    });
}

fn bench_address_lookup(c: &mut Criterion) {
    let catalogue = ProtocolCatalogue::builtin().unwrap();
    c.bench_function("protocol_by_address_hit", |b| {
        b.iter(|| catalogue.protocol_by_address(black_box("0x4200000000000000000000000000000000000010")).is_some())
    });
    c.bench_function("protocol_by_address_miss", |b| {
        b.iter(|| catalogue.protocol_by_address(black_box("0x9999999999999999999999999999999999999999")).is_some())
    });
}

criterion_group!(
    benches,
    bench_all_protocols,
    bench_category_filter,
    bench_address_lookup
);
criterion_main!(benches);
