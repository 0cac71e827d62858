use criterion::{criterion_group, criterion_main, Criterion};
use netcalc::{resolve, NetworkRequest};

/// Resolve IPv4 requests in both input shapes
fn bench_resolve_ipv4(c: &mut Criterion) {
    let prefix = NetworkRequest::prefix("192.168.0.1/22");
    let address_mask = NetworkRequest::address_mask("192.168.0.1", "255.255.252.0");

    let mut group = c.benchmark_group("resolve_ipv4");
    group.bench_function("prefix", |b| b.iter(|| resolve(&prefix)));
    group.bench_function("address_mask", |b| b.iter(|| resolve(&address_mask)));
    group.finish();
}

/// Resolve IPv6 requests, including an IPv4-mapped prefix
fn bench_resolve_ipv6(c: &mut Criterion) {
    let prefix = NetworkRequest::prefix("fe80::3:0:0:0/81");
    let mapped = NetworkRequest::prefix("::ffff:192.168.0.0/112");

    let mut group = c.benchmark_group("resolve_ipv6");
    group.bench_function("prefix", |b| b.iter(|| resolve(&prefix)));
    group.bench_function("mapped", |b| b.iter(|| resolve(&mapped)));
    group.finish();
}

criterion_group!(benches, bench_resolve_ipv4, bench_resolve_ipv6);
criterion_main!(benches);
