//! # IBC Middleware Benchmarks
//!
//! Cost the hook adds on top of the transfer application's receive:
//!
//! | Path | Work beyond base app |
//! |------|----------------------|
//! | base failed | one branch |
//! | decode failed | JSON parse |
//! | not distinguished | parse + trace split + registry read |
//! | dispatched | parse + classify + keeper call |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_15_ibc_middleware::{
    classify_denom, decode_transfer_packet, DenomTrace, IbcMiddleware, InMemoryAssetRegistry,
    MiddlewareConfig, MockKeeper, MockTransferApp,
};
use qc_tests::fixtures::transfer_payload;
use shared_types::{ChannelIdentity, IbcModule, Packet, Signer, TimeoutHeight};
use std::time::Duration;

fn channel() -> ChannelIdentity {
    ChannelIdentity::parse("transfer", "channel-0").unwrap()
}

fn packet(data: Vec<u8>) -> Packet {
    Packet {
        sequence: 1,
        source: ChannelIdentity::parse("transfer", "channel-141").unwrap(),
        destination: channel(),
        data,
        timeout_height: TimeoutHeight::disabled(),
        timeout_timestamp: 0,
    }
}

fn registry(extra_entries: usize) -> InMemoryAssetRegistry {
    let registry = InMemoryAssetRegistry::new();
    registry.set_distinguished(channel(), "sat", true).unwrap();
    for i in 0..extra_entries {
        registry
            .set_distinguished(channel(), format!("denom{}", i), false)
            .unwrap();
    }
    registry
}

// ============================================================================
// QC-15: Receive path per outcome
// ============================================================================

fn bench_recv_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-15-recv-path");
    group.measurement_time(Duration::from_secs(5));

    let relayer = Signer::new("cosmos1relayer");
    let cases = [
        (
            "dispatched",
            MockTransferApp::succeeding(),
            transfer_payload("transfer/channel-0/sat", "100000", "osmo1alice"),
        ),
        (
            "not_distinguished",
            MockTransferApp::succeeding(),
            transfer_payload("transfer/channel-0/uosmo", "100000", "osmo1alice"),
        ),
        (
            "decode_failed",
            MockTransferApp::succeeding(),
            b"{\"denom\":\"sat\"".to_vec(),
        ),
        (
            "base_failed",
            MockTransferApp::failing("escrow"),
            transfer_payload("transfer/channel-0/sat", "100000", "osmo1alice"),
        ),
    ];

    for (name, app, data) in cases {
        let packet = packet(data);
        let mut bare = app.clone();
        let mut wrapped = IbcMiddleware::new(
            app,
            registry(0),
            MockKeeper::default(),
            MiddlewareConfig::for_testing(),
        );

        group.bench_function(BenchmarkId::new("bare", name), |b| {
            b.iter(|| {
                bare.received.clear();
                bare.calls.clear();
                black_box(bare.on_recv_packet(black_box(&packet), &relayer))
            })
        });

        group.bench_function(BenchmarkId::new("wrapped", name), |b| {
            b.iter(|| {
                wrapped.inner_mut().received.clear();
                wrapped.inner_mut().calls.clear();
                wrapped.keeper_mut().calls.clear();
                black_box(wrapped.on_recv_packet(black_box(&packet), &relayer))
            })
        });
    }

    group.finish();
}

// ============================================================================
// QC-15: Individual steps
// ============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-15-decode");
    let payload = transfer_payload("transfer/channel-0/sat", "100000", "osmo1alice");

    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("ics20_packet_data", |b| {
        b.iter(|| black_box(decode_transfer_packet(black_box(&payload))))
    });
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-15-classify");
    let denom = DenomTrace::new("transfer/channel-0/sat");
    let origin = channel();

    for size in [1usize, 100, 10_000] {
        let registry = registry(size);
        group.bench_with_input(BenchmarkId::new("registry_size", size), &size, |b, _| {
            b.iter(|| black_box(classify_denom(black_box(&denom), &origin, &registry)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recv_path, bench_decode, bench_classify);
criterion_main!(benches);
