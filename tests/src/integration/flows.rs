//! # Integration Test Flows
//!
//! Tests that the qc-15 IBC middleware behaves as a drop-in replacement for
//! the transfer application it wraps when bound in a port router.
//!
//! ## Flows Tested:
//!
//! 1. **Router substitution**: bare app vs wrapped app produce identical
//!    handshake results and identical ack commitments
//! 2. **Distinguished receipt**: `transfer/<dest>/sat` reaches the keeper once
//! 3. **Failure isolation**: keeper and decode failures leave acks untouched
//! 4. **Telemetry**: subsystem bring-up and outcomes counted in the
//!    Prometheus registry

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qc_15_ibc_middleware::{
        Amount, IbcMiddleware, InMemoryAssetRegistry, KeeperCall, KeeperError, LoggingKeeper,
        MiddlewareConfig, MockTransferApp,
    };
    use quantum_telemetry::TelemetryConfig;
    use shared_types::{
        Acknowledgement, ChannelError, ChannelId, ChannelIdentity, Counterparty, Order, PortId,
        Version,
    };

    use crate::fixtures::{transfer_payload, PortRouter, Relay, SharedKeeper};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const GENESIS: &str = r#"[
        {"port_id": "transfer", "channel_id": "channel-0", "base_denom": "sat", "distinguished": true},
        {"port_id": "transfer", "channel_id": "channel-0", "base_denom": "uosmo", "distinguished": false}
    ]"#;

    fn local_end() -> ChannelIdentity {
        ChannelIdentity::parse("transfer", "channel-0").unwrap()
    }

    fn remote_end() -> ChannelIdentity {
        ChannelIdentity::parse("transfer", "channel-141").unwrap()
    }

    fn bare_router(app: MockTransferApp) -> PortRouter {
        let mut router = PortRouter::new();
        router.bind(PortId::transfer(), Box::new(app));
        router
    }

    fn wrapped_router(
        app: MockTransferApp,
        keeper: SharedKeeper,
        config: MiddlewareConfig,
    ) -> PortRouter {
        let registry = InMemoryAssetRegistry::from_json(GENESIS).unwrap();
        let mut router = PortRouter::new();
        router.bind(
            PortId::transfer(),
            Box::new(IbcMiddleware::new(app, registry, keeper, config)),
        );
        router
    }

    fn mixed_traffic() -> Vec<Vec<u8>> {
        vec![
            transfer_payload("transfer/channel-0/sat", "100000", "osmo1alice"),
            transfer_payload("uatom", "5", "osmo1bob"),
            transfer_payload("transfer/channel-0/uosmo", "7", "osmo1carol"),
            transfer_payload("transfer/channel-9/sat", "1", "osmo1dave"),
            b"{\"denom\":\"sat\"}".to_vec(),
            b"\xff\xfe".to_vec(),
        ]
    }

    // =============================================================================
    // INTEGRATION TESTS: ROUTER SUBSTITUTION
    // =============================================================================

    /// Same traffic through the bare app and the wrapped app commits
    /// byte-identical acknowledgements.
    #[test]
    fn test_wrapped_stack_commits_identical_acks() {
        for app in [
            MockTransferApp::succeeding(),
            MockTransferApp::failing("escrow balance too low"),
        ] {
            let mut bare = Relay::new(bare_router(app.clone()), remote_end(), local_end());
            let mut wrapped = Relay::new(
                wrapped_router(app, SharedKeeper::new(), MiddlewareConfig::for_testing()),
                remote_end(),
                local_end(),
            );

            for payload in mixed_traffic() {
                bare.deliver(payload.clone()).unwrap();
                wrapped.deliver(payload).unwrap();
            }

            assert_eq!(bare.commitments(), wrapped.commitments());
        }
    }

    /// Handshake results through the router are the base app's results.
    #[test]
    fn test_wrapped_stack_handshake_matches_bare() {
        let mut bare = bare_router(MockTransferApp::succeeding());
        let mut wrapped = wrapped_router(
            MockTransferApp::succeeding(),
            SharedKeeper::new(),
            MiddlewareConfig::for_testing(),
        );
        let hops = vec!["connection-2".to_string()];
        let port = PortId::transfer();
        let chan = ChannelId::with_index(0);
        let counterparty = Counterparty::new(PortId::transfer(), Some(ChannelId::with_index(141)));

        for (order, version) in [
            (Order::Unordered, Version::empty()),
            (Order::Unordered, Version::new("ics20-1")),
            (Order::Unordered, Version::new("ics20-2")),
            (Order::Ordered, Version::new("ics20-1")),
        ] {
            assert_eq!(
                bare.chan_open_init(order, &hops, &port, &chan, &counterparty, &version),
                wrapped.chan_open_init(order, &hops, &port, &chan, &counterparty, &version)
            );
            assert_eq!(
                bare.chan_open_try(order, &hops, &port, &chan, &counterparty, &version),
                wrapped.chan_open_try(order, &hops, &port, &chan, &counterparty, &version)
            );
        }

        assert_eq!(
            wrapped.chan_close_init(&port, &chan),
            Err(ChannelError::CloseNotAllowed {
                channel_id: "channel-0".to_string()
            })
        );
    }

    /// Unbound ports are rejected by the router, not by the middleware.
    #[test]
    fn test_unbound_port_rejected() {
        let mut router = wrapped_router(
            MockTransferApp::succeeding(),
            SharedKeeper::new(),
            MiddlewareConfig::for_testing(),
        );
        let mut relay = Relay::new(
            PortRouter::new(),
            remote_end(),
            ChannelIdentity::parse("icahost", "channel-3").unwrap(),
        );
        let packet = relay.next_packet(transfer_payload("sat", "1", "osmo1x"));

        assert!(matches!(
            router.recv_packet(&packet, &shared_types::Signer::new("r")),
            Err(ChannelError::InvalidPort { .. })
        ));
        assert!(relay.deliver(vec![]).is_err());
    }

    // =============================================================================
    // INTEGRATION TESTS: DISTINGUISHED RECEIPTS
    // =============================================================================

    /// Only the packet whose first hop is the receiving channel and whose
    /// base denom is registered reaches the keeper.
    #[test]
    fn test_only_distinguished_receipt_dispatched() {
        let keeper = SharedKeeper::new();
        let mut relay = Relay::new(
            wrapped_router(
                MockTransferApp::succeeding(),
                keeper.clone(),
                MiddlewareConfig::for_testing(),
            ),
            remote_end(),
            local_end(),
        );

        for payload in mixed_traffic() {
            relay.deliver(payload).unwrap();
        }

        assert_eq!(
            keeper.calls(),
            vec![KeeperCall {
                receiver: "osmo1alice".to_string(),
                amount: Amount::from(100_000u64),
                channel: local_end(),
            }]
        );
    }

    /// Rejected transfers never reach the keeper.
    #[test]
    fn test_base_rejection_skips_keeper() {
        let keeper = SharedKeeper::new();
        let mut relay = Relay::new(
            wrapped_router(
                MockTransferApp::failing("invalid receiver"),
                keeper.clone(),
                MiddlewareConfig::for_testing(),
            ),
            remote_end(),
            local_end(),
        );

        let ack = relay
            .deliver(transfer_payload("transfer/channel-0/sat", "1", "osmo1alice"))
            .unwrap();

        assert_eq!(ack, br#"{"error":"invalid receiver"}"#.to_vec());
        assert!(keeper.calls().is_empty());
    }

    /// Keeper failure is swallowed; the committed ack is still success.
    #[test]
    fn test_keeper_failure_isolated() {
        let keeper = SharedKeeper::failing(KeeperError::Rejected {
            reason: "lending pool paused".to_string(),
        });
        let mut relay = Relay::new(
            wrapped_router(
                MockTransferApp::succeeding(),
                keeper.clone(),
                MiddlewareConfig::for_testing(),
            ),
            remote_end(),
            local_end(),
        );

        let ack = relay
            .deliver(transfer_payload("transfer/channel-0/sat", "21", "osmo1alice"))
            .unwrap();

        assert_eq!(ack, br#"{"result":"AQ=="}"#.to_vec());
        assert_eq!(
            Acknowledgement::from_json_bytes(&ack).unwrap(),
            Acknowledgement::transfer_success()
        );
        assert_eq!(keeper.calls().len(), 1);
    }

    /// Governance flips a flag while the middleware is live.
    #[test]
    fn test_shared_registry_governance_update() {
        let registry = Arc::new(InMemoryAssetRegistry::new());
        let keeper = SharedKeeper::new();
        let mut router = PortRouter::new();
        router.bind(
            PortId::transfer(),
            Box::new(IbcMiddleware::new(
                MockTransferApp::succeeding(),
                Arc::clone(&registry),
                keeper.clone(),
                MiddlewareConfig::for_testing(),
            )),
        );
        let mut relay = Relay::new(router, remote_end(), local_end());
        let payload = transfer_payload("transfer/channel-0/sat", "3", "osmo1alice");

        relay.deliver(payload.clone()).unwrap();
        registry.set_distinguished(local_end(), "sat", true).unwrap();
        relay.deliver(payload.clone()).unwrap();
        registry.remove(&local_end(), "sat");
        relay.deliver(payload).unwrap();

        assert_eq!(keeper.calls().len(), 1);
    }

    /// The stock keeper works behind the router too.
    #[test]
    fn test_logging_keeper_behind_router() {
        let registry = InMemoryAssetRegistry::from_json(GENESIS).unwrap();
        let mut router = PortRouter::new();
        router.bind(
            PortId::transfer(),
            Box::new(IbcMiddleware::new(
                MockTransferApp::succeeding(),
                registry,
                LoggingKeeper::new(),
                MiddlewareConfig::for_testing(),
            )),
        );
        let mut relay = Relay::new(router, remote_end(), local_end());

        let ack = relay
            .deliver(transfer_payload("transfer/channel-0/sat", "9", "osmo1alice"))
            .unwrap();

        assert_eq!(ack, Acknowledgement::transfer_success().to_json_bytes());
    }

    // =============================================================================
    // INTEGRATION TESTS: TELEMETRY
    // =============================================================================

    /// Outcomes land in the Prometheus registry when metrics are on.
    #[test]
    fn test_outcomes_counted() {
        quantum_telemetry::register_metrics().unwrap();
        let dispatched_before = quantum_telemetry::IBC_PACKETS_RECEIVED
            .with_label_values(&["dispatched"])
            .get();
        let decode_failed_before = quantum_telemetry::IBC_PACKETS_RECEIVED
            .with_label_values(&["decode_failed"])
            .get();

        let mut relay = Relay::new(
            wrapped_router(
                MockTransferApp::succeeding(),
                SharedKeeper::new(),
                MiddlewareConfig::default(),
            ),
            remote_end(),
            local_end(),
        );
        relay
            .deliver(transfer_payload("transfer/channel-0/sat", "1", "osmo1alice"))
            .unwrap();
        relay.deliver(b"not json".to_vec()).unwrap();

        let dispatched_after = quantum_telemetry::IBC_PACKETS_RECEIVED
            .with_label_values(&["dispatched"])
            .get();
        let decode_failed_after = quantum_telemetry::IBC_PACKETS_RECEIVED
            .with_label_values(&["decode_failed"])
            .get();
        assert!(dispatched_after >= dispatched_before + 1.0);
        assert!(decode_failed_after >= decode_failed_before + 1.0);

        let text = quantum_telemetry::encode_metrics().unwrap();
        assert!(text.contains("qc_ibc_packets_received_total"));
        assert!(text.contains("qc_ibc_aux_dispatch_duration_seconds"));
    }

    /// Full telemetry bring-up for the subsystem: the guard exposes the
    /// installed logger and a registry that already holds the middleware's
    /// collectors once traffic has flowed.
    #[test]
    fn test_init_telemetry_registers_middleware_metrics() {
        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::for_subsystem("15", "ibc-middleware")
        };
        let guard = quantum_telemetry::init_telemetry(config).unwrap();
        assert_eq!(guard.logger().service_name(), "qc-15-ibc-middleware");

        let mut relay = Relay::new(
            wrapped_router(
                MockTransferApp::succeeding(),
                SharedKeeper::new(),
                MiddlewareConfig::default(),
            ),
            remote_end(),
            local_end(),
        );
        relay
            .deliver(transfer_payload("transfer/channel-0/sat", "2", "osmo1alice"))
            .unwrap();

        let names: Vec<String> = guard
            .metrics()
            .registry()
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.iter().any(|n| n == "qc_ibc_packets_received_total"));
        assert!(names
            .iter()
            .any(|n| n == "qc_ibc_aux_dispatch_duration_seconds"));
    }
}
