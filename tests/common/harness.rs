//! tests/common/harness.rs
use jersey_cc::{AlgorithmRegistry, CongestionOps, CongestionPhase, Config, SocketState};
use std::sync::Once;
use std::time::Duration;
use tokio::time::Instant;

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "jersey_cc=debug".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Builds a configuration with the given segment size and algorithm.
pub fn config(segment_size: u32, algorithm: &str) -> Config {
    let mut config = Config::default();
    config.connection.segment_size = segment_size;
    config.congestion_control.algorithm = algorithm.to_string();
    config
}

/// A minimal stand-in for a host transport: it owns the socket state and the
/// congestion control plugin of one connection and feeds it events in time
/// order, reading "now" from the tokio clock.
#[derive(Debug)]
pub struct HostConnection {
    pub state: SocketState,
    pub ops: Box<dyn CongestionOps>,
    pub bytes_in_flight: u32,
}

impl HostConnection {
    pub fn open(config: &Config) -> Self {
        init_tracing();
        let state = SocketState::from_config(config).unwrap();
        let ops = AlgorithmRegistry::global().create_for(config).unwrap();
        Self {
            state,
            ops,
            bytes_in_flight: 0,
        }
    }

    /// Processes one cumulative ACK.
    pub fn on_ack(&mut self, segments_acked: u32, rtt: Duration) {
        self.ops
            .on_packets_acked(&self.state, segments_acked, rtt, Instant::now());
        if self.state.phase == CongestionPhase::Open {
            self.ops.increase_window(&mut self.state, segments_acked);
        }
    }

    /// Enters `phase` and lets the algorithm react to the congestion signal.
    pub fn congestion_event(&mut self, phase: CongestionPhase) {
        self.state.phase = phase;
        self.ops.on_rate_control(&mut self.state, self.bytes_in_flight);
    }

    /// Spawns the connection accepted by this (listening) connection.
    pub fn accept(&self) -> Self {
        Self {
            state: self.state.clone(),
            ops: self.ops.fork(),
            bytes_in_flight: 0,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.ops
            .slow_start_threshold(&self.state, self.bytes_in_flight)
    }

    /// ACKs `segments` every `interval` for `rounds` rounds, advancing the
    /// paused tokio clock in between.
    pub async fn deliver(&mut self, segments: u32, interval: Duration, rtt: Duration, rounds: u32) {
        for _ in 0..rounds {
            tokio::time::advance(interval).await;
            self.on_ack(segments, rtt);
        }
    }
}
