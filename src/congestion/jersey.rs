//! An implementation of TCP Jersey, a Westwood+ style AIAD congestion
//! control algorithm.
//!
//! 一个 TCP Jersey 的实现，这是一种 Westwood+ 风格的 AIAD 拥塞控制算法。
//!
//! Jersey grows its window like NewReno. On a congestion event, instead of
//! halving the window, it sets both `ssthresh` and `cwnd` to the estimated
//! bandwidth-delay product of the path.

use crate::config::CongestionControlConfig;
use crate::congestion::{BandwidthEstimator, CongestionOps};
use crate::socket_state::SocketState;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// The Jersey congestion controller.
///
/// Jersey 拥塞控制器。
#[derive(Debug, Clone)]
pub struct Jersey {
    pub(super) estimator: BandwidthEstimator,
}

impl Jersey {
    pub const NAME: &'static str = "jersey";

    /// Creates a new controller with an empty bandwidth estimate.
    ///
    /// 创建一个带宽估计为空的新控制器。
    pub fn new(config: &CongestionControlConfig) -> Self {
        Self::with_estimator(BandwidthEstimator::from_config(config))
    }

    pub fn with_estimator(estimator: BandwidthEstimator) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &BandwidthEstimator {
        &self.estimator
    }

    /// Current bandwidth estimate in bytes per second.
    pub fn bandwidth(&self) -> f64 {
        self.estimator.bandwidth()
    }

    /// Discards the bandwidth estimate and all pending samples.
    ///
    /// 丢弃带宽估计和所有待处理的样本。
    pub fn reset(&mut self) {
        self.estimator.reset();
        debug!("Jersey controller reset to initial state");
    }

    /// 获取拥塞控制统计信息
    /// Get congestion control statistics
    pub fn statistics(&self) -> JerseyStats {
        JerseyStats {
            bandwidth: self.estimator.bandwidth(),
            rtt: self.estimator.rtt(),
            acked_bytes: self.estimator.acked_bytes(),
            rtt_multiplier: self.estimator.rtt_multiplier(),
        }
    }
}

/// The slow start threshold derived from a bandwidth estimate: the
/// bandwidth-delay product in bytes, never less than two full segments.
///
/// 由带宽估计得出的慢启动阈值：以字节为单位的带宽时延积，不少于两个完整分段。
pub fn bandwidth_threshold(estimator: &BandwidthEstimator, segment_size: u32) -> u32 {
    estimator
        .bandwidth_delay_product()
        .max(segment_size.saturating_mul(2))
}

impl Default for Jersey {
    fn default() -> Self {
        Self::new(&CongestionControlConfig::default())
    }
}

impl CongestionOps for Jersey {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_packets_acked(
        &mut self,
        tcb: &SocketState,
        segments_acked: u32,
        rtt: Duration,
        now: Instant,
    ) {
        if rtt.is_zero() {
            warn!("RTT measured is zero, skipping bandwidth sample");
            return;
        }
        self.estimator
            .on_ack(segments_acked, rtt, now, tcb.segment_size());
    }

    fn slow_start_threshold(&self, tcb: &SocketState, _bytes_in_flight: u32) -> u32 {
        let ssthresh = bandwidth_threshold(&self.estimator, tcb.segment_size());
        debug!(
            bandwidth = self.estimator.bandwidth(),
            ssthresh, "Slow start threshold from bandwidth estimate"
        );
        ssthresh
    }

    fn on_rate_control(&mut self, tcb: &mut SocketState, bytes_in_flight: u32) {
        tcb.slow_start_threshold = self.slow_start_threshold(tcb, bytes_in_flight);
        if tcb.phase.is_established() {
            tcb.congestion_window = tcb.slow_start_threshold;
        }
        debug!(
            phase = ?tcb.phase,
            new_ssthresh = tcb.slow_start_threshold,
            new_cwnd = tcb.congestion_window,
            "Jersey: window set to estimated bandwidth-delay product"
        );
    }

    fn fork(&self) -> Box<dyn CongestionOps> {
        Box::new(Self::with_estimator(self.estimator.fork()))
    }
}

/// Jersey拥塞控制统计信息
/// Jersey congestion control statistics
#[derive(Debug, Clone, PartialEq)]
pub struct JerseyStats {
    pub bandwidth: f64,
    pub rtt: Duration,
    pub acked_bytes: u64,
    pub rtt_multiplier: u32,
}

impl fmt::Display for JerseyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Jersey[bw:{:.1}B/s, rtt:{:.1}ms, acked:{}B, K:{}]",
            self.bandwidth,
            self.rtt.as_secs_f64() * 1000.0,
            self.acked_bytes,
            self.rtt_multiplier
        )
    }
}
