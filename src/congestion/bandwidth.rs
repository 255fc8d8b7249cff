//! An estimator for the available bottleneck bandwidth.
//! 瓶颈可用带宽估算器。
//!
//! Delivered bytes are accumulated over a sampling window and blended into the
//! previous estimate with a discrete low-pass filter:
//!
//! ```text
//! Tw  = rtt * K
//! bw' = (Tw * bw + acked_bytes) / (elapsed + Tw)
//! ```
//!
//! where `elapsed` is the time since the previous acknowledgement.

use crate::config::{CongestionControlConfig, SamplingMode};
use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// Bandwidth estimator state of one connection.
///
/// 一个连接的带宽估算器状态。
#[derive(Debug, Clone, PartialEq)]
pub struct BandwidthEstimator {
    /// Estimated bandwidth in bytes per second. Never negative.
    /// 估计带宽（字节/秒）。
    pub(super) bandwidth: f64,
    /// Latest non-zero RTT sample.
    /// 最新的非零RTT样本。
    pub(super) rtt: Duration,
    /// Time of the previous acknowledgement.
    pub(super) last_sample: Option<Instant>,
    /// Start of the current sampling window.
    pub(super) window_start: Option<Instant>,
    /// Bytes acknowledged since `window_start`.
    pub(super) acked_bytes: u64,
    rtt_multiplier: u32,
    mode: SamplingMode,
}

impl BandwidthEstimator {
    /// Creates an estimator with no samples.
    ///
    /// `rtt_multiplier` values below one are treated as one.
    ///
    /// 创建一个没有样本的估算器。
    pub fn new(rtt_multiplier: u32, mode: SamplingMode) -> Self {
        Self {
            bandwidth: 0.0,
            rtt: Duration::ZERO,
            last_sample: None,
            window_start: None,
            acked_bytes: 0,
            rtt_multiplier: rtt_multiplier.max(1),
            mode,
        }
    }

    pub fn from_config(config: &CongestionControlConfig) -> Self {
        Self::new(config.rtt_multiplier, config.sampling)
    }

    /// Current bandwidth estimate in bytes per second.
    ///
    /// 当前带宽估计值（字节/秒）。
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// The RTT sample the current estimate was last fed with.
    pub fn rtt(&self) -> Duration {
        self.rtt
    }

    /// Bytes acknowledged in the still-open sampling window.
    pub fn acked_bytes(&self) -> u64 {
        self.acked_bytes
    }

    pub fn rtt_multiplier(&self) -> u32 {
        self.rtt_multiplier
    }

    pub fn sampling_mode(&self) -> SamplingMode {
        self.mode
    }

    /// Feeds one acknowledgement into the estimator.
    ///
    /// Returns `true` if the bandwidth estimate was updated. A zero `rtt`
    /// leaves the estimator untouched.
    ///
    /// 将一个确认输入估算器。如果带宽估计被更新则返回 `true`。
    pub fn on_ack(
        &mut self,
        segments_acked: u32,
        rtt: Duration,
        now: Instant,
        segment_size: u32,
    ) -> bool {
        if rtt.is_zero() {
            return false;
        }

        self.acked_bytes = self
            .acked_bytes
            .saturating_add(u64::from(segments_acked) * u64::from(segment_size));
        self.rtt = rtt;

        let updated = match self.mode {
            SamplingMode::Windowed => {
                let window = rtt.saturating_mul(self.rtt_multiplier);
                if self.window_elapsed(now, rtt) {
                    self.close_window(window, now);
                    true
                } else {
                    false
                }
            }
            SamplingMode::PerAck => {
                self.close_window(rtt, now);
                true
            }
        };

        self.last_sample = Some(now);
        updated
    }

    /// The bandwidth-delay product `rtt × bandwidth`, in whole bytes.
    ///
    /// 带宽时延积 `rtt × bandwidth`（整字节）。
    pub fn bandwidth_delay_product(&self) -> u32 {
        // `as` saturates for out-of-range floats.
        (self.rtt.as_secs_f64() * self.bandwidth).floor() as u32
    }

    /// Returns an estimator for a spawned connection: the estimate and RTT are
    /// inherited, the sampling window starts over.
    ///
    /// 为派生连接返回一个估算器：继承估计值和RTT，采样窗口重新开始。
    pub fn fork(&self) -> Self {
        Self {
            bandwidth: self.bandwidth,
            rtt: self.rtt,
            ..Self::new(self.rtt_multiplier, self.mode)
        }
    }

    /// Discards all samples, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.rtt_multiplier, self.mode);
    }

    fn window_elapsed(&self, now: Instant, rtt: Duration) -> bool {
        match self.window_start {
            None => true,
            Some(start) => now.saturating_duration_since(start) >= rtt,
        }
    }

    fn close_window(&mut self, window: Duration, now: Instant) {
        let elapsed = self
            .last_sample
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);

        let window_secs = window.as_secs_f64();
        let blended = window_secs * self.bandwidth + self.acked_bytes as f64;
        self.bandwidth = (blended / (elapsed.as_secs_f64() + window_secs)).max(0.0);

        trace!(
            bandwidth = self.bandwidth,
            acked_bytes = self.acked_bytes,
            elapsed_ms = elapsed.as_millis(),
            window_ms = window.as_millis(),
            "Sampling window closed, bandwidth estimate updated"
        );

        self.acked_bytes = 0;
        // Never move the window start backwards.
        if self.window_start.is_none_or(|start| now >= start) {
            self.window_start = Some(now);
        }
    }
}

impl Default for BandwidthEstimator {
    fn default() -> Self {
        Self::new(1, SamplingMode::Windowed)
    }
}
