//! A loss-based NewReno congestion controller.
//!
//! 一个基于丢包的 NewReno 拥塞控制器。
//!
//! Besides serving as a baseline, the window growth functions in this module
//! are shared by every algorithm that keeps the NewReno additive-increase
//! path, including [`Jersey`](super::Jersey).

use crate::congestion::CongestionOps;
use crate::socket_state::SocketState;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Grows the window: slow start while below `ssthresh`, congestion avoidance
/// with whatever acknowledged segments are left afterwards.
///
/// 增大窗口：低于 `ssthresh` 时慢启动，之后剩余的已确认分段用于拥塞避免。
pub(crate) fn increase_window(tcb: &mut SocketState, mut segments_acked: u32) {
    if tcb.congestion_window < tcb.slow_start_threshold {
        segments_acked = slow_start(tcb, segments_acked);
    }
    if tcb.congestion_window >= tcb.slow_start_threshold {
        congestion_avoidance(tcb, segments_acked);
    }
}

/// One segment per ACK, regardless of how many segments it covers.
/// Returns the acknowledged segments left for congestion avoidance.
fn slow_start(tcb: &mut SocketState, segments_acked: u32) -> u32 {
    if segments_acked == 0 {
        return 0;
    }
    tcb.congestion_window = tcb.congestion_window.saturating_add(tcb.segment_size());
    trace!(
        cwnd = tcb.congestion_window,
        ssthresh = tcb.slow_start_threshold,
        "Slow start: congestion window increased"
    );
    segments_acked - 1
}

fn congestion_avoidance(tcb: &mut SocketState, segments_acked: u32) {
    if segments_acked == 0 {
        return;
    }
    let segment = f64::from(tcb.segment_size());
    let cwnd = f64::from(tcb.congestion_window.max(1));
    let adder = ((segment * segment) / cwnd).max(1.0) as u32;
    tcb.congestion_window = tcb.congestion_window.saturating_add(adder);
    trace!(
        cwnd = tcb.congestion_window,
        adder,
        "Congestion avoidance: congestion window increased"
    );
}

/// The NewReno congestion controller.
///
/// NewReno 拥塞控制器。
#[derive(Debug, Clone, Default)]
pub struct NewReno;

impl NewReno {
    pub const NAME: &'static str = "new_reno";

    pub fn new() -> Self {
        Self
    }
}

impl CongestionOps for NewReno {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_packets_acked(
        &mut self,
        _tcb: &SocketState,
        _segments_acked: u32,
        _rtt: Duration,
        _now: Instant,
    ) {
    }

    fn slow_start_threshold(&self, tcb: &SocketState, bytes_in_flight: u32) -> u32 {
        (bytes_in_flight / 2).max(tcb.segment_size().saturating_mul(2))
    }

    fn on_rate_control(&mut self, tcb: &mut SocketState, bytes_in_flight: u32) {
        tcb.slow_start_threshold = self.slow_start_threshold(tcb, bytes_in_flight);
        if tcb.phase.is_established() {
            tcb.congestion_window = tcb.slow_start_threshold;
        }
        debug!(
            new_ssthresh = tcb.slow_start_threshold,
            new_cwnd = tcb.congestion_window,
            "NewReno: window halved on congestion"
        );
    }

    fn fork(&self) -> Box<dyn CongestionOps> {
        Box::new(self.clone())
    }
}
