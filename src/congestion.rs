//! Defines the pluggable congestion control interface.
//! 定义了可插拔的拥塞控制接口。
//!
//! A host transport owns one [`SocketState`] and one boxed [`CongestionOps`]
//! per connection. It calls [`CongestionOps::on_packets_acked`] and
//! [`CongestionOps::increase_window`] for every processed acknowledgement and
//! [`CongestionOps::on_rate_control`] on every congestion signal.

use crate::socket_state::SocketState;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

pub mod bandwidth;
pub mod jersey;
pub mod new_reno;
pub mod registry;

pub use bandwidth::BandwidthEstimator;
pub use jersey::{Jersey, JerseyStats};
pub use new_reno::NewReno;
pub use registry::{AlgorithmRegistry, Constructor};

/// A trait for congestion control algorithms.
///
/// 拥塞控制算法的 trait。
pub trait CongestionOps: fmt::Debug + Send + Sync + 'static {
    /// The name the algorithm is registered under.
    ///
    /// 算法注册时使用的名称。
    fn name(&self) -> &'static str;

    /// Grows the congestion window after `segments_acked` new segments were
    /// acknowledged. Defaults to NewReno slow start and congestion avoidance.
    ///
    /// 在确认了 `segments_acked` 个新分段后增大拥塞窗口。
    fn increase_window(&mut self, tcb: &mut SocketState, segments_acked: u32) {
        new_reno::increase_window(tcb, segments_acked);
    }

    /// Called once per acknowledgement-processing pass with the latest RTT
    /// sample. A zero `rtt` means the RTT is currently unmeasurable.
    ///
    /// 每次处理确认时以最新的RTT样本调用。
    fn on_packets_acked(
        &mut self,
        tcb: &SocketState,
        segments_acked: u32,
        rtt: Duration,
        now: Instant,
    );

    /// Computes the slow start threshold to use after a congestion event.
    ///
    /// 计算拥塞事件后使用的慢启动阈值。
    fn slow_start_threshold(&self, tcb: &SocketState, bytes_in_flight: u32) -> u32;

    /// Called on a congestion signal. Applies a new threshold and, depending
    /// on the algorithm, resizes the congestion window.
    ///
    /// 在拥塞信号时调用。
    fn on_rate_control(&mut self, tcb: &mut SocketState, bytes_in_flight: u32);

    /// Hook for algorithms that retransmit on their own signals, e.g. a drop
    /// in the estimated bandwidth. Does nothing by default.
    ///
    /// 供根据自身信号进行重传的算法使用的钩子。默认不执行任何操作。
    #[allow(unused_variables)]
    fn on_explicit_retransmit(&mut self, tcb: &mut SocketState, bytes_in_flight: u32) {}

    /// Creates the state for a connection spawned from this one, such as a
    /// connection accepted by a listening socket.
    ///
    /// 为从此连接派生的连接创建状态。
    fn fork(&self) -> Box<dyn CongestionOps>;
}
