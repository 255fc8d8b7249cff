//! 每个连接的拥塞状态，由宿主传输协议拥有。
//! Per-connection congestion state owned by the host transport.
//!
//! Congestion control algorithms only ever borrow a [`SocketState`]. The
//! host advances [`CongestionPhase`]; the algorithms read it and adjust the
//! window and threshold.

use crate::config::Config;
use crate::error::{Error, Result};

/// Congestion phase of a connection, driven by duplicate-ACK and timeout
/// detection in the host.
///
/// 连接的拥塞阶段，由宿主的重复ACK和超时检测驱动。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CongestionPhase {
    /// Normal operation, nothing suspicious.
    /// 正常状态。
    #[default]
    Open,
    /// Duplicate ACKs or SACKs have been seen.
    /// 收到了重复ACK或SACK。
    Disorder,
    /// The window is being reduced because of a congestion notification (ECN).
    /// 因拥塞通知（ECN）正在减小窗口。
    Cwr,
    /// Fast retransmit / fast recovery in progress.
    /// 快速重传/快速恢复进行中。
    Recovery,
    /// A retransmission timeout fired.
    /// 发生了重传超时。
    Loss,
}

impl CongestionPhase {
    /// Whether the connection is active or recovering, as opposed to not yet
    /// established. The window policy only resizes `cwnd` in these phases.
    ///
    /// 连接是否处于活动或恢复状态。
    pub fn is_established(self) -> bool {
        matches!(
            self,
            CongestionPhase::Open
                | CongestionPhase::Disorder
                | CongestionPhase::Cwr
                | CongestionPhase::Recovery
                | CongestionPhase::Loss
        )
    }
}

/// The congestion-related state of one connection.
///
/// 一个连接的拥塞相关状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketState {
    segment_size: u32,
    /// Congestion window in bytes.
    /// 拥塞窗口（字节）。
    pub congestion_window: u32,
    /// Slow start threshold in bytes.
    /// 慢启动阈值（字节）。
    pub slow_start_threshold: u32,
    /// Current congestion phase.
    /// 当前拥塞阶段。
    pub phase: CongestionPhase,
}

impl SocketState {
    /// Creates a new state in the `Open` phase.
    ///
    /// Fails with [`Error::InvalidSegmentSize`] if `segment_size` is zero.
    ///
    /// 创建一个处于 `Open` 阶段的新状态。
    pub fn new(segment_size: u32, congestion_window: u32, slow_start_threshold: u32) -> Result<Self> {
        if segment_size == 0 {
            return Err(Error::InvalidSegmentSize);
        }
        Ok(Self {
            segment_size,
            congestion_window,
            slow_start_threshold,
            phase: CongestionPhase::Open,
        })
    }

    /// Creates the initial state of a connection from its configuration.
    ///
    /// 根据配置创建连接的初始状态。
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let segment_size = config.connection.segment_size;
        let cwnd = config
            .congestion_control
            .initial_cwnd_segments
            .saturating_mul(segment_size);
        Self::new(segment_size, cwnd, config.congestion_control.initial_ssthresh)
    }

    /// Bytes per full segment. Always greater than zero.
    pub fn segment_size(&self) -> u32 {
        self.segment_size
    }

    /// Updates the segment size, e.g. after path MTU discovery.
    ///
    /// 更新分段大小，例如在路径MTU发现之后。
    pub fn set_segment_size(&mut self, segment_size: u32) -> Result<()> {
        if segment_size == 0 {
            return Err(Error::InvalidSegmentSize);
        }
        self.segment_size = segment_size;
        Ok(())
    }

    /// The congestion window expressed in whole segments.
    pub fn cwnd_in_segments(&self) -> u32 {
        self.congestion_window / self.segment_size
    }

    /// Whether the connection is still in slow start.
    pub fn in_slow_start(&self) -> bool {
        self.congestion_window < self.slow_start_threshold
    }
}
