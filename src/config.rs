//! 定义了拥塞控制算法和连接的可配置参数。
//! Defines configurable parameters for congestion control algorithms and connections.

use crate::error::{Error, Result};

/// How the bandwidth estimator turns acknowledgements into samples.
///
/// 带宽估计器如何将确认转换为采样。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// One bandwidth sample per `K × RTT` window (Westwood+ style).
    /// 每个 `K × RTT` 窗口采样一次（Westwood+ 风格）。
    #[default]
    Windowed,
    /// One bandwidth sample per acknowledgement, damped by the RTT only
    /// (classic Westwood style).
    /// 每个确认采样一次，仅由RTT阻尼（经典 Westwood 风格）。
    PerAck,
}

/// A structure containing all configurable parameters for a connection.
///
/// 包含所有连接可配置参数的结构体。
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Congestion control-related parameters.
    /// 拥塞控制相关参数。
    pub congestion_control: CongestionControlConfig,

    /// Connection-related parameters.
    /// 连接相关参数。
    pub connection: ConnectionConfig,
}

/// Congestion control-related parameters.
///
/// 拥塞控制相关参数。
#[derive(Debug, Clone)]
pub struct CongestionControlConfig {
    /// The name of the algorithm to instantiate, looked up in the
    /// [`AlgorithmRegistry`](crate::congestion::AlgorithmRegistry).
    /// 要实例化的算法名称。
    pub algorithm: String,
    /// The RTT multiple `K` that sets the length of the sampling window
    /// (`K × RTT`) used by the bandwidth estimator.
    /// 设置带宽估计器采样窗口长度（`K × RTT`）的RTT倍数 `K`。
    pub rtt_multiplier: u32,
    /// Sampling strategy of the bandwidth estimator.
    /// 带宽估计器的采样策略。
    pub sampling: SamplingMode,
    /// The initial congestion window size in segments.
    /// 初始拥塞窗口大小（以分段为单位）。
    pub initial_cwnd_segments: u32,
    /// The initial slow start threshold in bytes.
    /// 初始慢启动阈值（以字节为单位）。
    pub initial_ssthresh: u32,
}

/// Connection-related parameters.
///
/// 连接相关参数。
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Bytes per full segment (MSS). Must be greater than zero.
    /// 每个完整分段的字节数（MSS）。必须大于零。
    pub segment_size: u32,
}

impl Config {
    /// Checks the invariants the congestion control core relies on.
    ///
    /// 检查拥塞控制核心所依赖的不变量。
    pub fn validate(&self) -> Result<()> {
        if self.connection.segment_size == 0 {
            return Err(Error::InvalidSegmentSize);
        }
        if self.congestion_control.rtt_multiplier == 0 {
            return Err(Error::InvalidRttMultiplier);
        }
        Ok(())
    }
}

impl Default for CongestionControlConfig {
    fn default() -> Self {
        Self {
            algorithm: "jersey".to_string(),
            rtt_multiplier: 1,
            sampling: SamplingMode::Windowed,
            initial_cwnd_segments: 10,
            initial_ssthresh: u32::MAX,
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self { segment_size: 536 }
    }
}
