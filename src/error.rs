//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the congestion control library.
/// 拥塞控制库的主要错误类型。
///
/// Errors are only produced while a connection is being set up. The per-ACK
/// and per-congestion-event callbacks never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The segment size of a connection must be greater than zero.
    /// 连接的分段大小必须大于零。
    #[error("segment size must be greater than zero")]
    InvalidSegmentSize,

    /// The RTT multiplier `K` of the sampling window must be at least one.
    /// 采样窗口的RTT倍数 `K` 必须至少为一。
    #[error("RTT multiplier must be at least 1")]
    InvalidRttMultiplier,

    /// No congestion control algorithm is registered under the given name.
    /// 给定名称下没有注册拥塞控制算法。
    #[error("unknown congestion control algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;
        match err {
            Error::InvalidSegmentSize | Error::InvalidRttMultiplier => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
            Error::UnknownAlgorithm(_) => std::io::Error::new(ErrorKind::NotFound, err),
        }
    }
}
