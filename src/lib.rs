#![deny(clippy::expect_used, clippy::unwrap_used)]

//! Pluggable TCP congestion control with the Jersey bandwidth-estimation
//! algorithm.
//! 可插拔的TCP拥塞控制，以及 Jersey 带宽估计算法。

pub mod config;
pub mod error;
pub mod socket_state;

pub mod congestion;

pub use config::Config;
pub use congestion::{AlgorithmRegistry, CongestionOps, Jersey, NewReno};
pub use error::{Error, Result};
pub use socket_state::{CongestionPhase, SocketState};
