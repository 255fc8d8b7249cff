//! 按名称查找拥塞控制算法的注册表
//! Registry that looks up congestion control algorithms by name
//!
//! Hosts select an algorithm with `CongestionControlConfig::algorithm`. The
//! global registry is populated with the built-in algorithms on first use;
//! further algorithms can be registered at runtime.

use crate::config::{Config, CongestionControlConfig};
use crate::congestion::{CongestionOps, Jersey, NewReno};
use crate::error::{Error, Result};
use dashmap::DashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Builds a fresh controller for a new connection.
///
/// 为新连接构建一个新的控制器。
pub type Constructor = fn(&CongestionControlConfig) -> Box<dyn CongestionOps>;

/// A mapping from algorithm names to constructors. Names are case-insensitive.
///
/// 从算法名称到构造函数的映射。名称不区分大小写。
#[derive(Debug, Default)]
pub struct AlgorithmRegistry {
    constructors: DashMap<String, Constructor>,
}

impl AlgorithmRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing `jersey` and `new_reno`.
    ///
    /// 创建一个包含 `jersey` 和 `new_reno` 的注册表。
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(Jersey::NAME, |config| Box::new(Jersey::new(config)));
        registry.register(NewReno::NAME, |_| Box::new(NewReno::new()));
        registry
    }

    /// The process-wide registry, built on first access.
    ///
    /// 进程范围的注册表，在首次访问时构建。
    pub fn global() -> &'static AlgorithmRegistry {
        static GLOBAL: OnceLock<AlgorithmRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::with_builtins)
    }

    /// Registers `constructor` under `name`, replacing any previous entry.
    ///
    /// 在 `name` 下注册 `constructor`，替换任何先前的条目。
    pub fn register(&self, name: &str, constructor: Constructor) {
        let key = Self::normalize(name);
        if self.constructors.insert(key.clone(), constructor).is_some() {
            debug!(algorithm = %key, "Replaced congestion control algorithm");
        } else {
            debug!(algorithm = %key, "Registered congestion control algorithm");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(&Self::normalize(name))
    }

    /// Names of all registered algorithms, sorted.
    pub fn algorithms(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .constructors
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Instantiates the algorithm named by `config.algorithm`.
    ///
    /// 实例化由 `config.algorithm` 指定的算法。
    pub fn create(&self, config: &CongestionControlConfig) -> Result<Box<dyn CongestionOps>> {
        if config.rtt_multiplier == 0 {
            return Err(Error::InvalidRttMultiplier);
        }
        let key = Self::normalize(&config.algorithm);
        // Copy the fn pointer out so the shard lock is released before constructing.
        let constructor = self
            .constructors
            .get(&key)
            .map(|entry| *entry.value())
            .ok_or_else(|| Error::UnknownAlgorithm(config.algorithm.clone()))?;
        Ok(constructor(config))
    }

    /// Validates a full connection configuration and instantiates its algorithm.
    pub fn create_for(&self, config: &Config) -> Result<Box<dyn CongestionOps>> {
        config.validate()?;
        self.create(&config.congestion_control)
    }

    fn normalize(name: &str) -> String {
        name.trim().to_ascii_lowercase()
    }
}
