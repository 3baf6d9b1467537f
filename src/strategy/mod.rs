//! 传输策略
//!
//! 每个 tick 由策略决定哪些 (source, target, chunk) 传输发生。目前提供两种：
//! 单源轮询的 naive 与多源贪心的 smart。

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{SimError, SimResult};
use crate::model::Cluster;
use crate::sim::Tick;

mod naive;
mod smart;

pub use naive::NaiveStrategy;
pub use smart::SmartStrategy;

/// 传输策略抽象
pub trait TransferStrategy: fmt::Debug {
    fn name(&self) -> &'static str;

    /// 在当前 tick 内选择并执行传输（通过 `Cluster::transfer`）。
    ///
    /// 调用时集合的发送标记保证是干净的。
    fn select(&mut self, tick: Tick, cluster: &mut Cluster) -> SimResult<()>;
}

/// 内置算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Naive,
    #[default]
    Smart,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Naive, Algorithm::Smart];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Smart => "smart",
        }
    }

    /// 宽松解析：无法识别的名字回退到 smart
    pub fn from_name_or_default(name: &str) -> Algorithm {
        name.parse().unwrap_or_else(|_| {
            warn!(name, "unknown algorithm, falling back to smart");
            Algorithm::Smart
        })
    }

    pub fn strategy(self) -> Box<dyn TransferStrategy> {
        match self {
            Algorithm::Naive => Box::new(NaiveStrategy),
            Algorithm::Smart => Box::new(SmartStrategy),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Algorithm::Naive),
            "smart" => Ok(Algorithm::Smart),
            other => Err(SimError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
