//! 场景描述（JSON）
//!
//! 描述一组要依次运行的仿真：每个服务器数量 × 每种算法各跑一次。

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::strategy::Algorithm;

use super::config::{DEFAULT_NUM_CHUNKS, SimConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub num_chunks: Option<usize>,
    #[serde(default = "default_server_counts")]
    pub server_counts: Vec<usize>,
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
}

fn default_server_counts() -> Vec<usize> {
    vec![5, 10, 20, 50]
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

impl Default for ScenarioSpec {
    fn default() -> Self {
        Self {
            schema_version: 1,
            num_chunks: None,
            server_counts: default_server_counts(),
            algorithms: default_algorithms(),
        }
    }
}

impl ScenarioSpec {
    pub fn from_json_str(raw: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn num_chunks(&self) -> usize {
        self.num_chunks.unwrap_or(DEFAULT_NUM_CHUNKS)
    }

    /// 按 (服务器数量, 算法) 顺序展开为独立的运行
    pub fn runs(&self) -> Vec<(SimConfig, Algorithm)> {
        let chunks = self.num_chunks();
        self.server_counts
            .iter()
            .flat_map(|&n| {
                self.algorithms
                    .iter()
                    .map(move |&a| (SimConfig::with_servers(n).with_chunks(chunks), a))
            })
            .collect()
    }
}
