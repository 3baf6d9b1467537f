//! 仿真配置

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

pub const DEFAULT_SERVER_COUNT: usize = 50;
pub const DEFAULT_NUM_CHUNKS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default = "default_num_servers")]
    pub num_servers: usize,
    #[serde(default = "default_num_chunks")]
    pub num_chunks: usize,
}

fn default_num_servers() -> usize {
    DEFAULT_SERVER_COUNT
}

fn default_num_chunks() -> usize {
    DEFAULT_NUM_CHUNKS
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_servers: DEFAULT_SERVER_COUNT,
            num_chunks: DEFAULT_NUM_CHUNKS,
        }
    }
}

impl SimConfig {
    /// 指定服务器数量，chunk 数取默认值
    pub fn with_servers(num_servers: usize) -> Self {
        Self {
            num_servers,
            ..Self::default()
        }
    }

    pub fn with_chunks(mut self, num_chunks: usize) -> Self {
        self.num_chunks = num_chunks;
        self
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.num_servers < 2 {
            return Err(SimError::InvalidServerCount {
                num_servers: self.num_servers,
            });
        }
        if self.num_chunks == 0 {
            return Err(SimError::InvalidChunkCount);
        }
        Ok(())
    }

    /// naive 策略所需的 tick 数：`(n - 1) * num_chunks`
    pub fn naive_bound(&self) -> u64 {
        (self.num_servers.saturating_sub(1) as u64).saturating_mul(self.num_chunks as u64)
    }
}
