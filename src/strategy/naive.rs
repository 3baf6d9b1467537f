//! naive 策略
//!
//! 只有服务器 0 发送：按 1, 2, ..., n-1 轮询目标，每轮完成后才换下一个 chunk。

use crate::error::{SimError, SimResult};
use crate::model::{ChunkId, Cluster, SEED_SERVER, ServerId};
use crate::sim::Tick;

use super::TransferStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveStrategy;

impl NaiveStrategy {
    /// 给定 tick 下的 (目标, chunk)；`num_servers < 2` 时返回 None
    pub fn schedule(tick: Tick, num_servers: usize) -> Option<(ServerId, ChunkId)> {
        let peers = num_servers.checked_sub(1).filter(|&p| p > 0)?;
        let t = tick.0 as usize;
        Some((ServerId(t % peers + 1), ChunkId(t / peers)))
    }
}

impl TransferStrategy for NaiveStrategy {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn select(&mut self, tick: Tick, cluster: &mut Cluster) -> SimResult<()> {
        let (target, chunk) =
            Self::schedule(tick, cluster.num_servers()).ok_or(SimError::InvalidServerCount {
                num_servers: cluster.num_servers(),
            })?;
        if chunk.0 < cluster.num_chunks() {
            cluster.transfer(SEED_SERVER, target, chunk)?;
        }
        Ok(())
    }
}
