//! smart 策略
//!
//! 单遍贪心匹配：每个空闲且持有数据的服务器，把第一个对方缺少的 chunk
//! 发给“持有 chunk 最少”的候选目标。
//!
//! 遍历顺序决定结果：
//! - 发送方在 tick 开始时按 id 升序确定（持有至少一个 chunk 且未在发送）；
//! - 每个发送方的选择都基于实时状态，前面发送方造成的变化对后面可见；
//! - 目标不会被标记，因此同一目标可在一个 tick 内接收多个发送方；
//! - 正在发送的服务器不能再作为目标；
//! - 数量相同时保留最先遇到（id 最小）的目标。

use crate::error::SimResult;
use crate::model::{Cluster, ServerId};
use crate::sim::Tick;

use super::TransferStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct SmartStrategy;

impl SmartStrategy {
    /// 为 `src` 挑选目标：候选目标中持有 chunk 最少者
    fn best_target(cluster: &Cluster, src: ServerId) -> Option<ServerId> {
        let sender = cluster.server(src);
        let mut best: Option<(ServerId, usize)> = None;
        for target in cluster.servers() {
            if target.id() == src || cluster.is_transmitting(target.id()) {
                continue;
            }
            if sender.first_needed_by(target).is_none() {
                continue;
            }
            let count = target.chunk_count();
            if best.is_none_or(|(_, least)| count < least) {
                best = Some((target.id(), count));
            }
        }
        best.map(|(id, _)| id)
    }
}

impl TransferStrategy for SmartStrategy {
    fn name(&self) -> &'static str {
        "smart"
    }

    fn select(&mut self, _tick: Tick, cluster: &mut Cluster) -> SimResult<()> {
        let senders: Vec<ServerId> = cluster
            .servers()
            .iter()
            .filter(|s| s.has_any() && !cluster.is_transmitting(s.id()))
            .map(|s| s.id())
            .collect();

        for src in senders {
            let Some(dst) = Self::best_target(cluster, src) else {
                continue;
            };
            if let Some(chunk) = cluster.server(src).first_needed_by(cluster.server(dst)) {
                cluster.transfer(src, dst, chunk)?;
            }
        }
        Ok(())
    }
}
