//! tick 观察者
//!
//! 每个 tick 结束（发送标记清空之前）调用一次，用于检查中间状态。

use crate::model::{Cluster, Transfer};

use super::time::Tick;

pub trait TickObserver {
    /// `transfers` 为本 tick 发生的传输（按发生顺序）；此时 `cluster` 仍保留本 tick 的发送标记
    fn on_tick(&mut self, tick: Tick, transfers: &[Transfer], cluster: &Cluster);
}

impl<F> TickObserver for F
where
    F: FnMut(Tick, &[Transfer], &Cluster),
{
    fn on_tick(&mut self, tick: Tick, transfers: &[Transfer], cluster: &Cluster) {
        self(tick, transfers, cluster)
    }
}

/// 不做任何事的观察者
pub(crate) struct NoopObserver;

impl TickObserver for NoopObserver {
    fn on_tick(&mut self, _tick: Tick, _transfers: &[Transfer], _cluster: &Cluster) {}
}
