//! 每个 tick 的传输标记
//!
//! 与 chunk 的永久状态分开保存：每个 tick 结束时整体清空。

use super::id::ServerId;

/// 按服务器 id 索引的发送状态表
#[derive(Debug, Clone, Default)]
pub struct TxState {
    to: Vec<Option<ServerId>>,
}

impl TxState {
    pub fn new(num_servers: usize) -> Self {
        Self {
            to: vec![None; num_servers],
        }
    }

    /// 该服务器本 tick 是否已发起过传输
    pub fn is_transmitting(&self, id: ServerId) -> bool {
        self.transmitting_to(id).is_some()
    }

    pub fn transmitting_to(&self, id: ServerId) -> Option<ServerId> {
        self.to.get(id.0).copied().flatten()
    }

    pub(crate) fn mark(&mut self, src: ServerId, dst: ServerId) {
        if let Some(slot) = self.to.get_mut(src.0) {
            *slot = Some(dst);
        }
    }

    /// 本 tick 内发送方的数量
    pub fn active(&self) -> usize {
        self.to.iter().filter(|t| t.is_some()).count()
    }

    pub(crate) fn clear(&mut self) {
        self.to.iter_mut().for_each(|t| *t = None);
    }
}
