//! 服务器集合
//!
//! 一次仿真独占一个 `Cluster`：服务器数组、本 tick 的发送标记，以及本 tick 已发生的传输。

use super::id::{ChunkId, ServerId};
use super::server::Server;
use super::transfer::Transfer;
use super::tx_state::TxState;
use super::SEED_SERVER;
use crate::error::{SimError, SimResult};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Cluster {
    servers: Vec<Server>,
    num_chunks: usize,
    tx: TxState,
    tick_transfers: Vec<Transfer>,
}

impl Cluster {
    /// 创建集合：服务器 0 持有全部 chunk，其余为空
    pub fn new(num_servers: usize, num_chunks: usize) -> Self {
        let servers = (0..num_servers)
            .map(|i| Server::new(ServerId(i), num_chunks, ServerId(i) == SEED_SERVER))
            .collect();
        Self {
            servers,
            num_chunks,
            tx: TxState::new(num_servers),
            tick_transfers: Vec::new(),
        }
    }

    pub fn num_servers(&self) -> usize {
        self.servers.len()
    }

    pub fn num_chunks(&self) -> usize {
        self.num_chunks
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn get(&self, id: ServerId) -> Option<&Server> {
        self.servers.get(id.0)
    }

    /// 按 id 取服务器；调用方保证 id 在范围内
    pub(crate) fn server(&self, id: ServerId) -> &Server {
        &self.servers[id.0]
    }

    pub fn tx(&self) -> &TxState {
        &self.tx
    }

    pub fn is_transmitting(&self, id: ServerId) -> bool {
        self.tx.is_transmitting(id)
    }

    /// 本 tick 到目前为止发生的传输（按发生顺序）
    pub fn tick_transfers(&self) -> &[Transfer] {
        &self.tick_transfers
    }

    /// 所有服务器都持有所有 chunk
    pub fn is_complete(&self) -> bool {
        self.servers.iter().all(Server::is_full)
    }

    /// 仍缺失的 chunk 槽位总数
    pub fn missing(&self) -> usize {
        self.servers.iter().map(Server::missing_count).sum()
    }

    /// 执行一次传输：`to` 获得 `chunk`，`from` 在本 tick 被标记为正在发送。
    ///
    /// 服务器 id 越界或 `from` 并不持有 `chunk` 时返回错误，集合状态不变。
    pub fn transfer(&mut self, from: ServerId, to: ServerId, chunk: ChunkId) -> SimResult<Transfer> {
        for id in [from, to] {
            if id.0 >= self.servers.len() {
                return Err(SimError::UnknownServer {
                    server: id.0,
                    num_servers: self.servers.len(),
                });
            }
        }
        if !self.servers[from.0].has(chunk) {
            return Err(SimError::ChunkNotHeld {
                server: from.0,
                chunk: chunk.0,
            });
        }

        let fresh = self.servers[to.0].receive(chunk);
        self.tx.mark(from, to);
        let t = Transfer { from, to, chunk };
        trace!(%from, %to, %chunk, fresh, "transfer");
        self.tick_transfers.push(t);
        Ok(t)
    }

    /// 结束当前 tick：清空发送标记，取出本 tick 的传输记录
    pub(crate) fn end_tick(&mut self) -> Vec<Transfer> {
        self.tx.clear();
        std::mem::take(&mut self.tick_transfers)
    }
}
