//! 数据模型
//!
//! 服务器、chunk 以及每个 tick 的传输状态。chunk 的 `present` 是永久状态，
//! 传输标记（`TxState`）只在单个 tick 内有效。

mod id;
mod chunk;
mod server;
mod tx_state;
mod transfer;
mod cluster;

pub use id::{ChunkId, ServerId};
pub use chunk::Chunk;
pub use server::Server;
pub use tx_state::TxState;
pub use transfer::Transfer;
pub use cluster::Cluster;

/// 种子服务器：初始化时持有全部 chunk
pub const SEED_SERVER: ServerId = ServerId(0);
