//! chunk 槽位
//!
//! 每个服务器拥有一份独立的 chunk 槽位数组，不与其他服务器共享。

use super::id::ChunkId;

/// 某服务器上的一个 chunk 槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub id: ChunkId,
    /// 该服务器是否已持有此 chunk；只会从 false 变为 true
    pub present: bool,
}

impl Chunk {
    pub fn new(id: ChunkId, present: bool) -> Self {
        Self { id, present }
    }
}
