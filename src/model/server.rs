//! 服务器
//!
//! 持有固定数量的 chunk 槽位，按 chunk id 下标访问。

use super::chunk::Chunk;
use super::id::{ChunkId, ServerId};

/// 仿真中的一台服务器
#[derive(Debug, Clone)]
pub struct Server {
    id: ServerId,
    chunks: Vec<Chunk>,
}

impl Server {
    /// 创建服务器；`seeded` 为 true 时持有全部 chunk
    pub fn new(id: ServerId, num_chunks: usize, seeded: bool) -> Self {
        let chunks = (0..num_chunks)
            .map(|i| Chunk::new(ChunkId(i), seeded))
            .collect();
        Self { id, chunks }
    }

    pub fn id(&self) -> ServerId {
        self.id
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn has(&self, chunk: ChunkId) -> bool {
        self.chunks.get(chunk.0).is_some_and(|c| c.present)
    }

    /// 是否至少持有一个 chunk
    pub fn has_any(&self) -> bool {
        self.chunks.iter().any(|c| c.present)
    }

    pub fn is_full(&self) -> bool {
        self.chunks.iter().all(|c| c.present)
    }

    /// 当前持有的 chunk 数
    pub fn chunk_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.present).count()
    }

    pub fn missing_count(&self) -> usize {
        self.chunks.len() - self.chunk_count()
    }

    /// 按 chunk 下标升序，找到第一个本机持有而 `other` 缺少的 chunk
    pub fn first_needed_by(&self, other: &Server) -> Option<ChunkId> {
        self.chunks
            .iter()
            .zip(other.chunks.iter())
            .find(|(mine, theirs)| mine.present && !theirs.present)
            .map(|(mine, _)| mine.id)
    }

    /// 标记收到 chunk；返回该 chunk 此前是否缺失
    pub(crate) fn receive(&mut self, chunk: ChunkId) -> bool {
        match self.chunks.get_mut(chunk.0) {
            Some(slot) if !slot.present => {
                slot.present = true;
                true
            }
            _ => false,
        }
    }
}
