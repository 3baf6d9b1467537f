//! 传输记录

use super::id::{ChunkId, ServerId};
use serde::{Deserialize, Serialize};

/// 一次 (source, target, chunk) 传输
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: ServerId,
    pub to: ServerId,
    pub chunk: ChunkId,
}
