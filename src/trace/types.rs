use serde::{Deserialize, Serialize};

use crate::model::{ChunkId, ServerId};

/// 事件类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEventKind {
    /// 仿真元信息（tick 0 的第一条事件）
    Meta {
        algorithm: String,
        num_servers: usize,
        num_chunks: usize,
    },
    /// 一次传输
    Transfer {
        from: ServerId,
        to: ServerId,
        chunk: ChunkId,
    },
    /// tick 结束
    TickEnd {
        transfers: usize,
        /// 仍缺失的 chunk 槽位总数
        missing: usize,
    },
    /// 所有服务器都已持有全部 chunk
    Complete { ticks: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub tick: u64,
    #[serde(flatten)]
    pub kind: TraceEventKind,
}

/// 事件收集器（存内存，运行结束后按需写 JSON）
#[derive(Debug, Default)]
pub struct TraceLogger {
    pub events: Vec<TraceEvent>,
}

impl TraceLogger {
    pub fn push(&mut self, tick: u64, kind: TraceEventKind) {
        self.events.push(TraceEvent { tick, kind });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}
