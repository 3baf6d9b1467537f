//! 结构化 tick 事件记录
//!
//! 以 JSON 事件描述一次仿真的过程，便于离线分析或回放：
//! 第一条为 `meta`，随后是每个 tick 的 `transfer` 与 `tick_end`，最后是 `complete`。

mod types;

pub use types::{TraceEvent, TraceEventKind, TraceLogger};
