//! 错误类型
//!
//! 仿真构造、策略执行与驱动输入的错误。

use thiserror::Error;

/// 仿真过程中可能出现的错误
#[derive(Debug, Error)]
pub enum SimError {
    /// 服务器数量不足：naive 策略需要对 `num_servers - 1` 取模
    #[error("invalid server count {num_servers}: at least 2 servers are required")]
    InvalidServerCount { num_servers: usize },

    /// chunk 数量为 0
    #[error("invalid chunk count: at least 1 chunk is required")]
    InvalidChunkCount,

    /// 无法识别的算法名（仅严格解析时返回）
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// 传输引用了不存在的服务器
    #[error("unknown server {server}: cluster has {num_servers} servers")]
    UnknownServer { server: usize, num_servers: usize },

    /// 发送方并不持有要发送的 chunk
    #[error("server {server} does not hold chunk {chunk}")]
    ChunkNotHeld { server: usize, chunk: usize },

    /// 某个 tick 内没有任何传输，但仍有服务器缺少 chunk
    #[error("no progress at tick {tick}: {missing} chunk slots still missing")]
    Stalled { tick: u64, missing: usize },

    /// 场景文件解析或结果序列化失败
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 仿真结果类型
pub type SimResult<T> = Result<T, SimError>;
