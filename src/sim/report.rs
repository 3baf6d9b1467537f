//! 运行结果

use serde::{Deserialize, Serialize};

use crate::strategy::Algorithm;

/// 一次仿真运行的汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub num_servers: usize,
    pub num_chunks: usize,
    /// 完成所用的 tick 数（包含最后完成的那个 tick）
    pub ticks: u64,
    /// 传输总次数
    pub transfers: u64,
}
