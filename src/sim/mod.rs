//! 仿真核心模块
//!
//! 离散 tick 时钟、仿真配置、推进循环以及运行结果。

// 子模块声明
mod config;
mod observer;
mod report;
mod scenario;
mod simulation;
mod time;

// 重新导出公共接口
pub use config::{DEFAULT_NUM_CHUNKS, DEFAULT_SERVER_COUNT, SimConfig};
pub use observer::TickObserver;
pub use report::RunReport;
pub use scenario::ScenarioSpec;
pub use simulation::Simulation;
pub use time::Tick;
