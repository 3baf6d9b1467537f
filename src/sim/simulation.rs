//! 仿真引擎
//!
//! 持有服务器集合与 tick 时钟，循环调用策略直到所有服务器持有全部 chunk。

use tracing::{debug, info};

use crate::error::{SimError, SimResult};
use crate::model::{Cluster, Transfer};
use crate::strategy::{Algorithm, TransferStrategy};
use crate::trace::{TraceEventKind, TraceLogger};

use super::config::SimConfig;
use super::observer::{NoopObserver, TickObserver};
use super::report::RunReport;
use super::time::Tick;

/// 一次仿真运行：独占自己的服务器集合
#[derive(Debug)]
pub struct Simulation {
    cfg: SimConfig,
    now: Tick,
    cluster: Cluster,
    transfers: u64,
    /// 启用后记录结构化事件
    pub trace: Option<TraceLogger>,
}

impl Simulation {
    /// 创建仿真；配置非法时立即失败
    pub fn new(cfg: SimConfig) -> SimResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            now: Tick::ZERO,
            cluster: Cluster::new(cfg.num_servers, cfg.num_chunks),
            transfers: 0,
            trace: None,
        })
    }

    pub fn with_servers(num_servers: usize) -> SimResult<Self> {
        Self::new(SimConfig::with_servers(num_servers))
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    /// 当前 tick（即已经执行完的 tick 数）
    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub fn total_transfers(&self) -> u64 {
        self.transfers
    }

    pub fn is_complete(&self) -> bool {
        self.cluster.is_complete()
    }

    /// 执行一个 tick，返回本 tick 发生的传输
    pub fn step<S>(&mut self, strategy: &mut S) -> SimResult<Vec<Transfer>>
    where
        S: TransferStrategy + ?Sized,
    {
        self.step_observed(strategy, &mut NoopObserver)
    }

    fn step_observed<S, O>(&mut self, strategy: &mut S, observer: &mut O) -> SimResult<Vec<Transfer>>
    where
        S: TransferStrategy + ?Sized,
        O: TickObserver + ?Sized,
    {
        strategy.select(self.now, &mut self.cluster)?;
        observer.on_tick(self.now, self.cluster.tick_transfers(), &self.cluster);

        let transfers = self.cluster.end_tick();
        self.transfers = self.transfers.saturating_add(transfers.len() as u64);

        if let Some(trace) = self.trace.as_mut() {
            for t in &transfers {
                trace.push(
                    self.now.0,
                    TraceEventKind::Transfer {
                        from: t.from,
                        to: t.to,
                        chunk: t.chunk,
                    },
                );
            }
            trace.push(
                self.now.0,
                TraceEventKind::TickEnd {
                    transfers: transfers.len(),
                    missing: self.cluster.missing(),
                },
            );
        }

        debug!(
            tick = self.now.0,
            transfers = transfers.len(),
            missing = self.cluster.missing(),
            "tick done"
        );
        self.now = self.now.next();
        Ok(transfers)
    }

    /// 使用内置算法运行到完成，返回总 tick 数
    pub fn run(&mut self, algorithm: Algorithm) -> SimResult<u64> {
        let mut strategy = algorithm.strategy();
        self.run_with(strategy.as_mut())
    }

    /// 按名字选择算法；无法识别的名字回退到 smart
    pub fn run_named(&mut self, name: &str) -> SimResult<u64> {
        self.run(Algorithm::from_name_or_default(name))
    }

    pub fn run_with<S>(&mut self, strategy: &mut S) -> SimResult<u64>
    where
        S: TransferStrategy + ?Sized,
    {
        self.run_observed(strategy, &mut NoopObserver)
    }

    /// 运行到完成，每个 tick 结束时回调 `observer`
    #[tracing::instrument(skip_all, fields(algorithm = strategy.name(), num_servers = self.cfg.num_servers, num_chunks = self.cfg.num_chunks))]
    pub fn run_observed<S, O>(&mut self, strategy: &mut S, observer: &mut O) -> SimResult<u64>
    where
        S: TransferStrategy + ?Sized,
        O: TickObserver + ?Sized,
    {
        info!(start = self.now.0, missing = self.cluster.missing(), "simulation start");

        if self.now == Tick::ZERO {
            if let Some(trace) = self.trace.as_mut() {
                trace.push(
                    0,
                    TraceEventKind::Meta {
                        algorithm: strategy.name().to_string(),
                        num_servers: self.cfg.num_servers,
                        num_chunks: self.cfg.num_chunks,
                    },
                );
            }
        }

        while !self.is_complete() {
            let tick = self.now;
            let transfers = self.step_observed(strategy, observer)?;
            if transfers.is_empty() && !self.is_complete() {
                return Err(SimError::Stalled {
                    tick: tick.0,
                    missing: self.cluster.missing(),
                });
            }
        }

        if let Some(trace) = self.trace.as_mut() {
            trace.push(self.now.0, TraceEventKind::Complete { ticks: self.now.0 });
        }
        info!(
            ticks = self.now.0,
            transfers = self.transfers,
            "simulation complete"
        );
        Ok(self.now.0)
    }

    /// 汇总当前运行结果
    pub fn report(&self, algorithm: Algorithm) -> RunReport {
        RunReport {
            algorithm,
            num_servers: self.cfg.num_servers,
            num_chunks: self.cfg.num_chunks,
            ticks: self.now.0,
            transfers: self.transfers,
        }
    }
}
