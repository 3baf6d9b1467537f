//! chunk 分发仿真
//!
//! 对若干服务器数量分别运行 naive 与 smart 算法，打印完成所需的 tick 数。

use chunk_sim::sim::{RunReport, ScenarioSpec, Simulation};
use chunk_sim::strategy::Algorithm;
use chunk_sim::trace::{TraceEvent, TraceLogger};
use chunk_sim::SimResult;
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "chunk-sim", about = "Seed-to-cluster chunk propagation: naive vs smart")]
struct Args {
    /// 场景文件（JSON）；命令行参数会覆盖其中的字段
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// 服务器数量列表，例如 `--servers 5,10,20,50`
    #[arg(long, value_delimiter = ',')]
    servers: Option<Vec<usize>>,

    /// 每台服务器的 chunk 槽位数
    #[arg(long)]
    chunks: Option<usize>,

    /// 要运行的算法（可多次指定）
    #[arg(long, value_enum)]
    algorithm: Vec<Algorithm>,

    /// 以 JSON 数组输出运行结果
    #[arg(long)]
    json: bool,

    /// 输出每次运行的 tick 事件（JSON）
    #[arg(long)]
    trace_json: Option<PathBuf>,

    /// 不打印日志
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
struct RunTrace {
    report: RunReport,
    events: Vec<TraceEvent>,
}

fn load_scenario(args: &Args) -> SimResult<ScenarioSpec> {
    let mut spec = match &args.scenario {
        Some(path) => ScenarioSpec::from_json_str(&fs::read_to_string(path)?)?,
        None => ScenarioSpec::default(),
    };
    if let Some(servers) = &args.servers {
        spec.server_counts = servers.clone();
    }
    if let Some(chunks) = args.chunks {
        spec.num_chunks = Some(chunks);
    }
    if !args.algorithm.is_empty() {
        spec.algorithms = args.algorithm.clone();
    }
    Ok(spec)
}

fn run(args: &Args) -> SimResult<()> {
    let spec = load_scenario(args)?;

    let mut reports = Vec::new();
    let mut traces = Vec::new();
    for (cfg, algorithm) in spec.runs() {
        let mut sim = Simulation::new(cfg)?;
        if args.trace_json.is_some() {
            sim.trace = Some(TraceLogger::default());
        }
        sim.run(algorithm)?;

        let report = sim.report(algorithm);
        if !args.json {
            println!(
                "servers={} algorithm={} ticks={} transfers={}",
                report.num_servers, report.algorithm, report.ticks, report.transfers
            );
        }
        if let Some(trace) = sim.trace.take() {
            traces.push(RunTrace {
                report: report.clone(),
                events: trace.events,
            });
        }
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if let Some(path) = &args.trace_json {
        fs::write(path, serde_json::to_string_pretty(&traces)?)?;
        if !args.quiet {
            eprintln!("wrote trace events to {}", path.display());
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.quiet {
            tracing_subscriber::EnvFilter::new("off")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        })
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
