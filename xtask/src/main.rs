use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

const BENCH_TARGET: &str = "graph_benchmark";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "showgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    group_id: String,
    function_id: Option<String>,
    value_str: Option<String>,
    throughput: Option<serde_json::Value>,
}

struct Row {
    mean_ns: f64,
    elements: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH_TARGET}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH_TARGET]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("benchmark run failed with {status}");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut groups: BTreeMap<String, BTreeMap<String, Row>> = BTreeMap::new();
    collect_results(criterion_dir, &mut groups)?;

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Graph Benchmark Report")?;
    for (group, rows) in &groups {
        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Benchmark | Mean | Throughput |")?;
        writeln!(file, "|---|---|---|")?;
        for (name, row) in rows {
            let throughput = row
                .elements
                .map_or_else(|| "-".to_string(), |n| format_rate(n as f64 * 1e9 / row.mean_ns));
            writeln!(file, "| {name} | {} | {throughput} |", format_time(row.mean_ns))?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks the criterion tree and picks up every `new/estimates.json`.
fn collect_results(dir: &Path, groups: &mut BTreeMap<String, BTreeMap<String, Row>>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("report") {
            continue;
        }

        let estimates = path.join("new/estimates.json");
        let info = path.join("new/benchmark.json");
        if estimates.is_file() && info.is_file() {
            let estimates: Estimates = read_json(&estimates)?;
            let info: BenchmarkInfo = read_json(&info)?;

            let name = match (info.function_id, info.value_str) {
                (Some(f), Some(v)) => format!("{f}/{v}"),
                (Some(f), None) => f,
                (None, Some(v)) => v,
                (None, None) => "-".to_string(),
            };
            let elements = info
                .throughput
                .as_ref()
                .and_then(|t| t.get("Elements"))
                .and_then(serde_json::Value::as_u64);
            groups.entry(info.group_id).or_default().insert(
                name,
                Row {
                    mean_ns: estimates.mean.point_estimate,
                    elements,
                },
            );
        } else {
            collect_results(&path, groups)?;
        }
    }
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("malformed {}", path.display()))
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M elem/s", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K elem/s", ops / 1_000.0)
    } else {
        format!("{ops:.0} elem/s")
    }
}
