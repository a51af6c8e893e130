use crate::domain::graph::DirectedGraph;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_kosaraju::KosarajuSccSolver;
use crate::infrastructure::serde_json_adapter::{
    read_graph_file, write_report_file, SccReportDto,
};
use crate::usecase::analyze::analyze_graph;
use crate::usecase::event::AppEvent;
use crate::usecase::load::build_graph_from_dto;
use crate::usecase::sample::sample_graph;
use crate::usecase::validate::validate_graph_file;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::SccAnalyze {
            input,
            output,
            emit_events,
            backup,
            dry_run,
        } => {
            let dto = read_graph_file(&input)
                .await
                .with_context(|| format!("reading input graph JSON: {input}"))?;
            validate_graph_file(&dto).with_context(|| format!("validating graph: {input}"))?;

            let graph = build_graph_from_dto(&dto);
            let opts = OutputOptions {
                output,
                emit_events,
                backup,
                dry_run,
            };
            run_analysis(&graph, Some(&input), &opts).await
        }

        Cli::SccSample {
            output,
            emit_events,
        } => {
            let graph = sample_graph();
            let opts = OutputOptions {
                output,
                emit_events,
                backup: false,
                dry_run: false,
            };
            run_analysis(&graph, None, &opts).await
        }

        Cli::SccValidate { input } => {
            let dto = read_graph_file(&input)
                .await
                .with_context(|| format!("reading input graph JSON: {input}"))?;

            validate_graph_file(&dto).with_context(|| format!("validating graph: {input}"))?;

            // Emit an explicit schema validation success message for e2e tests.
            eprintln!("schema validation passed");
            eprintln!(
                "ok: {} vertices listed, {} edges",
                dto.vertices.len(),
                dto.edges.len()
            );
            Ok(())
        }
    }
}

struct OutputOptions {
    output: Option<String>,
    emit_events: bool,
    backup: bool,
    dry_run: bool,
}

async fn run_analysis(
    graph: &DirectedGraph,
    input: Option<&str>,
    opts: &OutputOptions,
) -> Result<()> {
    let write_to = if opts.dry_run {
        None
    } else {
        opts.output.as_deref()
    };

    if let (Some(input), Some(output)) = (input, write_to) {
        if is_same_file(input, output) {
            if !opts.backup {
                return Err(anyhow!(
                    "refusing to overwrite input without --backup: {input}"
                ));
            }
            let _backup_path = create_timestamped_backup(Path::new(input))
                .with_context(|| format!("creating backup for: {input}"))?;
        }
    }

    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let printer = if opts.emit_events {
        Some(spawn_ndjson_printer(rx))
    } else {
        drop(rx);
        None
    };

    let (report, stats) = analyze_graph(graph, &KosarajuSccSolver, Some(tx)).await?;

    if let Some(handle) = printer {
        handle.await.ok();
    } else {
        print!("{}", report.render_text());
    }

    if let Some(output) = write_to {
        let dto = SccReportDto::from_report(&report, &stats);
        write_report_file(output, &dto)
            .await
            .with_context(|| format!("writing report JSON: {output}"))?;
    }

    eprintln!(
        "summary: vertices={} edges={} self_loops={} components={} cyclic_components={} largest_component={}",
        stats.vertices,
        stats.edges,
        stats.self_loops,
        stats.components,
        stats.cyclic_components,
        stats.largest_component
    );

    Ok(())
}

#[derive(Debug)]
enum Cli {
    SccAnalyze {
        input: String,
        output: Option<String>,
        emit_events: bool,
        backup: bool,
        dry_run: bool,
    },
    SccSample {
        output: Option<String>,
        emit_events: bool,
    },
    SccValidate {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> scc analyze --in/--input <graph.json> [--out/--output <report.json>] [--emit-events] [--backup] [--dry-run]
        // <bin> scc sample [--out/--output <report.json>] [--emit-events]
        // <bin> scc validate --in/--input <graph.json>
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "scc" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "analyze" => Self::parse_analyze(args),
            "sample" => Self::parse_sample(args),
            "validate" => Self::parse_validate(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut emit_events = false;
        let mut backup = false;
        let mut dry_run = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--dry-run" => {
                    dry_run = true;
                }
                "--backup" => {
                    backup = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::SccAnalyze {
            input,
            output,
            emit_events,
            backup,
            dry_run,
        })
    }

    fn parse_sample(args: &[String]) -> Result<Self> {
        let mut output: Option<String> = None;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::SccSample {
            output,
            emit_events,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::SccValidate { input })
    }
}

fn usage() -> &'static str {
    "Usage:\n  scc analyze --in/--input <graph.json> [--out/--output <report.json>] [--emit-events] [--backup] [--dry-run]\n  scc sample [--out/--output <report.json>] [--emit-events]\n  scc validate --in/--input <graph.json>\n\nGraph file:\n  {\"vertices\": [\"X\"], \"edges\": [{\"from\": \"A\", \"to\": \"B\"}]}\n\nEvents:\n  If --emit-events is set, NDJSON events replace the text report on stdout; summary goes to stderr.\n\nSafety:\n  If the report path equals the input path, --backup is required and a timestamped backup is created in the same directory."
}

fn is_same_file(a: &str, b: &str) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| PathBuf::from(a));
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| PathBuf::from(b));
    a == b
}

fn create_timestamped_backup(input: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("input file name is not valid UTF-8"))?;

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let backup_name = format!("{file_name}.bak.{ts}");
    let backup_path = input.with_file_name(backup_name);
    std::fs::copy(input, &backup_path).with_context(|| format!("copying {file_name} to backup"))?;
    Ok(backup_path)
}
