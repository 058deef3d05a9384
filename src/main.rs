// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use process_dashboard::config::consts::{DEFAULT_CONFIG_PATH, DEFAULT_PROCESSES_DIR};
use process_dashboard::config::{load_config, AppConfig};
use process_dashboard::data::Upload;
use process_dashboard::dispatch::{invoke, NoticeLevel, ViewReport};
use process_dashboard::registry::ProcessRegistry;
use process_dashboard::resolver::{resolve_category, SelectionOutcome};
use process_dashboard::session::Session;
use process_dashboard::traits::{ProcessInputs, ProcessResult};

#[derive(Parser)]
#[command(name = "process-dashboard", version, about = "Discover, select and run data processes")]
struct Cli {
    /// Dashboard configuration file (display names and descriptions)
    #[arg(long, global = true, env = "PROCESS_DASHBOARD_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory scanned for process unit manifests
    #[arg(long, global = true, env = "PROCESS_DASHBOARD_PROCESSES", default_value = DEFAULT_PROCESSES_DIR)]
    processes_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List discovered categories and processes
    List,

    /// Select a category/process and render its view
    Show {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        process: Option<String>,

        /// Data file to upload (.csv, .xlsx or .json)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Run the process on the uploaded data
        #[arg(long)]
        run: bool,
    },

    /// Invoke a process directly and print its result as JSON
    Run {
        #[arg(long)]
        process: String,

        #[arg(long)]
        file: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "process_dashboard=info".into());

    let log_format =
        std::env::var("PROCESS_DASHBOARD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    let registry = ProcessRegistry::with_builtin_catalog(&cli.processes_dir);

    match cli.command {
        Command::List => list(&config, registry),
        Command::Show {
            category,
            process,
            file,
            run,
        } => show(&config, registry, category, process, file, run),
        Command::Run { process, file } => run_process(registry, &process, file),
    }
}

fn list(config: &AppConfig, registry: ProcessRegistry) -> Result<()> {
    let mut session = Session::new(config, registry);
    session.refresh();
    let options = session.options();

    println!("🚀 Process Dashboard");
    println!("═══════════════════════════════════");
    if options.is_empty() {
        println!("⚠️  No processes discovered.");
        return Ok(());
    }

    for category in options {
        println!("\n📂 {} ({})", category.name, category.key);
        for process in category.processes {
            println!("  🔧 {} ({})", process.name, process.id);
            println!("     {}", process.description);
        }
    }
    Ok(())
}

fn show(
    config: &AppConfig,
    registry: ProcessRegistry,
    category: Option<String>,
    process: Option<String>,
    file: Option<PathBuf>,
    run: bool,
) -> Result<()> {
    let mut session = Session::new(config, registry);
    session.refresh();

    // A process given on its own implies its own category
    let category = category.or_else(|| {
        process
            .as_deref()
            .and_then(|id| session.index().descriptor(id))
            .map(|d| d.category.clone())
    });

    if let Some(category) = category.as_deref() {
        if session.select_category(category) == SelectionOutcome::NoSelection {
            println!("⚠️  Unknown category '{}'", category);
        }
    }
    if let Some(process) = process.as_deref() {
        if session.select_process(process) == SelectionOutcome::NoSelection {
            println!("⚠️  Process '{}' is not available in the selected category", process);
        }
    }

    let upload = file
        .map(|path| {
            Upload::from_path(&path).with_context(|| format!("failed to read '{}'", path.display()))
        })
        .transpose()?;

    let report = session.render(upload.as_ref(), run);
    print_report(&report);
    Ok(())
}

fn run_process(registry: ProcessRegistry, process_id: &str, file: PathBuf) -> Result<()> {
    let processes = registry.discover();
    let implementation = processes.get(process_id).ok_or_else(|| {
        anyhow!(
            "unknown process '{}' (discovered: {})",
            process_id,
            processes.identifiers().collect::<Vec<_>>().join(", ")
        )
    })?;

    let upload = Upload::from_path(&file)
        .with_context(|| format!("failed to read '{}'", file.display()))?;
    let table = upload.load()?;

    tracing::debug!(
        process_id,
        category = %resolve_category(process_id, implementation),
        "Running process directly"
    );

    let result = invoke(process_id, implementation, &ProcessInputs::with_data(table))?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if let ProcessResult::Error(message) = result {
        bail!(message);
    }
    Ok(())
}

fn print_report(report: &ViewReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", report.title);
    if let Some(description) = &report.description {
        println!("  {}", description);
    }
    println!("{}", "═".repeat(60));

    for notice in &report.notices {
        let icon = match notice.level {
            NoticeLevel::Info => "💡",
            NoticeLevel::Success => "✅",
            NoticeLevel::Warning => "⚠️ ",
            NoticeLevel::Error => "❌",
        };
        println!("{} {}", icon, notice.message);
    }

    if let Some(preview) = &report.preview {
        println!("\n📋 Data Preview");
        print!("{}", preview);
    }

    match &report.result {
        Some(ProcessResult::Outputs(outputs)) => {
            if let Some(missing) = outputs.get("missing_values").and_then(|v| v.as_object()) {
                println!("\n🧮 Missing Value Counts");
                for (column, count) in missing {
                    println!("  • {}: {}", column, count);
                }
            } else {
                println!("\n📊 Results");
                for (key, value) in outputs {
                    println!("  • {}: {}", key, value);
                }
            }
        }
        Some(ProcessResult::Error(message)) => println!("❌ {}", message),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_arguments_parse() {
        let cli = Cli::try_parse_from([
            "process-dashboard",
            "show",
            "--process",
            "quality_control_processor",
            "--file",
            "data.csv",
            "--run",
        ])
        .unwrap();

        match cli.command {
            Command::Show {
                process, file, run, ..
            } => {
                assert_eq!(process.as_deref(), Some("quality_control_processor"));
                assert_eq!(file, Some(PathBuf::from("data.csv")));
                assert!(run);
            }
            _ => panic!("expected show command"),
        }
    }
}
