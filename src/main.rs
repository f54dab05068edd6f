//! Scout CLI entrypoint.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio::io::{AsyncBufReadExt, BufReader};

use scout::assistant::{AppContext, Session};
use scout::backend::{Backend, BackendKind};
use scout::config::Config;
use scout::eval::{EvaluationReport, run_evaluation};
use scout::metrics::{BackendSummary, summarize_results_file};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const QUIT_COMMAND: &str = "/quit";

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Football player lookup assistant and LLM answer evaluation")]
struct Cli {
    /// Player dataset CSV (overrides SCOUT_PLAYERS_PATH)
    #[arg(long, global = true)]
    players: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask about players interactively
    Chat {
        /// Backend that phrases the answers (xai or gemini)
        #[arg(long, default_value = "xai")]
        backend: BackendKind,
    },
    /// Run the question set against both backends and write the results file
    Eval {
        /// Question set CSV (overrides SCOUT_TEST_DATASET_PATH)
        #[arg(long)]
        test_dataset: Option<PathBuf>,

        /// Results CSV, overwritten (overrides SCOUT_RESULTS_PATH)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Recompute metrics from an existing results file
    Metrics {
        /// Results CSV (overrides SCOUT_RESULTS_PATH)
        #[arg(long)]
        results: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
  ███████╗ ██████╗ ██████╗ ██╗   ██╗████████╗
  ██╔════╝██╔════╝██╔═══██╗██║   ██║╚══██╔══╝
  ███████╗██║     ██║   ██║██║   ██║   ██║
  ╚════██║██║     ██║   ██║██║   ██║   ██║
  ███████║╚██████╗╚██████╔╝╚██████╔╝   ██║
  ╚══════╝ ╚═════╝ ╚═════╝  ╚═════╝    ╚═╝

        ASK. ANSWER. SCORE.
                                    AGPL-3.0
"#
    );

    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(players) = cli.players {
        config.players_path = players;
    }
    match &cli.command {
        Command::Eval {
            test_dataset,
            output,
        } => {
            if let Some(path) = test_dataset {
                config.test_dataset_path = path.clone();
            }
            if let Some(path) = output {
                config.results_path = path.clone();
            }
        }
        Command::Metrics {
            results: Some(path),
        } => config.results_path = path.clone(),
        _ => {}
    }
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Chat { backend } => run_chat(&config, backend).await,
        Command::Eval { .. } => run_eval(&config).await,
        Command::Metrics { .. } => run_metrics(&config),
    }
}

async fn run_chat(config: &Config, backend: BackendKind) -> anyhow::Result<()> {
    let ctx = AppContext::from_config(config);
    if !ctx.store().is_available() {
        println!(
            "Player dataset not available at {}. Every lookup will report not found.",
            config.players_path.display()
        );
    }
    println!(
        "Chatting with {} ({}). Type {} or press Ctrl-D to leave.\n",
        backend.display_name(),
        ctx.backend(backend).model(),
        QUIT_COMMAND
    );

    let mut session = Session::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }
        if prompt == QUIT_COMMAND {
            break;
        }

        let reply = ctx.chat(&mut session, prompt, backend).await;
        println!("{}\n", reply.text);
    }

    tracing::info!(turns = session.len(), "Chat session ended");
    Ok(())
}

async fn run_eval(config: &Config) -> anyhow::Result<()> {
    let ctx = AppContext::from_config(config);
    let report = run_evaluation(&ctx, &config.test_dataset_path, &config.results_path).await?;

    print_summaries(&report.summaries, true);
    print_question_log(&report);
    println!("\nResults written to {}", config.results_path.display());
    Ok(())
}

fn run_metrics(config: &Config) -> anyhow::Result<()> {
    match summarize_results_file(&config.results_path, &BackendKind::ALL)? {
        Some(summaries) => print_summaries(&summaries, false),
        None => println!(
            "No evaluation results at {}. Run `scout eval` first.",
            config.results_path.display()
        ),
    }
    Ok(())
}

fn print_summaries(summaries: &[BackendSummary], with_latency: bool) {
    println!(
        "{:<8} {:>9} {:>7} {:>7} {:>10} {:>4} {:>4} {:>4}",
        "Model", "Precision", "Recall", "F1", "Avg time", "TP", "FP", "FN"
    );
    for entry in summaries {
        let s = entry.summary.rounded();
        let latency = if with_latency {
            format!("{:.2}s", s.average_latency_secs())
        } else {
            "-".to_string()
        };
        println!(
            "{:<8} {:>9.2} {:>7.2} {:>7.2} {:>10} {:>4} {:>4} {:>4}",
            entry.backend.display_name(),
            s.precision,
            s.recall,
            s.f1,
            latency,
            s.counts.correct,
            s.counts.incorrect,
            s.counts.unanswered
        );
    }
}

fn print_question_log(report: &EvaluationReport) {
    println!();
    for (idx, row) in report.rows.iter().enumerate() {
        println!("[{}] {} ({})", idx + 1, row.question, row.intent);
        for kind in BackendKind::ALL {
            println!(
                "    {:<7} {}  {}",
                kind.display_name(),
                row.status(kind),
                row.response(kind)
            );
        }
    }
}
