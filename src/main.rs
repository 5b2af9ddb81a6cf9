//! `convbi` - ask an FAQ corpus questions from the command line.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use convbi::config::LoggingYamlConfig;
use convbi::{load_config, read_corpus_file, ChatSession, ConvBiConfig, FaqMatcher};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "convbi", version, about = "Conversation BI FAQ matcher")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer a question from the corpus
    Ask {
        /// Corpus file, one reference answer per line
        #[arg(long)]
        corpus: PathBuf,
        /// Override matcher.threshold
        #[arg(long)]
        threshold: Option<f32>,
        /// Number of similar entries to list
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        top: Option<usize>,
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Print corpus and vocabulary statistics
    Inspect {
        #[arg(long)]
        corpus: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;
    init_tracing(&config.logging);

    match cli.command {
        Command::Ask {
            corpus,
            threshold,
            top,
            question,
        } => {
            if let Some(threshold) = threshold {
                config.matcher.threshold = threshold;
            }
            if let Some(top) = top {
                config.matcher.max_results = top;
            }
            let matcher = build(&corpus, &config)?;
            let session = ChatSession::new(Arc::new(matcher), config.chat_config());
            let mut history = session.new_history();

            let reply = session.ask(&mut history, &question.join(" "));
            println!("{}", reply.message);
            if let Some(score) = reply.result.score() {
                println!("(confidence {score:.3})");
            }
            if !reply.related.is_empty() {
                println!();
                println!("Similar entries:");
                for hit in &reply.related {
                    println!("  [{:.3}] {}", hit.score, hit.answer);
                }
            }
        }
        Command::Inspect { corpus } => {
            let matcher = build(&corpus, &config)?;
            println!("entries:    {}", matcher.len());
            println!("vocabulary: {}", matcher.vocabulary().len());
            println!("threshold:  {}", matcher.config().threshold);
            println!("digest:     {}", matcher.corpus_digest());
        }
    }

    Ok(())
}

fn build(corpus: &Path, config: &ConvBiConfig) -> anyhow::Result<FaqMatcher> {
    let entries = read_corpus_file(corpus)?;
    if entries.is_empty() {
        tracing::warn!(path = %corpus.display(), "corpus_empty");
    }
    Ok(convbi::build_matcher(entries, config)?)
}

fn init_tracing(logging: &LoggingYamlConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
