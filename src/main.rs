use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use logtree::{import_files, report, LogTree};

#[derive(Parser, Debug)]
#[command(name = "logtree", about = "Timing-accuracy index for periodic message logs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the indexed tree, one message ID per line, children indented.
    Show {
        /// Period source (`message_id,period` rows with a header).
        periods: PathBuf,
        /// Timestamp source (`timestamp,message_id` rows with a header).
        log: PathBuf,
    },
    /// Report each stream's accuracy score (mean absolute gap deviation).
    Accuracy {
        /// Period source.
        periods: PathBuf,
        /// Timestamp source.
        log: PathBuf,
        /// Destination file for `message_id,score` rows (default: stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Report how many messages each stream sent.
    Frequencies {
        /// Period source.
        periods: PathBuf,
        /// Timestamp source.
        log: PathBuf,
        /// Destination file for `message_id,count` rows (default: stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List streams from most to least accurate.
    Rank {
        /// Period source.
        periods: PathBuf,
        /// Timestamp source.
        log: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { periods, log } => {
            let tree = load_tree(&periods, &log)?;
            print!("{tree}");
        }
        Commands::Accuracy {
            periods,
            log,
            output,
        } => {
            let tree = load_tree(&periods, &log)?;
            emit_report(tree.accuracy_report(), output)?;
        }
        Commands::Frequencies {
            periods,
            log,
            output,
        } => {
            let tree = load_tree(&periods, &log)?;
            emit_report(tree.all_frequencies(), output)?;
        }
        Commands::Rank { periods, log } => {
            let tree = load_tree(&periods, &log)?;
            run_rank(&tree)?;
        }
    }

    Ok(())
}

fn load_tree(periods: &PathBuf, log: &PathBuf) -> Result<LogTree> {
    import_files(periods, log).with_context(|| {
        format!(
            "failed to index {} and {}",
            periods.display(),
            log.display()
        )
    })
}

fn emit_report<K, V, I>(entries: I, output: Option<PathBuf>) -> Result<()>
where
    K: std::fmt::Display,
    V: std::fmt::Display,
    I: IntoIterator<Item = (K, V)>,
{
    match output {
        Some(path) => report::write_report_file(path, entries),
        None => report::write_report(&mut io::stdout().lock(), entries),
    }
}

fn run_rank(tree: &LogTree) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for message_id in tree.sorted_by_accuracy() {
        // Ranked IDs are drawn from the tree, so the score is present
        let score = tree.accuracy(message_id).unwrap_or(0.0);
        writeln!(stdout, "{message_id}\t{score:.3}")?;
    }
    Ok(())
}
