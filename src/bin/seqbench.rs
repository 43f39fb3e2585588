use clap::{Parser, Subcommand};
use seqbench::cli::{self as prog_cli, Command};
use seqbench::config::{self, PartialConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seqbench", version, about = "Compare eager (lists) and lazy (sequences) filter-map pipelines", long_about = None)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, help = "Path to a config file (TOML). If omitted, seqbench.toml is searched for.")]
    config: Option<PathBuf>,
    #[arg(long, help = "Number of generated products (default 100000)")]
    size: Option<usize>,
    #[arg(long, help = "Output format: human | plain | json")]
    format: Option<String>,
    #[arg(long, help = "Directory for rolling log files. If omitted, logs go to stderr.")]
    log_dir: Option<PathBuf>,
    #[arg(long, help = "Log level: error | warn | info | debug | trace")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(name = "compare", about = "Run lists then sequences once over the dataset (default)")]
    Compare,
    #[command(name = "sweep", about = "Run one comparison per dataset size")]
    Sweep {
        #[arg(long, help = "Comma-separated dataset sizes (default 1000,10000,100000,1000000)")]
        sizes: Option<String>,
        #[arg(long, help = "Write rows as CSV to this path")]
        csv: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), seqbench::errors::BenchError> {
    let cli = Cli::parse();
    let layer = PartialConfig {
        dataset_size: cli.size,
        output: cli.format,
        log_dir: cli.log_dir,
        log_level: cli.log_level,
        log_retention: None,
    };
    let cfg = config::load_config(layer, cli.config.as_deref())?;
    seqbench::logger::configure_logging(cfg.log_dir.as_deref(), Some(cfg.log_level.as_str()), Some(cfg.log_retention))?;
    log::debug!("resolved config: {cfg:?}");

    let cmd = match cli.command.unwrap_or(Commands::Compare) {
        Commands::Compare => Command::Compare,
        Commands::Sweep { sizes, csv } => {
            let sizes = sizes.as_deref().map(prog_cli::parse_sizes).transpose()?.unwrap_or_default();
            Command::Sweep { sizes, csv }
        }
    };
    seqbench::run(&cfg, cmd)
}
