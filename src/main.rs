//! H416 CLI
//!
//! A command-line tool for computing and verifying H416 digests.
//!
//! # Commands
//!
//! - `digest` - Hash strings, files or stdin
//! - `check` - Verify a list of `<digest>  <name>` lines
//! - `params` - Show algorithm parameters and the initial state
//! - `config` - Show or initialize the configuration file
//! - `benchmark` - Run performance benchmark

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::filter::LevelFilter;

use h416::algorithm::{self as algo, H416};
use h416::check::{parse_list, CheckTarget};
use h416::config::{
    default_config_path, ensure_config_dir, parse_log_level, Config, OutputFormat,
};
use h416::source::{digest_reader, Source};

#[derive(Parser)]
#[command(name = "h416")]
#[command(author = "H416 Developers")]
#[command(version)]
#[command(about = "H416 416-bit message digest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash strings, files or stdin
    Digest {
        /// Files to hash (`-` or nothing for stdin)
        files: Vec<String>,

        /// Hash a literal string (repeatable)
        #[arg(short, long)]
        text: Vec<String>,

        /// Print JSON records instead of `<digest>  <name>` lines
        #[arg(long)]
        json: bool,
    },

    /// Verify digests listed in a file
    Check {
        /// File of `<digest>  <path>` lines
        list: PathBuf,

        /// Only print failures
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show algorithm parameters and the initial state
    Params,

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the default path
        #[arg(long)]
        init: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of hashes to compute
        #[arg(short, long, default_value = "10000")]
        count: u32,

        /// Bytes per hashed message
        #[arg(short, long, default_value = "64")]
        size: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(cli.config.clone()).and_then(|config| {
        init_logging(cli.verbose, &config)?;
        log::debug!("config: {:?}", config);

        match cli.command {
            Commands::Digest { files, text, json } => cmd_digest(files, text, json, &config),
            Commands::Check { list, quiet } => cmd_check(&list, quiet, &config),
            Commands::Params => cmd_params(),
            Commands::Config { init } => cmd_config(init, &config),
            Commands::Benchmark { count, size } => cmd_benchmark(count, size),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load the config from `--config`, else the default path if present
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<Config> {
    let fallback = default_config_path();
    Ok(Config::load(explicit.as_deref(), Some(fallback.as_path()))?)
}

/// Install the stderr log subscriber; `-v` flags win over the config
fn init_logging(verbose: u8, config: &Config) -> anyhow::Result<()> {
    let level = match verbose {
        0 => match &config.log_level {
            Some(level) => to_tracing_level(parse_log_level(level)?),
            None => LevelFilter::WARN,
        },
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

fn to_tracing_level(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn cmd_digest(
    files: Vec<String>,
    text: Vec<String>,
    json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let mut sources: Vec<Source> = text.into_iter().map(Source::Text).collect();
    sources.extend(files.iter().map(|f| Source::from_arg(f)));
    if sources.is_empty() {
        sources.push(Source::Stdin);
    }

    let as_json = json || config.output == OutputFormat::Json;
    let mut failed = 0usize;

    for source in &sources {
        match source.digest(config.read_buffer) {
            Ok(record) if as_json => println!("{}", serde_json::to_string(&record)?),
            Ok(record) => println!("{}", record.to_line()),
            Err(e) => {
                eprintln!("h416: {}: {}", source.display_name(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} inputs could not be read", failed, sources.len());
    }

    Ok(())
}

fn cmd_check(list: &Path, quiet: bool, config: &Config) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(list)?;
    let entries = parse_list(&content)?;
    log::info!("checking {} entries from {}", entries.len(), list.display());

    let mut mismatched = 0usize;
    let mut unreadable = 0usize;

    for entry in &entries {
        let name = entry.target.display_name();
        let result = match &entry.target {
            CheckTarget::Text(text) => Ok(algo::hash(text.as_bytes())),
            CheckTarget::File(path) => std::fs::File::open(path)
                .and_then(|file| digest_reader(file, config.read_buffer))
                .map(|(digest, _)| digest),
        };

        match result {
            Ok(actual) if actual == entry.expected => {
                if !quiet {
                    println!("{}: OK", name);
                }
            }
            Ok(_) => {
                println!("{}: FAILED", name);
                mismatched += 1;
            }
            Err(e) => {
                println!("{}: FAILED open or read ({})", name, e);
                unreadable += 1;
            }
        }
    }

    if mismatched > 0 || unreadable > 0 {
        anyhow::bail!(
            "{} computed digest(s) did not match, {} file(s) could not be read",
            mismatched,
            unreadable
        );
    }

    Ok(())
}

fn cmd_params() -> anyhow::Result<()> {
    println!("H416 v{}", algo::VERSION);
    println!("  Block size: {} bytes", algo::BLOCK_SIZE);
    println!("  Rounds: {} ({} phases x {})", algo::ROUNDS, algo::PHASES, algo::ROUNDS_PER_PHASE);
    println!("  State: {} words ({} mixed per round)", algo::STATE_WORDS, algo::MIXED_WORDS);
    println!("  Digest: {} bits ({} hex chars)", algo::DIGEST_SIZE * 8, algo::DIGEST_HEX_LEN);

    println!("\nPhase constants:");
    for phase in [algo::Phase::Choose, algo::Phase::Parity, algo::Phase::Majority] {
        println!("  {:<9} 0x{:08x} + j", format!("{:?}", phase), phase.base_constant());
    }

    println!("\nInitial state:");
    for (i, (word, name)) in algo::INITIAL_STATE
        .iter()
        .zip(algo::NAMED_CONSTANTS)
        .enumerate()
    {
        println!("  H[{:>2}] = 0x{:08x}  {}", i, word, name);
    }

    Ok(())
}

fn cmd_config(init: bool, config: &Config) -> anyhow::Result<()> {
    if init {
        let path = ensure_config_dir()?;
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        Config::default().save_to_file(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn cmd_benchmark(count: u32, size: usize) -> anyhow::Result<()> {
    println!("Running benchmark with {} hashes of {} bytes...", count, size);

    let mut hasher = H416::new();
    let mut data = vec![0u8; size.max(4)];

    let start = Instant::now();

    for i in 0..count {
        data[..4].copy_from_slice(&i.to_le_bytes());
        hasher.update(&data);
        let _ = hasher.finalize_reset();
    }

    let elapsed = start.elapsed().as_secs_f64();
    let hashrate = count as f64 / elapsed;
    let throughput = (count as f64 * data.len() as f64) / elapsed / (1024.0 * 1024.0);

    println!("\nResults:");
    println!("  Total hashes: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed);
    println!("  Hashrate: {:.2} H/s", hashrate);
    println!("  Throughput: {:.2} MB/s", throughput);

    Ok(())
}
