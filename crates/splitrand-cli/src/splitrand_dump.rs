//! Split-tree dump CLI
//!
//! Usage: splitrand_dump <count> <seed> [options]
//!
//! Options:
//!   --mix <jdk8|murmur3>  Mixer constants (default: jdk8)
//!   --output, -o <path>   Write to a file instead of stdout
//!   --help, -h            Show help
//!
//! Example: splitrand_dump 2 0

use splitrand::MixKind;
use splitrand::app::args::{ArgsError, Command, DumpArgs, parse_dump_args};
use splitrand::infra::dump_io::{save_split_tree, write_split_tree_with};
use std::env;
use std::io;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <count> <seed> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <count>    Values of each kind drawn per split-tree node (>= 0)");
    eprintln!("  <seed>     Root seed (64-bit signed integer)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --mix <name>         Mixer constants (default: {})", MixKind::default());
    eprintln!("  --output, -o <path>  Write to a file instead of stdout");
    eprintln!("  --help, -h           Show this help message");
    eprintln!();
    eprintln!(
        "Supported mixers: {}",
        MixKind::ALL.map(MixKind::name).join(", ")
    );
}

fn init_logging() {
    // Logs go to stderr so stdout stays comparable byte for byte
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}

fn run(args: &DumpArgs) -> io::Result<()> {
    match &args.output {
        Some(path) => save_split_tree(path, args.mix, args.seed, args.count),
        None => write_split_tree_with(args.mix, io::stdout().lock(), args.seed, args.count),
    }
}

fn main() {
    init_logging();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "splitrand_dump".to_string());

    let args = match parse_dump_args(argv) {
        Ok(Command::Run(a)) => a,
        Ok(Command::Help) => {
            print_usage(&program);
            std::process::exit(0);
        }
        Err(ArgsError::Usage { .. }) => {
            print_usage(&program);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.wants_usage() {
                eprintln!();
                print_usage(&program);
            }
            std::process::exit(1);
        }
    };

    info!(
        count = args.count,
        seed = args.seed,
        mixer = %args.mix,
        "dumping split-tree"
    );
    let start = Instant::now();

    if let Err(e) = run(&args) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dump finished"
    );
}
