//! RV32I pipeline simulator CLI.
//!
//! This binary drives the pipeline simulator from the command line. It performs:
//! 1. **Run:** Load an image, run it to the halt word, print the memory-write log and
//!    statistics, and optionally check data memory against a reference image.
//! 2. **Disasm:** Print the disassembly of an image, one word per line.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rvpipe_core::config::Config;
use rvpipe_core::isa::disasm::disassemble;
use rvpipe_core::sim::loader;
use rvpipe_core::{SimResult, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rvpipe",
    author,
    version,
    about = "Cycle-accurate five-stage RV32I pipeline simulator",
    long_about = "Run a program image through a five-stage in-order RV32I pipeline.\n\nImages are hex text (one word per line, `@addr` directives allowed) or raw little-endian `.bin` files.\n\nExamples:\n  rvpipe run program.hex\n  rvpipe run program.hex --expect dmem_ref.hex --dump-regs\n  RUST_LOG=debug rvpipe run program.hex\n  rvpipe disasm program.hex"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image to completion.
    Run {
        /// Program image loaded into instruction memory.
        image: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Image preloaded into data memory.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Override the configured cycle budget.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Reference image compared against final data memory.
        #[arg(long)]
        expect: Option<PathBuf>,

        /// Print the register file after the run.
        #[arg(long)]
        dump_regs: bool,

        /// Print the first N words of data memory after the run.
        #[arg(long, value_name = "N")]
        dump_mem: Option<usize>,

        /// Log every cycle (sets the log filter to `trace`).
        #[arg(long)]
        trace: bool,
    },

    /// Disassemble a program image.
    Disasm {
        /// Program image to disassemble.
        image: PathBuf,
    },
}

/// Options of the `run` subcommand.
#[derive(Debug)]
struct RunArgs {
    image: PathBuf,
    config: Option<PathBuf>,
    data: Option<PathBuf>,
    max_cycles: Option<u64>,
    expect: Option<PathBuf>,
    dump_regs: bool,
    dump_mem: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_tracing(trace);

    let result = match cli.command {
        Commands::Run { image, config, data, max_cycles, expect, dump_regs, dump_mem, .. } => {
            cmd_run(&RunArgs { image, config, data, max_cycles, expect, dump_regs, dump_mem })
        }
        Commands::Disasm { image } => cmd_disasm(&image),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the `tracing` subscriber. `RUST_LOG` wins; otherwise `info`, or
/// `trace` when requested on the command line.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the image, runs it, and reports the outcome.
fn cmd_run(args: &RunArgs) -> SimResult<ExitCode> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(max) = args.max_cycles {
        config.general.max_cycles = max;
    }

    let image = loader::load_image(&args.image)?;
    println!("[*] Image: {} ({} words)", args.image.display(), image.len());
    println!(
        "    Start PC: {:#010x}  IMEM: {} words  DMEM: {} words  Max cycles: {}",
        config.general.start_pc,
        config.memory.imem_words,
        config.memory.dmem_words,
        config.general.max_cycles
    );

    let mut sim = Simulator::new(&config, &image)?;
    if let Some(path) = &args.data {
        sim.load_data(&loader::load_image(path)?)?;
    }

    let run = sim.run();

    println!();
    println!("MEMORY WRITES");
    if sim.memory_writes().is_empty() {
        println!("  (none)");
    }
    for w in sim.memory_writes() {
        println!("  [{:#010x}] <= {:#010x} ({})", w.addr, w.data, w.data as i32);
    }
    println!();
    sim.stats.print();

    if args.dump_regs {
        println!();
        sim.cpu.regs.dump();
    }
    if let Some(n) = args.dump_mem {
        println!();
        for (i, word) in sim.dmem.words().iter().take(n).enumerate() {
            println!("  {:#010x}: {word:#010x}", i << 2);
        }
    }

    let summary = run?;
    println!("\n[*] Halted after {} cycles ({} instructions retired)", summary.cycles, summary.retired);

    if let Some(path) = &args.expect {
        let reference = loader::load_image(path)?;
        sim.verify_memory(&reference)?;
        println!("[*] Data memory matches {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

/// Prints one disassembled word per line.
fn cmd_disasm(image: &Path) -> SimResult<ExitCode> {
    for (i, word) in loader::load_image(image)?.iter().enumerate() {
        println!("{:#010x}:  {word:08x}  {}", i << 2, disassemble(*word));
    }
    Ok(ExitCode::SUCCESS)
}
