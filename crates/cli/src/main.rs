//! E20 functional simulator CLI.
//!
//! This binary provides a single entry point for both simulation modes. It performs:
//! 1. **Plain run:** Execute a machine-code file to the halt sentinel and print
//!    the final machine state (pc, registers, first 128 memory cells).
//! 2. **Cache run:** Same execution with a one- or two-level cache model in
//!    front of memory; prints the cache configuration and a log entry for
//!    every load and store instead of the final state.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use e20_core::sim::loader;
use e20_core::{CacheSpec, Memory, Simulator};

/// Number of memory cells included in the final-state dump.
const MEM_DUMP_CELLS: usize = 128;

#[derive(Parser, Debug)]
#[command(
    name = "e20sim",
    author,
    version,
    about = "E20 functional simulator with an optional cache model",
    long_about = "Simulate an E20 machine-code file to completion.\n\nWithout --cache, prints the final machine state. With --cache, prints the\ncache configuration and one log entry per load or store.\n\nExamples:\n  e20sim program.bin\n  e20sim program.bin --cache 16,4,2\n  e20sim program.bin --cache 32,1,4,64,8,2 --stats"
)]
struct Cli {
    /// Machine-code file, one `ram[N] = 16'b...;` line per word.
    filename: PathBuf,

    /// Cache configuration: size,assoc,blocksize for L1, optionally followed
    /// by size,assoc,blocksize for L2.
    #[arg(long)]
    cache: Option<CacheSpec>,

    /// Print execution statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Emit the final pc, registers, and statistics as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mem = loader::load_program(&cli.filename).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let sim = match cli.cache {
        Some(ref spec) => run_with_cache(mem, spec),
        None => run_plain(mem),
    };

    if cli.json {
        let dump = serde_json::json!({
            "pc": sim.cpu.pc,
            "registers": sim.cpu.regs.snapshot(),
            "stats": sim.stats(),
        });
        match serde_json::to_string_pretty(&dump) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else if cli.stats {
        sim.stats().print();
    }
}

/// Runs with the cache model: configuration banner first, then one log entry
/// per cache event, in program order. The final state is not printed.
fn run_with_cache(mem: Memory, spec: &CacheSpec) -> Simulator {
    let mut sim = Simulator::with_caches(mem, spec);
    for cache in sim.caches().levels() {
        let cfg = cache.config();
        println!(
            "Cache {} has size {}, associativity {}, blocksize {}, rows {}",
            cache.level(),
            cfg.size,
            cfg.assoc,
            cfg.blocksize,
            cfg.num_rows()
        );
    }
    sim.run(|record| {
        println!(
            "{:<8} pc:{:5}\taddr:{:5}\trow:{:4}",
            format!("{} {}", record.level, record.status),
            record.pc,
            record.addr,
            record.row
        );
    });
    sim
}

/// Runs without a cache model and prints the final machine state.
fn run_plain(mem: Memory) -> Simulator {
    let mut sim = Simulator::new(mem);
    sim.run(|_| {});
    print_final_state(&sim);
    sim
}

/// Prints the halted machine state: pc, all eight registers, and the first
/// 128 memory cells as 4-digit hex words, eight per line.
fn print_final_state(sim: &Simulator) {
    println!("Final state:");
    println!("\tpc={:5}", sim.cpu.pc);
    for (reg, val) in sim.cpu.regs.snapshot().iter().enumerate() {
        println!("\t${reg}={val:5}");
    }
    let mut line = String::new();
    for (count, word) in sim.mem.cells().iter().take(MEM_DUMP_CELLS).enumerate() {
        line.push_str(&format!("{word:04x} "));
        if count % 8 == 7 {
            println!("{line}");
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{line}");
    }
}
