//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the E20 simulator. It provides:
//! 1. **Instruction counts:** Total retired instructions and a category mix
//!    (ALU, load, store, control).
//! 2. **Cache hierarchy:** Per-level hit, miss, and store counts with derived
//!    miss rates.
//!
//! Counters are updated by the simulator as it steps; nothing here affects
//! architectural state.

use std::time::Instant;

use serde::Serialize;

use crate::core::units::cache::{AccessStatus, CacheLevel, CacheRecord};
use crate::isa::{Instruction, ThreeRegOp, TwoRegOp};

/// Execution statistics accumulated over a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Number of instructions retired before the halt sentinel.
    pub instructions_retired: u64,

    /// Count of ALU instructions retired (arithmetic, logic, comparisons).
    pub inst_alu: u64,
    /// Count of `lw` instructions retired.
    pub inst_load: u64,
    /// Count of `sw` instructions retired.
    pub inst_store: u64,
    /// Count of control-flow instructions retired (`j`, `jal`, `jr`, `jeq`).
    pub inst_control: u64,

    /// L1 load hit count.
    pub l1_hits: u64,
    /// L1 load miss count.
    pub l1_misses: u64,
    /// L1 store count.
    pub l1_writes: u64,
    /// L2 load hit count.
    pub l2_hits: u64,
    /// L2 load miss count.
    pub l2_misses: u64,
    /// L2 store count.
    pub l2_writes: u64,
}

impl Default for SimStats {
    /// Returns zeroed counters with the clock started now.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_control: 0,
            l1_hits: 0,
            l1_misses: 0,
            l1_writes: 0,
            l2_hits: 0,
            l2_misses: 0,
            l2_writes: 0,
        }
    }
}

impl SimStats {
    /// Creates a fresh statistics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one retired instruction into the category mix.
    pub fn record_instruction(&mut self, instr: &Instruction) {
        self.instructions_retired += 1;
        match instr {
            Instruction::TwoRegImm {
                op: TwoRegOp::Lw, ..
            } => self.inst_load += 1,
            Instruction::TwoRegImm {
                op: TwoRegOp::Sw, ..
            } => self.inst_store += 1,
            Instruction::TwoRegImm {
                op: TwoRegOp::Jeq, ..
            }
            | Instruction::ThreeReg {
                op: ThreeRegOp::Jr, ..
            }
            | Instruction::ZeroRegImm { .. } => self.inst_control += 1,
            _ => self.inst_alu += 1,
        }
    }

    /// Records one cache log record into the per-level counters.
    pub fn record_access(&mut self, record: &CacheRecord) {
        let (hits, misses, writes) = match record.level {
            CacheLevel::L1 => (&mut self.l1_hits, &mut self.l1_misses, &mut self.l1_writes),
            CacheLevel::L2 => (&mut self.l2_hits, &mut self.l2_misses, &mut self.l2_writes),
        };
        match record.status {
            AccessStatus::Hit => *hits += 1,
            AccessStatus::Miss => *misses += 1,
            AccessStatus::Write => *writes += 1,
        }
    }

    /// Prints all statistics sections to stdout.
    ///
    /// # Panics
    ///
    /// This function will not panic. Division by zero is prevented by
    /// clamping the instruction denominator to 1 and by skipping the miss
    /// rate for a level with no load accesses.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };
        let total_inst = instr as f64;

        println!("\n==========================================================");
        println!("E20 SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            (self.inst_alu as f64 / total_inst) * 100.0
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            (self.inst_load as f64 / total_inst) * 100.0
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            (self.inst_store as f64 / total_inst) * 100.0
        );
        println!(
            "  op.control             {} ({:.2}%)",
            self.inst_control,
            (self.inst_control as f64 / total_inst) * 100.0
        );
        println!("----------------------------------------------------------");
        let print_cache = |name: &str, hits: u64, misses: u64, writes: u64| {
            let loads = hits + misses;
            let miss_rate = if loads > 0 {
                (misses as f64 / loads as f64) * 100.0
            } else {
                0.0
            };
            println!(
                "  {name:<4} loads: {loads:<10} | hits: {hits:<10} | miss_rate: {miss_rate:.2}% | stores: {writes}"
            );
        };
        println!("MEMORY HIERARCHY");
        print_cache("L1", self.l1_hits, self.l1_misses, self.l1_writes);
        print_cache("L2", self.l2_hits, self.l2_misses, self.l2_writes);
        println!("==========================================================");
    }
}
