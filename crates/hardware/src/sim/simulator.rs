//! Simulator: owns the CPU, memory, cache hierarchy, and statistics.
//!
//! Each step fetches the word at the low 13 bits of the program counter,
//! checks the halt sentinel, presents any memory access to the cache
//! hierarchy, and executes the instruction. Cache observation happens before
//! execution so the effective address is computed from pre-execution register
//! state, matching what the instruction itself will see.

use tracing::debug;

use crate::config::CacheSpec;
use crate::core::Cpu;
use crate::core::cpu::memory::{Memory, effective_address};
use crate::core::units::cache::{AccessKind, CacheHierarchy, CacheRecord};
use crate::isa::{Instruction, TwoRegOp, decode, is_halt};
use crate::stats::SimStats;

/// Result of advancing the simulator by one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The halt sentinel (a jump to the current program counter) was fetched;
    /// no instruction retired and the machine state is final.
    Halted,
    /// One instruction retired, producing these cache log records (empty when
    /// no cache is configured or the instruction does not access memory).
    Retired(Vec<CacheRecord>),
}

/// Top-level simulator: architectural state plus the cache model.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers and program counter).
    pub cpu: Cpu,
    /// The flat 8192-cell memory, shared by instructions and data.
    pub mem: Memory,
    caches: CacheHierarchy,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator over a loaded memory image with no cache model.
    pub fn new(mem: Memory) -> Self {
        Self {
            cpu: Cpu::new(),
            mem,
            caches: CacheHierarchy::disabled(),
            stats: SimStats::new(),
        }
    }

    /// Creates a simulator with the cache hierarchy the configuration
    /// describes.
    pub fn with_caches(mem: Memory, spec: &CacheSpec) -> Self {
        Self {
            caches: CacheHierarchy::new(spec),
            ..Self::new(mem)
        }
    }

    /// The configured cache hierarchy.
    pub fn caches(&self) -> &CacheHierarchy {
        &self.caches
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Advances the simulator by one instruction.
    pub fn step(&mut self) -> StepOutcome {
        let pc = self.cpu.pc;
        let word = self.mem.read(pc);
        if is_halt(word, pc) {
            debug!(pc, "halt sentinel reached");
            return StepOutcome::Halted;
        }
        let instr = decode(word);
        let records = self.observe_memory_access(&instr, pc);
        self.cpu.execute(&instr, &mut self.mem);
        self.stats.record_instruction(&instr);
        for record in &records {
            self.stats.record_access(record);
        }
        StepOutcome::Retired(records)
    }

    /// Runs to the halt sentinel, feeding every cache log record to `sink`
    /// in program order.
    pub fn run<F>(&mut self, mut sink: F)
    where
        F: FnMut(&CacheRecord),
    {
        loop {
            match self.step() {
                StepOutcome::Halted => break,
                StepOutcome::Retired(records) => {
                    for record in &records {
                        sink(record);
                    }
                }
            }
        }
        debug!(
            instructions = self.stats.instructions_retired,
            "simulation complete"
        );
    }

    /// Presents a load or store to the cache hierarchy, using the effective
    /// address the instruction is about to compute. Non-memory instructions
    /// produce no records.
    fn observe_memory_access(&mut self, instr: &Instruction, pc: u16) -> Vec<CacheRecord> {
        match *instr {
            Instruction::TwoRegImm {
                op: op @ (TwoRegOp::Lw | TwoRegOp::Sw),
                reg1,
                imm,
                ..
            } => {
                let addr = effective_address(self.cpu.regs.read(reg1), imm);
                let kind = if op == TwoRegOp::Lw {
                    AccessKind::Load
                } else {
                    AccessKind::Store
                };
                self.caches.observe(kind, pc, addr)
            }
            _ => Vec::new(),
        }
    }
}
