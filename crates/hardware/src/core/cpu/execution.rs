//! Execution Engine.
//!
//! Applies one decoded instruction to the CPU state and memory and computes
//! the next program counter. All arithmetic is over unsigned 16-bit values
//! with modulo-65536 wraparound; overflow and underflow are never signaled.
//! The engine has no error path: an undefined instruction is a silent no-op
//! that advances the program counter.

use tracing::trace;

use super::Cpu;
use super::memory::{Memory, effective_address};
use crate::common::constants::LINK_REG;
use crate::isa::{Instruction, ThreeRegOp, TwoRegOp, ZeroRegOp, sign_extend7};

impl Cpu {
    /// Executes one decoded instruction, mutating registers, memory, and the
    /// program counter.
    pub fn execute(&mut self, instr: &Instruction, mem: &mut Memory) {
        trace!(pc = self.pc, %instr, "execute");
        let next_pc = match *instr {
            Instruction::ThreeReg {
                op,
                reg1,
                reg2,
                reg3,
            } => self.exec_three_reg(op, reg1, reg2, reg3),
            Instruction::TwoRegImm {
                op,
                reg1,
                reg2,
                imm,
            } => self.exec_two_reg(op, reg1, reg2, imm, mem),
            Instruction::ZeroRegImm { op, imm } => self.exec_zero_reg(op, imm),
            Instruction::Undefined => self.pc.wrapping_add(1),
        };
        self.pc = next_pc;
    }

    fn exec_three_reg(&mut self, op: ThreeRegOp, reg1: usize, reg2: usize, reg3: usize) -> u16 {
        let a = self.regs.read(reg1);
        let b = self.regs.read(reg2);
        match op {
            ThreeRegOp::Add => self.regs.write(reg3, a.wrapping_add(b)),
            ThreeRegOp::Sub => self.regs.write(reg3, a.wrapping_sub(b)),
            ThreeRegOp::Or => self.regs.write(reg3, a | b),
            ThreeRegOp::And => self.regs.write(reg3, a & b),
            ThreeRegOp::Slt => self.regs.write(reg3, (a < b) as u16),
            ThreeRegOp::Jr => return a,
        }
        self.pc.wrapping_add(1)
    }

    fn exec_two_reg(
        &mut self,
        op: TwoRegOp,
        reg1: usize,
        reg2: usize,
        imm: u16,
        mem: &mut Memory,
    ) -> u16 {
        let base = self.regs.read(reg1);
        match op {
            TwoRegOp::Addi => {
                self.regs.write(reg2, base.wrapping_add(sign_extend7(imm)));
            }
            TwoRegOp::Slti => {
                // Unsigned compare against the sign-extended immediate; the
                // false branch writes 0 through the same suppressed-on-$0 path
                // as every other register write.
                self.regs.write(reg2, (base < sign_extend7(imm)) as u16);
            }
            TwoRegOp::Lw => {
                let addr = effective_address(base, imm);
                self.regs.write(reg2, mem.read(addr));
            }
            TwoRegOp::Sw => {
                let addr = effective_address(base, imm);
                mem.write(addr, self.regs.read(reg2));
            }
            TwoRegOp::Jeq => {
                if base == self.regs.read(reg2) {
                    return self.pc.wrapping_add(1).wrapping_add(sign_extend7(imm));
                }
            }
        }
        self.pc.wrapping_add(1)
    }

    fn exec_zero_reg(&mut self, op: ZeroRegOp, imm: u16) -> u16 {
        if op == ZeroRegOp::Jal {
            self.regs.write(LINK_REG, self.pc.wrapping_add(1));
        }
        imm
    }
}
