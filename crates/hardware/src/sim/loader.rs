//! Machine-Code Loader.
//!
//! Reads E20 machine-code text into a memory image. Each line has the form
//! `ram[N] = 16'bXXXXXXXXXXXXXXXX;` with an optional trailing comment after
//! the semicolon. Addresses must start at 0 and increase by one per line; the
//! program must fit the 8192-cell memory. All violations are fatal, raised
//! before simulation starts.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::common::constants::MEM_SIZE;
use crate::core::cpu::memory::Memory;

/// Loads a machine-code file into a fresh memory image.
///
/// # Errors
///
/// Returns [`SimError::ProgramRead`] when the file cannot be read, or any
/// error [`parse_machine_code`] produces for its contents.
pub fn load_program(path: &Path) -> Result<Memory, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::ProgramRead {
        path: path.display().to_string(),
        source,
    })?;
    parse_machine_code(&text)
}

/// Parses machine-code text into a memory image.
///
/// # Errors
///
/// Returns [`SimError::UnparseableLine`] for a line that does not match the
/// `ram[N] = 16'b...;` form, [`SimError::OutOfSequenceAddress`] when
/// addresses are not consecutive from 0, and [`SimError::ProgramTooBig`] when
/// the program exceeds memory.
pub fn parse_machine_code(text: &str) -> Result<Memory, SimError> {
    let mut mem = Memory::new();
    let mut expected_addr = 0usize;
    for line in text.lines() {
        let (addr, word) = parse_line(line).ok_or_else(|| SimError::UnparseableLine {
            line: line.to_string(),
        })?;
        if addr != expected_addr {
            return Err(SimError::OutOfSequenceAddress { addr });
        }
        if addr >= MEM_SIZE {
            return Err(SimError::ProgramTooBig);
        }
        mem.write(addr as u16, word);
        expected_addr += 1;
    }
    Ok(mem)
}

/// Parses one `ram[N] = 16'bBITS;` line into its address and word.
fn parse_line(line: &str) -> Option<(usize, u16)> {
    let rest = line.strip_prefix("ram[")?;
    let (addr_str, rest) = rest.split_once(']')?;
    let rest = rest.strip_prefix(" = 16'b")?;
    let (bits, _) = rest.split_once(';')?;
    if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    let addr = addr_str.parse::<usize>().ok()?;
    let word = u16::from_str_radix(bits, 2).ok()?;
    Some((addr, word))
}
