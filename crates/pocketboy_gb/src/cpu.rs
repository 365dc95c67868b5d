//! The LR35902 execution engine.
//!
//! `Cpu` owns the register file and the address space for its whole
//! lifetime; nothing is shared between instances, so independent CPUs can
//! run side by side without synchronization. Execution is synchronous:
//! [`Cpu::step`] applies exactly one instruction's complete effect on
//! registers, flags, memory, and `pc`/`sp` before returning.

mod alu;
mod helpers;
pub mod isa;
pub mod regs;
#[cfg(test)]
mod tests;

use std::fmt;

use crate::memory::AddressSpace;

use self::isa::InstructionTable;
use self::regs::Registers;

/// The byte at `addr` selected no instruction.
///
/// Raised for the eleven opcode holes of the LR35902 and for any
/// unpopulated slot on the 0xCB-prefixed page. An unknown byte is never
/// executed as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// Address the instruction was fetched from.
    pub addr: u16,
    /// The byte that failed to decode.
    pub opcode: u8,
    /// True when the byte was looked up on the 0xCB-prefixed page.
    pub prefixed: bool,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.prefixed { "0xCB " } else { "" };
        write!(
            f,
            "unknown opcode {prefix}0x{:02X} at 0x{:04X}",
            self.opcode, self.addr
        )
    }
}

impl std::error::Error for DecodeError {}

/// Game Boy CPU core.
///
/// Construction puts the machine in the documented post-boot state
/// (`pc = 0x0100`, `sp = 0xFFFE`, flags clear); the ROM image is installed
/// separately with [`Cpu::load_rom`] before stepping begins.
pub struct Cpu {
    pub regs: Registers,
    mem: AddressSpace,
    halted: bool,
    stopped: bool,
    ime: bool,
    table: &'static InstructionTable,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            mem: AddressSpace::new(),
            halted: false,
            stopped: false,
            ime: false,
            table: isa::default_table(),
        }
    }

    /// A CPU dispatching through a caller-supplied table instead of the
    /// default one.
    #[cfg(test)]
    fn with_table(table: &'static InstructionTable) -> Self {
        Self {
            table,
            ..Self::new()
        }
    }

    /// Install the cartridge image. Expected to happen once, before the
    /// first step; the ROM region is read-only afterwards.
    pub fn load_rom(&mut self, image: &[u8]) {
        self.mem.load_rom(image);
    }

    /// Read-only view of the address space, for harnesses and debuggers.
    pub fn memory(&self) -> &AddressSpace {
        &self.mem
    }

    /// True once a HALT instruction has executed. Terminal for this core;
    /// waking the CPU is the (external) interrupt controller's job.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// True once a STOP instruction has executed. Terminal pending the
    /// (external) joypad wiring.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// State of the interrupt master enable latch (toggled by DI/EI/RETI).
    pub fn interrupts_enabled(&self) -> bool {
        self.ime
    }

    /// Fetch, decode, and execute exactly one instruction.
    ///
    /// A halted or stopped CPU does not fetch; the call is a no-op. The
    /// instruction's effect is fully applied before this returns; no
    /// partial state is ever observable between calls.
    pub fn step(&mut self) -> Result<(), DecodeError> {
        if self.halted || self.stopped {
            return Ok(());
        }

        let table = self.table;
        let addr = self.regs.pc;
        let opcode = self.read_next_byte();

        // The prefix byte is not an instruction of its own: it selects the
        // secondary page, and the byte after it picks the entry.
        let (instr, selector) = if opcode == 0xCB {
            let selector = self.read_next_byte();
            match table.prefixed(selector) {
                Some(instr) => (instr, selector),
                None => return Err(self.decode_failure(addr, selector, true)),
            }
        } else {
            match table.primary(opcode) {
                Some(instr) => (instr, opcode),
                None => return Err(self.decode_failure(addr, opcode, false)),
            }
        };

        log::trace!("0x{addr:04X}  {}", instr.mnemonic);
        instr.execute(self, selector);
        Ok(())
    }

    /// Step until the CPU halts or stops, or until `pc` runs off the end
    /// of the loaded ROM image.
    pub fn run(&mut self) -> Result<(), DecodeError> {
        while !self.halted && !self.stopped && !self.mem.past_rom_image(self.regs.pc) {
            self.step()?;
        }
        Ok(())
    }

    fn decode_failure(&self, addr: u16, opcode: u8, prefixed: bool) -> DecodeError {
        let page = if prefixed { "0xCB " } else { "" };
        log::error!(
            "decode failed: {page}0x{opcode:02X} at PC=0x{addr:04X} \
             (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        DecodeError {
            addr,
            opcode,
            prefixed,
        }
    }
}
