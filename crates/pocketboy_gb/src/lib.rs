//! PocketBoy: a Game Boy (DMG) CPU core.
//!
//! The crate implements the execution engine only: registers and flags,
//! the flat address space, the instruction table, and the
//! fetch-decode-execute loop. Peripherals (video, audio, joypad, timers,
//! interrupt delivery) and cartridge mappers are external collaborators.

pub mod cpu;
pub mod memory;

pub use cpu::isa::{Instruction, InstructionTable, TableError};
pub use cpu::regs::{Flag, Registers, BOOT_PC, BOOT_SP};
pub use cpu::{Cpu, DecodeError};
pub use memory::AddressSpace;
