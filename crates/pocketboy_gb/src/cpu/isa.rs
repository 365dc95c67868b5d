//! The instruction set: a fixed 256-entry dispatch table.
//!
//! Each opcode byte indexes a flat arena of [`Instruction`] descriptors; a
//! second arena holds the page selected by the 0xCB prefix byte. Both are
//! assembled once, category by category, and never change afterwards;
//! registering the same opcode twice is a configuration error the builder
//! rejects. A slot left empty is an opcode hole and surfaces at dispatch
//! time as a `DecodeError`, never as a silent no-op.
//!
//! Execution handlers receive the selecting opcode byte so that families
//! spanning a range (LD r,r', the ALU ring, the whole prefixed page) can
//! decode their register and bit fields instead of registering one closure
//! per encoding. Immediate operands are consumed by the handler itself via
//! `read_next_byte`/`read_next_short`; the `operands` count on the
//! descriptor records how many trailing bytes that is.

mod alu16;
mod alu8;
mod control;
mod ld;
mod ld16;
mod misc;
mod prefix;

use std::fmt;

use lazy_static::lazy_static;

use super::Cpu;

/// Handler for one opcode. The second argument is the byte that selected
/// the instruction (the opcode itself, or the byte after the 0xCB prefix).
pub(crate) type ExecFn = fn(&mut Cpu, u8);

/// Immutable descriptor for a single opcode.
#[derive(Clone, Copy)]
pub struct Instruction {
    /// Mnemonic for traces and diagnostics. Range-registered families use
    /// the generic form (e.g. `LD r,r'`).
    pub mnemonic: &'static str,
    /// Trailing operand bytes (0, 1, or 2) the handler consumes from the
    /// instruction stream.
    pub operands: u8,
    exec: ExecFn,
}

impl Instruction {
    #[inline]
    pub(super) fn execute(&self, cpu: &mut Cpu, opcode: u8) {
        (self.exec)(cpu, opcode)
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("operands", &self.operands)
            .finish()
    }
}

/// Error raised while assembling an [`InstructionTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The same opcode byte was registered twice.
    DuplicateOpcode { opcode: u8, prefixed: bool },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DuplicateOpcode { opcode, prefixed } => {
                let page = if *prefixed { "0xCB " } else { "" };
                write!(f, "opcode {page}0x{opcode:02X} registered twice")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// The two dispatch arenas: primary opcodes and the 0xCB-prefixed page.
pub struct InstructionTable {
    primary: [Option<Instruction>; 256],
    prefixed: [Option<Instruction>; 256],
}

impl InstructionTable {
    /// Assemble the full LR35902 table.
    pub fn build() -> Result<Self, TableError> {
        let mut table = Self::empty();
        ld::register(&mut table)?;
        ld16::register(&mut table)?;
        alu8::register(&mut table)?;
        alu16::register(&mut table)?;
        misc::register(&mut table)?;
        control::register(&mut table)?;
        prefix::register(&mut table)?;
        Ok(table)
    }

    /// A table with every slot empty. Dispatching anything through it
    /// fails with a `DecodeError`.
    pub(super) fn empty() -> Self {
        Self {
            primary: [None; 256],
            prefixed: [None; 256],
        }
    }

    /// Look up a primary opcode.
    #[inline]
    pub fn primary(&self, opcode: u8) -> Option<&Instruction> {
        self.primary[opcode as usize].as_ref()
    }

    /// Look up an opcode on the 0xCB-prefixed page.
    #[inline]
    pub fn prefixed(&self, opcode: u8) -> Option<&Instruction> {
        self.prefixed[opcode as usize].as_ref()
    }

    pub(super) fn add(
        &mut self,
        opcode: u8,
        mnemonic: &'static str,
        operands: u8,
        exec: ExecFn,
    ) -> Result<(), TableError> {
        let slot = &mut self.primary[opcode as usize];
        if slot.is_some() {
            return Err(TableError::DuplicateOpcode {
                opcode,
                prefixed: false,
            });
        }
        *slot = Some(Instruction {
            mnemonic,
            operands,
            exec,
        });
        Ok(())
    }

    pub(super) fn add_prefixed(
        &mut self,
        opcode: u8,
        mnemonic: &'static str,
        exec: ExecFn,
    ) -> Result<(), TableError> {
        let slot = &mut self.prefixed[opcode as usize];
        if slot.is_some() {
            return Err(TableError::DuplicateOpcode {
                opcode,
                prefixed: true,
            });
        }
        // Prefixed instructions take no trailing operands; the selector
        // byte itself is consumed by the engine.
        *slot = Some(Instruction {
            mnemonic,
            operands: 0,
            exec,
        });
        Ok(())
    }
}

lazy_static! {
    static ref DEFAULT_TABLE: InstructionTable = InstructionTable::build()
        .expect("default instruction table registers an opcode twice");
}

/// The shared, immutable default table every `Cpu` dispatches through.
pub(super) fn default_table() -> &'static InstructionTable {
    &DEFAULT_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Primary opcodes with no instruction: the eleven hardware holes plus
    /// the 0xCB prefix byte, which the engine intercepts before lookup.
    const UNMAPPED: [u8; 12] = [
        0xCB, 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];

    #[test]
    fn primary_page_covers_everything_but_the_holes() {
        let table = InstructionTable::build().unwrap();
        for opcode in 0..=0xFFu8 {
            let entry = table.primary(opcode);
            if UNMAPPED.contains(&opcode) {
                assert!(entry.is_none(), "0x{opcode:02X} should be unmapped");
            } else {
                assert!(entry.is_some(), "0x{opcode:02X} should be mapped");
            }
        }
    }

    #[test]
    fn prefixed_page_is_fully_populated() {
        let table = InstructionTable::build().unwrap();
        for opcode in 0..=0xFFu8 {
            assert!(
                table.prefixed(opcode).is_some(),
                "0xCB 0x{opcode:02X} should be mapped"
            );
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut table = InstructionTable::empty();
        table.add(0x00, "NOP", 0, |_, _| {}).unwrap();
        assert_eq!(
            table.add(0x00, "NOP", 0, |_, _| {}),
            Err(TableError::DuplicateOpcode {
                opcode: 0x00,
                prefixed: false,
            })
        );

        table.add_prefixed(0x11, "RL C", |_, _| {}).unwrap();
        assert_eq!(
            table.add_prefixed(0x11, "RL C", |_, _| {}),
            Err(TableError::DuplicateOpcode {
                opcode: 0x11,
                prefixed: true,
            })
        );
    }

    #[test]
    fn operand_counts_match_the_encodings() {
        let table = InstructionTable::build().unwrap();

        // No operands: register-to-register transfers and returns.
        assert_eq!(table.primary(0x41).unwrap().operands, 0);
        assert_eq!(table.primary(0xC9).unwrap().operands, 0);
        // One operand: immediates, relative jumps, the STOP padding byte.
        assert_eq!(table.primary(0x06).unwrap().operands, 1);
        assert_eq!(table.primary(0x18).unwrap().operands, 1);
        assert_eq!(table.primary(0x10).unwrap().operands, 1);
        // Two operands: 16-bit immediates and absolute targets.
        assert_eq!(table.primary(0x01).unwrap().operands, 2);
        assert_eq!(table.primary(0xC3).unwrap().operands, 2);
        assert_eq!(table.primary(0xCD).unwrap().operands, 2);
        assert_eq!(table.primary(0xEA).unwrap().operands, 2);
    }
}
