//! The 0xCB-prefixed page: rotates, shifts, swap, and bit operations.
//!
//! Every encoding addresses the register ring (B,C,D,E,H,L,(HL),A) in its
//! low three bits; BIT/RES/SET carry the bit index in bits 5-3.

use crate::cpu::regs::Flag;

use super::{Cpu, InstructionTable, TableError};

pub(super) fn register(t: &mut InstructionTable) -> Result<(), TableError> {
    for opcode in 0x00..=0x07u8 {
        t.add_prefixed(opcode, "RLC r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let value = cpu.read_reg8(z);
            let result = cpu.alu_rlc(value);
            cpu.write_reg8(z, result);
        })?;
    }
    for opcode in 0x08..=0x0Fu8 {
        t.add_prefixed(opcode, "RRC r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let value = cpu.read_reg8(z);
            let result = cpu.alu_rrc(value);
            cpu.write_reg8(z, result);
        })?;
    }
    for opcode in 0x10..=0x17u8 {
        t.add_prefixed(opcode, "RL r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let value = cpu.read_reg8(z);
            let result = cpu.alu_rl(value);
            cpu.write_reg8(z, result);
        })?;
    }
    for opcode in 0x18..=0x1Fu8 {
        t.add_prefixed(opcode, "RR r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let value = cpu.read_reg8(z);
            let result = cpu.alu_rr(value);
            cpu.write_reg8(z, result);
        })?;
    }
    for opcode in 0x20..=0x27u8 {
        t.add_prefixed(opcode, "SLA r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let value = cpu.read_reg8(z);
            let result = cpu.alu_sla(value);
            cpu.write_reg8(z, result);
        })?;
    }
    for opcode in 0x28..=0x2Fu8 {
        t.add_prefixed(opcode, "SRA r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let value = cpu.read_reg8(z);
            let result = cpu.alu_sra(value);
            cpu.write_reg8(z, result);
        })?;
    }
    for opcode in 0x30..=0x37u8 {
        t.add_prefixed(opcode, "SWAP r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let value = cpu.read_reg8(z);
            let result = cpu.alu_swap(value);
            cpu.write_reg8(z, result);
        })?;
    }
    for opcode in 0x38..=0x3Fu8 {
        t.add_prefixed(opcode, "SRL r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let value = cpu.read_reg8(z);
            let result = cpu.alu_srl(value);
            cpu.write_reg8(z, result);
        })?;
    }

    // BIT b, r tests a bit without writing anything back. Carry is
    // preserved; HalfCarry is forced on.
    for opcode in 0x40..=0x7Fu8 {
        t.add_prefixed(opcode, "BIT b,r", |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            let bit = (opcode >> 3) & 0x07;
            cpu.regs.update_flag(Flag::Zero, value & (1 << bit) == 0);
            cpu.regs.reset_flag(Flag::Negative);
            cpu.regs.set_flag(Flag::HalfCarry);
        })?;
    }

    // RES b, r / SET b, r leave the flags untouched.
    for opcode in 0x80..=0xBFu8 {
        t.add_prefixed(opcode, "RES b,r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let bit = (opcode >> 3) & 0x07;
            let value = cpu.read_reg8(z) & !(1 << bit);
            cpu.write_reg8(z, value);
        })?;
    }
    for opcode in 0xC0..=0xFFu8 {
        t.add_prefixed(opcode, "SET b,r", |cpu: &mut Cpu, opcode| {
            let z = opcode & 0x07;
            let bit = (opcode >> 3) & 0x07;
            let value = cpu.read_reg8(z) | (1 << bit);
            cpu.write_reg8(z, value);
        })?;
    }

    Ok(())
}
