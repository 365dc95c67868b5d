//! Miscellaneous control and the unprefixed rotate group.

use crate::cpu::regs::Flag;

use super::{Cpu, InstructionTable, TableError};

pub(super) fn register(t: &mut InstructionTable) -> Result<(), TableError> {
    t.add(0x00, "NOP", 0, |_: &mut Cpu, _| {})?;

    // STOP is a two-byte encoding; the padding byte is fetched and
    // discarded so pc lands where hardware leaves it.
    t.add(0x10, "STOP", 1, |cpu: &mut Cpu, _| {
        let _padding = cpu.read_next_byte();
        cpu.stopped = true;
    })?;

    t.add(0x76, "HALT", 0, |cpu: &mut Cpu, _| {
        cpu.halted = true;
    })?;

    t.add(0x27, "DAA", 0, |cpu: &mut Cpu, _| {
        cpu.alu_daa();
    })?;
    t.add(0x2F, "CPL", 0, |cpu: &mut Cpu, _| {
        cpu.alu_cpl();
    })?;

    t.add(0x37, "SCF", 0, |cpu: &mut Cpu, _| {
        cpu.regs.set_flag(Flag::Carry);
        cpu.regs.reset_flag(Flag::Negative);
        cpu.regs.reset_flag(Flag::HalfCarry);
    })?;
    t.add(0x3F, "CCF", 0, |cpu: &mut Cpu, _| {
        let carry = cpu.regs.is_flag_set(Flag::Carry);
        cpu.regs.update_flag(Flag::Carry, !carry);
        cpu.regs.reset_flag(Flag::Negative);
        cpu.regs.reset_flag(Flag::HalfCarry);
    })?;

    // Interrupt master enable latch; delivery is out of scope.
    t.add(0xF3, "DI", 0, |cpu: &mut Cpu, _| {
        cpu.ime = false;
    })?;
    t.add(0xFB, "EI", 0, |cpu: &mut Cpu, _| {
        cpu.ime = true;
    })?;

    // Unprefixed rotates of A. Unlike their 0xCB counterparts these force
    // Zero clear regardless of the result.
    t.add(0x07, "RLCA", 0, |cpu: &mut Cpu, _| {
        let result = cpu.alu_rlc(cpu.regs.a);
        cpu.regs.a = result;
        cpu.regs.reset_flag(Flag::Zero);
    })?;
    t.add(0x0F, "RRCA", 0, |cpu: &mut Cpu, _| {
        let result = cpu.alu_rrc(cpu.regs.a);
        cpu.regs.a = result;
        cpu.regs.reset_flag(Flag::Zero);
    })?;
    t.add(0x17, "RLA", 0, |cpu: &mut Cpu, _| {
        let result = cpu.alu_rl(cpu.regs.a);
        cpu.regs.a = result;
        cpu.regs.reset_flag(Flag::Zero);
    })?;
    t.add(0x1F, "RRA", 0, |cpu: &mut Cpu, _| {
        let result = cpu.alu_rr(cpu.regs.a);
        cpu.regs.a = result;
        cpu.regs.reset_flag(Flag::Zero);
    })?;

    Ok(())
}
