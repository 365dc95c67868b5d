//! 16-bit arithmetic.

use super::{Cpu, InstructionTable, TableError};

pub(super) fn register(t: &mut InstructionTable) -> Result<(), TableError> {
    // INC rr / DEC rr wrap silently and touch no flags.
    for &opcode in &[0x03, 0x13, 0x23, 0x33] {
        t.add(opcode, "INC rr", 0, |cpu: &mut Cpu, opcode| {
            let rp = (opcode >> 4) & 0x03;
            let value = cpu.read_reg16(rp).wrapping_add(1);
            cpu.write_reg16(rp, value);
        })?;
    }
    for &opcode in &[0x0B, 0x1B, 0x2B, 0x3B] {
        t.add(opcode, "DEC rr", 0, |cpu: &mut Cpu, opcode| {
            let rp = (opcode >> 4) & 0x03;
            let value = cpu.read_reg16(rp).wrapping_sub(1);
            cpu.write_reg16(rp, value);
        })?;
    }

    // ADD HL, rr.
    for &opcode in &[0x09, 0x19, 0x29, 0x39] {
        t.add(opcode, "ADD HL,rr", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg16((opcode >> 4) & 0x03);
            cpu.alu_add16_hl(value);
        })?;
    }

    // ADD SP, r8: signed displacement into SP.
    t.add(0xE8, "ADD SP,r8", 1, |cpu: &mut Cpu, _| {
        let imm = cpu.read_next_byte();
        cpu.regs.sp = cpu.alu_add16_signed(cpu.regs.sp, imm);
    })?;

    Ok(())
}
