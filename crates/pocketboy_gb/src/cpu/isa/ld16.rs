//! 16-bit loads and the register-pair stack operations.

use super::{Cpu, InstructionTable, TableError};

pub(super) fn register(t: &mut InstructionTable) -> Result<(), TableError> {
    // LD rr, d16: the pair index sits in bits 5-4 of the opcode.
    for &opcode in &[0x01, 0x11, 0x21, 0x31] {
        t.add(opcode, "LD rr,d16", 2, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_next_short();
            cpu.write_reg16((opcode >> 4) & 0x03, value);
        })?;
    }

    // LD (a16), SP stores SP little-endian at the absolute address.
    t.add(0x08, "LD (a16),SP", 2, |cpu: &mut Cpu, _| {
        let addr = cpu.read_next_short();
        cpu.mem.write_short(addr, cpu.regs.sp);
    })?;

    // PUSH rr / POP rr. AF replaces SP in the pair encoding here, and
    // popping into AF keeps the flag low nibble architecturally zero.
    t.add(0xC5, "PUSH BC", 0, |cpu: &mut Cpu, _| {
        cpu.push(cpu.regs.bc());
    })?;
    t.add(0xD5, "PUSH DE", 0, |cpu: &mut Cpu, _| {
        cpu.push(cpu.regs.de());
    })?;
    t.add(0xE5, "PUSH HL", 0, |cpu: &mut Cpu, _| {
        cpu.push(cpu.regs.hl());
    })?;
    t.add(0xF5, "PUSH AF", 0, |cpu: &mut Cpu, _| {
        cpu.push(cpu.regs.af());
    })?;
    t.add(0xC1, "POP BC", 0, |cpu: &mut Cpu, _| {
        let value = cpu.pop();
        cpu.regs.set_bc(value);
    })?;
    t.add(0xD1, "POP DE", 0, |cpu: &mut Cpu, _| {
        let value = cpu.pop();
        cpu.regs.set_de(value);
    })?;
    t.add(0xE1, "POP HL", 0, |cpu: &mut Cpu, _| {
        let value = cpu.pop();
        cpu.regs.set_hl(value);
    })?;
    t.add(0xF1, "POP AF", 0, |cpu: &mut Cpu, _| {
        let value = cpu.pop();
        cpu.regs.set_af(value);
    })?;

    // LD HL, SP+r8: signed displacement, flags from the low-byte add.
    t.add(0xF8, "LD HL,SP+r8", 1, |cpu: &mut Cpu, _| {
        let imm = cpu.read_next_byte();
        let result = cpu.alu_add16_signed(cpu.regs.sp, imm);
        cpu.regs.set_hl(result);
    })?;

    t.add(0xF9, "LD SP,HL", 0, |cpu: &mut Cpu, _| {
        cpu.regs.sp = cpu.regs.hl();
    })?;

    Ok(())
}
