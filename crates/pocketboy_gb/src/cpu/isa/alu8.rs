//! 8-bit arithmetic and logic.

use super::{Cpu, InstructionTable, TableError};

pub(super) fn register(t: &mut InstructionTable) -> Result<(), TableError> {
    // The register-operand ring, 0x80-0xBF: eight operations over
    // B,C,D,E,H,L,(HL),A, selected by bits 5-3 of the opcode.
    for opcode in 0x80..=0x87u8 {
        t.add(opcode, "ADD A,r", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            cpu.alu_add(value, false);
        })?;
    }
    for opcode in 0x88..=0x8Fu8 {
        t.add(opcode, "ADC A,r", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            cpu.alu_add(value, true);
        })?;
    }
    for opcode in 0x90..=0x97u8 {
        t.add(opcode, "SUB A,r", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            cpu.alu_sub(value, false);
        })?;
    }
    for opcode in 0x98..=0x9Fu8 {
        t.add(opcode, "SBC A,r", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            cpu.alu_sub(value, true);
        })?;
    }
    for opcode in 0xA0..=0xA7u8 {
        t.add(opcode, "AND A,r", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            cpu.alu_and(value);
        })?;
    }
    for opcode in 0xA8..=0xAFu8 {
        t.add(opcode, "XOR A,r", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            cpu.alu_xor(value);
        })?;
    }
    for opcode in 0xB0..=0xB7u8 {
        t.add(opcode, "OR A,r", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            cpu.alu_or(value);
        })?;
    }
    for opcode in 0xB8..=0xBFu8 {
        t.add(opcode, "CP A,r", 0, |cpu: &mut Cpu, opcode| {
            let value = cpu.read_reg8(opcode & 0x07);
            cpu.alu_cp(value);
        })?;
    }

    // The immediate-operand column.
    t.add(0xC6, "ADD A,d8", 1, |cpu: &mut Cpu, _| {
        let value = cpu.read_next_byte();
        cpu.alu_add(value, false);
    })?;
    t.add(0xCE, "ADC A,d8", 1, |cpu: &mut Cpu, _| {
        let value = cpu.read_next_byte();
        cpu.alu_add(value, true);
    })?;
    t.add(0xD6, "SUB A,d8", 1, |cpu: &mut Cpu, _| {
        let value = cpu.read_next_byte();
        cpu.alu_sub(value, false);
    })?;
    t.add(0xDE, "SBC A,d8", 1, |cpu: &mut Cpu, _| {
        let value = cpu.read_next_byte();
        cpu.alu_sub(value, true);
    })?;
    t.add(0xE6, "AND A,d8", 1, |cpu: &mut Cpu, _| {
        let value = cpu.read_next_byte();
        cpu.alu_and(value);
    })?;
    t.add(0xEE, "XOR A,d8", 1, |cpu: &mut Cpu, _| {
        let value = cpu.read_next_byte();
        cpu.alu_xor(value);
    })?;
    t.add(0xF6, "OR A,d8", 1, |cpu: &mut Cpu, _| {
        let value = cpu.read_next_byte();
        cpu.alu_or(value);
    })?;
    t.add(0xFE, "CP A,d8", 1, |cpu: &mut Cpu, _| {
        let value = cpu.read_next_byte();
        cpu.alu_cp(value);
    })?;

    // INC r / DEC r, including the (HL) forms. The register index sits in
    // bits 5-3; Carry is untouched by both.
    for &opcode in &[0x04, 0x0C, 0x14, 0x1C, 0x24, 0x2C, 0x34, 0x3C] {
        t.add(opcode, "INC r", 0, |cpu: &mut Cpu, opcode| {
            let reg = (opcode >> 3) & 0x07;
            let value = cpu.read_reg8(reg);
            let result = cpu.alu_inc8(value);
            cpu.write_reg8(reg, result);
        })?;
    }
    for &opcode in &[0x05, 0x0D, 0x15, 0x1D, 0x25, 0x2D, 0x35, 0x3D] {
        t.add(opcode, "DEC r", 0, |cpu: &mut Cpu, opcode| {
            let reg = (opcode >> 3) & 0x07;
            let value = cpu.read_reg8(reg);
            let result = cpu.alu_dec8(value);
            cpu.write_reg8(reg, result);
        })?;
    }

    Ok(())
}
