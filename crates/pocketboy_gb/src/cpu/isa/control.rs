//! Jumps, calls, restarts, and returns.
//!
//! Conditional forms always consume their operand bytes; only the taken
//! branch overwrites `pc`. The condition index sits in bits 4-3 of the
//! opcode for every conditional encoding (NZ, Z, NC, C).

use crate::cpu::regs::Flag;

use super::{Cpu, InstructionTable, TableError};

impl Cpu {
    /// Evaluate the condition field shared by JR/JP/CALL/RET cc.
    fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.regs.is_flag_set(Flag::Zero),
            1 => self.regs.is_flag_set(Flag::Zero),
            2 => !self.regs.is_flag_set(Flag::Carry),
            _ => self.regs.is_flag_set(Flag::Carry),
        }
    }

    /// Relative jump. The displacement byte is a two's-complement offset
    /// from the address following it.
    fn jump_relative(&mut self, taken: bool) {
        let offset = self.read_next_byte() as i8;
        if taken {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        }
    }

    /// Absolute jump.
    fn jump_absolute(&mut self, taken: bool) {
        let target = self.read_next_short();
        if taken {
            self.regs.pc = target;
        }
    }

    /// Call: push the address after the operand, then redirect.
    fn call(&mut self, taken: bool) {
        let target = self.read_next_short();
        if taken {
            self.push(self.regs.pc);
            self.regs.pc = target;
        }
    }

    fn ret(&mut self) {
        self.regs.pc = self.pop();
    }
}

pub(super) fn register(t: &mut InstructionTable) -> Result<(), TableError> {
    // Relative jumps.
    t.add(0x18, "JR r8", 1, |cpu: &mut Cpu, _| {
        cpu.jump_relative(true);
    })?;
    for &opcode in &[0x20, 0x28, 0x30, 0x38] {
        t.add(opcode, "JR cc,r8", 1, |cpu: &mut Cpu, opcode| {
            let taken = cpu.condition(opcode);
            cpu.jump_relative(taken);
        })?;
    }

    // Absolute jumps.
    t.add(0xC3, "JP a16", 2, |cpu: &mut Cpu, _| {
        cpu.jump_absolute(true);
    })?;
    for &opcode in &[0xC2, 0xCA, 0xD2, 0xDA] {
        t.add(opcode, "JP cc,a16", 2, |cpu: &mut Cpu, opcode| {
            let taken = cpu.condition(opcode);
            cpu.jump_absolute(taken);
        })?;
    }
    t.add(0xE9, "JP (HL)", 0, |cpu: &mut Cpu, _| {
        cpu.regs.pc = cpu.regs.hl();
    })?;

    // Calls.
    t.add(0xCD, "CALL a16", 2, |cpu: &mut Cpu, _| {
        cpu.call(true);
    })?;
    for &opcode in &[0xC4, 0xCC, 0xD4, 0xDC] {
        t.add(opcode, "CALL cc,a16", 2, |cpu: &mut Cpu, opcode| {
            let taken = cpu.condition(opcode);
            cpu.call(taken);
        })?;
    }

    // Restarts: calls with a vector hard-coded in the opcode.
    for &opcode in &[0xC7, 0xCF, 0xD7, 0xDF, 0xE7, 0xEF, 0xF7, 0xFF] {
        t.add(opcode, "RST n", 0, |cpu: &mut Cpu, opcode| {
            cpu.push(cpu.regs.pc);
            cpu.regs.pc = (opcode & 0x38) as u16;
        })?;
    }

    // Returns.
    t.add(0xC9, "RET", 0, |cpu: &mut Cpu, _| {
        cpu.ret();
    })?;
    for &opcode in &[0xC0, 0xC8, 0xD0, 0xD8] {
        t.add(opcode, "RET cc", 0, |cpu: &mut Cpu, opcode| {
            if cpu.condition(opcode) {
                cpu.ret();
            }
        })?;
    }
    // RETI re-arms the interrupt latch on the way out; delivery itself is
    // the interrupt controller's job.
    t.add(0xD9, "RETI", 0, |cpu: &mut Cpu, _| {
        cpu.ret();
        cpu.ime = true;
    })?;

    Ok(())
}
