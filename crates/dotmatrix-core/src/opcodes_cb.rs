//! The CB-prefixed opcode dispatch table.
//!
//! Every prefixed instruction is two bytes long and never branches, so the
//! entries carry only a mnemonic, a cycle cost, and an exec fn. Register
//! operands cost 8 cycles; (HL) operands cost 16, except BIT which only
//! reads and costs 12.

use crate::address_space::AddressSpace;
use crate::cpu::Cpu;

type ExecFn = fn(&mut Cpu, &mut AddressSpace);

pub struct CbOp {
    pub mnemonic: &'static str,
    pub cycles: u8,
    pub exec: ExecFn,
}

const fn cb(mnemonic: &'static str, cycles: u8, exec: ExecFn) -> CbOp {
    CbOp {
        mnemonic,
        cycles,
        exec,
    }
}

pub static CB_OPCODES: [CbOp; 256] = [
    // 0x00
    cb("RLC B", 8, |cpu, _| { cpu.b = cpu.cb_rlc(cpu.b); }),
    cb("RLC C", 8, |cpu, _| { cpu.c = cpu.cb_rlc(cpu.c); }),
    cb("RLC D", 8, |cpu, _| { cpu.d = cpu.cb_rlc(cpu.d); }),
    cb("RLC E", 8, |cpu, _| { cpu.e = cpu.cb_rlc(cpu.e); }),
    cb("RLC H", 8, |cpu, _| { cpu.h = cpu.cb_rlc(cpu.h); }),
    cb("RLC L", 8, |cpu, _| { cpu.l = cpu.cb_rlc(cpu.l); }),
    cb("RLC (HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        let r = cpu.cb_rlc(v);
        bus.write(a, r);
    }),
    cb("RLC A", 8, |cpu, _| { cpu.a = cpu.cb_rlc(cpu.a); }),
    cb("RRC B", 8, |cpu, _| { cpu.b = cpu.cb_rrc(cpu.b); }),
    cb("RRC C", 8, |cpu, _| { cpu.c = cpu.cb_rrc(cpu.c); }),
    cb("RRC D", 8, |cpu, _| { cpu.d = cpu.cb_rrc(cpu.d); }),
    cb("RRC E", 8, |cpu, _| { cpu.e = cpu.cb_rrc(cpu.e); }),
    cb("RRC H", 8, |cpu, _| { cpu.h = cpu.cb_rrc(cpu.h); }),
    cb("RRC L", 8, |cpu, _| { cpu.l = cpu.cb_rrc(cpu.l); }),
    cb("RRC (HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        let r = cpu.cb_rrc(v);
        bus.write(a, r);
    }),
    cb("RRC A", 8, |cpu, _| { cpu.a = cpu.cb_rrc(cpu.a); }),
    // 0x10
    cb("RL B", 8, |cpu, _| { cpu.b = cpu.cb_rl(cpu.b); }),
    cb("RL C", 8, |cpu, _| { cpu.c = cpu.cb_rl(cpu.c); }),
    cb("RL D", 8, |cpu, _| { cpu.d = cpu.cb_rl(cpu.d); }),
    cb("RL E", 8, |cpu, _| { cpu.e = cpu.cb_rl(cpu.e); }),
    cb("RL H", 8, |cpu, _| { cpu.h = cpu.cb_rl(cpu.h); }),
    cb("RL L", 8, |cpu, _| { cpu.l = cpu.cb_rl(cpu.l); }),
    cb("RL (HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        let r = cpu.cb_rl(v);
        bus.write(a, r);
    }),
    cb("RL A", 8, |cpu, _| { cpu.a = cpu.cb_rl(cpu.a); }),
    cb("RR B", 8, |cpu, _| { cpu.b = cpu.cb_rr(cpu.b); }),
    cb("RR C", 8, |cpu, _| { cpu.c = cpu.cb_rr(cpu.c); }),
    cb("RR D", 8, |cpu, _| { cpu.d = cpu.cb_rr(cpu.d); }),
    cb("RR E", 8, |cpu, _| { cpu.e = cpu.cb_rr(cpu.e); }),
    cb("RR H", 8, |cpu, _| { cpu.h = cpu.cb_rr(cpu.h); }),
    cb("RR L", 8, |cpu, _| { cpu.l = cpu.cb_rr(cpu.l); }),
    cb("RR (HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        let r = cpu.cb_rr(v);
        bus.write(a, r);
    }),
    cb("RR A", 8, |cpu, _| { cpu.a = cpu.cb_rr(cpu.a); }),
    // 0x20
    cb("SLA B", 8, |cpu, _| { cpu.b = cpu.cb_sla(cpu.b); }),
    cb("SLA C", 8, |cpu, _| { cpu.c = cpu.cb_sla(cpu.c); }),
    cb("SLA D", 8, |cpu, _| { cpu.d = cpu.cb_sla(cpu.d); }),
    cb("SLA E", 8, |cpu, _| { cpu.e = cpu.cb_sla(cpu.e); }),
    cb("SLA H", 8, |cpu, _| { cpu.h = cpu.cb_sla(cpu.h); }),
    cb("SLA L", 8, |cpu, _| { cpu.l = cpu.cb_sla(cpu.l); }),
    cb("SLA (HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        let r = cpu.cb_sla(v);
        bus.write(a, r);
    }),
    cb("SLA A", 8, |cpu, _| { cpu.a = cpu.cb_sla(cpu.a); }),
    cb("SRA B", 8, |cpu, _| { cpu.b = cpu.cb_sra(cpu.b); }),
    cb("SRA C", 8, |cpu, _| { cpu.c = cpu.cb_sra(cpu.c); }),
    cb("SRA D", 8, |cpu, _| { cpu.d = cpu.cb_sra(cpu.d); }),
    cb("SRA E", 8, |cpu, _| { cpu.e = cpu.cb_sra(cpu.e); }),
    cb("SRA H", 8, |cpu, _| { cpu.h = cpu.cb_sra(cpu.h); }),
    cb("SRA L", 8, |cpu, _| { cpu.l = cpu.cb_sra(cpu.l); }),
    cb("SRA (HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        let r = cpu.cb_sra(v);
        bus.write(a, r);
    }),
    cb("SRA A", 8, |cpu, _| { cpu.a = cpu.cb_sra(cpu.a); }),
    // 0x30
    cb("SWAP B", 8, |cpu, _| { cpu.b = cpu.cb_swap(cpu.b); }),
    cb("SWAP C", 8, |cpu, _| { cpu.c = cpu.cb_swap(cpu.c); }),
    cb("SWAP D", 8, |cpu, _| { cpu.d = cpu.cb_swap(cpu.d); }),
    cb("SWAP E", 8, |cpu, _| { cpu.e = cpu.cb_swap(cpu.e); }),
    cb("SWAP H", 8, |cpu, _| { cpu.h = cpu.cb_swap(cpu.h); }),
    cb("SWAP L", 8, |cpu, _| { cpu.l = cpu.cb_swap(cpu.l); }),
    cb("SWAP (HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        let r = cpu.cb_swap(v);
        bus.write(a, r);
    }),
    cb("SWAP A", 8, |cpu, _| { cpu.a = cpu.cb_swap(cpu.a); }),
    cb("SRL B", 8, |cpu, _| { cpu.b = cpu.cb_srl(cpu.b); }),
    cb("SRL C", 8, |cpu, _| { cpu.c = cpu.cb_srl(cpu.c); }),
    cb("SRL D", 8, |cpu, _| { cpu.d = cpu.cb_srl(cpu.d); }),
    cb("SRL E", 8, |cpu, _| { cpu.e = cpu.cb_srl(cpu.e); }),
    cb("SRL H", 8, |cpu, _| { cpu.h = cpu.cb_srl(cpu.h); }),
    cb("SRL L", 8, |cpu, _| { cpu.l = cpu.cb_srl(cpu.l); }),
    cb("SRL (HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        let r = cpu.cb_srl(v);
        bus.write(a, r);
    }),
    cb("SRL A", 8, |cpu, _| { cpu.a = cpu.cb_srl(cpu.a); }),
    // 0x40
    cb("BIT 0,B", 8, |cpu, _| { cpu.cb_bit(0, cpu.b); }),
    cb("BIT 0,C", 8, |cpu, _| { cpu.cb_bit(0, cpu.c); }),
    cb("BIT 0,D", 8, |cpu, _| { cpu.cb_bit(0, cpu.d); }),
    cb("BIT 0,E", 8, |cpu, _| { cpu.cb_bit(0, cpu.e); }),
    cb("BIT 0,H", 8, |cpu, _| { cpu.cb_bit(0, cpu.h); }),
    cb("BIT 0,L", 8, |cpu, _| { cpu.cb_bit(0, cpu.l); }),
    cb("BIT 0,(HL)", 12, |cpu, bus| {
        let v = bus.read(cpu.hl());
        cpu.cb_bit(0, v);
    }),
    cb("BIT 0,A", 8, |cpu, _| { cpu.cb_bit(0, cpu.a); }),
    cb("BIT 1,B", 8, |cpu, _| { cpu.cb_bit(1, cpu.b); }),
    cb("BIT 1,C", 8, |cpu, _| { cpu.cb_bit(1, cpu.c); }),
    cb("BIT 1,D", 8, |cpu, _| { cpu.cb_bit(1, cpu.d); }),
    cb("BIT 1,E", 8, |cpu, _| { cpu.cb_bit(1, cpu.e); }),
    cb("BIT 1,H", 8, |cpu, _| { cpu.cb_bit(1, cpu.h); }),
    cb("BIT 1,L", 8, |cpu, _| { cpu.cb_bit(1, cpu.l); }),
    cb("BIT 1,(HL)", 12, |cpu, bus| {
        let v = bus.read(cpu.hl());
        cpu.cb_bit(1, v);
    }),
    cb("BIT 1,A", 8, |cpu, _| { cpu.cb_bit(1, cpu.a); }),
    // 0x50
    cb("BIT 2,B", 8, |cpu, _| { cpu.cb_bit(2, cpu.b); }),
    cb("BIT 2,C", 8, |cpu, _| { cpu.cb_bit(2, cpu.c); }),
    cb("BIT 2,D", 8, |cpu, _| { cpu.cb_bit(2, cpu.d); }),
    cb("BIT 2,E", 8, |cpu, _| { cpu.cb_bit(2, cpu.e); }),
    cb("BIT 2,H", 8, |cpu, _| { cpu.cb_bit(2, cpu.h); }),
    cb("BIT 2,L", 8, |cpu, _| { cpu.cb_bit(2, cpu.l); }),
    cb("BIT 2,(HL)", 12, |cpu, bus| {
        let v = bus.read(cpu.hl());
        cpu.cb_bit(2, v);
    }),
    cb("BIT 2,A", 8, |cpu, _| { cpu.cb_bit(2, cpu.a); }),
    cb("BIT 3,B", 8, |cpu, _| { cpu.cb_bit(3, cpu.b); }),
    cb("BIT 3,C", 8, |cpu, _| { cpu.cb_bit(3, cpu.c); }),
    cb("BIT 3,D", 8, |cpu, _| { cpu.cb_bit(3, cpu.d); }),
    cb("BIT 3,E", 8, |cpu, _| { cpu.cb_bit(3, cpu.e); }),
    cb("BIT 3,H", 8, |cpu, _| { cpu.cb_bit(3, cpu.h); }),
    cb("BIT 3,L", 8, |cpu, _| { cpu.cb_bit(3, cpu.l); }),
    cb("BIT 3,(HL)", 12, |cpu, bus| {
        let v = bus.read(cpu.hl());
        cpu.cb_bit(3, v);
    }),
    cb("BIT 3,A", 8, |cpu, _| { cpu.cb_bit(3, cpu.a); }),
    // 0x60
    cb("BIT 4,B", 8, |cpu, _| { cpu.cb_bit(4, cpu.b); }),
    cb("BIT 4,C", 8, |cpu, _| { cpu.cb_bit(4, cpu.c); }),
    cb("BIT 4,D", 8, |cpu, _| { cpu.cb_bit(4, cpu.d); }),
    cb("BIT 4,E", 8, |cpu, _| { cpu.cb_bit(4, cpu.e); }),
    cb("BIT 4,H", 8, |cpu, _| { cpu.cb_bit(4, cpu.h); }),
    cb("BIT 4,L", 8, |cpu, _| { cpu.cb_bit(4, cpu.l); }),
    cb("BIT 4,(HL)", 12, |cpu, bus| {
        let v = bus.read(cpu.hl());
        cpu.cb_bit(4, v);
    }),
    cb("BIT 4,A", 8, |cpu, _| { cpu.cb_bit(4, cpu.a); }),
    cb("BIT 5,B", 8, |cpu, _| { cpu.cb_bit(5, cpu.b); }),
    cb("BIT 5,C", 8, |cpu, _| { cpu.cb_bit(5, cpu.c); }),
    cb("BIT 5,D", 8, |cpu, _| { cpu.cb_bit(5, cpu.d); }),
    cb("BIT 5,E", 8, |cpu, _| { cpu.cb_bit(5, cpu.e); }),
    cb("BIT 5,H", 8, |cpu, _| { cpu.cb_bit(5, cpu.h); }),
    cb("BIT 5,L", 8, |cpu, _| { cpu.cb_bit(5, cpu.l); }),
    cb("BIT 5,(HL)", 12, |cpu, bus| {
        let v = bus.read(cpu.hl());
        cpu.cb_bit(5, v);
    }),
    cb("BIT 5,A", 8, |cpu, _| { cpu.cb_bit(5, cpu.a); }),
    // 0x70
    cb("BIT 6,B", 8, |cpu, _| { cpu.cb_bit(6, cpu.b); }),
    cb("BIT 6,C", 8, |cpu, _| { cpu.cb_bit(6, cpu.c); }),
    cb("BIT 6,D", 8, |cpu, _| { cpu.cb_bit(6, cpu.d); }),
    cb("BIT 6,E", 8, |cpu, _| { cpu.cb_bit(6, cpu.e); }),
    cb("BIT 6,H", 8, |cpu, _| { cpu.cb_bit(6, cpu.h); }),
    cb("BIT 6,L", 8, |cpu, _| { cpu.cb_bit(6, cpu.l); }),
    cb("BIT 6,(HL)", 12, |cpu, bus| {
        let v = bus.read(cpu.hl());
        cpu.cb_bit(6, v);
    }),
    cb("BIT 6,A", 8, |cpu, _| { cpu.cb_bit(6, cpu.a); }),
    cb("BIT 7,B", 8, |cpu, _| { cpu.cb_bit(7, cpu.b); }),
    cb("BIT 7,C", 8, |cpu, _| { cpu.cb_bit(7, cpu.c); }),
    cb("BIT 7,D", 8, |cpu, _| { cpu.cb_bit(7, cpu.d); }),
    cb("BIT 7,E", 8, |cpu, _| { cpu.cb_bit(7, cpu.e); }),
    cb("BIT 7,H", 8, |cpu, _| { cpu.cb_bit(7, cpu.h); }),
    cb("BIT 7,L", 8, |cpu, _| { cpu.cb_bit(7, cpu.l); }),
    cb("BIT 7,(HL)", 12, |cpu, bus| {
        let v = bus.read(cpu.hl());
        cpu.cb_bit(7, v);
    }),
    cb("BIT 7,A", 8, |cpu, _| { cpu.cb_bit(7, cpu.a); }),
    // 0x80
    cb("RES 0,B", 8, |cpu, _| { cpu.b &= !(1 << 0); }),
    cb("RES 0,C", 8, |cpu, _| { cpu.c &= !(1 << 0); }),
    cb("RES 0,D", 8, |cpu, _| { cpu.d &= !(1 << 0); }),
    cb("RES 0,E", 8, |cpu, _| { cpu.e &= !(1 << 0); }),
    cb("RES 0,H", 8, |cpu, _| { cpu.h &= !(1 << 0); }),
    cb("RES 0,L", 8, |cpu, _| { cpu.l &= !(1 << 0); }),
    cb("RES 0,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v & !(1 << 0));
    }),
    cb("RES 0,A", 8, |cpu, _| { cpu.a &= !(1 << 0); }),
    cb("RES 1,B", 8, |cpu, _| { cpu.b &= !(1 << 1); }),
    cb("RES 1,C", 8, |cpu, _| { cpu.c &= !(1 << 1); }),
    cb("RES 1,D", 8, |cpu, _| { cpu.d &= !(1 << 1); }),
    cb("RES 1,E", 8, |cpu, _| { cpu.e &= !(1 << 1); }),
    cb("RES 1,H", 8, |cpu, _| { cpu.h &= !(1 << 1); }),
    cb("RES 1,L", 8, |cpu, _| { cpu.l &= !(1 << 1); }),
    cb("RES 1,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v & !(1 << 1));
    }),
    cb("RES 1,A", 8, |cpu, _| { cpu.a &= !(1 << 1); }),
    // 0x90
    cb("RES 2,B", 8, |cpu, _| { cpu.b &= !(1 << 2); }),
    cb("RES 2,C", 8, |cpu, _| { cpu.c &= !(1 << 2); }),
    cb("RES 2,D", 8, |cpu, _| { cpu.d &= !(1 << 2); }),
    cb("RES 2,E", 8, |cpu, _| { cpu.e &= !(1 << 2); }),
    cb("RES 2,H", 8, |cpu, _| { cpu.h &= !(1 << 2); }),
    cb("RES 2,L", 8, |cpu, _| { cpu.l &= !(1 << 2); }),
    cb("RES 2,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v & !(1 << 2));
    }),
    cb("RES 2,A", 8, |cpu, _| { cpu.a &= !(1 << 2); }),
    cb("RES 3,B", 8, |cpu, _| { cpu.b &= !(1 << 3); }),
    cb("RES 3,C", 8, |cpu, _| { cpu.c &= !(1 << 3); }),
    cb("RES 3,D", 8, |cpu, _| { cpu.d &= !(1 << 3); }),
    cb("RES 3,E", 8, |cpu, _| { cpu.e &= !(1 << 3); }),
    cb("RES 3,H", 8, |cpu, _| { cpu.h &= !(1 << 3); }),
    cb("RES 3,L", 8, |cpu, _| { cpu.l &= !(1 << 3); }),
    cb("RES 3,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v & !(1 << 3));
    }),
    cb("RES 3,A", 8, |cpu, _| { cpu.a &= !(1 << 3); }),
    // 0xA0
    cb("RES 4,B", 8, |cpu, _| { cpu.b &= !(1 << 4); }),
    cb("RES 4,C", 8, |cpu, _| { cpu.c &= !(1 << 4); }),
    cb("RES 4,D", 8, |cpu, _| { cpu.d &= !(1 << 4); }),
    cb("RES 4,E", 8, |cpu, _| { cpu.e &= !(1 << 4); }),
    cb("RES 4,H", 8, |cpu, _| { cpu.h &= !(1 << 4); }),
    cb("RES 4,L", 8, |cpu, _| { cpu.l &= !(1 << 4); }),
    cb("RES 4,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v & !(1 << 4));
    }),
    cb("RES 4,A", 8, |cpu, _| { cpu.a &= !(1 << 4); }),
    cb("RES 5,B", 8, |cpu, _| { cpu.b &= !(1 << 5); }),
    cb("RES 5,C", 8, |cpu, _| { cpu.c &= !(1 << 5); }),
    cb("RES 5,D", 8, |cpu, _| { cpu.d &= !(1 << 5); }),
    cb("RES 5,E", 8, |cpu, _| { cpu.e &= !(1 << 5); }),
    cb("RES 5,H", 8, |cpu, _| { cpu.h &= !(1 << 5); }),
    cb("RES 5,L", 8, |cpu, _| { cpu.l &= !(1 << 5); }),
    cb("RES 5,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v & !(1 << 5));
    }),
    cb("RES 5,A", 8, |cpu, _| { cpu.a &= !(1 << 5); }),
    // 0xB0
    cb("RES 6,B", 8, |cpu, _| { cpu.b &= !(1 << 6); }),
    cb("RES 6,C", 8, |cpu, _| { cpu.c &= !(1 << 6); }),
    cb("RES 6,D", 8, |cpu, _| { cpu.d &= !(1 << 6); }),
    cb("RES 6,E", 8, |cpu, _| { cpu.e &= !(1 << 6); }),
    cb("RES 6,H", 8, |cpu, _| { cpu.h &= !(1 << 6); }),
    cb("RES 6,L", 8, |cpu, _| { cpu.l &= !(1 << 6); }),
    cb("RES 6,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v & !(1 << 6));
    }),
    cb("RES 6,A", 8, |cpu, _| { cpu.a &= !(1 << 6); }),
    cb("RES 7,B", 8, |cpu, _| { cpu.b &= !(1 << 7); }),
    cb("RES 7,C", 8, |cpu, _| { cpu.c &= !(1 << 7); }),
    cb("RES 7,D", 8, |cpu, _| { cpu.d &= !(1 << 7); }),
    cb("RES 7,E", 8, |cpu, _| { cpu.e &= !(1 << 7); }),
    cb("RES 7,H", 8, |cpu, _| { cpu.h &= !(1 << 7); }),
    cb("RES 7,L", 8, |cpu, _| { cpu.l &= !(1 << 7); }),
    cb("RES 7,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v & !(1 << 7));
    }),
    cb("RES 7,A", 8, |cpu, _| { cpu.a &= !(1 << 7); }),
    // 0xC0
    cb("SET 0,B", 8, |cpu, _| { cpu.b |= 1 << 0; }),
    cb("SET 0,C", 8, |cpu, _| { cpu.c |= 1 << 0; }),
    cb("SET 0,D", 8, |cpu, _| { cpu.d |= 1 << 0; }),
    cb("SET 0,E", 8, |cpu, _| { cpu.e |= 1 << 0; }),
    cb("SET 0,H", 8, |cpu, _| { cpu.h |= 1 << 0; }),
    cb("SET 0,L", 8, |cpu, _| { cpu.l |= 1 << 0; }),
    cb("SET 0,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v | (1 << 0));
    }),
    cb("SET 0,A", 8, |cpu, _| { cpu.a |= 1 << 0; }),
    cb("SET 1,B", 8, |cpu, _| { cpu.b |= 1 << 1; }),
    cb("SET 1,C", 8, |cpu, _| { cpu.c |= 1 << 1; }),
    cb("SET 1,D", 8, |cpu, _| { cpu.d |= 1 << 1; }),
    cb("SET 1,E", 8, |cpu, _| { cpu.e |= 1 << 1; }),
    cb("SET 1,H", 8, |cpu, _| { cpu.h |= 1 << 1; }),
    cb("SET 1,L", 8, |cpu, _| { cpu.l |= 1 << 1; }),
    cb("SET 1,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v | (1 << 1));
    }),
    cb("SET 1,A", 8, |cpu, _| { cpu.a |= 1 << 1; }),
    // 0xD0
    cb("SET 2,B", 8, |cpu, _| { cpu.b |= 1 << 2; }),
    cb("SET 2,C", 8, |cpu, _| { cpu.c |= 1 << 2; }),
    cb("SET 2,D", 8, |cpu, _| { cpu.d |= 1 << 2; }),
    cb("SET 2,E", 8, |cpu, _| { cpu.e |= 1 << 2; }),
    cb("SET 2,H", 8, |cpu, _| { cpu.h |= 1 << 2; }),
    cb("SET 2,L", 8, |cpu, _| { cpu.l |= 1 << 2; }),
    cb("SET 2,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v | (1 << 2));
    }),
    cb("SET 2,A", 8, |cpu, _| { cpu.a |= 1 << 2; }),
    cb("SET 3,B", 8, |cpu, _| { cpu.b |= 1 << 3; }),
    cb("SET 3,C", 8, |cpu, _| { cpu.c |= 1 << 3; }),
    cb("SET 3,D", 8, |cpu, _| { cpu.d |= 1 << 3; }),
    cb("SET 3,E", 8, |cpu, _| { cpu.e |= 1 << 3; }),
    cb("SET 3,H", 8, |cpu, _| { cpu.h |= 1 << 3; }),
    cb("SET 3,L", 8, |cpu, _| { cpu.l |= 1 << 3; }),
    cb("SET 3,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v | (1 << 3));
    }),
    cb("SET 3,A", 8, |cpu, _| { cpu.a |= 1 << 3; }),
    // 0xE0
    cb("SET 4,B", 8, |cpu, _| { cpu.b |= 1 << 4; }),
    cb("SET 4,C", 8, |cpu, _| { cpu.c |= 1 << 4; }),
    cb("SET 4,D", 8, |cpu, _| { cpu.d |= 1 << 4; }),
    cb("SET 4,E", 8, |cpu, _| { cpu.e |= 1 << 4; }),
    cb("SET 4,H", 8, |cpu, _| { cpu.h |= 1 << 4; }),
    cb("SET 4,L", 8, |cpu, _| { cpu.l |= 1 << 4; }),
    cb("SET 4,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v | (1 << 4));
    }),
    cb("SET 4,A", 8, |cpu, _| { cpu.a |= 1 << 4; }),
    cb("SET 5,B", 8, |cpu, _| { cpu.b |= 1 << 5; }),
    cb("SET 5,C", 8, |cpu, _| { cpu.c |= 1 << 5; }),
    cb("SET 5,D", 8, |cpu, _| { cpu.d |= 1 << 5; }),
    cb("SET 5,E", 8, |cpu, _| { cpu.e |= 1 << 5; }),
    cb("SET 5,H", 8, |cpu, _| { cpu.h |= 1 << 5; }),
    cb("SET 5,L", 8, |cpu, _| { cpu.l |= 1 << 5; }),
    cb("SET 5,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v | (1 << 5));
    }),
    cb("SET 5,A", 8, |cpu, _| { cpu.a |= 1 << 5; }),
    // 0xF0
    cb("SET 6,B", 8, |cpu, _| { cpu.b |= 1 << 6; }),
    cb("SET 6,C", 8, |cpu, _| { cpu.c |= 1 << 6; }),
    cb("SET 6,D", 8, |cpu, _| { cpu.d |= 1 << 6; }),
    cb("SET 6,E", 8, |cpu, _| { cpu.e |= 1 << 6; }),
    cb("SET 6,H", 8, |cpu, _| { cpu.h |= 1 << 6; }),
    cb("SET 6,L", 8, |cpu, _| { cpu.l |= 1 << 6; }),
    cb("SET 6,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v | (1 << 6));
    }),
    cb("SET 6,A", 8, |cpu, _| { cpu.a |= 1 << 6; }),
    cb("SET 7,B", 8, |cpu, _| { cpu.b |= 1 << 7; }),
    cb("SET 7,C", 8, |cpu, _| { cpu.c |= 1 << 7; }),
    cb("SET 7,D", 8, |cpu, _| { cpu.d |= 1 << 7; }),
    cb("SET 7,E", 8, |cpu, _| { cpu.e |= 1 << 7; }),
    cb("SET 7,H", 8, |cpu, _| { cpu.h |= 1 << 7; }),
    cb("SET 7,L", 8, |cpu, _| { cpu.l |= 1 << 7; }),
    cb("SET 7,(HL)", 16, |cpu, bus| {
        let a = cpu.hl();
        let v = bus.read(a);
        bus.write(a, v | (1 << 7));
    }),
    cb("SET 7,A", 8, |cpu, _| { cpu.a |= 1 << 7; }),
];
