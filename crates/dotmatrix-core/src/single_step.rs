//! Single-instruction conformance seam.
//!
//! An external harness seeds a register/memory snapshot, we execute exactly
//! one instruction against a flat 64KB scratch space, and hand back the
//! resulting snapshot in the same shape for comparison against an expected
//! fixture. The snapshot types derive serde so JSON fixtures deserialize
//! straight into them.

use serde::{Deserialize, Serialize};

use crate::address_space::AddressSpace;
use crate::cpu::Cpu;

/// A register/memory snapshot. `ram` holds arbitrary (address, byte) pairs;
/// the returned snapshot re-reads the same addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepState {
    pub pc: u16,
    pub sp: u16,
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub ram: Vec<(u16, u8)>,
}

/// Seed a machine from `initial`, execute one instruction, and return the
/// resulting state.
pub fn execute_step(initial: &StepState) -> StepState {
    let mut bus = AddressSpace::flat();
    for &(addr, byte) in &initial.ram {
        bus.write(addr, byte);
    }

    let mut cpu = Cpu::new();
    cpu.pc = initial.pc;
    cpu.sp = initial.sp;
    cpu.a = initial.a;
    cpu.f = initial.f;
    cpu.b = initial.b;
    cpu.c = initial.c;
    cpu.d = initial.d;
    cpu.e = initial.e;
    cpu.h = initial.h;
    cpu.l = initial.l;

    cpu.step(&mut bus);

    StepState {
        pc: cpu.pc,
        sp: cpu.sp,
        a: cpu.a,
        f: cpu.f,
        b: cpu.b,
        c: cpu.c,
        d: cpu.d,
        e: cpu.e,
        h: cpu.h,
        l: cpu.l,
        ram: initial
            .ram
            .iter()
            .map(|&(addr, _)| (addr, bus.read(addr)))
            .collect(),
    }
}
