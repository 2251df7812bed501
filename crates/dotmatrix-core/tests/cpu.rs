use dotmatrix_core::address_space::AddressSpace;
use dotmatrix_core::cpu::Cpu;
use dotmatrix_core::gameboy::GameBoy;

/// Build a CPU over flat scratch memory with a program at 0x0100.
fn machine(program: &[u8]) -> (Cpu, AddressSpace) {
    let mut bus = AddressSpace::flat();
    for (i, &byte) in program.iter().enumerate() {
        bus.write(0x0100 + i as u16, byte);
    }
    let mut cpu = Cpu::new();
    cpu.pc = 0x0100;
    cpu.sp = 0xFFFE;
    (cpu, bus)
}

#[test]
fn load_then_add_immediate() {
    // LD A,0x05 ; ADD A,0x03 leaves A=8 with all flags clear, the program
    // counter four bytes on, and exactly 16 cycles consumed.
    let mut gb = GameBoy::new_post_boot();
    for (i, &byte) in [0x3E, 0x05, 0xC6, 0x03].iter().enumerate() {
        gb.bus.write(0xC000 + i as u16, byte);
    }
    gb.cpu.pc = 0xC000;
    let start_cycles = gb.cpu.cycles;

    gb.step();
    gb.step();

    assert_eq!(gb.cpu.a, 0x08);
    assert_eq!(gb.cpu.f, 0x00);
    assert_eq!(gb.cpu.pc, 0xC004);
    assert_eq!(gb.cpu.cycles - start_cycles, 16);
}

#[test]
fn add_flags_match_closed_form() {
    // For every operand pair: half-carry iff the low nibbles overflow,
    // carry iff the full bytes overflow, zero iff the wrapped sum is zero.
    let mut bus = AddressSpace::flat();
    let mut cpu = Cpu::new();
    for a in 0..=255u16 {
        for b in 0..=255u16 {
            bus.write(0x0100, 0xC6);
            bus.write(0x0101, b as u8);
            cpu.pc = 0x0100;
            cpu.a = a as u8;
            cpu.f = 0;
            cpu.step(&mut bus);

            let sum = a + b;
            assert_eq!(cpu.a, sum as u8);
            assert_eq!(cpu.f & 0x80 != 0, sum as u8 == 0, "Z for {a}+{b}");
            assert_eq!(cpu.f & 0x40, 0, "N for {a}+{b}");
            assert_eq!(
                cpu.f & 0x20 != 0,
                (a & 0x0F) + (b & 0x0F) > 0x0F,
                "H for {a}+{b}"
            );
            assert_eq!(cpu.f & 0x10 != 0, sum > 0xFF, "C for {a}+{b}");
        }
    }
}

#[test]
fn subtract_flags_match_closed_form() {
    // Half-carry iff the low nibble borrows, carry iff the full byte
    // borrows, zero iff the operands are equal.
    let mut bus = AddressSpace::flat();
    let mut cpu = Cpu::new();
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            bus.write(0x0100, 0xD6);
            bus.write(0x0101, b);
            cpu.pc = 0x0100;
            cpu.a = a;
            cpu.f = 0;
            cpu.step(&mut bus);

            assert_eq!(cpu.a, a.wrapping_sub(b));
            assert_eq!(cpu.f & 0x80 != 0, a == b, "Z for {a}-{b}");
            assert_eq!(cpu.f & 0x40, 0x40, "N for {a}-{b}");
            assert_eq!(cpu.f & 0x20 != 0, (a & 0x0F) < (b & 0x0F), "H for {a}-{b}");
            assert_eq!(cpu.f & 0x10 != 0, a < b, "C for {a}-{b}");
        }
    }
}

#[test]
fn increment_flags_preserve_carry() {
    // INC touches Z/N/H but must leave the carry flag alone.
    let mut bus = AddressSpace::flat();
    let mut cpu = Cpu::new();
    for v in 0..=255u8 {
        bus.write(0x0100, 0x3C); // INC A
        cpu.pc = 0x0100;
        cpu.a = v;
        cpu.f = 0x10;
        cpu.step(&mut bus);

        assert_eq!(cpu.a, v.wrapping_add(1));
        assert_eq!(cpu.f & 0x80 != 0, v == 0xFF, "Z for {v}");
        assert_eq!(cpu.f & 0x40, 0, "N for {v}");
        assert_eq!(cpu.f & 0x20 != 0, v & 0x0F == 0x0F, "H for {v}");
        assert_eq!(cpu.f & 0x10, 0x10, "C preserved for {v}");
    }
}

#[test]
fn subtract_sets_borrow_flags() {
    let (mut cpu, mut bus) = machine(&[0xD6, 0x01]); // SUB 0x01
    cpu.a = 0x10;
    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x0F);
    // Borrow out of the low nibble, no full borrow, N set.
    assert_eq!(cpu.f, 0x60);
}

#[test]
fn conditional_jump_cycle_costs() {
    // JR NZ taken costs 12 cycles, not taken 8.
    let (mut cpu, mut bus) = machine(&[0x20, 0x05]);
    cpu.f = 0x00;
    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0107);
    assert_eq!(cpu.cycles, 12);

    let (mut cpu, mut bus) = machine(&[0x20, 0x05]);
    cpu.f = 0x80;
    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0102);
    assert_eq!(cpu.cycles, 8);
}

#[test]
fn call_and_return_roundtrip() {
    // CALL 0x0200 ; target holds RET.
    let (mut cpu, mut bus) = machine(&[0xCD, 0x00, 0x02]);
    bus.write(0x0200, 0xC9);
    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0200);
    assert_eq!(cpu.sp, 0xFFFC);
    // Return address stored low byte first.
    assert_eq!(bus.read(0xFFFC), 0x03);
    assert_eq!(bus.read(0xFFFD), 0x01);

    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0103);
    assert_eq!(cpu.sp, 0xFFFE);
    assert_eq!(cpu.cycles, 24 + 16);
}

#[test]
fn push_pop_preserve_pair() {
    // PUSH BC ; POP DE
    let (mut cpu, mut bus) = machine(&[0xC5, 0xD1]);
    cpu.set_bc(0xBEEF);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.de(), 0xBEEF);
    assert_eq!(cpu.sp, 0xFFFE);
}

#[test]
fn pop_af_clears_low_flag_bits() {
    let (mut cpu, mut bus) = machine(&[0xF1]); // POP AF
    cpu.sp = 0xFFF0;
    bus.write(0xFFF0, 0xFF);
    bus.write(0xFFF1, 0x12);
    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x12);
    assert_eq!(cpu.f, 0xF0);
}

#[test]
fn ei_enables_after_next_instruction() {
    // EI ; NOP ; NOP with a v-blank interrupt pending the whole time. The
    // master enable becomes real only after the instruction following EI,
    // so dispatch happens after the first NOP.
    let (mut cpu, mut bus) = machine(&[0xFB, 0x00, 0x00]);
    bus.ie_reg = 0x01;
    bus.if_reg = 0x01;

    cpu.step(&mut bus); // EI
    assert!(!cpu.ime);
    assert_eq!(cpu.pc, 0x0101);

    cpu.step(&mut bus); // NOP, then dispatch
    assert_eq!(cpu.pc, 0x0040);
    assert!(!cpu.ime);
    assert_eq!(bus.if_reg & 0x01, 0);
    // Return address is the instruction after the NOP.
    assert_eq!(bus.read(0xFFFC), 0x02);
    assert_eq!(bus.read(0xFFFD), 0x01);
}

#[test]
fn ei_then_di_never_enables() {
    let (mut cpu, mut bus) = machine(&[0xFB, 0xF3, 0x00]); // EI ; DI ; NOP
    bus.ie_reg = 0x01;
    bus.if_reg = 0x01;

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert!(!cpu.ime);
    assert_eq!(cpu.pc, 0x0103);
}

#[test]
fn interrupt_priority_order() {
    // V-blank and timer both pending: v-blank wins, timer stays requested.
    let (mut cpu, mut bus) = machine(&[0x00]);
    cpu.ime = true;
    bus.ie_reg = 0x1F;
    bus.if_reg = 0x05;

    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0040);
    assert_eq!(bus.if_reg, 0x04);
    assert!(!cpu.ime);
}

#[test]
fn pending_interrupt_wakes_halt_without_ime() {
    let (mut cpu, mut bus) = machine(&[0x76, 0x00]); // HALT ; NOP
    cpu.step(&mut bus);
    assert!(cpu.halted);

    // A source becoming pending wakes the CPU even though IME is off, and
    // no dispatch happens.
    bus.ie_reg = 0x04;
    bus.if_reg = 0x04;
    cpu.step(&mut bus);
    assert!(!cpu.halted);
    assert_eq!(bus.if_reg, 0x04);

    cpu.step(&mut bus); // the NOP after HALT
    assert_eq!(cpu.pc, 0x0102);
}

#[test]
fn halt_with_pending_interrupt_triggers_fetch_bug() {
    // HALT with IME off and a source already pending does not halt; the
    // following one-byte instruction is fetched twice.
    let (mut cpu, mut bus) = machine(&[0x76, 0x3C, 0x00]); // HALT ; INC A ; NOP
    bus.ie_reg = 0x04;
    bus.if_reg = 0x04;

    cpu.step(&mut bus);
    assert!(!cpu.halted);
    assert_eq!(cpu.pc, 0x0101);

    cpu.step(&mut bus); // INC A, program counter stuck
    assert_eq!(cpu.a, 1);
    assert_eq!(cpu.pc, 0x0101);

    cpu.step(&mut bus); // INC A again, now advancing
    assert_eq!(cpu.a, 2);
    assert_eq!(cpu.pc, 0x0102);
}

#[test]
fn daa_adjusts_bcd_addition() {
    // 0x45 + 0x38 = 0x7D, adjusted to 0x83.
    let (mut cpu, mut bus) = machine(&[0xC6, 0x38, 0x27]); // ADD A,0x38 ; DAA
    cpu.a = 0x45;
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x83);
    assert_eq!(cpu.f & 0x10, 0);
}

#[test]
fn undefined_opcode_is_fatal() {
    let result = std::panic::catch_unwind(|| {
        let (mut cpu, mut bus) = machine(&[0xD3]);
        cpu.step(&mut bus);
    });
    assert!(result.is_err());
}

#[test]
fn rotate_through_carry() {
    // RLA shifts the old carry into bit 0 and the old bit 7 into carry.
    let (mut cpu, mut bus) = machine(&[0x17]);
    cpu.a = 0x80;
    cpu.f = 0x10;
    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x01);
    assert_eq!(cpu.f, 0x10);
}

#[test]
fn cb_prefixed_ops() {
    // SWAP A then BIT 7,(HL).
    let (mut cpu, mut bus) = machine(&[0xCB, 0x37, 0xCB, 0x7E]);
    cpu.a = 0xF0;
    cpu.set_hl(0x0200);
    bus.write(0x0200, 0x80);

    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x0F);
    assert_eq!(cpu.f, 0x00);
    assert_eq!(cpu.cycles, 8);

    cpu.step(&mut bus);
    // Bit set: Z clear, H set.
    assert_eq!(cpu.f & 0x80, 0);
    assert_eq!(cpu.f & 0x20, 0x20);
    assert_eq!(cpu.pc, 0x0104);
    assert_eq!(cpu.cycles, 8 + 12);
}

#[test]
fn add_sp_signed_flags_come_from_low_byte() {
    let (mut cpu, mut bus) = machine(&[0xE8, 0xFF]); // ADD SP,-1
    cpu.sp = 0x0000;
    cpu.step(&mut bus);
    assert_eq!(cpu.sp, 0xFFFF);
    // 0x00 + 0xFF produces neither nibble nor byte carry.
    assert_eq!(cpu.f, 0x00);

    let (mut cpu, mut bus) = machine(&[0xE8, 0x01]); // ADD SP,+1
    cpu.sp = 0x00FF;
    cpu.step(&mut bus);
    assert_eq!(cpu.sp, 0x0100);
    assert_eq!(cpu.f, 0x30);
}
