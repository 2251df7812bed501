//! High-level machine facade.
//!
//! One `GameBoy` is the whole emulation session: a CPU, the address space,
//! and the lockstep rule that ties them together. Each step executes one
//! instruction (or an idle charge while halted), then advances the timer and
//! PPU by exactly the cycles the CPU consumed. There is no other thread of
//! control; the cycle counter is the single shared clock.

use std::io;
use std::path::Path;

use crate::address_space::AddressSpace;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::joypad::Buttons;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// T-cycles per frame: 154 scanlines of 456 cycles.
pub const FRAME_CYCLES: u64 = 70224;

pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: AddressSpace,
}

impl GameBoy {
    /// Power-on state; expects a boot overlay to be loaded before running.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: AddressSpace::new(),
        }
    }

    /// Post-boot state: registers and LCD set up as the boot ROM leaves
    /// them, so a cartridge runs without a boot image.
    pub fn new_post_boot() -> Self {
        let mut bus = AddressSpace::new();
        bus.ppu.apply_post_boot();
        Self {
            cpu: Cpu::new_post_boot(),
            bus,
        }
    }

    pub fn load_cart(&mut self, cart: Cartridge) {
        self.bus.load_cart(cart);
    }

    pub fn load_cart_from_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let cart = Cartridge::from_file(path)?;
        self.bus.load_cart(cart);
        Ok(())
    }

    pub fn load_boot_rom(&mut self, data: Vec<u8>) -> io::Result<()> {
        self.bus.load_boot_rom(data)
    }

    /// Feed one input-source sample. A press also wakes a stopped CPU.
    pub fn set_buttons(&mut self, buttons: Buttons) {
        if buttons.any() {
            self.cpu.stopped = false;
        }
        self.bus.joypad.set_buttons(buttons, &mut self.bus.if_reg);
    }

    /// One loop iteration: execute a CPU step, then advance the rest of the
    /// machine by the cycles it consumed. Returns that cycle count.
    pub fn step(&mut self) -> u64 {
        // The boot overlay is unmapped forever the first time the program
        // counter runs past it.
        if self.bus.boot_mapped() && self.cpu.pc > 0x00FF {
            self.bus.unmap_boot_rom();
        }

        let before = self.cpu.cycles;
        self.cpu.step(&mut self.bus);
        let elapsed = self.cpu.cycles - before;
        self.bus.tick(elapsed as u32);
        elapsed
    }

    /// Run until the PPU completes a frame, bounded by one frame worth of
    /// cycles so a disabled LCD cannot spin the loop forever.
    pub fn run_frame(&mut self) {
        let mut budget = FRAME_CYCLES;
        while !self.bus.ppu.frame_ready() {
            let spent = self.step();
            if spent >= budget {
                break;
            }
            budget -= spent;
        }
        self.bus.ppu.clear_frame_flag();
    }

    /// The finished framebuffer; read-only for the display sink.
    pub fn framebuffer(&self) -> &[u32; SCREEN_WIDTH * SCREEN_HEIGHT] {
        self.bus.ppu.framebuffer()
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}
