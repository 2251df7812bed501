//! The 64KB memory map.
//!
//! `AddressSpace` owns every addressable byte and dispatches reads and
//! writes by ascending address range. Writes below 0x8000 are intercepted by
//! the cartridge's bank controller and never touch ROM bytes; echo RAM
//! mirrors work RAM in both directions; hardware registers live behind named
//! units rather than raw aliases into a byte array.

use std::io;

use crate::{
    cartridge::Cartridge, joypad::Joypad, ppu::Ppu, serial::Serial, timer::Timer,
};

/// Required boot image size in bytes.
pub const BOOT_ROM_SIZE: usize = 0x100;

pub struct AddressSpace {
    wram: [[u8; 0x1000]; 2],
    hram: [u8; 0x7F],
    /// Sound registers FF10-FF3F: storage only, no synthesis.
    sound: [u8; 0x30],
    pub if_reg: u8,
    pub ie_reg: u8,
    pub timer: Timer,
    pub ppu: Ppu,
    pub joypad: Joypad,
    pub serial: Serial,
    cart: Option<Cartridge>,
    boot_rom: Option<Vec<u8>>,
    boot_mapped: bool,
    /// Flat 64KB scratch backing used by the single-instruction conformance
    /// seam; when present it replaces all region dispatch.
    flat: Option<Box<[u8]>>,
}

impl AddressSpace {
    pub fn new() -> Self {
        Self {
            wram: [[0; 0x1000]; 2],
            hram: [0; 0x7F],
            sound: [0; 0x30],
            if_reg: 0xE1,
            ie_reg: 0,
            timer: Timer::new(),
            ppu: Ppu::new(),
            joypad: Joypad::new(),
            serial: Serial::new(),
            cart: None,
            boot_rom: None,
            boot_mapped: false,
            flat: None,
        }
    }

    /// An address space backed by a flat 64KB scratch array, for seeding
    /// arbitrary (address, byte) pairs in single-instruction fixtures.
    pub fn flat() -> Self {
        let mut bus = Self::new();
        bus.flat = Some(vec![0u8; 0x10000].into_boxed_slice());
        bus
    }

    /// Map a boot overlay over 0x0000-0x00FF. The image must be exactly 256
    /// bytes; anything else is a fatal configuration error.
    pub fn load_boot_rom(&mut self, data: Vec<u8>) -> io::Result<()> {
        if data.len() != BOOT_ROM_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "boot image must be exactly {BOOT_ROM_SIZE} bytes, got {}",
                    data.len()
                ),
            ));
        }
        self.boot_rom = Some(data);
        self.boot_mapped = true;
        Ok(())
    }

    pub fn load_cart(&mut self, cart: Cartridge) {
        self.cart = Some(cart);
    }

    pub fn cart(&self) -> Option<&Cartridge> {
        self.cart.as_ref()
    }

    pub fn boot_mapped(&self) -> bool {
        self.boot_mapped
    }

    /// Remove the boot overlay. There is no way to map it back in; the
    /// unmapping is permanent for the session.
    pub fn unmap_boot_rom(&mut self) {
        if self.boot_mapped {
            log::debug!("boot overlay unmapped");
        }
        self.boot_mapped = false;
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        if let Some(flat) = &self.flat {
            return flat[addr as usize];
        }
        match addr {
            0x0000..=0x00FF if self.boot_mapped => self
                .boot_rom
                .as_ref()
                .and_then(|b| b.get(addr as usize).copied())
                .unwrap_or(0xFF),
            0x0000..=0x7FFF => self.cart.as_ref().map(|c| c.read(addr)).unwrap_or(0xFF),
            0x8000..=0x9FFF => self.ppu.vram[(addr - 0x8000) as usize],
            0xA000..=0xBFFF => self.cart.as_ref().map(|c| c.read(addr)).unwrap_or(0xFF),
            0xC000..=0xCFFF => self.wram[0][(addr - 0xC000) as usize],
            0xD000..=0xDFFF => self.wram[1][(addr - 0xD000) as usize],
            // Echo RAM mirrors the work RAM banks byte for byte.
            0xE000..=0xEFFF => self.wram[0][(addr - 0xE000) as usize],
            0xF000..=0xFDFF => self.wram[1][(addr - 0xF000) as usize],
            0xFE00..=0xFE9F => self.ppu.oam[(addr - 0xFE00) as usize],
            // Reads of the disabled region depend on the current PPU mode.
            0xFEA0..=0xFEFF => match self.ppu.mode {
                2 | 3 => 0xFF,
                _ => 0x00,
            },
            0xFF00 => self.joypad.read(),
            0xFF01..=0xFF02 => self.serial.read(addr),
            0xFF04..=0xFF07 => self.timer.read(addr),
            0xFF0F => self.if_reg | 0xE0,
            0xFF10..=0xFF3F => self.sound[(addr - 0xFF10) as usize],
            0xFF40..=0xFF4B => self.ppu.read_reg(addr),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.ie_reg,
            _ => 0xFF,
        }
    }

    pub fn write(&mut self, addr: u16, val: u8) {
        if let Some(flat) = &mut self.flat {
            flat[addr as usize] = val;
            return;
        }
        match addr {
            // Bank controller latches; ROM bytes are never written.
            0x0000..=0x7FFF => {
                if let Some(cart) = self.cart.as_mut() {
                    cart.write(addr, val);
                }
            }
            0x8000..=0x9FFF => self.ppu.vram[(addr - 0x8000) as usize] = val,
            0xA000..=0xBFFF => {
                if let Some(cart) = self.cart.as_mut() {
                    cart.write(addr, val);
                }
            }
            0xC000..=0xCFFF => self.wram[0][(addr - 0xC000) as usize] = val,
            0xD000..=0xDFFF => self.wram[1][(addr - 0xD000) as usize] = val,
            0xE000..=0xEFFF => self.wram[0][(addr - 0xE000) as usize] = val,
            0xF000..=0xFDFF => self.wram[1][(addr - 0xF000) as usize] = val,
            0xFE00..=0xFE9F => self.ppu.oam[(addr - 0xFE00) as usize] = val,
            0xFEA0..=0xFEFF => {}
            0xFF00 => self.joypad.write(val),
            0xFF01..=0xFF02 => self.serial.write(addr, val, &mut self.if_reg),
            0xFF04..=0xFF07 => self.timer.write(addr, val),
            0xFF0F => self.if_reg = val & 0x1F,
            0xFF10..=0xFF3F => self.sound[(addr - 0xFF10) as usize] = val,
            0xFF46 => {
                self.ppu.dma = val;
                self.oam_dma(val);
            }
            0xFF40..=0xFF4B => self.ppu.write_reg(addr, val),
            0xFF50 => self.unmap_boot_rom(),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = val,
            0xFFFF => self.ie_reg = val,
            _ => {}
        }
    }

    /// Copy 160 bytes from `src_hi << 8` into object attribute memory.
    fn oam_dma(&mut self, src_hi: u8) {
        let base = (src_hi as u16) << 8;
        for i in 0..0xA0u16 {
            let byte = self.read(base.wrapping_add(i));
            self.ppu.oam[i as usize] = byte;
        }
    }

    /// Advance every clocked unit by the same elapsed cycle count.
    pub fn tick(&mut self, cycles: u32) {
        self.timer.step(cycles, &mut self.if_reg);
        self.ppu.step(cycles, &mut self.if_reg);
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}
