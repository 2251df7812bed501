//! Cartridge loading, header parsing, and bank controller (MBC) logic.
//!
//! Bank switching is driven entirely by writes into the address windows
//! below 0x8000; the latched register values are reduced to effective bank
//! indices after every such write.

use std::{fs, io, path::Path};

pub const ROM_BANK_SIZE: usize = 0x4000;
pub const RAM_BANK_SIZE: usize = 0x2000;

/// Bank controller scheme identified by the cartridge type header byte.
///
/// Only the MBC1 family is functionally implemented; every other identifier
/// is carried as `Unsupported` and refused at load time rather than run with
/// silently wrong banking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbcKind {
    /// 32KB ROM wired straight to the bus, no banking hardware.
    None,
    Mbc1,
    Unsupported(u8),
}

pub struct Cartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
    pub kind: MbcKind,
    pub title: String,
    /// ROM bank count derived from the header size code.
    pub rom_banks: usize,
    /// External RAM bank count derived from the header size code.
    pub ram_banks: usize,

    // MBC1 latches, one per write window below 0x8000.
    ram_enable: bool,
    /// 5-bit ROM bank number (0x2000-0x3FFF window).
    rom_bank_reg: u8,
    /// 2-bit secondary register (0x4000-0x5FFF window): upper ROM bank bits
    /// or RAM bank index, depending on cartridge size.
    bank2_reg: u8,
    /// Mode-select latch (0x6000-0x7FFF window). Stored for inspection;
    /// bank routing keys on the cartridge size, not this latch.
    pub mode_select: u8,

    // Effective selections, recomputed after every latch write.
    rom_bank: usize,
    ram_bank: usize,
}

impl Cartridge {
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let data = fs::read(&path)?;
        Self::load(data)
    }

    pub fn load(data: Vec<u8>) -> io::Result<Self> {
        let header = Header::parse(&data);
        let kind = header.mbc_kind();
        if let MbcKind::Unsupported(byte) = kind {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported cartridge type {byte:#04X}"),
            ));
        }

        let rom_banks = header.rom_banks();
        let (ram_size, ram_banks) = header.ram_geometry();
        let title = header.title();
        log::info!(
            "loaded cartridge \"{}\" ({:?}, {} ROM banks, {} RAM banks)",
            title,
            kind,
            rom_banks,
            ram_banks
        );

        let mut cart = Self {
            rom: data,
            ram: vec![0; ram_size],
            kind,
            title,
            rom_banks,
            ram_banks,
            ram_enable: false,
            rom_bank_reg: 0,
            bank2_reg: 0,
            mode_select: 0,
            rom_bank: 1,
            ram_bank: 0,
        };
        cart.recompute_banks();
        Ok(cart)
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            // Fixed bank 0 window.
            0x0000..=0x3FFF => self.rom.get(addr as usize).copied().unwrap_or(0xFF),
            0x4000..=0x7FFF => {
                let offset = self.rom_bank * ROM_BANK_SIZE + (addr as usize - 0x4000);
                self.rom.get(offset).copied().unwrap_or(0xFF)
            }
            0xA000..=0xBFFF => {
                if self.ram_accessible() {
                    let idx = self.ram_bank * RAM_BANK_SIZE + (addr as usize - 0xA000);
                    self.ram.get(idx).copied().unwrap_or(0xFF)
                } else {
                    0xFF
                }
            }
            _ => 0xFF,
        }
    }

    pub fn write(&mut self, addr: u16, val: u8) {
        match self.kind {
            MbcKind::None => {
                // No banking hardware: ROM-range writes drive no latch and
                // are dropped on the floor.
                if (0xA000..=0xBFFF).contains(&addr) {
                    self.ram_write(addr, val);
                }
            }
            MbcKind::Mbc1 => match addr {
                0x0000..=0x1FFF => {
                    self.ram_enable = val & 0x0F == 0x0A;
                }
                0x2000..=0x3FFF => {
                    self.rom_bank_reg = val & 0x1F;
                    self.recompute_banks();
                }
                0x4000..=0x5FFF => {
                    self.bank2_reg = val & 0x03;
                    self.recompute_banks();
                }
                0x6000..=0x7FFF => {
                    self.mode_select = val & 0x01;
                    self.recompute_banks();
                }
                0xA000..=0xBFFF => {
                    if self.ram_accessible() {
                        self.ram_write(addr, val);
                    }
                }
                _ => {}
            },
            MbcKind::Unsupported(_) => {}
        }
    }

    fn ram_write(&mut self, addr: u16, val: u8) {
        let idx = self.ram_bank * RAM_BANK_SIZE + (addr as usize - 0xA000);
        if let Some(b) = self.ram.get_mut(idx) {
            *b = val;
        }
    }

    fn ram_accessible(&self) -> bool {
        match self.kind {
            MbcKind::None => !self.ram.is_empty(),
            MbcKind::Mbc1 => self.ram_enable && !self.ram.is_empty(),
            MbcKind::Unsupported(_) => false,
        }
    }

    /// Reduce the latched registers to effective bank indices.
    ///
    /// On cartridges above 512KB the 2-bit secondary register supplies ROM
    /// bank bits 5-6 and external RAM is locked to bank 0; on smaller
    /// cartridges it selects the RAM bank instead. The switchable window
    /// never maps bank 0: a latched value of zero selects bank 1.
    fn recompute_banks(&mut self) {
        let low = self.rom_bank_reg as usize & 0x1F;
        let low = if low == 0 { 1 } else { low };
        let bank2 = self.bank2_reg as usize & 0x03;

        if self.rom_banks * ROM_BANK_SIZE > 512 * 1024 {
            self.rom_bank = (bank2 << 5) | low;
            self.ram_bank = 0;
        } else {
            self.rom_bank = low;
            self.ram_bank = bank2;
        }

        // Stay inside the backing stores regardless of what was latched.
        let rom_count = (self.rom.len() / ROM_BANK_SIZE).max(1);
        self.rom_bank %= rom_count;
        if self.rom_bank == 0 && rom_count > 1 {
            self.rom_bank = 1;
        }
        if self.ram_banks > 0 {
            self.ram_bank %= self.ram_banks;
        } else {
            self.ram_bank = 0;
        }
    }

    /// Effective switchable-window ROM bank (for inspection and tests).
    pub fn selected_rom_bank(&self) -> usize {
        self.rom_bank
    }

    /// Effective external-RAM bank (for inspection and tests).
    pub fn selected_ram_bank(&self) -> usize {
        self.ram_bank
    }
}

struct Header<'a> {
    data: &'a [u8],
}

impl<'a> Header<'a> {
    fn parse(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn byte(&self, offset: usize) -> u8 {
        self.data.get(offset).copied().unwrap_or(0)
    }

    fn title(&self) -> String {
        let end = 0x0143.min(self.data.len());
        let start = 0x0134.min(self.data.len());
        let mut slice = &self.data[start..end];
        if let Some(pos) = slice.iter().position(|&b| b == 0) {
            slice = &slice[..pos];
        }
        String::from_utf8_lossy(slice).trim().to_string()
    }

    fn mbc_kind(&self) -> MbcKind {
        match self.byte(0x0147) {
            0x00 => MbcKind::None,
            0x01..=0x03 => MbcKind::Mbc1,
            other => MbcKind::Unsupported(other),
        }
    }

    fn rom_banks(&self) -> usize {
        // Size codes above 0x08 (8MB) are not defined; clamp so a corrupt
        // header cannot overflow the shift.
        1 << (self.byte(0x0148).min(0x08) + 1)
    }

    /// External RAM size and bank count from the header RAM size code.
    fn ram_geometry(&self) -> (usize, usize) {
        match self.byte(0x0149) {
            0x02 => (0x2000, 1),
            0x03 => (0x8000, 4),
            0x04 => (0x20000, 16),
            0x05 => (0x10000, 8),
            _ => (0, 0),
        }
    }
}
