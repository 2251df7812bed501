use std::fs;
use tempfile::tempdir;

use dotmatrix_core::cartridge::Cartridge;

#[test]
fn cartridge_loads_from_disk_with_title() {
    let dir = tempdir().unwrap();
    let rom_path = dir.path().join("game.gb");

    let mut rom = vec![0u8; 0x8000];
    rom[0x0134..0x0134 + 5].copy_from_slice(b"HELLO");
    fs::write(&rom_path, &rom).unwrap();

    let cart = Cartridge::from_file(&rom_path).unwrap();
    assert_eq!(cart.title, "HELLO");
}

#[test]
fn missing_cartridge_file_is_an_error() {
    assert!(Cartridge::from_file("/nonexistent/game.gb").is_err());
}
