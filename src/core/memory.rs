use log::{info, warn};

use crate::consts;
use crate::core::error::Chip8Error;

/// The 4KB address space. Addresses 0x000-0x04F hold the hexadecimal font
/// sprites; 0x000-0x1FF is conventionally reserved for the interpreter but is
/// not enforced as read-only.
#[derive(Debug)]
pub struct Memory {
    bytes: [u8; consts::RAM_BYTES],
}

impl Default for Memory {
    fn default() -> Self {
        let mut memory = Memory {
            bytes: [0; consts::RAM_BYTES],
        };
        memory.load_fonts();
        memory
    }
}

impl Memory {
    pub fn new() -> Self {
        Default::default()
    }

    /// Zeroes all 4096 bytes and rewrites the font table.
    pub fn clear(&mut self) {
        self.bytes = [0; consts::RAM_BYTES];
        self.load_fonts();
    }

    fn load_fonts(&mut self) {
        let start = consts::FONT_START as usize;
        self.bytes[start..start + consts::FONT_SET.len()].copy_from_slice(&consts::FONT_SET);
    }

    pub fn read(&self, address: u16) -> Result<u8, Chip8Error> {
        self.bytes
            .get(address as usize)
            .copied()
            .ok_or(Chip8Error::AddressOutOfRange { address })
    }

    /// Writing into the font region is permitted but reported, since programs
    /// that do so corrupt the shared glyphs.
    pub fn write(&mut self, address: u16, value: u8) -> Result<(), Chip8Error> {
        if address < consts::FONT_START + consts::FONT_SET.len() as u16 {
            warn!("write into font region at {:#06x}", address);
        }
        match self.bytes.get_mut(address as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Chip8Error::AddressOutOfRange { address }),
        }
    }

    /// A read-only view of `len` bytes starting at `address`, validated as a
    /// whole before anything is read.
    pub fn slice(&self, address: u16, len: usize) -> Result<&[u8], Chip8Error> {
        let start = address as usize;
        self.bytes
            .get(start..start + len)
            .ok_or(Chip8Error::AddressOutOfRange { address })
    }

    /// Copies `bytes` verbatim into memory starting at `load_address`. Nothing
    /// is written unless the whole ROM fits.
    pub fn load_rom(&mut self, bytes: &[u8], load_address: u16) -> Result<(), Chip8Error> {
        let start = load_address as usize;
        if start >= consts::RAM_BYTES {
            return Err(Chip8Error::AddressOutOfRange {
                address: load_address,
            });
        }
        if bytes.is_empty() {
            return Err(Chip8Error::RomEmpty);
        }
        let capacity = consts::RAM_BYTES - start;
        if bytes.len() > capacity {
            return Err(Chip8Error::RomTooLarge {
                size: bytes.len(),
                load_address,
                capacity,
            });
        }
        if load_address <= consts::RESERVED_END {
            warn!("loading rom into reserved region at {:#06x}", load_address);
        }

        self.bytes[start..start + bytes.len()].copy_from_slice(bytes);
        info!(
            "loaded {} byte rom at {:#06x}-{:#06x}",
            bytes.len(),
            load_address,
            start + bytes.len() - 1
        );
        Ok(())
    }

    /// Start address of the 5-byte font sprite for a hex digit. Only the low
    /// nibble of `digit` is used.
    pub fn font_glyph_address(&self, digit: u8) -> u16 {
        consts::FONT_START + (digit & 0xF) as u16 * consts::FONT_GLYPH_BYTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fonts_present_after_new() {
        let memory = Memory::new();
        // First glyph: 0
        assert_eq!(memory.bytes[0..5], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        // Last glyph: F
        assert_eq!(memory.bytes[75..80], [0xF0, 0x80, 0xF0, 0x80, 0x80]);
        // Everything past the font table starts zeroed
        assert!(memory.bytes[80..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_read_write_round_trip() {
        let mut memory = Memory::new();
        for address in [0u16, 80, 0x200, 0xFFF] {
            memory.write(address, 0xAB).unwrap();
            assert_eq!(memory.read(address).unwrap(), 0xAB);
        }
    }

    #[test]
    fn test_read_out_of_range() {
        let memory = Memory::new();
        assert_eq!(
            memory.read(0x1000),
            Err(Chip8Error::AddressOutOfRange { address: 0x1000 })
        );
    }

    #[test]
    fn test_write_out_of_range() {
        let mut memory = Memory::new();
        assert_eq!(
            memory.write(0x1000, 1),
            Err(Chip8Error::AddressOutOfRange { address: 0x1000 })
        );
    }

    #[test]
    fn test_write_into_font_region_is_permitted() {
        let mut memory = Memory::new();
        memory.write(0x004, 0x55).unwrap();
        assert_eq!(memory.read(0x004).unwrap(), 0x55);
    }

    #[test]
    fn test_clear_restores_fonts() {
        let mut memory = Memory::new();
        for address in 0..80 {
            memory.write(address, 0xFF).unwrap();
        }
        memory.write(0x300, 0x77).unwrap();
        memory.clear();
        assert_eq!(memory.bytes[0..80], consts::FONT_SET);
        assert_eq!(memory.read(0x300).unwrap(), 0);
    }

    #[test]
    fn test_slice_bounds() {
        let memory = Memory::new();
        assert_eq!(memory.slice(0, 5).unwrap(), &consts::FONT_SET[0..5]);
        assert!(memory.slice(0xFFE, 2).is_ok());
        assert_eq!(
            memory.slice(0xFFE, 3),
            Err(Chip8Error::AddressOutOfRange { address: 0xFFE })
        );
    }

    #[test]
    fn test_load_rom_copies_verbatim() {
        let mut memory = Memory::new();
        let rom = [0x60, 0x05, 0x61, 0x03, 0x80, 0x14];
        memory.load_rom(&rom, 0x200).unwrap();
        assert_eq!(memory.slice(0x200, rom.len()).unwrap(), &rom);
        // Font table untouched
        assert_eq!(memory.bytes[0..80], consts::FONT_SET);
    }

    #[test]
    fn test_load_rom_preserves_surroundings() {
        let mut memory = Memory::new();
        memory.write(0x1FF, 0x11).unwrap();
        memory.write(0x204, 0x22).unwrap();
        memory.load_rom(&[0xAA, 0xBB], 0x200).unwrap();
        assert_eq!(memory.read(0x1FF).unwrap(), 0x11);
        assert_eq!(memory.read(0x204).unwrap(), 0x22);
    }

    #[test]
    fn test_load_rom_empty() {
        let mut memory = Memory::new();
        assert_eq!(memory.load_rom(&[], 0x200), Err(Chip8Error::RomEmpty));
    }

    #[test]
    fn test_load_rom_too_large_leaves_memory_untouched() {
        let mut memory = Memory::new();
        let rom = [0xFF; 3585];
        assert_eq!(
            memory.load_rom(&rom, 0x200),
            Err(Chip8Error::RomTooLarge {
                size: 3585,
                load_address: 0x200,
                capacity: 3584,
            })
        );
        assert!(memory.bytes[0x200..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_load_rom_exactly_fits() {
        let mut memory = Memory::new();
        let rom = [0xCC; 3584];
        memory.load_rom(&rom, 0x200).unwrap();
        assert_eq!(memory.read(0xFFF).unwrap(), 0xCC);
    }

    #[test]
    fn test_load_rom_bad_address() {
        let mut memory = Memory::new();
        assert_eq!(
            memory.load_rom(&[1], 0x1000),
            Err(Chip8Error::AddressOutOfRange { address: 0x1000 })
        );
    }

    #[test]
    fn test_font_glyph_address() {
        let memory = Memory::new();
        assert_eq!(memory.font_glyph_address(0x0), 0);
        assert_eq!(memory.font_glyph_address(0xF), 75);
        // digit is masked, never rejected
        assert_eq!(memory.font_glyph_address(0x1A), 50);
    }
}
