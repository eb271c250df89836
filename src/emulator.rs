use crate::core::error::Chip8Error;
use crate::core::framebuffer::Framebuffer;
use crate::core::memory::Memory;
use crate::core::ports::{InputSource, ToneSink};
use crate::core::processor::{CycleStatus, Processor};

/// The whole machine: memory, framebuffer and processor under one owner. The
/// driver loop holds exactly one of these and borrows it exclusively for each
/// cycle and timer tick.
#[derive(Debug)]
pub struct Emulator {
    memory: Memory,
    framebuffer: Framebuffer,
    processor: Processor,
}

impl Emulator {
    pub fn new() -> Self {
        Emulator {
            memory: Memory::new(),
            framebuffer: Framebuffer::new(),
            processor: Processor::new(),
        }
    }

    /// Loads a ROM image and restores the power-on state. Fails before any
    /// byte is copied, so a rejected ROM never leaves the machine half-loaded.
    pub fn load_rom(&mut self, bytes: &[u8], load_address: u16) -> Result<(), Chip8Error> {
        self.memory.load_rom(bytes, load_address)?;
        self.reset();
        Ok(())
    }

    /// Restores registers, stack, timers and the screen; the loaded ROM and
    /// font table stay in memory.
    pub fn reset(&mut self) {
        self.processor.reset(&mut self.framebuffer);
    }

    /// Executes one instruction.
    pub fn cycle(&mut self, input: &dyn InputSource) -> Result<CycleStatus, Chip8Error> {
        self.processor
            .cycle(&mut self.memory, &mut self.framebuffer, input)
    }

    /// Advances both timers by one 60 Hz tick.
    pub fn update_timers(&mut self, tone: &mut dyn ToneSink) {
        self.processor.update_timers(tone);
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }
}
