use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use crate::core::processor::CycleStatus;
use crate::emulator::Emulator;
use crate::external::audio::AudioDriver;
use crate::external::display::DisplayDriver;
use crate::external::input::KeyboardDriver;

mod consts;
mod core;
mod emulator;
mod external;
mod utils;

fn parse_address(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(version, about = "CHIP-8 emulator", long_about = None)]
struct Args {
    #[arg(short, long, help = "Path to the ROM file to run")]
    rom: String,

    #[arg(short, long, default_value_t = consts::DEFAULT_SCALE, help = "Window scale factor")]
    scale: u32,

    #[arg(short, long, default_value_t = consts::DEFAULT_CLOCK_SPEED, help = "CPU clock in instructions per second")]
    clock: u64,

    #[arg(short, long, default_value_t = consts::PROGRAM_START, value_parser = parse_address, help = "ROM load address, hex accepted")]
    load_addr: u16,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    if args.scale == 0 || args.clock == 0 {
        Err("scale and clock must be positive")?;
    }

    let rom = fs::read(&args.rom)?;

    let sdl_context = sdl2::init()?;
    let mut display = DisplayDriver::new(&sdl_context, args.scale)?;
    let mut keyboard = KeyboardDriver::new(&sdl_context)?;
    let mut audio = AudioDriver::new(&sdl_context)?;

    let mut emulator = Emulator::new();
    emulator.load_rom(&rom, args.load_addr)?;

    // Instruction cycles run at the configured clock, timer ticks at 60 Hz;
    // the two cadences are scheduled independently off the same loop.
    let cycle_period = Duration::from_nanos(1_000_000_000 / args.clock);
    let timer_period = Duration::from_millis(1000 / consts::TIMER_HZ);
    let mut next_cycle = Instant::now();
    let mut last_timer = Instant::now();

    while keyboard.poll() {
        let now = Instant::now();
        if now >= next_cycle {
            match emulator.cycle(&keyboard.keys)? {
                CycleStatus::RedrawScreen => display.draw(emulator.framebuffer())?,
                CycleStatus::Continue | CycleStatus::Waiting => {}
            }
            next_cycle += cycle_period;
        } else {
            thread::sleep(Duration::from_micros(100));
        }

        if now.duration_since(last_timer) >= timer_period {
            emulator.update_timers(&mut audio);
            last_timer = now;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("512"), Ok(0x200));
        assert_eq!(parse_address("0x200"), Ok(0x200));
        assert_eq!(parse_address("0X2A0"), Ok(0x2A0));
        assert!(parse_address("zz").is_err());
    }
}
