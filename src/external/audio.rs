use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use crate::core::ports::ToneSink;

const SAMPLE_RATE: i32 = 44_100;
const TONE_HZ: f32 = 440.0;

struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase < 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// The beeper: a mono square-wave device that the timer tick pauses and
/// resumes. SDL keeps the device paused until the first start.
pub struct AudioDriver {
    device: AudioDevice<SquareWave>,
}

impl AudioDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, String> {
        let audio_subsystem = context.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: Some(1024),
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: TONE_HZ / spec.freq as f32,
            phase: 0.0,
            volume: 0.25,
        })?;

        Ok(AudioDriver { device })
    }
}

impl ToneSink for AudioDriver {
    fn start(&mut self) {
        self.device.resume();
    }

    fn stop(&mut self) {
        self.device.pause();
    }
}
