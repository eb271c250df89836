use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::consts;

/// Maps the host keyboard onto the 16-key pad:
///
/// ```text
/// 1 2 3 C        1 2 3 4
/// 4 5 6 D   <-   Q W E R
/// 7 8 9 E        A S D F
/// A 0 B F        Z X C V
/// ```
fn map_key(key: Keycode) -> Option<usize> {
    match key {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),
        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

pub struct KeyboardDriver {
    events: sdl2::EventPump,
    pub keys: [bool; consts::KEY_COUNT],
}

impl KeyboardDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, String> {
        Ok(KeyboardDriver {
            events: context.event_pump()?,
            keys: [false; consts::KEY_COUNT],
        })
    }

    /// Pumps pending events and rebuilds the key matrix from the current
    /// keyboard state. Returns false once the user asked to quit.
    pub fn poll(&mut self) -> bool {
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return false,
                _ => continue,
            }
        }

        self.keys = [false; consts::KEY_COUNT];
        let keyboard_state = self.events.keyboard_state();
        let pressed = keyboard_state
            .pressed_scancodes()
            .filter_map(Keycode::from_scancode);
        for key in pressed {
            if let Some(index) = map_key(key) {
                self.keys[index] = true;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_covers_the_pad() {
        assert_eq!(map_key(Keycode::X), Some(0x0));
        assert_eq!(map_key(Keycode::Num4), Some(0xC));
        assert_eq!(map_key(Keycode::V), Some(0xF));
        assert_eq!(map_key(Keycode::Space), None);
    }
}
