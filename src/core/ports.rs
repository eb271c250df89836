use crate::consts;

/// Key state queried by the processor. Implemented over whatever the host
/// keeps its key matrix in; indices above 0xF are never pressed.
pub trait InputSource {
    fn is_pressed(&self, key: u8) -> bool;

    /// Lowest currently-held key, if any. This is what the key-wait opcode
    /// polls once per cycle.
    fn first_pressed(&self) -> Option<u8> {
        (0..consts::KEY_COUNT as u8).find(|&key| self.is_pressed(key))
    }
}

impl InputSource for [bool; consts::KEY_COUNT] {
    fn is_pressed(&self, key: u8) -> bool {
        self.get(key as usize).copied().unwrap_or(false)
    }
}

/// Tone generator driven by the sound timer. Both calls are idempotent.
pub trait ToneSink {
    fn start(&mut self);
    fn stop(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matrix_queries() {
        let mut keys = [false; consts::KEY_COUNT];
        assert!(!keys.is_pressed(0x5));
        assert_eq!(keys.first_pressed(), None);

        keys[0x5] = true;
        keys[0xB] = true;
        assert!(keys.is_pressed(0x5));
        assert_eq!(keys.first_pressed(), Some(0x5));
    }

    #[test]
    fn test_out_of_range_key_is_never_pressed() {
        let keys = [true; consts::KEY_COUNT];
        assert!(!keys.is_pressed(0x10));
        assert!(!keys.is_pressed(0xFF));
    }
}
