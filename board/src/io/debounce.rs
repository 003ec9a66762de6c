//! Debounced pushbutton edge detection.
//!
//! The pushbutton data register is sampled every loop tick; each key runs
//! through its own two-sample debouncer and only a debounced
//! released-to-pressed transition is reported. A held key therefore
//! produces one event, not one per tick.

use crate::devices::pushbuttons::KEY_COUNT;
use debouncr::{debounce_stateful_2, DebouncerStateful, Edge, Repeat2};

pub struct KeyEdgeDetector {
    debouncers: [DebouncerStateful<u8, Repeat2>; KEY_COUNT],
}

impl KeyEdgeDetector {
    /// `initial` is the key state at startup, so keys held across program
    /// start do not register as presses.
    pub fn new(initial: u32) -> Self {
        Self {
            debouncers: std::array::from_fn(|i| debounce_stateful_2(initial & (1 << i) != 0)),
        }
    }

    /// Feeds one sample of the key state register, returning the keys
    /// that completed a debounced press this tick, one bit per key.
    pub fn update(&mut self, state: u32) -> u32 {
        let mut pressed = 0;
        for (i, debouncer) in self.debouncers.iter_mut().enumerate() {
            if debouncer.update(state & (1 << i) != 0) == Some(Edge::Rising) {
                pressed |= 1 << i;
            }
        }
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::pushbuttons::Key;

    #[test]
    fn press_reported_once_after_two_stable_samples() {
        let mut detector = KeyEdgeDetector::new(0);

        assert_eq!(detector.update(Key::Key1.bit()), 0);
        assert_eq!(detector.update(Key::Key1.bit()), Key::Key1.bit());

        // Still held: no further events.
        assert_eq!(detector.update(Key::Key1.bit()), 0);
        assert_eq!(detector.update(Key::Key1.bit()), 0);
    }

    #[test]
    fn bounce_does_not_register() {
        let mut detector = KeyEdgeDetector::new(0);

        assert_eq!(detector.update(Key::Key2.bit()), 0);
        assert_eq!(detector.update(0), 0);
        assert_eq!(detector.update(Key::Key2.bit()), 0);
        assert_eq!(detector.update(0), 0);
    }

    #[test]
    fn keys_held_at_startup_are_not_presses() {
        let mut detector = KeyEdgeDetector::new(Key::Key0.bit());

        assert_eq!(detector.update(Key::Key0.bit()), 0);
        assert_eq!(detector.update(Key::Key0.bit()), 0);

        // Release and press again: that is a real event.
        assert_eq!(detector.update(0), 0);
        assert_eq!(detector.update(0), 0);
        assert_eq!(detector.update(Key::Key0.bit()), 0);
        assert_eq!(detector.update(Key::Key0.bit()), Key::Key0.bit());
    }
}
