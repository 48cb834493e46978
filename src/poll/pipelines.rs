//! Poll loop orchestration

use super::pure::{EdgeDetector, KeyAction};
use crate::config::{PIN_BIT, SWITCH_KEY};
use crate::gpio::PinController;
use crate::keyboard::VirtualKeyboard;

/// Busy-wait bridge from pin level to key events.
///
/// Never returns. There is no debounce and no sleep: every sampled
/// transition is trusted immediately, and the loop occupies a full core.
/// The process ends only by external signal, which skips all cleanup.
pub fn run(pin: &PinController, mut keyboard: VirtualKeyboard) -> ! {
    let mut detector = EdgeDetector::new();
    loop {
        match detector.sample(pin.read_input_bit(PIN_BIT)) {
            Some(KeyAction::Press) => keyboard.post_key(SWITCH_KEY, true),
            Some(KeyAction::Release) => keyboard.post_key(SWITCH_KEY, false),
            None => {}
        }
    }
}
