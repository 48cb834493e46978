//! Synthetic keyboard device
//!
//! Registers one uinput virtual keyboard with the input layer and posts
//! key state changes to it. Applications cannot tell the generated
//! events apart from real hardware input.

use evdev::uinput::VirtualDevice;
use evdev::{AttributeSet, BusType, InputEvent, InputId, KeyCode, KeyEvent};

use crate::config::{DEVICE_NAME, PRODUCT_ID, VENDOR_ID};
use crate::error::{SetupError, SetupResult};

/// Handle to the OS-registered virtual keyboard.
///
/// Created once at startup; dropping it tears the device down and
/// releases the uinput channel.
pub struct VirtualKeyboard {
    device: VirtualDevice,
}

impl VirtualKeyboard {
    /// Register the virtual keyboard, declaring every key it may emit.
    pub fn create(declared_keys: &[KeyCode]) -> SetupResult<VirtualKeyboard> {
        let mut keys = AttributeSet::<KeyCode>::new();
        for &key in declared_keys {
            keys.insert(key);
        }

        let mut device = VirtualDevice::builder()
            .map_err(SetupError::DeviceCreateFailed)?
            .name(DEVICE_NAME)
            .input_id(InputId::new(BusType::BUS_USB, VENDOR_ID, PRODUCT_ID, 1))
            .with_keys(&keys)
            .map_err(SetupError::DeviceCreateFailed)?
            .build()
            .map_err(SetupError::DeviceCreateFailed)?;

        // Report where the kernel put the device for anyone watching /dev/input.
        if let Ok(nodes) = device.enumerate_dev_nodes_blocking() {
            for node in nodes.flatten() {
                println!("[gpiokey] virtual keyboard at {}", node.display());
            }
        }

        Ok(VirtualKeyboard { device })
    }

    /// Post one key state change. `emit` appends the SYN_REPORT marker
    /// after the key event. Best-effort: a write failure (full kernel
    /// event queue) loses the event rather than stopping the bridge.
    pub fn post_key(&mut self, code: KeyCode, pressed: bool) {
        if let Err(e) = self.device.emit(&[key_event(code, pressed)]) {
            eprintln!("[gpiokey] dropped key event: {}", e);
        }
    }
}

/// Build the EV_KEY event for a key state change (value 1 = press, 0 = release).
pub fn key_event(code: KeyCode, pressed: bool) -> InputEvent {
    *KeyEvent::new(code, i32::from(pressed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use evdev::EventType;

    #[test]
    fn key_event_maps_press_and_release_values() {
        assert_eq!(key_event(KeyCode::KEY_A, true).value(), 1);
        assert_eq!(key_event(KeyCode::KEY_A, false).value(), 0);
    }

    #[test]
    fn key_event_targets_the_key_category() {
        let ev = key_event(KeyCode::KEY_A, true);
        assert_eq!(ev.event_type(), EventType::KEY);
        assert_eq!(ev.code(), KeyCode::KEY_A.0);
    }
}
