mod config;
mod error;
mod gpio;
mod keyboard;
mod mem;
mod poll;

use crate::error::SetupError;
use crate::gpio::PinController;
use crate::keyboard::VirtualKeyboard;
use crate::mem::open_register_window;

fn main() {
    let window = match open_register_window(config::GPIO_CONTROLLER_BASE) {
        Ok(window) => window,
        Err(SetupError::PermissionDenied) => {
            eprintln!("[gpiokey] cannot open /dev/mem: run with root privilege (sudo gpiokey)");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("[gpiokey] {}", e);
            std::process::exit(1);
        }
    };

    // SAFETY: the window maps the page holding the controller's
    // registers; register_ptr() points at the block and the window
    // stays alive for the rest of main.
    let pin = unsafe { PinController::new(window.register_ptr().cast()) };
    pin.configure_as_input();

    let keyboard = match VirtualKeyboard::create(&[config::SWITCH_KEY]) {
        Ok(keyboard) => keyboard,
        Err(e) => {
            eprintln!("[gpiokey] {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "[gpiokey] bridging gpio bit {} at {:#x} to {:?}",
        config::PIN_BIT,
        config::GPIO_CONTROLLER_BASE,
        config::SWITCH_KEY
    );

    poll::run(&pin, keyboard)
}
