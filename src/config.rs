//! Board and device constants
//!
//! Everything here is fixed at compile time: which register block we
//! watch, which bit of it is wired to the switch, and how the synthetic
//! keyboard identifies itself to the input layer.

use evdev::KeyCode;

/// Physical address of the monitored GPIO port's register block
/// (Tegra X1 GPIO controller 3, port J, reachable as Linux gpio 77).
pub const GPIO_CONTROLLER_BASE: u64 = 0x6000_d204;

/// Bit of the input-value register wired to the switch (gpio 77 = port J, bit 5).
pub const PIN_BIT: u32 = 5;

/// The one key the synthetic keyboard declares and emits.
pub const SWITCH_KEY: KeyCode = KeyCode::KEY_A;

/// Identifying metadata for the virtual device.
pub const VENDOR_ID: u16 = 0x1234;
pub const PRODUCT_ID: u16 = 0x5678;
pub const DEVICE_NAME: &str = "Jetson GPIO";
