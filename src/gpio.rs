//! GPIO pin controller
//!
//! Typed view over one Tegra GPIO port's register block, reached through
//! the /dev/mem window. Hardware mutates these registers outside our
//! control, so every access goes through a volatile read or write.

use std::ptr;

// Register values for input sensing on the monitored port.
const CNF_GPIO_MODE: u32 = 0x00ff; // all 8 port bits in GPIO (not SFIO) function
const OE_ALL_INPUT: u32 = 0x0000;
const INT_DISABLE_ALL: u32 = 0x0000;
const INT_STA_CLEAR_ALL: u32 = 0x00ff;
const INT_LVL_EDGE_BOTH: u32 = 0x0001_0100; // edge-triggered, both edges
const INT_CLR_ALL: u32 = 0x00ff_ffff;

/// One GPIO port's control/status registers.
#[repr(C)]
pub struct GpioRegisters {
    cnf: u32,
    oe: u32,
    input: u32,
    int_enb: u32,
    int_sta: u32,
    int_lvl: u32,
    int_clr: u32,
}

/// Handle to one port's register block.
pub struct PinController {
    regs: *mut GpioRegisters,
}

impl PinController {
    /// # Safety
    ///
    /// `regs` must point at a mapped GPIO register block and the mapping
    /// must outlive the controller.
    pub unsafe fn new(regs: *mut GpioRegisters) -> Self {
        PinController { regs }
    }

    /// Put the port into input sensing: GPIO function on every bit,
    /// output drivers off, interrupt sources disabled with any stale
    /// status cleared, trigger level parked on both-edges. We poll
    /// instead of taking interrupts, but stale interrupt state must not
    /// be left behind.
    pub fn configure_as_input(&self) {
        unsafe {
            ptr::write_volatile(&raw mut (*self.regs).cnf, CNF_GPIO_MODE);
            ptr::write_volatile(&raw mut (*self.regs).oe, OE_ALL_INPUT);
            ptr::write_volatile(&raw mut (*self.regs).int_enb, INT_DISABLE_ALL);
            ptr::write_volatile(&raw mut (*self.regs).int_sta, INT_STA_CLEAR_ALL);
            ptr::write_volatile(&raw mut (*self.regs).int_lvl, INT_LVL_EDGE_BOTH);
            ptr::write_volatile(&raw mut (*self.regs).int_clr, INT_CLR_ALL);
        }
    }

    /// Sample the pin's electrical level. Whole-word volatile read; the
    /// value changes with external activity between any two calls.
    pub fn read_input_bit(&self, pin_bit: u32) -> bool {
        let word = unsafe { ptr::read_volatile(&raw const (*self.regs).input) };
        input_bit(word, pin_bit)
    }
}

/// Extract one pin's level from an input-register word.
pub fn input_bit(word: u32, bit: u32) -> bool {
    (word >> bit) & 1 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_bit_extracts_the_addressed_bit() {
        assert!(input_bit(0b10_0000, 5));
        assert!(!input_bit(0b01_0000, 5));
        assert!(!input_bit(0, 5));
        assert!(input_bit(1, 0));
    }

    #[test]
    fn input_bit_ignores_neighbouring_bits() {
        assert!(input_bit(0xffff_ffff, 5));
        assert!(!input_bit(0xffff_ffdf, 5));
        assert!(input_bit(0x0000_0020, 5));
    }

    #[test]
    fn register_block_has_the_hardware_layout() {
        // seven 32-bit registers, 4 bytes apart, no padding
        assert_eq!(std::mem::size_of::<GpioRegisters>(), 28);
        assert_eq!(std::mem::offset_of!(GpioRegisters, cnf), 0x00);
        assert_eq!(std::mem::offset_of!(GpioRegisters, input), 0x08);
        assert_eq!(std::mem::offset_of!(GpioRegisters, int_clr), 0x18);
    }
}
