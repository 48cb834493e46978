//! Register window types

use std::fs::File;

/// One mapped page of physical memory, plus the offset of the target
/// register block within it.
///
/// Holds the /dev/mem handle for the lifetime of the mapping; dropping
/// the window unmaps the page and closes the handle together. The poll
/// loop never returns, so in practice this runs only on setup-failure
/// paths; external termination skips it entirely.
pub struct RegisterWindow {
    #[allow(dead_code)] // held so the fd closes together with the mapping
    mem: File,
    base: *mut libc::c_void,
    len: usize,
    offset: usize,
}

impl RegisterWindow {
    pub(crate) fn new(mem: File, base: *mut libc::c_void, len: usize, offset: usize) -> Self {
        RegisterWindow {
            mem,
            base,
            len,
            offset,
        }
    }

    /// Raw pointer to the start of the register block inside the page.
    pub fn register_ptr(&self) -> *mut u8 {
        // offset < len by construction (it is addr & page_mask)
        unsafe { (self.base as *mut u8).add(self.offset) }
    }

}

impl Drop for RegisterWindow {
    fn drop(&mut self) {
        // SAFETY: base and len come from the successful mmap that built
        // this window. The File field drops right after, closing the fd.
        unsafe {
            libc::munmap(self.base, self.len);
        }
    }
}
