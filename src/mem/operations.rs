//! Window acquisition (privileged I/O)

use std::fs::OpenOptions;
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::ptr;

use super::pure::{page_base, page_offset};
use super::types::RegisterWindow;
use crate::error::{SetupError, SetupResult, classify_mem_open_error};

const MEM_DEVICE: &str = "/dev/mem";

/// Map the single page of physical memory covering `physical_address`.
///
/// Opens /dev/mem read-write in synchronous mode, which needs root; a
/// refusal surfaces as `SetupError::PermissionDenied`. The page size is
/// queried from the OS and exactly one shared page is mapped.
pub fn open_register_window(physical_address: u64) -> SetupResult<RegisterWindow> {
    let mem = OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_SYNC)
        .open(MEM_DEVICE)
        .map_err(classify_mem_open_error)?;

    // SAFETY: sysconf has no preconditions; _SC_PAGESIZE cannot fail.
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as u64;

    // SAFETY: mapping a fresh page-sized shared window over the fd we
    // just opened; the kernel validates the physical range.
    let base = unsafe {
        libc::mmap(
            ptr::null_mut(),
            page_size as usize,
            libc::PROT_READ | libc::PROT_WRITE,
            libc::MAP_SHARED,
            mem.as_raw_fd(),
            page_base(physical_address, page_size) as libc::off_t,
        )
    };
    if base == libc::MAP_FAILED {
        return Err(SetupError::MapFailed(io::Error::last_os_error()));
    }

    Ok(RegisterWindow::new(
        mem,
        base,
        page_size as usize,
        page_offset(physical_address, page_size) as usize,
    ))
}
