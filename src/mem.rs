//! Physical register window
//!
//! Maps the single page of /dev/mem that contains the GPIO controller's
//! register block into our address space.
//!
//! ## Module Structure
//! - `types.rs`: RegisterWindow (mapping + fd, released together on drop)
//! - `pure.rs`: page-alignment math
//! - `operations.rs`: the privileged open + mmap

mod operations;
mod pure;
mod types;

pub use operations::open_register_window;
pub use types::RegisterWindow;
