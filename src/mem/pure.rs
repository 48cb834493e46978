//! Page-alignment math (pure functions)
//!
//! The page size comes from the OS at runtime, never hard-coded, so
//! both helpers take it as a parameter.

/// Page-aligned base address of the page covering `addr`.
pub fn page_base(addr: u64, page_size: u64) -> u64 {
    addr & !(page_size - 1)
}

/// Byte offset of `addr` within its page.
pub fn page_offset(addr: u64, page_size: u64) -> u64 {
    addr & (page_size - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: u64 = 4096;

    #[test]
    fn aligned_address_is_its_own_base() {
        assert_eq!(page_base(0x6000_d000, PAGE), 0x6000_d000);
        assert_eq!(page_offset(0x6000_d000, PAGE), 0);
    }

    #[test]
    fn unaligned_address_splits_into_base_and_offset() {
        assert_eq!(page_base(0x6000_d204, PAGE), 0x6000_d000);
        assert_eq!(page_offset(0x6000_d204, PAGE), 0x204);
    }

    #[test]
    fn base_plus_offset_reconstructs_the_address() {
        for addr in [0u64, 1, 0xfff, 0x1000, 0x6000_d204, u64::MAX - 0xfff] {
            assert_eq!(page_base(addr, PAGE) + page_offset(addr, PAGE), addr);
        }
    }

    #[test]
    fn respects_larger_page_sizes() {
        // 64 KiB pages exist on some arm64 kernels
        const BIG: u64 = 0x10000;
        assert_eq!(page_base(0x6000_d204, BIG), 0x6000_0000);
        assert_eq!(page_offset(0x6000_d204, BIG), 0xd204);
    }
}
