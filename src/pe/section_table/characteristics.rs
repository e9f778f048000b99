use bitflags::bitflags;

/// `IMAGE_SCN_*` flags of a [`SectionHeader`](super::SectionHeader).
///
/// Bits 20 to 23 are not flags but a 4-bit alignment code, see
/// [`alignment`](SectionCharacteristics::alignment).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct SectionCharacteristics(u32);

bitflags! {
    impl SectionCharacteristics: u32 {
        /// The section should not be padded to the next boundary. Object files only.
        const IMAGE_SCN_TYPE_NO_PAD = 0x0000_0008;

        /// The section contains executable code.
        const IMAGE_SCN_CNT_CODE = 0x0000_0020;

        /// The section contains initialized data.
        const IMAGE_SCN_CNT_INITIALIZED_DATA = 0x0000_0040;

        /// The section contains uninitialized data.
        const IMAGE_SCN_CNT_UNINITIALIZED_DATA = 0x0000_0080;

        const IMAGE_SCN_LNK_OTHER = 0x0000_0100;

        /// The section contains comments or other information. Object files only.
        const IMAGE_SCN_LNK_INFO = 0x0000_0200;

        /// The section will not become part of the image. Object files only.
        const IMAGE_SCN_LNK_REMOVE = 0x0000_0800;

        /// The section contains COMDAT data. Object files only.
        const IMAGE_SCN_LNK_COMDAT = 0x0000_1000;

        /// Reset speculative exceptions handling bits in the TLB entries for this section.
        const IMAGE_SCN_NO_DEFER_SPEC_EXC = 0x0000_4000;

        /// The section contains data referenced through the global pointer. Shares its bit with
        /// `IMAGE_SCN_MEM_FARDATA`.
        const IMAGE_SCN_GPREL = 0x0000_8000;

        /// Shares its bit with `IMAGE_SCN_MEM_16BIT`.
        const IMAGE_SCN_MEM_PURGEABLE = 0x0002_0000;

        const IMAGE_SCN_MEM_LOCKED = 0x0004_0000;

        const IMAGE_SCN_MEM_PRELOAD = 0x0008_0000;

        /// The 4-bit alignment code.
        const IMAGE_SCN_ALIGN_MASK = 0x00F0_0000;

        /// The section contains extended relocations.
        const IMAGE_SCN_LNK_NRELOC_OVFL = 0x0100_0000;

        /// The section can be discarded as needed.
        const IMAGE_SCN_MEM_DISCARDABLE = 0x0200_0000;

        /// The section cannot be cached.
        const IMAGE_SCN_MEM_NOT_CACHED = 0x0400_0000;

        /// The section is not pageable.
        const IMAGE_SCN_MEM_NOT_PAGED = 0x0800_0000;

        /// The section can be shared in memory.
        const IMAGE_SCN_MEM_SHARED = 0x1000_0000;

        /// The section can be executed as code.
        const IMAGE_SCN_MEM_EXECUTE = 0x2000_0000;

        /// The section can be read.
        const IMAGE_SCN_MEM_READ = 0x4000_0000;

        /// The section can be written to.
        const IMAGE_SCN_MEM_WRITE = 0x8000_0000;
    }
}

impl SectionCharacteristics {
    const ALIGN_SHIFT: u32 = 20;

    /// Decodes the `IMAGE_SCN_ALIGN_*BYTES` code into a byte boundary.
    ///
    /// Codes 1 through 14 map to 1 through 8192 bytes. `None` means no code is set, or the unused
    /// code 15 is.
    pub const fn alignment(self) -> Option<u32> {
        match (self.bits() & Self::IMAGE_SCN_ALIGN_MASK.bits()) >> Self::ALIGN_SHIFT {
            code @ 1..=14 => Some(1 << (code - 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::SectionCharacteristics;

    #[rstest]
    #[case(0, None)]
    #[case(0x0010_0000, Some(1))]
    #[case(0x0050_0000, Some(16))]
    #[case(0x00E0_0000, Some(8192))]
    #[case(0x00F0_0000, None)]
    #[case(0x4050_0040, Some(16))]
    fn alignment_code(#[case] bits: u32, #[case] expected: Option<u32>) {
        assert_eq!(
            SectionCharacteristics::from_bits_retain(bits).alignment(),
            expected
        );
    }

    #[test]
    fn resource_section_flags() {
        let characteristics = SectionCharacteristics::from_bits_retain(0x4000_0040);
        assert!(characteristics.contains(
            SectionCharacteristics::IMAGE_SCN_CNT_INITIALIZED_DATA
                | SectionCharacteristics::IMAGE_SCN_MEM_READ
        ));
        assert!(!characteristics.contains(SectionCharacteristics::IMAGE_SCN_MEM_WRITE));
    }

    #[test]
    fn unknown_bits_are_retained() {
        assert_eq!(SectionCharacteristics::from_bits_retain(0x1).bits(), 0x1);
    }
}
