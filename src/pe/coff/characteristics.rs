use bitflags::bitflags;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct CoffCharacteristics(u16);

bitflags! {
    impl CoffCharacteristics: u16 {
        /// The file does not contain base relocations and must be loaded at its preferred base
        /// address.
        const IMAGE_FILE_RELOCS_STRIPPED = 1;

        /// The image file is valid and can be run.
        const IMAGE_FILE_EXECUTABLE_IMAGE = 1 << 1;

        /// COFF line numbers have been removed. Deprecated and should be zero.
        const IMAGE_FILE_LINE_NUMS_STRIPPED = 1 << 2;

        /// COFF symbol table entries for local symbols have been removed. Deprecated and should be
        /// zero.
        const IMAGE_FILE_LOCAL_SYMS_STRIPPED = 1 << 3;

        /// Obsolete. Aggressively trim working set.
        const IMAGE_FILE_AGGRESSIVE_WS_TRIM = 1 << 4;

        /// Application can handle > 2-GB addresses.
        const IMAGE_FILE_LARGE_ADDRESS_AWARE = 1 << 5;

        /// Reserved for future use.
        const RESERVED = 1 << 6;

        /// Little endian. Deprecated and should be zero.
        const IMAGE_FILE_BYTES_REVERSED_LO = 1 << 7;

        /// Machine is based on a 32-bit-word architecture.
        ///
        /// When this bit is clear the image is expected to carry a PE32+ optional header.
        const IMAGE_FILE_32BIT_MACHINE = 1 << 8;

        /// Debugging information is removed from the image file.
        const IMAGE_FILE_DEBUG_STRIPPED = 1 << 9;

        /// If the image is on removable media, fully load it and copy it to the swap file.
        const IMAGE_FILE_REMOVABLE_RUN_FROM_SWAP = 1 << 10;

        /// If the image is on network media, fully load it and copy it to the swap file.
        const IMAGE_FILE_NET_RUN_FROM_SWAP = 1 << 11;

        /// The image file is a system file, not a user program.
        const IMAGE_FILE_SYSTEM = 1 << 12;

        /// The image file is a dynamic-link library (DLL).
        const IMAGE_FILE_DLL = 1 << 13;

        /// The file should be run only on a uniprocessor machine.
        const IMAGE_FILE_UP_SYSTEM_ONLY = 1 << 14;

        /// Big endian. Deprecated and should be zero.
        const IMAGE_FILE_BYTES_REVERSED_HI = 1 << 15;
    }
}

impl CoffCharacteristics {
    /// Returns true if the image declares a 32-bit word machine.
    #[inline]
    pub const fn is_32bit_machine(self) -> bool {
        self.contains(Self::IMAGE_FILE_32BIT_MACHINE)
    }
}
