use zerocopy::{Immutable, KnownLayout, TryFromBytes};

use crate::pe::Architecture;

/// The first field of the optional header, telling `PE32` and `PE32+` layouts apart.
#[derive(Copy, Clone, Debug, Eq, PartialEq, TryFromBytes, Immutable, KnownLayout)]
#[repr(u16)]
pub enum Magic {
    #[doc(alias = "IMAGE_NT_OPTIONAL_HDR32_MAGIC")]
    ImageNtOptionalHdr32 = 0x10b_u16.to_le(),
    #[doc(alias = "IMAGE_NT_OPTIONAL_HDR64_MAGIC")]
    ImageNtOptionalHdr64 = 0x20b_u16.to_le(),
    #[doc(alias = "IMAGE_ROM_OPTIONAL_HDR_MAGIC")]
    ImageRomOptionalHdr = 0x107_u16.to_le(),
}

impl Magic {
    /// The magic an optional header must carry for an image of the given word size.
    #[inline]
    pub const fn for_architecture(architecture: Architecture) -> Self {
        match architecture {
            Architecture::Bits32 => Self::ImageNtOptionalHdr32,
            Architecture::Bits64 => Self::ImageNtOptionalHdr64,
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        u16::from_le(self as u16)
    }
}

#[cfg(test)]
mod tests {
    use zerocopy::TryFromBytes;

    use super::Magic;
    use crate::pe::Architecture;

    #[test]
    fn magic_values() {
        assert_eq!(Magic::for_architecture(Architecture::Bits32).get(), 0x10b);
        assert_eq!(Magic::for_architecture(Architecture::Bits64).get(), 0x20b);
        assert_eq!(
            Magic::try_read_from_bytes(&0x107_u16.to_le_bytes()).unwrap(),
            Magic::ImageRomOptionalHdr
        );
        assert!(Magic::try_read_from_bytes(&0x20c_u16.to_le_bytes()).is_err());
    }
}
