use derive_more::Display;
use zerocopy::{
    Immutable, KnownLayout, LittleEndian, TryFromBytes, TryReadError, little_endian::U32,
};

use super::{FileOs, FileSubtype, FileType, VSFileFlags};
use crate::{
    error::{MalformedReason, VersionError},
    read::ReadBytesExt,
    version::Version,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, TryFromBytes, KnownLayout, Immutable)]
#[repr(u32)]
pub enum VsFixedFileInfoSignature {
    FEEF04BD = 0xFEEF_04BD_u32.to_le(),
}

/// The `dwStrucVersion` of `VS_FIXEDFILEINFO`: major in the high word, minor in the low word.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
#[display("{major}.{minor}")]
pub struct StructVersion {
    pub major: u16,
    pub minor: u16,
}

impl StructVersion {
    /// The only structure version ever defined.
    pub const V1_0: Self = Self { major: 1, minor: 0 };

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            major: (bits >> 16) as u16,
            minor: bits as u16,
        }
    }
}

/// Represents a [`VS_FIXEDFILEINFO`](https://docs.microsoft.com/en-us/windows/win32/api/verrsrc/ns-verrsrc-vs_fixedfileinfo) structure.
#[derive(Copy, Clone, Debug, Eq, PartialEq, TryFromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct VSFixedFileInfo {
    signature: VsFixedFileInfoSignature,
    struct_version: U32,
    file_version_ms: U32,
    file_version_ls: U32,
    product_version_ms: U32,
    product_version_ls: U32,
    file_flags_mask: U32,
    file_flags: U32,
    file_os: U32,
    file_type: U32,
    file_subtype: U32,
    file_date_ms: U32,
    file_date_ls: U32,
}

impl VSFixedFileInfo {
    pub const SIZE: usize = size_of::<Self>();

    /// Reads the structure at `offset`, requiring its signature and a 1.0 structure version.
    ///
    /// # Errors
    ///
    /// * [`VersionError::TruncatedBuffer`] if fewer than [`SIZE`](Self::SIZE) bytes remain.
    /// * [`VersionError::MalformedVersionBlock`] if the signature or structure version is wrong.
    pub fn read_at(data: &[u8], offset: usize) -> Result<Self, VersionError> {
        let bytes = data.slice_at(offset, Self::SIZE, "VS_FIXEDFILEINFO")?;

        // Only the signature can fail validation
        let info = Self::try_read_from_bytes(bytes).map_err(|error| match error {
            TryReadError::Validity(_) => bytes
                .read_u32_at::<LittleEndian>(0, "VS_FIXEDFILEINFO signature")
                .map_or_else(
                    |error| error,
                    |signature| MalformedReason::Signature(signature).into(),
                ),
            _ => VersionError::truncated("VS_FIXEDFILEINFO", offset),
        })?;

        if info.struct_version() != StructVersion::V1_0 {
            return Err(MalformedReason::StructVersion(info.struct_version()).into());
        }

        Ok(info)
    }

    #[inline]
    pub const fn signature(&self) -> u32 {
        u32::from_le(self.signature as u32)
    }

    #[inline]
    pub const fn struct_version(&self) -> StructVersion {
        StructVersion::from_bits(self.struct_version.get())
    }

    #[inline]
    pub const fn file_version(&self) -> Version {
        Version::from_words(self.file_version_ms.get(), self.file_version_ls.get())
    }

    #[inline]
    pub const fn product_version(&self) -> Version {
        Version::from_words(self.product_version_ms.get(), self.product_version_ls.get())
    }

    #[inline]
    pub const fn file_flags_mask(&self) -> VSFileFlags {
        VSFileFlags::from_bits_retain(self.file_flags_mask.get())
    }

    #[inline]
    pub const fn file_flags(&self) -> VSFileFlags {
        VSFileFlags::from_bits_retain(self.file_flags.get())
    }

    /// The file flags that the mask marks as valid.
    #[inline]
    pub const fn effective_file_flags(&self) -> VSFileFlags {
        self.file_flags().intersection(self.file_flags_mask())
    }

    #[inline]
    pub const fn file_os(&self) -> FileOs {
        FileOs::from_bits(self.file_os.get())
    }

    #[inline]
    pub const fn file_type(&self) -> FileType {
        FileType::from_bits(self.file_type.get())
    }

    #[inline]
    pub const fn file_subtype(&self) -> FileSubtype {
        FileSubtype::from_bits(self.file_subtype.get())
    }

    /// The 64-bit creation date, most significant half first. Usually zero.
    #[inline]
    pub const fn file_date(&self) -> u64 {
        ((self.file_date_ms.get() as u64) << 32) | self.file_date_ls.get() as u64
    }
}
