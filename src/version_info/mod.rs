mod vs_file_flags;
mod vs_file_os;
mod vs_file_type;
mod vs_fixed_file_info;
mod vs_header;

use tracing::trace;
pub use vs_file_flags::VSFileFlags;
pub use vs_file_os::FileOs;
pub use vs_file_type::{FileSubtype, FileType};
pub use vs_fixed_file_info::{StructVersion, VSFixedFileInfo, VsFixedFileInfoSignature};
pub use vs_header::{VSHeader, VsValueType};

use crate::{
    error::{MalformedReason, VersionError},
    utils::align,
    version::Version,
};

/// The key of the root block of every version resource.
pub const VS_VERSION_INFO_KEY: &str = "VS_VERSION_INFO";

/// Represents the root [`VS_VERSIONINFO`](https://docs.microsoft.com/en-us/windows/win32/menurc/vs-versioninfo)
/// block and its fixed value.
///
/// The `StringFileInfo` and `VarFileInfo` children that follow the value are left unread.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VSVersionInfo<'data> {
    pub header: VSHeader<'data>,
    pub value: VSFixedFileInfo,
}

impl<'data> VSVersionInfo<'data> {
    /// Parses the version block at the start of `data`, the bytes of a version resource.
    ///
    /// # Errors
    ///
    /// * [`VersionError::MalformedVersionBlock`] if the key is not `VS_VERSION_INFO`, the value is
    ///   not a binary `VS_FIXEDFILEINFO`, or that structure's signature or version is wrong.
    /// * [`VersionError::TruncatedBuffer`] if the block runs past the end of `data`.
    pub fn parse(data: &'data [u8]) -> Result<Self, VersionError> {
        let (offset, header) = VSHeader::parse(data, 0)?;
        trace!(?header, offset);

        if !header.is_key(VS_VERSION_INFO_KEY) {
            return Err(MalformedReason::Key.into());
        }

        if header.value_type != VsValueType::Binary {
            return Err(MalformedReason::ValueType(header.value_type.into()).into());
        }

        if usize::from(header.value_length) != VSFixedFileInfo::SIZE {
            return Err(MalformedReason::ValueLength(header.value_length).into());
        }

        // The padding between the key and the value is not checked
        let value_offset = align(offset, size_of::<u32>())
            .ok_or_else(|| VersionError::truncated("VS_FIXEDFILEINFO", offset))?;

        Ok(Self {
            header,
            value: VSFixedFileInfo::read_at(data, value_offset)?,
        })
    }

    #[inline]
    pub const fn file_version(&self) -> Version {
        self.value.file_version()
    }

    #[inline]
    pub const fn product_version(&self) -> Version {
        self.value.product_version()
    }
}
