use thiserror::Error;

use crate::{pe::Architecture, version_info::StructVersion};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionError {
    #[error("File is not a PE image")]
    NotAPEImage,
    #[error("{architecture} image has optional header magic {magic:#06X}")]
    InconsistentArchitecture {
        architecture: Architecture,
        magic: u16,
    },
    #[error("No usable .rsrc section was found")]
    ResourceSectionMissing,
    #[error("Resource directory has no entries")]
    EmptyResourceDirectory,
    #[error("Resource directory entry points to a subdirectory")]
    UnexpectedNestedDirectory,
    #[error("Malformed VS_VERSIONINFO block: {0}")]
    MalformedVersionBlock(MalformedReason),
    #[error("Buffer is too short for the {structure} at offset {offset:#X}")]
    TruncatedBuffer {
        structure: &'static str,
        offset: usize,
    },
}

impl VersionError {
    #[inline]
    pub(crate) const fn truncated(structure: &'static str, offset: usize) -> Self {
        Self::TruncatedBuffer { structure, offset }
    }
}

/// Which check of the root `VS_VERSIONINFO` block failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("key is not VS_VERSION_INFO")]
    Key,
    #[error("value type {0} is not binary")]
    ValueType(u16),
    #[error("value length {0} is not the size of VS_FIXEDFILEINFO")]
    ValueLength(u16),
    #[error("VS_FIXEDFILEINFO signature {0:#010X} is not 0xFEEF04BD")]
    Signature(u32),
    #[error("VS_FIXEDFILEINFO structure version {0} is not 1.0")]
    StructVersion(StructVersion),
}

impl From<MalformedReason> for VersionError {
    #[inline]
    fn from(reason: MalformedReason) -> Self {
        Self::MalformedVersionBlock(reason)
    }
}
