use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, little_endian::U32};

pub const IMAGE_RESOURCE_NAME_IS_STRING: u32 = 0x8000_0000;

pub const IMAGE_RESOURCE_DATA_IS_DIRECTORY: u32 = 0x8000_0000;

#[doc(alias("IMAGE_RESOURCE_DIRECTORY_ENTRY"))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ImageResourceDirectoryEntry {
    name_or_id: U32,
    offset_to_data_or_directory: U32,
}

impl ImageResourceDirectoryEntry {
    #[inline]
    pub const fn name_or_id(self) -> u32 {
        self.name_or_id.get()
    }

    pub const fn has_name(self) -> bool {
        self.name_or_id() & IMAGE_RESOURCE_NAME_IS_STRING != 0
    }

    /// The integer identifier of the entry, if it is not named.
    pub const fn id(self) -> Option<u16> {
        if self.has_name() {
            None
        } else {
            Some(self.name_or_id() as u16)
        }
    }

    /// Returns the section offset of the name. Valid if [`has_name`](Self::has_name) returns true.
    pub const fn name_offset(self) -> u32 {
        self.name_or_id() & !IMAGE_RESOURCE_NAME_IS_STRING
    }

    #[inline]
    const fn offset_to_data_or_directory(self) -> u32 {
        self.offset_to_data_or_directory.get()
    }

    /// Returns true if the entry points at a subdirectory rather than a data entry.
    pub const fn is_table(self) -> bool {
        self.offset_to_data_or_directory() & IMAGE_RESOURCE_DATA_IS_DIRECTORY != 0
    }

    /// Returns the section offset of the associated table or data.
    pub const fn data_offset(self) -> u32 {
        self.offset_to_data_or_directory() & !IMAGE_RESOURCE_DATA_IS_DIRECTORY
    }
}
