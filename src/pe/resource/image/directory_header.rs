use zerocopy::{
    FromBytes, Immutable, KnownLayout,
    little_endian::{U16, U32},
};

#[doc(alias("IMAGE_RESOURCE_DIRECTORY"))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ImageResourceDirectory {
    characteristics: U32,
    time_date_stamp: U32,
    major_version: U16,
    minor_version: U16,
    number_of_name_entries: U16,
    number_of_id_entries: U16,
}

impl ImageResourceDirectory {
    #[inline]
    pub const fn characteristics(&self) -> u32 {
        self.characteristics.get()
    }

    #[inline]
    pub const fn time_date_stamp(&self) -> u32 {
        self.time_date_stamp.get()
    }

    #[inline]
    pub const fn major_version(&self) -> u16 {
        self.major_version.get()
    }

    #[inline]
    pub const fn minor_version(&self) -> u16 {
        self.minor_version.get()
    }

    #[inline]
    pub const fn number_of_name_entries(&self) -> u16 {
        self.number_of_name_entries.get()
    }

    #[inline]
    pub const fn number_of_id_entries(&self) -> u16 {
        self.number_of_id_entries.get()
    }

    /// The number of entries that immediately follow this header, named entries first.
    #[inline]
    pub const fn number_of_entries(&self) -> u32 {
        self.number_of_name_entries() as u32 + self.number_of_id_entries() as u32
    }
}
