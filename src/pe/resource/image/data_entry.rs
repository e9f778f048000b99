use zerocopy::{FromBytes, Immutable, KnownLayout, little_endian::U32};

// Each resource data entry describes a leaf node in the resource directory tree: where the bytes
// of the resource live, how many there are, and the code page used for any text inside them.

#[doc(alias("IMAGE_RESOURCE_DATA_ENTRY"))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ImageResourceDataEntry {
    /// RVA of the data.
    offset_to_data: U32,
    size: U32,
    codepage: U32,
    reserved: U32,
}

impl ImageResourceDataEntry {
    #[inline]
    pub const fn offset_to_data(&self) -> u32 {
        self.offset_to_data.get()
    }

    #[inline]
    pub const fn size(&self) -> u32 {
        self.size.get()
    }

    #[inline]
    pub const fn codepage(&self) -> u32 {
        self.codepage.get()
    }

    #[inline]
    pub const fn reserved(&self) -> u32 {
        self.reserved.get()
    }
}
