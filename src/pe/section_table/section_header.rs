use std::fmt;

use zerocopy::{
    FromBytes, Immutable, IntoBytes, KnownLayout,
    little_endian::{U16, U32},
};

use super::SectionCharacteristics;

#[doc(alias("IMAGE_SECTION_HEADER"))]
#[derive(Copy, Clone, Eq, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct SectionHeader {
    name: [u8; 8],
    virtual_size: U32,
    virtual_address: U32,
    size_of_raw_data: U32,
    pointer_to_raw_data: U32,
    pointer_to_relocations: U32,
    pointer_to_line_numbers: U32,
    number_of_relocations: U16,
    number_of_line_numbers: U16,
    characteristics: U32,
}

impl SectionHeader {
    pub const NAME_LENGTH: usize = 8;

    /// The name up to its first NUL. Names that are not UTF-8 come back empty.
    pub fn real_name(&self) -> &str {
        std::str::from_utf8(self.name_bytes()).unwrap_or_default()
    }

    #[inline]
    pub const fn raw_name(&self) -> [u8; 8] {
        self.name
    }

    /// The name bytes before the first NUL, or all eight if the name fills the field.
    pub fn name_bytes(&self) -> &[u8] {
        self.name
            .split(|&byte| byte == 0)
            .next()
            .unwrap_or(&self.name)
    }

    /// Compares the name field against `name` the way `strncmp(Name, name, 8)` does: at most
    /// eight bytes take part and the comparison stops at the first NUL.
    pub fn is_named(&self, name: &[u8]) -> bool {
        let name = &name[..name.len().min(Self::NAME_LENGTH)];
        let name = name.split(|&byte| byte == 0).next().unwrap_or(name);
        self.name_bytes() == name
    }

    #[inline]
    pub const fn virtual_size(&self) -> u32 {
        self.virtual_size.get()
    }

    #[inline]
    pub const fn virtual_address(&self) -> u32 {
        self.virtual_address.get()
    }

    #[inline]
    pub const fn size_of_raw_data(&self) -> u32 {
        self.size_of_raw_data.get()
    }

    #[inline]
    pub const fn pointer_to_raw_data(&self) -> u32 {
        self.pointer_to_raw_data.get()
    }

    #[inline]
    pub const fn pointer_to_relocations(&self) -> u32 {
        self.pointer_to_relocations.get()
    }

    #[inline]
    pub const fn pointer_to_line_numbers(&self) -> u32 {
        self.pointer_to_line_numbers.get()
    }

    #[inline]
    pub const fn number_of_relocations(&self) -> u16 {
        self.number_of_relocations.get()
    }

    #[inline]
    pub const fn number_of_line_numbers(&self) -> u16 {
        self.number_of_line_numbers.get()
    }

    #[inline]
    pub const fn characteristics(&self) -> SectionCharacteristics {
        SectionCharacteristics::from_bits_retain(self.characteristics.get())
    }

    /// Returns true if the section has raw data in the file.
    #[inline]
    pub const fn has_raw_data(&self) -> bool {
        self.pointer_to_raw_data() != 0 && self.size_of_raw_data() != 0
    }

    /// Returns true if `address` falls within the section once loaded.
    pub const fn contains_rva(&self, address: u32) -> bool {
        let start = self.virtual_address();
        let end = start.saturating_add(self.virtual_size());
        start <= address && address < end
    }
}

impl fmt::Debug for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("Name", &self.real_name())
            .field("Raw name", &self.raw_name())
            .field("VirtualSize", &self.virtual_size())
            .field("VirtualAddress", &self.virtual_address())
            .field("SizeOfRawData", &self.size_of_raw_data())
            .field("PointerToRawData", &self.pointer_to_raw_data())
            .field("PointerToRelocations", &self.pointer_to_relocations())
            .field("PointerToLinenumbers", &self.pointer_to_line_numbers())
            .field("NumberOfRelocations", &self.number_of_relocations())
            .field("NumberOfLinenumbers", &self.number_of_line_numbers())
            .field("Characteristics", &self.characteristics())
            .finish()
    }
}
