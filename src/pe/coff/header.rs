use zerocopy::{
    FromBytes, Immutable, KnownLayout,
    little_endian::{U16, U32},
};

use super::CoffCharacteristics;
use crate::{error::VersionError, pe::Architecture, read::ReadBytesExt};

/// In `winnt.h`, it's `IMAGE_FILE_HEADER`. COFF Header.
///
/// The COFF header follows the PE [`Signature`](crate::pe::Signature) and is followed by the
/// optional header, whose size it records.
#[doc(alias("IMAGE_FILE_HEADER"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct CoffHeader {
    #[doc(alias("Machine"))]
    machine: U16,

    #[doc(alias("NumberOfSections"))]
    number_of_sections: U16,

    #[doc(alias("TimeDateStamp"))]
    time_date_stamp: U32,

    #[doc(alias("PointerToSymbolTable"))]
    pointer_to_symbol_table: U32,

    #[doc(alias("NumberOfSymbols"))]
    number_of_symbols: U32,

    #[doc(alias("SizeOfOptionalHeader"))]
    size_of_optional_header: U16,

    #[doc(alias("Characteristics"))]
    characteristics: U16,
}

impl CoffHeader {
    /// Reads the COFF header that starts at `offset`.
    pub fn read_at(data: &[u8], offset: usize) -> Result<Self, VersionError> {
        data.read_t_at(offset, "COFF header")
    }

    /// The architecture type of the computer, one of the `IMAGE_FILE_MACHINE_*` constants or any
    /// other value.
    #[inline]
    pub const fn machine(&self) -> u16 {
        self.machine.get()
    }

    /// The number of entries in the section table, which immediately follows the optional
    /// header.
    #[inline]
    pub const fn number_of_sections(&self) -> u16 {
        self.number_of_sections.get()
    }

    #[inline]
    pub const fn time_date_stamp(&self) -> u32 {
        self.time_date_stamp.get()
    }

    #[inline]
    pub const fn pointer_to_symbol_table(&self) -> u32 {
        self.pointer_to_symbol_table.get()
    }

    #[inline]
    pub const fn number_of_symbols(&self) -> u32 {
        self.number_of_symbols.get()
    }

    /// The size of the optional header, in bytes.
    #[inline]
    pub const fn size_of_optional_header(&self) -> u16 {
        self.size_of_optional_header.get()
    }

    /// The [characteristics] of the image. Unknown bits are retained.
    ///
    /// [characteristics]: https://learn.microsoft.com/windows/win32/debug/pe-format#characteristics
    #[inline]
    pub const fn characteristics(&self) -> CoffCharacteristics {
        CoffCharacteristics::from_bits_retain(self.characteristics.get())
    }

    /// The word size the image declares through [`CoffCharacteristics::IMAGE_FILE_32BIT_MACHINE`].
    #[inline]
    pub const fn architecture(&self) -> Architecture {
        if self.characteristics().is_32bit_machine() {
            Architecture::Bits32
        } else {
            Architecture::Bits64
        }
    }
}
