use zerocopy::{
    FromBytes, Immutable, KnownLayout, TryFromBytes,
    little_endian::{I32, U16},
};

use super::DosSignature;
use crate::error::VersionError;

/// In `winnt.h` and `pe.h`, it's `IMAGE_DOS_HEADER`. It's a DOS header present in all PE binaries.
///
/// Only two fields matter on Windows today: [`signature` (aka `e_magic`)](DosSignature) and
/// [`pe_pointer` (aka `e_lfanew`)](DosHeader::pe_pointer). The rest of the "formatted header" is
/// kept so the record lines up with the 64 bytes on disk.
#[doc(alias("IMAGE_DOS_HEADER"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Immutable, KnownLayout, FromBytes)]
#[repr(C)]
pub struct DosHeader {
    #[doc(alias("e_magic"))]
    signature: U16,

    #[doc(alias("e_cblp"))]
    bytes_on_last_page: U16,

    #[doc(alias("e_cp"))]
    pages_in_file: U16,

    #[doc(alias("e_crlc"))]
    relocations: U16,

    #[doc(alias("e_cparhdr"))]
    size_of_header_in_paragraphs: U16,

    #[doc(alias("e_minalloc"))]
    minimum_extra_paragraphs_needed: U16,

    #[doc(alias("e_maxalloc"))]
    maximum_extra_paragraphs_needed: U16,

    #[doc(alias("e_ss"))]
    initial_relative_ss: U16,

    #[doc(alias("e_sp"))]
    initial_sp: U16,

    #[doc(alias("e_csum"))]
    checksum: U16,

    #[doc(alias("e_ip"))]
    initial_ip: U16,

    #[doc(alias("e_cs"))]
    initial_relative_cs: U16,

    #[doc(alias("e_lfarlc"))]
    file_address_of_relocation_table: U16,

    #[doc(alias("e_ovno"))]
    overlay_number: U16,

    #[doc(alias("e_res"))]
    reserved: [U16; 4],

    #[doc(alias("e_oemid"))]
    oem_id: U16,

    #[doc(alias("e_oeminfo"))]
    oem_info: U16,

    #[doc(alias("e_res2"))]
    reserved2: [U16; 10],

    #[doc(alias("e_lfanew"))]
    pe_pointer: I32,
}

impl DosHeader {
    /// Reads the DOS header from the start of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::NotAPEImage`] if `data` does not start with `MZ`, or
    /// [`VersionError::TruncatedBuffer`] if it starts with `MZ` but is shorter than the header.
    pub fn read_from(data: &[u8]) -> Result<Self, VersionError> {
        DosSignature::try_read_from_prefix(data).map_err(|_| VersionError::NotAPEImage)?;

        Self::read_from_prefix(data)
            .map(|(header, _)| header)
            .map_err(|_| VersionError::truncated("DOS header", 0))
    }

    /// In `winnt.h` and `pe.h`, it's `e_magic`.
    #[inline]
    pub const fn signature(&self) -> u16 {
        self.signature.get()
    }

    /// In `winnt.h` and `pe.h`, it's `e_cblp`.
    #[inline]
    pub const fn bytes_on_last_page(&self) -> u16 {
        self.bytes_on_last_page.get()
    }

    /// In `winnt.h` and `pe.h`, it's `e_cp`.
    #[inline]
    pub const fn pages_in_file(&self) -> u16 {
        self.pages_in_file.get()
    }

    /// In `winnt.h` and `pe.h`, it's `e_lfarlc`.
    #[inline]
    pub const fn file_address_of_relocation_table(&self) -> u16 {
        self.file_address_of_relocation_table.get()
    }

    /// In `winnt.h` and `pe.h`, it's `e_lfanew`.
    ///
    /// The signed file offset of the PE signature. It is always positive in a well-formed image.
    #[inline]
    pub const fn pe_pointer(&self) -> i32 {
        self.pe_pointer.get()
    }
}
