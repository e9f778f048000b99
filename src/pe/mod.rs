mod coff;
mod dos;
mod optional_header;
pub mod resource;
mod section_table;
mod signature;

pub use coff::*;
use derive_more::Display;
pub use dos::{DosHeader, DosSignature};
pub use optional_header::Magic;
pub use section_table::{SectionCharacteristics, SectionHeader, SectionTable};
pub use signature::Signature;
use tracing::{debug, trace};
use zerocopy::{LittleEndian, TryFromBytes};

use crate::{error::VersionError, pe::resource::ResourceDirectory, read::ReadBytesExt};

/// Name of the section holding the resource directory tree.
pub const RESOURCE_SECTION_NAME: &[u8; 8] = b".rsrc\0\0\0";

/// The word size an image declares in its COFF characteristics.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum Architecture {
    #[display("32-bit")]
    Bits32,
    #[display("64-bit")]
    Bits64,
}

/// The validated headers of a boot manager PE image together with its resource section.
///
/// Parsing checks the DOS and PE signatures, requires the optional header magic to agree with
/// the word size given by the COFF characteristics, and locates the `.rsrc` section. Nothing is
/// copied out of `data` apart from the fixed-size headers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BootManagerImage<'data> {
    data: &'data [u8],
    dos_header: DosHeader,
    coff_header: CoffHeader,
    optional_header_magic: Magic,
    section_table: SectionTable<'data>,
    resource_section: &'data SectionHeader,
}

impl<'data> BootManagerImage<'data> {
    /// Validates the container headers in `data` and locates the resource section.
    ///
    /// # Errors
    ///
    /// * [`VersionError::NotAPEImage`] if the DOS or PE signature is missing.
    /// * [`VersionError::InconsistentArchitecture`] if the optional header magic is not the one
    ///   the COFF characteristics call for.
    /// * [`VersionError::ResourceSectionMissing`] if there is no `.rsrc` section with raw data.
    /// * [`VersionError::TruncatedBuffer`] if any header lies past the end of `data`.
    pub fn parse(data: &'data [u8]) -> Result<Self, VersionError> {
        let dos_header = DosHeader::read_from(data)?;

        // A negative e_lfanew cannot locate a PE header
        let pe_offset =
            usize::try_from(dos_header.pe_pointer()).map_err(|_| VersionError::NotAPEImage)?;
        trace!(pe_offset);

        let signature_bytes = data.slice_at(pe_offset, size_of::<Signature>(), "PE signature")?;
        Signature::try_read_from_bytes(signature_bytes).map_err(|_| VersionError::NotAPEImage)?;

        let coff_offset = pe_offset + size_of::<Signature>();
        let coff_header = CoffHeader::read_at(data, coff_offset)?;
        debug!(?coff_header);

        let optional_header_offset = coff_offset + size_of::<CoffHeader>();
        let optional_header_magic = Self::read_magic(data, optional_header_offset, &coff_header)?;

        let section_table = SectionTable::read_at(
            data,
            optional_header_offset + usize::from(coff_header.size_of_optional_header()),
            coff_header.number_of_sections(),
        )?;

        let resource_section = section_table
            .find_section(RESOURCE_SECTION_NAME)
            .filter(|section| section.has_raw_data())
            .ok_or(VersionError::ResourceSectionMissing)?;
        debug!(?resource_section);

        Ok(Self {
            data,
            dos_header,
            coff_header,
            optional_header_magic,
            section_table,
            resource_section,
        })
    }

    fn read_magic(
        data: &[u8],
        offset: usize,
        coff_header: &CoffHeader,
    ) -> Result<Magic, VersionError> {
        let architecture = coff_header.architecture();
        let expected = Magic::for_architecture(architecture);
        let magic = data.read_u16_at::<LittleEndian>(offset, "optional header magic")?;

        if magic == expected.get() {
            Ok(expected)
        } else {
            Err(VersionError::InconsistentArchitecture {
                architecture,
                magic,
            })
        }
    }

    #[inline]
    pub const fn dos_header(&self) -> &DosHeader {
        &self.dos_header
    }

    #[inline]
    pub const fn coff_header(&self) -> &CoffHeader {
        &self.coff_header
    }

    #[inline]
    pub const fn optional_header_magic(&self) -> Magic {
        self.optional_header_magic
    }

    #[inline]
    pub const fn architecture(&self) -> Architecture {
        self.coff_header.architecture()
    }

    #[inline]
    pub const fn machine(&self) -> u16 {
        self.coff_header.machine()
    }

    #[inline]
    pub const fn section_table(&self) -> SectionTable<'data> {
        self.section_table
    }

    #[inline]
    pub const fn resource_section(&self) -> &'data SectionHeader {
        self.resource_section
    }

    /// Borrows the raw data of the resource section, cut short at the end of the image if its
    /// file-aligned size runs past it.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TruncatedBuffer`] if the section starts past the end of the image.
    pub fn resource_section_data(&self) -> Result<&'data [u8], VersionError> {
        let pointer = self.resource_section.pointer_to_raw_data() as usize;
        let size = self.resource_section.size_of_raw_data() as usize;

        self.data
            .get(pointer..)
            .map(|rest| &rest[..rest.len().min(size)])
            .ok_or_else(|| VersionError::truncated("resource section", pointer))
    }

    /// Opens the resource directory at the start of the resource section.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TruncatedBuffer`] if the section or its directory header does not
    /// fit inside the image.
    pub fn resource_directory(&self) -> Result<ResourceDirectory<'data>, VersionError> {
        ResourceDirectory::new(
            self.resource_section_data()?,
            self.resource_section.virtual_address(),
        )
    }
}
