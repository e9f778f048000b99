use tracing::{debug, trace};

use super::{
    ImageResourceDataEntry, ImageResourceDirectory, ImageResourceDirectoryEntry, ResourceType,
};
use crate::{error::VersionError, read::ReadBytesExt};

/// The root of a resource section shaped like the boot manager's: a single directory level whose
/// first entry is the version resource's data entry.
///
/// Offsets inside the directory are relative to the start of the section. Data entries, however,
/// hold an RVA. It is turned into a section offset by subtracting the section's virtual address,
/// which only holds when the section's file layout mirrors its loaded layout one-to-one. That is
/// the case for the boot manager's embedded image, and this type makes no attempt at general
/// loader semantics.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ResourceDirectory<'data> {
    section: &'data [u8],
    virtual_address: u32,
    header: ImageResourceDirectory,
}

impl<'data> ResourceDirectory<'data> {
    /// Reads the root directory header at the start of `section`, the raw data of a section loaded
    /// at `virtual_address`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TruncatedBuffer`] if the section is too small for the header.
    pub fn new(section: &'data [u8], virtual_address: u32) -> Result<Self, VersionError> {
        let header = section.read_t_at::<ImageResourceDirectory>(0, "resource directory")?;
        trace!(?header);

        Ok(Self {
            section,
            virtual_address,
            header,
        })
    }

    #[inline]
    pub const fn header(&self) -> &ImageResourceDirectory {
        &self.header
    }

    #[inline]
    pub const fn section(&self) -> &'data [u8] {
        self.section
    }

    /// Returns the entry that immediately follows the directory header.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::EmptyResourceDirectory`] if the header counts no entries at all.
    pub fn first_entry(&self) -> Result<ImageResourceDirectoryEntry, VersionError> {
        if self.header.number_of_entries() == 0 {
            return Err(VersionError::EmptyResourceDirectory);
        }

        let entry = self.section.read_t_at::<ImageResourceDirectoryEntry>(
            size_of::<ImageResourceDirectory>(),
            "resource directory entry",
        )?;
        trace!(
            ?entry,
            resource_type = ?entry.id().and_then(ResourceType::from_id)
        );

        Ok(entry)
    }

    /// Reads the data entry a directory entry points at.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::UnexpectedNestedDirectory`] if the entry points at a subdirectory.
    pub fn data_entry(
        &self,
        entry: ImageResourceDirectoryEntry,
    ) -> Result<ImageResourceDataEntry, VersionError> {
        if entry.is_table() {
            return Err(VersionError::UnexpectedNestedDirectory);
        }

        self.section.read_t_at(entry.data_offset() as usize, "resource data entry")
    }

    /// Borrows the bytes a data entry describes.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TruncatedBuffer`] if the RVA lies before the section or the data
    /// runs past its end.
    pub fn resource_data(
        &self,
        data_entry: ImageResourceDataEntry,
    ) -> Result<&'data [u8], VersionError> {
        let rva = data_entry.offset_to_data();
        let offset = rva
            .checked_sub(self.virtual_address)
            .ok_or_else(|| VersionError::truncated("resource data", rva as usize))?;
        trace!(rva, offset, size = data_entry.size());

        self.section
            .slice_at(offset as usize, data_entry.size() as usize, "resource data")
    }

    /// Borrows the data of the first, and only, resource in the directory.
    ///
    /// # Errors
    ///
    /// See [`first_entry`](Self::first_entry), [`data_entry`](Self::data_entry) and
    /// [`resource_data`](Self::resource_data).
    pub fn version_resource(&self) -> Result<&'data [u8], VersionError> {
        let data_entry = self.data_entry(self.first_entry()?)?;
        debug!(?data_entry);

        self.resource_data(data_entry)
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceDirectory;
    use crate::error::VersionError;

    const VIRTUAL_ADDRESS: u32 = 0x4000;

    fn section(entries: u16, offset_to_data: u32, rva: u32, size: u32) -> Vec<u8> {
        let mut data = vec![0; 12];
        data.extend_from_slice(&0_u16.to_le_bytes());
        data.extend_from_slice(&entries.to_le_bytes());
        data.extend_from_slice(&16_u32.to_le_bytes());
        data.extend_from_slice(&offset_to_data.to_le_bytes());
        data.extend_from_slice(&rva.to_le_bytes());
        data.extend_from_slice(&size.to_le_bytes());
        data.extend_from_slice(&[0; 8]);
        data.extend_from_slice(b"resource");
        data
    }

    #[test]
    fn locates_resource_bytes() {
        let data = section(1, 0x18, VIRTUAL_ADDRESS + 0x28, 8);
        let directory = ResourceDirectory::new(&data, VIRTUAL_ADDRESS).unwrap();

        assert_eq!(directory.header().number_of_id_entries(), 1);
        assert_eq!(directory.version_resource().unwrap(), b"resource");
    }

    #[test]
    fn named_entries_count_too() {
        let mut data = section(0, 0x18, VIRTUAL_ADDRESS + 0x28, 8);
        data[12..14].copy_from_slice(&1_u16.to_le_bytes());
        let directory = ResourceDirectory::new(&data, VIRTUAL_ADDRESS).unwrap();

        assert_eq!(directory.version_resource().unwrap(), b"resource");
    }

    #[test]
    fn empty_directory() {
        let data = section(0, 0x18, VIRTUAL_ADDRESS + 0x28, 8);
        let directory = ResourceDirectory::new(&data, VIRTUAL_ADDRESS).unwrap();

        assert!(matches!(
            directory.version_resource(),
            Err(VersionError::EmptyResourceDirectory)
        ));
    }

    #[test]
    fn nested_directory() {
        let data = section(1, 0x8000_0018, VIRTUAL_ADDRESS + 0x28, 8);
        let directory = ResourceDirectory::new(&data, VIRTUAL_ADDRESS).unwrap();

        assert!(matches!(
            directory.version_resource(),
            Err(VersionError::UnexpectedNestedDirectory)
        ));
    }

    #[test]
    fn rva_before_section_is_truncated() {
        let data = section(1, 0x18, VIRTUAL_ADDRESS - 1, 8);
        let directory = ResourceDirectory::new(&data, VIRTUAL_ADDRESS).unwrap();

        assert!(matches!(
            directory.version_resource(),
            Err(VersionError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn data_past_section_end_is_truncated() {
        let data = section(1, 0x18, VIRTUAL_ADDRESS + 0x28, 9);
        let directory = ResourceDirectory::new(&data, VIRTUAL_ADDRESS).unwrap();

        assert!(matches!(
            directory.version_resource(),
            Err(VersionError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn data_entry_past_section_end_is_truncated() {
        let data = section(1, 0x30, VIRTUAL_ADDRESS + 0x28, 8);
        let directory = ResourceDirectory::new(&data, VIRTUAL_ADDRESS).unwrap();

        assert!(matches!(
            directory.version_resource(),
            Err(VersionError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn header_past_section_end_is_truncated() {
        assert!(matches!(
            ResourceDirectory::new(&[0; 15], VIRTUAL_ADDRESS),
            Err(VersionError::TruncatedBuffer { .. })
        ));
    }
}
