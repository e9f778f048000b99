mod characteristics;
mod section_header;

pub use characteristics::SectionCharacteristics;
pub use section_header::SectionHeader;
use tracing::trace;
use zerocopy::FromBytes;

use crate::error::VersionError;

/// The section table, borrowed straight out of the image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct SectionTable<'data>(&'data [SectionHeader]);

impl<'data> SectionTable<'data> {
    /// Borrows `number_of_sections` headers starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TruncatedBuffer`] if the table does not fit inside `data`.
    pub fn read_at(
        data: &'data [u8],
        offset: usize,
        number_of_sections: u16,
    ) -> Result<Self, VersionError> {
        trace!(offset, number_of_sections, "Reading section table");

        data.get(offset..)
            .and_then(|bytes| {
                <[SectionHeader]>::ref_from_prefix_with_elems(bytes, number_of_sections.into())
                    .ok()
            })
            .map(|(sections, _)| Self(sections))
            .ok_or_else(|| VersionError::truncated("section table", offset))
    }

    #[inline]
    pub const fn sections(&self) -> &'data [SectionHeader] {
        self.0
    }

    /// Returns the first section whose name matches `name`. See [`SectionHeader::is_named`].
    pub fn find_section(&self, name: &[u8]) -> Option<&'data SectionHeader> {
        self.0.iter().find(|section| section.is_named(name))
    }

    /// Converts a virtual address (RVA) to a file offset using whichever section contains it.
    ///
    /// Returns `None` if no section contains the address.
    pub fn to_file_offset(&self, address: u32) -> Option<u32> {
        self.0
            .iter()
            .find(|section| section.contains_rva(address))
            .and_then(|section| {
                (address - section.virtual_address()).checked_add(section.pointer_to_raw_data())
            })
    }
}

impl<'data> IntoIterator for SectionTable<'data> {
    type Item = &'data SectionHeader;

    type IntoIter = std::slice::Iter<'data, SectionHeader>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SectionTable;

    fn section(name: &[u8; 8], virtual_address: u32, virtual_size: u32, raw: u32) -> Vec<u8> {
        let mut bytes = name.to_vec();
        bytes.extend_from_slice(&virtual_size.to_le_bytes());
        bytes.extend_from_slice(&virtual_address.to_le_bytes());
        bytes.extend_from_slice(&virtual_size.to_le_bytes());
        bytes.extend_from_slice(&raw.to_le_bytes());
        bytes.extend_from_slice(&[0; 16]);
        bytes
    }

    fn table() -> Vec<u8> {
        let mut data = vec![0xCC; 3];
        data.extend(section(b".text\0\0\0", 0x1000, 0x800, 0x400));
        data.extend(section(b".rsrc\0\0\0", 0x2000, 0x200, 0xC00));
        data.extend(section(b".rsrc\0\0\0", 0x3000, 0x200, 0xE00));
        data
    }

    #[test]
    fn reads_unaligned_table() {
        let data = table();
        let table = SectionTable::read_at(&data, 3, 3).unwrap();

        assert_eq!(table.sections().len(), 3);
        assert_eq!(table.sections()[0].real_name(), ".text");
    }

    #[test]
    fn first_matching_section_wins() {
        let data = table();
        let table = SectionTable::read_at(&data, 3, 3).unwrap();

        let rsrc = table.find_section(b".rsrc").unwrap();
        assert_eq!(rsrc.virtual_address(), 0x2000);
        assert!(table.find_section(b".data").is_none());
    }

    #[test]
    fn table_past_end_is_truncated() {
        let data = table();
        assert!(SectionTable::read_at(&data, 3, 4).is_err());
        assert!(SectionTable::read_at(&data, data.len() + 1, 0).is_err());
        assert!(SectionTable::read_at(&data, data.len(), 0).is_ok());
    }

    #[test]
    fn rva_to_file_offset() {
        let data = table();
        let table = SectionTable::read_at(&data, 3, 3).unwrap();

        assert_eq!(table.to_file_offset(0x1010), Some(0x410));
        assert_eq!(table.to_file_offset(0x2004), Some(0xC04));
        assert_eq!(table.to_file_offset(0x1800), None);
        assert_eq!(table.to_file_offset(0x0FFF), None);
    }
}
