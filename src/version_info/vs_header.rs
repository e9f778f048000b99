use zerocopy::{FromBytes, LittleEndian, little_endian::U16};

use crate::{
    error::VersionError,
    read::ReadBytesExt,
    utils::{get_widestring_len, widestring_eq},
};

/// The `wType` of a version block.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VsValueType {
    Binary,
    Text,
    Unknown(u16),
}

impl From<u16> for VsValueType {
    fn from(value: u16) -> Self {
        match value {
            0 => Self::Binary,
            1 => Self::Text,
            other => Self::Unknown(other),
        }
    }
}

impl From<VsValueType> for u16 {
    fn from(value_type: VsValueType) -> Self {
        match value_type {
            VsValueType::Binary => 0,
            VsValueType::Text => 1,
            VsValueType::Unknown(other) => other,
        }
    }
}

/// Represents a header for a `VS_VERSION` structure.
///
/// This is not an officially documented header, but rather is added to make parsing these aspects of the structures
/// a little bit easier.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VSHeader<'data> {
    pub length: u16,
    pub value_length: u16,
    pub value_type: VsValueType,
    pub key: &'data [U16],
}

impl<'data> VSHeader<'data> {
    const KEY_OFFSET: usize = 3 * size_of::<u16>();

    /// Parses the header at `base_offset` and returns the offset just past the key's terminator
    /// alongside it. The value starts at that offset rounded up to a 4-byte boundary.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TruncatedBuffer`] if the fixed fields do not fit or the key has no
    /// terminator before the end of `data`.
    pub fn parse(data: &'data [u8], base_offset: usize) -> Result<(usize, Self), VersionError> {
        let length = data.read_u16_at::<LittleEndian>(base_offset, "version block length")?;
        let value_length =
            data.read_u16_at::<LittleEndian>(base_offset + 2, "version block value length")?;
        let value_type = data.read_u16_at::<LittleEndian>(base_offset + 4, "version block type")?;

        let key_offset = base_offset + Self::KEY_OFFSET;
        let key_bytes = data.get(key_offset..).unwrap_or_default();
        let (units, _) = <[U16]>::ref_from_prefix_with_elems(key_bytes, key_bytes.len() / 2)
            .map_err(|_| VersionError::truncated("version block key", key_offset))?;
        let key_len = get_widestring_len(units)
            .ok_or_else(|| VersionError::truncated("version block key", key_offset))?;

        Ok((
            key_offset + (key_len + 1) * size_of::<u16>(),
            Self {
                length,
                value_length,
                value_type: value_type.into(),
                key: &units[..key_len],
            },
        ))
    }

    /// Returns true if the key spells exactly `key`.
    #[inline]
    pub fn is_key(&self, key: &str) -> bool {
        widestring_eq(self.key, key)
    }

    pub fn key_lossy(&self) -> String {
        String::from_utf16_lossy(&self.key.iter().map(|unit| unit.get()).collect::<Vec<_>>())
    }
}
