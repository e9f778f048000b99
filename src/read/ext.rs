use zerocopy::{ByteOrder, FromBytes, U16, U32};

use crate::error::VersionError;

/// Extends byte slices with bounds-checked reads at absolute offsets.
///
/// Every method names the structure being read so that a short buffer surfaces as a
/// [`VersionError::TruncatedBuffer`] saying what was cut off and where.
pub trait ReadBytesExt {
    /// Reads a type that implements [`FromBytes`] starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TruncatedBuffer`] if `offset + size_of::<T>()` is past the end.
    fn read_t_at<T: FromBytes>(
        &self,
        offset: usize,
        structure: &'static str,
    ) -> Result<T, VersionError>;

    /// Borrows `length` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TruncatedBuffer`] if the range is past the end.
    fn slice_at(
        &self,
        offset: usize,
        length: usize,
        structure: &'static str,
    ) -> Result<&[u8], VersionError>;

    /// Reads an unsigned 16-bit integer starting at `offset`.
    ///
    /// # Errors
    ///
    /// Same as [`read_t_at`](Self::read_t_at).
    #[inline]
    fn read_u16_at<O: ByteOrder>(
        &self,
        offset: usize,
        structure: &'static str,
    ) -> Result<u16, VersionError> {
        self.read_t_at::<U16<O>>(offset, structure).map(U16::get)
    }

    /// Reads an unsigned 32-bit integer starting at `offset`.
    ///
    /// # Errors
    ///
    /// Same as [`read_t_at`](Self::read_t_at).
    #[inline]
    fn read_u32_at<O: ByteOrder>(
        &self,
        offset: usize,
        structure: &'static str,
    ) -> Result<u32, VersionError> {
        self.read_t_at::<U32<O>>(offset, structure).map(U32::get)
    }
}

impl ReadBytesExt for [u8] {
    fn read_t_at<T: FromBytes>(
        &self,
        offset: usize,
        structure: &'static str,
    ) -> Result<T, VersionError> {
        self.get(offset..)
            .and_then(|bytes| T::read_from_prefix(bytes).ok())
            .map(|(value, _)| value)
            .ok_or_else(|| VersionError::truncated(structure, offset))
    }

    fn slice_at(
        &self,
        offset: usize,
        length: usize,
        structure: &'static str,
    ) -> Result<&[u8], VersionError> {
        offset
            .checked_add(length)
            .and_then(|end| self.get(offset..end))
            .ok_or_else(|| VersionError::truncated(structure, offset))
    }
}
