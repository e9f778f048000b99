use std::cmp::Ordering;

use derive_more::Display;

/// A four-part file version as stored in `VS_FIXEDFILEINFO`.
///
/// The all-zero [`Default`] doubles as the "unknown" sentinel returned by
/// [`read_version`](crate::read_version) when an image cannot be decoded.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[display("{major}.{minor}.{build}.{revision}")]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl Version {
    pub const UNKNOWN: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Unpacks the `dwFileVersionMS`/`dwFileVersionLS` pair. The most significant word holds
    /// major and minor, the least significant word holds build and revision, each with the first
    /// component in the high half.
    #[inline]
    pub const fn from_words(most_significant: u32, least_significant: u32) -> Self {
        Self::new(
            (most_significant >> 16) as u16,
            most_significant as u16,
            (least_significant >> 16) as u16,
            least_significant as u16,
        )
    }

    /// The inverse of [`from_words`](Self::from_words).
    #[inline]
    pub const fn to_words(self) -> (u32, u32) {
        (
            ((self.major as u32) << 16) | self.minor as u32,
            ((self.build as u32) << 16) | self.revision as u32,
        )
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.major == 0 && self.minor == 0 && self.build == 0 && self.revision == 0
    }
}

impl From<(u16, u16, u16, u16)> for Version {
    #[inline]
    fn from((major, minor, build, revision): (u16, u16, u16, u16)) -> Self {
        Self::new(major, minor, build, revision)
    }
}

impl PartialEq<(u16, u16, u16, u16)> for Version {
    fn eq(&self, &other: &(u16, u16, u16, u16)) -> bool {
        *self == Self::from(other)
    }
}

impl PartialOrd<(u16, u16, u16, u16)> for Version {
    fn partial_cmp(&self, &other: &(u16, u16, u16, u16)) -> Option<Ordering> {
        self.partial_cmp(&Self::from(other))
    }
}
