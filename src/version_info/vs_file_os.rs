use derive_more::Display;

/// The `dwFileOS` field of `VS_FIXEDFILEINFO`.
///
/// The high word names the base operating system and the low word the windowing layer on top of
/// it, so the value is a pair of small enumerations rather than a set of independent bits. Values
/// outside the named constants are kept as they are.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash)]
#[display("{_0:#010X}")]
#[repr(transparent)]
pub struct FileOs(u32);

impl FileOs {
    pub const UNKNOWN: Self = Self(0x0000_0000);

    pub const DOS: Self = Self(0x0001_0000);
    pub const OS216: Self = Self(0x0002_0000);
    pub const OS232: Self = Self(0x0003_0000);
    pub const NT: Self = Self(0x0004_0000);

    pub const WINDOWS16: Self = Self(0x0000_0001);
    pub const PM16: Self = Self(0x0000_0002);
    pub const PM32: Self = Self(0x0000_0003);
    pub const WINDOWS32: Self = Self(0x0000_0004);

    pub const DOS_WINDOWS16: Self = Self(0x0001_0001);
    pub const DOS_WINDOWS32: Self = Self(0x0001_0004);
    pub const OS216_PM16: Self = Self(0x0002_0002);
    pub const OS232_PM32: Self = Self(0x0003_0003);
    pub const NT_WINDOWS32: Self = Self(0x0004_0004);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The base operating system half, e.g. [`FileOs::NT`].
    #[inline]
    pub const fn base(self) -> Self {
        Self(self.0 & 0xFFFF_0000)
    }

    /// The windowing half, e.g. [`FileOs::WINDOWS32`].
    #[inline]
    pub const fn windowing(self) -> Self {
        Self(self.0 & 0x0000_FFFF)
    }
}
