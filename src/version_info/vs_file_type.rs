use derive_more::Display;

/// The `dwFileType` field of `VS_FIXEDFILEINFO`. Unlisted values are kept as they are.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash)]
#[display("{_0}")]
#[repr(transparent)]
pub struct FileType(u32);

impl FileType {
    pub const UNKNOWN: Self = Self(0x0000_0000);
    pub const APP: Self = Self(0x0000_0001);
    pub const DLL: Self = Self(0x0000_0002);
    pub const DRV: Self = Self(0x0000_0003);
    pub const FONT: Self = Self(0x0000_0004);
    pub const VXD: Self = Self(0x0000_0005);
    pub const STATIC_LIB: Self = Self(0x0000_0007);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// The `dwFileSubtype` field of `VS_FIXEDFILEINFO`.
///
/// Its meaning depends on the [`FileType`]: the `DRV_*` constants apply to drivers and the
/// `FONT_*` constants to fonts, and the two sets share values.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash)]
#[display("{_0}")]
#[repr(transparent)]
pub struct FileSubtype(u32);

impl FileSubtype {
    pub const UNKNOWN: Self = Self(0x0000_0000);

    pub const DRV_PRINTER: Self = Self(0x0000_0001);
    pub const DRV_KEYBOARD: Self = Self(0x0000_0002);
    pub const DRV_LANGUAGE: Self = Self(0x0000_0003);
    pub const DRV_DISPLAY: Self = Self(0x0000_0004);
    pub const DRV_MOUSE: Self = Self(0x0000_0005);
    pub const DRV_NETWORK: Self = Self(0x0000_0006);
    pub const DRV_SYSTEM: Self = Self(0x0000_0007);
    pub const DRV_INSTALLABLE: Self = Self(0x0000_0008);
    pub const DRV_SOUND: Self = Self(0x0000_0009);
    pub const DRV_COMM: Self = Self(0x0000_000A);
    pub const DRV_VERSIONED_PRINTER: Self = Self(0x0000_000C);

    pub const FONT_RASTER: Self = Self(0x0000_0001);
    pub const FONT_VECTOR: Self = Self(0x0000_0002);
    pub const FONT_TRUETYPE: Self = Self(0x0000_0003);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}
