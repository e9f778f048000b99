
use std::thread;

use rstest::rstest;

use self::image::{FixedFileInfo, Image, VersionBlock};
use crate::{
    error::{MalformedReason, VersionError},
    pe::Architecture,
    read_version, try_read_version,
    version::Version,
};

const EXPECTED: Version = Version::new(2, 1, 3, 0);

#[test]
fn reads_64bit_boot_manager_version() {
    assert_eq!(try_read_version(&Image::default().build()), Ok(EXPECTED));
}

#[test]
fn reads_32bit_boot_manager_version() {
    assert_eq!(try_read_version(&Image::bits32().build()), Ok(EXPECTED));
}

#[test]
fn reads_windows_8_version() {
    let image = Image {
        block: VersionBlock {
            fixed: FixedFileInfo {
                file_version: (0x0006_0002, 0x23F0_4000),
                ..FixedFileInfo::default()
            },
            ..VersionBlock::default()
        },
        ..Image::default()
    };

    let version = read_version(&image.build());
    assert_eq!(version, Version::new(6, 2, 9200, 16384));
    assert!(version >= (6, 2, 0, 0));
}

#[test]
fn file_version_is_reported_not_product_version() {
    let image = Image {
        block: VersionBlock {
            fixed: FixedFileInfo {
                product_version: (0x000A_0000, 0),
                ..FixedFileInfo::default()
            },
            ..VersionBlock::default()
        },
        ..Image::default()
    };

    assert_eq!(read_version(&image.build()), EXPECTED);
}

#[test]
fn resource_section_after_other_sections() {
    let image = Image {
        leading_sections: 3,
        ..Image::default()
    };

    assert_eq!(try_read_version(&image.build()), Ok(EXPECTED));
}

#[test]
fn resource_section_name_may_carry_bytes_after_nul() {
    let image = Image {
        section_name: *b".rsrc\0\xFF\xFF",
        ..Image::default()
    };

    assert_eq!(try_read_version(&image.build()), Ok(EXPECTED));
}

#[rstest]
#[case::no_mz(Image { dos_signature: *b"ZM", ..Image::default() })]
#[case::zeroed_mz(Image { dos_signature: [0, 0], ..Image::default() })]
#[case::no_pe_signature(Image { pe_signature: *b"PE\0\x01", ..Image::default() })]
#[case::ne_signature(Image { pe_signature: *b"NE\0\0", ..Image::default() })]
#[case::pe_pointer_into_dos_stub(Image { pe_pointer: 0x40, ..Image::default() })]
#[case::negative_pe_pointer(Image { pe_pointer: -4, ..Image::default() })]
fn not_a_pe_image(#[case] image: Image) {
    let data = image.build();

    assert_eq!(try_read_version(&data), Err(VersionError::NotAPEImage));
    assert!(read_version(&data).is_unknown());
}

#[rstest]
#[case(b"")]
#[case(b"M")]
#[case(b"\x7FELF\x02\x01\x01\x00")]
fn tiny_buffers_are_not_pe_images(#[case] data: &[u8]) {
    assert_eq!(try_read_version(data), Err(VersionError::NotAPEImage));
}

#[rstest]
#[case::pe32_magic_on_64bit(Image { magic: Some(0x10B), ..Image::default() }, Architecture::Bits64, 0x10B)]
#[case::pe32plus_magic_on_32bit(Image { magic: Some(0x20B), ..Image::bits32() }, Architecture::Bits32, 0x20B)]
#[case::rom_magic(Image { magic: Some(0x107), ..Image::default() }, Architecture::Bits64, 0x107)]
#[case::cleared_32bit_flag(Image { characteristics: Some(0x0002), ..Image::bits32() }, Architecture::Bits64, 0x10B)]
#[case::set_32bit_flag(Image { characteristics: Some(0x0122), ..Image::default() }, Architecture::Bits32, 0x20B)]
fn inconsistent_architecture(
    #[case] image: Image,
    #[case] architecture: Architecture,
    #[case] magic: u16,
) {
    let data = image.build();

    assert_eq!(
        try_read_version(&data),
        Err(VersionError::InconsistentArchitecture {
            architecture,
            magic
        })
    );
    assert_eq!(read_version(&data), Version::default());
}

#[rstest]
#[case::rdata(Image { section_name: *b"rdata\0\0\0", ..Image::default() })]
#[case::dot_rdata(Image { section_name: *b".rdata\0\0", ..Image::default() })]
#[case::longer_name(Image { section_name: *b".rsrc1\0\0", ..Image::default() })]
#[case::uppercase(Image { section_name: *b".RSRC\0\0\0", ..Image::default() })]
#[case::zero_raw_pointer(Image { pointer_to_raw_data: Some(0), ..Image::default() })]
#[case::zero_raw_size(Image { size_of_raw_data: Some(0), ..Image::default() })]
#[case::no_sections(Image { number_of_sections: Some(0), ..Image::default() })]
fn resource_section_missing(#[case] image: Image) {
    let data = image.build();

    assert_eq!(
        try_read_version(&data),
        Err(VersionError::ResourceSectionMissing)
    );
    assert!(read_version(&data).is_unknown());
}

#[test]
fn empty_resource_directory() {
    let image = Image {
        id_entries: 0,
        ..Image::default()
    };

    assert_eq!(
        try_read_version(&image.build()),
        Err(VersionError::EmptyResourceDirectory)
    );
}

#[test]
fn named_entry_is_enough() {
    let image = Image {
        named_entries: 1,
        id_entries: 0,
        ..Image::default()
    };

    assert_eq!(try_read_version(&image.build()), Ok(EXPECTED));
}

#[test]
fn unexpected_nested_directory() {
    let image = Image {
        nested: true,
        ..Image::default()
    };

    assert_eq!(
        try_read_version(&image.build()),
        Err(VersionError::UnexpectedNestedDirectory)
    );
}

#[rstest]
#[case::key(VersionBlock { key: "VS_VERSIONINFO", ..VersionBlock::default() }, MalformedReason::Key)]
#[case::value_type(VersionBlock { value_type: 1, ..VersionBlock::default() }, MalformedReason::ValueType(1))]
#[case::value_length(VersionBlock { value_length: 51, ..VersionBlock::default() }, MalformedReason::ValueLength(51))]
#[case::signature(
    VersionBlock {
        fixed: FixedFileInfo { signature: 0, ..FixedFileInfo::default() },
        ..VersionBlock::default()
    },
    MalformedReason::Signature(0)
)]
#[case::struct_version(
    VersionBlock {
        fixed: FixedFileInfo { struct_version: 0x0000_0001, ..FixedFileInfo::default() },
        ..VersionBlock::default()
    },
    MalformedReason::StructVersion(crate::version_info::StructVersion { major: 0, minor: 1 })
)]
fn malformed_version_block(#[case] block: VersionBlock, #[case] reason: MalformedReason) {
    let data = Image {
        block,
        ..Image::default()
    }
    .build();

    assert_eq!(
        try_read_version(&data),
        Err(VersionError::MalformedVersionBlock(reason))
    );
    assert!(read_version(&data).is_unknown());
}

#[rstest]
#[case::pe_pointer_past_end(Image { pe_pointer: 0x7FFF_0000, ..Image::default() })]
#[case::section_table_past_end(Image { number_of_sections: Some(0x400), ..Image::default() })]
#[case::raw_pointer_past_end(Image { pointer_to_raw_data: Some(0xFFFF_FF00), ..Image::default() })]
#[case::rva_before_section(Image { data_rva: Some(0x0FFF), ..Image::default() })]
#[case::rva_past_section(Image { data_rva: Some(0x1000 + 0x1FF), ..Image::default() })]
#[case::data_size_past_section(Image { data_size: Some(0x1000), ..Image::default() })]
#[case::data_size_cuts_fixed_info(Image { data_size: Some(91), ..Image::default() })]
fn truncated_buffer(#[case] image: Image) {
    let data = image.build();

    assert!(matches!(
        try_read_version(&data),
        Err(VersionError::TruncatedBuffer { .. })
    ));
    assert!(read_version(&data).is_unknown());
}

#[test]
fn raw_size_past_end_of_image() {
    let image = Image {
        size_of_raw_data: Some(0x10_0000),
        ..Image::default()
    };

    assert_eq!(try_read_version(&image.build()), Ok(EXPECTED));
}

#[test]
fn image_ending_after_version_block() {
    let image = Image::default();
    let mut data = image.build();
    data.truncate(image.resource_offset() + 16 + 8 + 16 + 92);

    assert_eq!(try_read_version(&data), Ok(EXPECTED));
}

#[test]
fn every_prefix_fails_without_panicking() {
    let data = Image::default().build();
    let resource_end = Image::default().resource_offset() + 16 + 8 + 16 + 92;

    for length in 0..resource_end {
        assert!(
            try_read_version(&data[..length]).is_err(),
            "prefix of {length} bytes decoded"
        );
    }
}

#[test]
fn decoding_is_deterministic() {
    let data = Image::default().build();
    let copy = data.clone();

    let first = try_read_version(&data);
    let second = try_read_version(&data);

    assert_eq!(first, second);
    assert_eq!(data, copy);
}

#[test]
fn concurrent_decoding() {
    let data = Image::default().build();

    thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| read_version(&data)))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), EXPECTED);
        }
    });
}
