//! Reads the file version embedded in the Windows boot manager's PE image.
//!
//! The boot manager carries a minimal PE image with a single resource: its `VS_VERSIONINFO`
//! block. Decoding runs four checks in order, each of which can end it early:
//!
//! 1. [`BootManagerImage::parse`] validates the DOS and PE signatures and that the optional
//!    header magic agrees with the word size in the COFF characteristics.
//! 2. The same call finds the `.rsrc` section in the section table.
//! 3. [`ResourceDirectory::version_resource`](pe::resource::ResourceDirectory::version_resource)
//!    follows the first directory entry to the resource bytes.
//! 4. [`VSVersionInfo::parse`] checks the root block and its `VS_FIXEDFILEINFO`.
//!
//! Every read is bounds-checked against the input slice and nothing outlives the call.

pub mod error;
pub mod pe;
mod read;
#[cfg(test)]
mod tests;
mod utils;
mod version;
pub mod version_info;

pub use error::{MalformedReason, VersionError};
pub use pe::BootManagerImage;
use tracing::debug;
pub use version::Version;
pub use version_info::VSVersionInfo;

/// Decodes the boot manager image in `data` and returns its file version.
///
/// # Errors
///
/// Returns the [`VersionError`] of the first check that fails.
pub fn try_read_version(data: &[u8]) -> Result<Version, VersionError> {
    let image = BootManagerImage::parse(data)?;
    let resource = image.resource_directory()?.version_resource()?;
    let version_info = VSVersionInfo::parse(resource)?;
    debug!(fixed_file_info = ?version_info.value);

    Ok(version_info.file_version())
}

/// Decodes the boot manager image in `data`, returning [`Version::default`] (all zero) if any
/// check fails.
pub fn read_version(data: &[u8]) -> Version {
    try_read_version(data).unwrap_or_else(|error| {
        debug!(%error, "Boot manager version not found");
        Version::default()
    })
}
