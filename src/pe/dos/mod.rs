mod header;
mod signature;

pub use header::DosHeader;
pub use signature::DosSignature;
