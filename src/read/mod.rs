mod ext;

pub use ext::ReadBytesExt;
