mod characteristics;
mod header;
mod machine;

pub use characteristics::CoffCharacteristics;
pub use header::CoffHeader;
pub use machine::*;
