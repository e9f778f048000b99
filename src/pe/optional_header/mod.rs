mod magic;

pub use magic::Magic;
