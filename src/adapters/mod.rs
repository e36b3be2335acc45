// Adapters layer: concrete dataset sources.

pub mod embedded;
pub mod json_file;

pub use embedded::EmbeddedSample;
pub use json_file::LocalJsonFile;
