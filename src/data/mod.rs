//! Data sources: the public draw archive and synthetic samples.

pub mod archive;
pub mod sample;

pub use archive::*;
pub use sample::*;
