pub mod artifact;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;

pub use artifact::CompressedArtifact;
pub use engine::compressor::compress;
pub use engine::decompressor::decompress;
pub use error::CodecError;
