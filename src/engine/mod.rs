pub mod bitstream;
pub mod codes;
pub mod compressor;
pub mod decompressor;
pub mod frequency;
pub mod tree;

pub use compressor::*;
pub use decompressor::*;
