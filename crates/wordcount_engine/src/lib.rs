//! Wordcount engine: source acquisition and the file counting pipeline.
mod count;
mod decode;
mod source;

pub use count::count_file;
pub use decode::{decode_text, DecodedText};
pub use source::{read_source, SourceError};
