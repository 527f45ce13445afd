//! Parses TrueType font files and produces the PDF objects needed to embed
//! them: a `/FontDescriptor` dictionary and a font program stream

#[macro_use]
mod macros;

pub mod data_structures;
pub mod error;
pub mod font;
pub mod objects;

mod parse_binary;

pub use error::{EmbedError, TrueTypeError, TrueTypeResult};
pub use font::{
    true_type::{FontMetrics, TrueTypeFontFile},
    EmbedOptions, EmbeddedFontStream, FontDescriptor, FontFamily,
};
pub use objects::Reference;
