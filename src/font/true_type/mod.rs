//! TrueType (`sfnt` version 1.0) font programs: the table directory and the
//! tables needed to describe and embed a font

mod font_file;
mod metrics;
pub(crate) mod parse;
pub mod table;

#[cfg(test)]
pub(crate) mod test_font;

pub use font_file::TrueTypeFontFile;
pub use metrics::{BoundingBox, FontMetrics};
pub use table::TableTag;
