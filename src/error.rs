use std::{fmt, io};

use crate::font::true_type::TableTag;

#[derive(Debug)]
pub enum TrueTypeError {
    /// A required table is missing from the table directory
    NotFound { tag: TableTag },

    /// The sfnt version tag is not 0x00010000
    UnsupportedFormat { found: [u8; 4] },

    /// The `head` table magic number is not 0x5F0F3CF5
    BadMagicNumber { found: u32 },

    /// Fewer bytes remain in the font than a read asked for
    ShortRead {
        offset: usize,
        requested: usize,
        available: usize,
    },

    /// The `cmap` table has no Microsoft Unicode BMP (3, 1) subtable
    NoUnicodeEncoding,

    /// The Unicode `cmap` subtable is in a format other than 4
    UnsupportedSubtableFormat { format: u16 },

    /// The `name` table has no usable PostScript name (name ID 6)
    PostScriptNameNotFound,

    /// `hmtx` must be padded out to the glyph count but contains no metrics
    EmptyHorizontalMetrics { num_glyphs: u16 },

    IoError(io::Error),
}

impl From<io::Error> for TrueTypeError {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}

impl fmt::Display for TrueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { tag } => write!(f, "table '{}' not found", tag),
            Self::UnsupportedFormat { found } => {
                write!(f, "unrecognized font format: {:02x?}", found)
            }
            Self::BadMagicNumber { found } => {
                write!(f, "incorrect magic number: {:#010x}", found)
            }
            Self::ShortRead {
                offset,
                requested,
                available,
            } => write!(
                f,
                "unexpected eof at offset {}: wanted {} bytes, {} available",
                offset, requested, available
            ),
            Self::IoError(err) => write!(f, "{}", err),
            _ => write!(f, "{:#?}", self),
        }
    }
}

impl std::error::Error for TrueTypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            _ => None,
        }
    }
}

pub type TrueTypeResult<T> = Result<T, TrueTypeError>;

#[derive(Debug)]
pub enum EmbedError {
    UnrecognizedVariant { ty: &'static str, found: String },

    /// The font's `fsType` forbids embedding
    NotEmbeddable { font_name: String },
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self)
    }
}

impl std::error::Error for EmbedError {}
