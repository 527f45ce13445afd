mod cmap;
mod font_directory;
mod head;
mod hhea;
mod hmtx;
mod loca;
mod maxp;
mod name;
mod os2;
mod post;
mod tag;

pub use cmap::{
    CmapSubtableFormat4, CmapTable, EncodingRecord, Segment, ENCODING_SYMBOL,
    ENCODING_UNICODE_BMP, PLATFORM_MICROSOFT, SENTINEL_CODEPOINT,
};
pub use font_directory::{DirectoryTableEntry, FontDirectory, SFNT_VERSION};
pub use head::{Head, LocaFormat, HEAD_MAGIC_NUMBER};
pub use hhea::HheaTable;
pub use hmtx::HmtxTable;
pub use loca::LocaTable;
pub use maxp::MaxpTable;
pub use name::{sanitize_post_script_name, NameTable, POST_SCRIPT_NAME_ID};
pub use os2::Os2Table;
pub use post::PostTable;
pub use tag::TableTag;
