use std::{collections::BTreeMap, fs, ops::Range, path::Path};

use crate::error::TrueTypeResult;

use super::{
    metrics::FontMetrics,
    parse::TrueTypeParser,
    table::{
        CmapSubtableFormat4, CmapTable, FontDirectory, Head, HheaTable, HmtxTable, LocaFormat,
        LocaTable, MaxpTable, NameTable,
    },
};

/// A parsed TrueType font together with the raw bytes it was parsed from.
///
/// The tables are read in dependency order (the directory first, `hmtx` after
/// `hhea` and `maxp`, `loca` after `head`) and parsing stops at the first
/// error, so a value of this type is always fully populated
#[derive(Debug, Clone)]
pub struct TrueTypeFontFile {
    font_directory: FontDirectory,
    head: Head,
    hhea: HheaTable,
    maxp: MaxpTable,
    hmtx: HmtxTable,
    cmap: CmapTable,
    name: NameTable,
    loca: LocaTable,
    metrics: FontMetrics,
    data: Vec<u8>,
}

impl TrueTypeFontFile {
    /// Reads the whole file into memory and parses it. The file is closed
    /// before parsing begins
    pub fn open(path: impl AsRef<Path>) -> TrueTypeResult<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;

        log::debug!("read {} bytes from {}", data.len(), path.display());

        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> TrueTypeResult<Self> {
        let mut parser = TrueTypeParser::new(&data);

        let font_directory = parser.read_font_directory()?;

        let head = parser.read_head_table(&font_directory)?;
        let hhea = parser.read_hhea_table(&font_directory)?;
        let maxp = parser.read_maxp_table(&font_directory)?;
        let hmtx = parser.read_hmtx_table(&font_directory, &hhea, &maxp)?;
        let cmap = parser.read_cmap_table(&font_directory)?;
        let name = parser.read_name_table(&font_directory)?;
        let os2 = parser.read_os2_table(&font_directory, &hhea)?;
        let post = parser.read_post_table(&font_directory)?;
        let loca = parser.read_loca_table(&font_directory, head.index_to_loc_format)?;

        if loca.offsets.len() <= usize::from(maxp.num_glyphs) {
            log::warn!(
                "loca has {} entries but the font declares {} glyphs",
                loca.offsets.len(),
                maxp.num_glyphs
            );
        }

        let metrics = FontMetrics::new(&head, &hhea, &os2, &post, &cmap);

        if !metrics.embeddable {
            log::warn!(
                "'{}' does not permit embedding (fsType {:#06x})",
                name.post_script_name,
                os2.fs_type
            );
        }

        log::debug!(
            "parsed '{}': {} glyphs, {} mapped codepoints",
            name.post_script_name,
            maxp.num_glyphs,
            cmap.chars.len()
        );

        Ok(Self {
            font_directory,
            head,
            hhea,
            maxp,
            hmtx,
            cmap,
            name,
            loca,
            metrics,
            data,
        })
    }

    pub fn directory(&self) -> &FontDirectory {
        &self.font_directory
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Sanitized PostScript name, usable as a PDF name
    pub fn post_script_name(&self) -> &str {
        &self.name.post_script_name
    }

    pub fn units_per_em(&self) -> u16 {
        self.head.units_per_em
    }

    pub fn num_glyphs(&self) -> u16 {
        self.maxp.num_glyphs
    }

    pub fn number_of_h_metrics(&self) -> u16 {
        self.hhea.number_of_h_metrics
    }

    /// Advance widths indexed by glyph id
    pub fn widths(&self) -> &[u16] {
        &self.hmtx.advance_widths
    }

    pub fn advance_width(&self, glyph_id: u16) -> Option<u16> {
        self.hmtx.advance_width(glyph_id)
    }

    /// Unicode codepoint to glyph id
    pub fn chars(&self) -> &BTreeMap<u32, u16> {
        &self.cmap.chars
    }

    pub fn glyph_index(&self, c: char) -> Option<u16> {
        self.cmap.glyph_index(c)
    }

    /// Advance width of the glyph `c` maps to, or of `.notdef` when unmapped
    pub fn char_width(&self, c: char) -> Option<u16> {
        self.advance_width(self.glyph_index(c).unwrap_or(0))
    }

    pub fn cmap_subtable(&self) -> &CmapSubtableFormat4 {
        &self.cmap.subtable
    }

    pub fn is_short_index(&self) -> bool {
        self.head.index_to_loc_format == LocaFormat::Short
    }

    pub fn loca(&self) -> &[u32] {
        &self.loca.offsets
    }

    /// Byte range of a glyph's outline inside the `glyf` table
    pub fn glyph_range(&self, glyph_id: u16) -> Option<Range<u32>> {
        self.loca.glyph_range(glyph_id)
    }

    /// The complete font program, as read
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
