//! Assembles synthetic sfnt files for tests

use super::table::{TableTag, SFNT_VERSION};

#[derive(Debug, Default)]
pub(crate) struct TableWriter(Vec<u8>);

impl TableWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u16(mut self, n: u16) -> Self {
        self.0.extend_from_slice(&n.to_be_bytes());
        self
    }

    pub fn i16(mut self, n: i16) -> Self {
        self.0.extend_from_slice(&n.to_be_bytes());
        self
    }

    pub fn u32(mut self, n: u32) -> Self {
        self.0.extend_from_slice(&n.to_be_bytes());
        self
    }

    pub fn u16s(self, ns: &[u16]) -> Self {
        ns.iter().fold(self, |w, &n| w.u16(n))
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn zeros(mut self, n: usize) -> Self {
        self.0.resize(self.0.len() + n, 0);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.0
    }
}

#[derive(Debug)]
pub(crate) struct FontBuilder {
    version: [u8; 4],
    tables: Vec<(TableTag, Vec<u8>)>,
}

impl FontBuilder {
    pub fn empty() -> Self {
        Self {
            version: SFNT_VERSION,
            tables: Vec::new(),
        }
    }

    /// Every table the parser requires, describing a four glyph font that maps
    /// 'A'..='C' to glyphs 1..=3
    pub fn minimal() -> Self {
        Self::empty()
            .table(TableTag::HEAD, head(HeadFields::default()))
            .table(TableTag::HHEA, hhea(800, -200, 2))
            .table(TableTag::MAXP, maxp(4))
            .table(TableTag::HMTX, hmtx(&[(500, 0), (600, 10)]))
            .table(
                TableTag::CMAP,
                cmap(&[(3, 1)], &[(65, 67, (1 - 65i16) as u16, 0)], &[]),
            )
            .table(TableTag::NAME, name(&[(6, "Test-Regular")]))
            .table(TableTag::OS2, os2(Os2Fields::default()))
            .table(TableTag::POST, post(-12, -100, 50, 0))
            .table(TableTag::LOCA, TableWriter::new().u16s(&[0, 5, 10, 10, 20]).finish())
    }

    pub fn version(mut self, version: [u8; 4]) -> Self {
        self.version = version;
        self
    }

    /// Adds or replaces a table
    pub fn table(mut self, tag: TableTag, data: Vec<u8>) -> Self {
        match self.tables.iter_mut().find(|(t, _)| *t == tag) {
            Some(existing) => existing.1 = data,
            None => self.tables.push((tag, data)),
        }
        self
    }

    pub fn without(mut self, tag: TableTag) -> Self {
        self.tables.retain(|(t, _)| *t != tag);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let header_len = 12 + 16 * self.tables.len();
        let mut directory = TableWriter::new()
            .bytes(&self.version)
            .u16(self.tables.len() as u16)
            .zeros(6);
        let mut body = Vec::new();

        for (tag, data) in &self.tables {
            directory = directory
                .bytes(tag.as_bytes())
                .u32(0)
                .u32((header_len + body.len()) as u32)
                .u32(data.len() as u32);

            body.extend_from_slice(data);
            body.resize((body.len() + 3) & !3, 0);
        }

        let mut font = directory.finish();
        font.extend_from_slice(&body);
        font
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct HeadFields {
    pub magic: u32,
    pub units_per_em: u16,
    pub bbox: [i16; 4],
    pub index_to_loc_format: i16,
}

impl Default for HeadFields {
    fn default() -> Self {
        Self {
            magic: 0x5F0F_3CF5,
            units_per_em: 2048,
            bbox: [-100, -250, 1200, 900],
            index_to_loc_format: 0,
        }
    }
}

pub(crate) fn head(fields: HeadFields) -> Vec<u8> {
    let [x_min, y_min, x_max, y_max] = fields.bbox;

    TableWriter::new()
        .u32(0x0001_0000)
        .u32(0x0001_0000)
        .u32(0)
        .u32(fields.magic)
        .u16(0)
        .u16(fields.units_per_em)
        .zeros(16)
        .i16(x_min)
        .i16(y_min)
        .i16(x_max)
        .i16(y_max)
        .zeros(6)
        .i16(fields.index_to_loc_format)
        .i16(0)
        .finish()
}

pub(crate) fn hhea(ascender: i16, descender: i16, number_of_h_metrics: u16) -> Vec<u8> {
    TableWriter::new()
        .u32(0x0001_0000)
        .i16(ascender)
        .i16(descender)
        .zeros(26)
        .u16(number_of_h_metrics)
        .finish()
}

pub(crate) fn maxp(num_glyphs: u16) -> Vec<u8> {
    TableWriter::new().u32(0x0000_5000).u16(num_glyphs).finish()
}

pub(crate) fn hmtx(metrics: &[(u16, i16)]) -> Vec<u8> {
    metrics
        .iter()
        .fold(TableWriter::new(), |w, &(advance, lsb)| w.u16(advance).i16(lsb))
        .finish()
}

/// Builds a `cmap` whose encoding records all point at one format 4 subtable.
/// Segments are `(start, end, id_delta, id_range_offset)`
pub(crate) fn cmap(
    encodings: &[(u16, u16)],
    segments: &[(u16, u16, u16, u16)],
    glyph_ids: &[u16],
) -> Vec<u8> {
    let subtable_offset = 4 + 8 * encodings.len() as u32;
    let seg_count = segments.len() as u16;
    let length = 16 + 8 * seg_count + 2 * glyph_ids.len() as u16;

    let mut w = TableWriter::new().u16(0).u16(encodings.len() as u16);
    for &(platform_id, encoding_id) in encodings {
        w = w.u16(platform_id).u16(encoding_id).u32(subtable_offset);
    }

    w.u16(4)
        .u16(length)
        .u16(0)
        .u16(seg_count * 2)
        .zeros(6)
        .u16s(&segments.iter().map(|s| s.1).collect::<Vec<_>>())
        .u16(0)
        .u16s(&segments.iter().map(|s| s.0).collect::<Vec<_>>())
        .u16s(&segments.iter().map(|s| s.2).collect::<Vec<_>>())
        .u16s(&segments.iter().map(|s| s.3).collect::<Vec<_>>())
        .u16s(glyph_ids)
        .finish()
}

/// Records are `(name_id, raw string)`
pub(crate) fn name(records: &[(u16, &str)]) -> Vec<u8> {
    let string_offset = 6 + 12 * records.len() as u16;

    let mut w = TableWriter::new()
        .u16(0)
        .u16(records.len() as u16)
        .u16(string_offset);
    let mut storage = Vec::new();

    for &(name_id, raw) in records {
        let raw = raw.as_bytes();
        w = w
            .u16(3)
            .u16(1)
            .u16(0x409)
            .u16(name_id)
            .u16(raw.len() as u16)
            .u16(storage.len() as u16);
        storage.extend_from_slice(raw);
    }

    w.bytes(&storage).finish()
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Os2Fields {
    pub version: u16,
    pub fs_type: u16,
    pub fs_selection: u16,
    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub typo_line_gap: i16,
    pub win_ascent: u16,
    pub win_descent: u16,
    pub x_height: i16,
    pub cap_height: i16,
}

impl Default for Os2Fields {
    fn default() -> Self {
        Self {
            version: 4,
            fs_type: 0,
            fs_selection: 0x40,
            typo_ascender: 750,
            typo_descender: -250,
            typo_line_gap: 90,
            win_ascent: 900,
            win_descent: 300,
            x_height: 500,
            cap_height: 700,
        }
    }
}

pub(crate) fn os2(fields: Os2Fields) -> Vec<u8> {
    let w = TableWriter::new()
        .u16(fields.version)
        .zeros(6)
        .u16(fields.fs_type)
        .zeros(52)
        .u16(fields.fs_selection)
        .zeros(4)
        .i16(fields.typo_ascender)
        .i16(fields.typo_descender)
        .i16(fields.typo_line_gap)
        .u16(fields.win_ascent)
        .u16(fields.win_descent);

    let w = match fields.version {
        0 => w,
        1 => w.zeros(8),
        _ => w.zeros(8).i16(fields.x_height).i16(fields.cap_height).zeros(6),
    };

    w.finish()
}

pub(crate) fn post(
    italic_angle: i16,
    underline_position: i16,
    underline_thickness: i16,
    is_fixed_pitch: u32,
) -> Vec<u8> {
    TableWriter::new()
        .u32(0x0003_0000)
        .i16(italic_angle)
        .u16(0)
        .i16(underline_position)
        .i16(underline_thickness)
        .u32(is_fixed_pitch)
        .zeros(16)
        .finish()
}
