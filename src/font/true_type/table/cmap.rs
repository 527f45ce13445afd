use std::collections::BTreeMap;

/// Platform ID of Microsoft encodings
pub const PLATFORM_MICROSOFT: u16 = 3;

/// Microsoft symbol encoding
pub const ENCODING_SYMBOL: u16 = 0;

/// Microsoft Unicode BMP encoding
pub const ENCODING_UNICODE_BMP: u16 = 1;

/// Never mapped, and ends the segment it appears in
pub const SENTINEL_CODEPOINT: u16 = 0xFFFF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmapTable {
    /// A Microsoft symbol (3, 0) subtable is present
    pub symbol: bool,

    pub subtable: CmapSubtableFormat4,

    /// Unicode codepoint to glyph id. Glyph 0 is never stored
    pub chars: BTreeMap<u32, u16>,
}

impl CmapTable {
    pub fn glyph_index(&self, c: char) -> Option<u16> {
        self.chars.get(&u32::from(c)).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingRecord {
    pub platform_id: u16,
    pub encoding_id: u16,

    /// From the start of the `cmap` table
    pub offset: u32,
}

/// Segment mapping to delta values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmapSubtableFormat4 {
    /// Length of the subtable in bytes, as declared
    pub length: u16,

    pub seg_count: u16,
    pub end_code: Vec<u16>,
    pub start_code: Vec<u16>,
    pub id_delta: Vec<u16>,
    pub id_range_offset: Vec<u16>,
    pub glyph_id_array: Vec<u16>,

    /// Absolute file offset of the first `idRangeOffset` entry; range offsets
    /// are relative to their own position in that array
    pub id_range_offset_start: usize,
}

impl CmapSubtableFormat4 {
    /// Size of the fixed fields plus the reserved pad
    pub const HEADER_SIZE: usize = 16;

    /// Number of entries in `glyphIdArray`, derived from the declared length
    pub fn glyph_id_count(length: u16, seg_count: u16) -> usize {
        usize::from(length).saturating_sub(Self::HEADER_SIZE + 8 * usize::from(seg_count)) / 2
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..usize::from(self.seg_count)).map(move |idx| Segment {
            idx,
            start: self.start_code[idx],
            end: self.end_code[idx],
            id_delta: self.id_delta[idx],
            id_range_offset: self.id_range_offset[idx],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub idx: usize,
    pub start: u16,
    pub end: u16,
    pub id_delta: u16,
    pub id_range_offset: u16,
}

impl Segment {
    /// Codepoints covered by this segment, stopping before the sentinel
    pub fn codepoints(&self) -> impl Iterator<Item = u16> {
        (self.start..=self.end).take_while(|&c| c != SENTINEL_CODEPOINT)
    }

    /// Absolute file offset of the `glyphIdArray` entry for `c`
    pub fn glyph_id_offset(&self, id_range_offset_start: usize, c: u16) -> usize {
        id_range_offset_start
            + 2 * self.idx
            + usize::from(self.id_range_offset)
            + 2 * usize::from(c - self.start)
    }
}
