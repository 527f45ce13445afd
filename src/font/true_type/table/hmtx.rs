/// Advance widths indexed by glyph id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HmtxTable {
    pub advance_widths: Vec<u16>,
}

impl HmtxTable {
    pub fn advance_width(&self, glyph_id: u16) -> Option<u16> {
        self.advance_widths.get(usize::from(glyph_id)).copied()
    }
}
