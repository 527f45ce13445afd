#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxpTable {
    /// the number of glyphs in the font
    pub num_glyphs: u16,
}
