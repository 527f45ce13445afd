#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Os2Table {
    pub version: u16,

    /// Embedding licensing rights
    pub fs_type: u16,

    pub fs_selection: u16,

    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub typo_line_gap: i16,

    pub win_ascent: u16,
    pub win_descent: u16,

    /// Zero unless `version >= 2`
    pub x_height: i16,

    /// Taken from the `hhea` ascender when `version < 2`
    pub cap_height: i16,
}

impl Os2Table {
    const RESTRICTED_LICENSE: u16 = 0x0002;
    const BITMAP_EMBEDDING_ONLY: u16 = 0x0200;
    const BOLD: u16 = 1 << 5;

    pub const fn is_embeddable(&self) -> bool {
        self.fs_type != Self::RESTRICTED_LICENSE && self.fs_type & Self::BITMAP_EMBEDDING_ONLY == 0
    }

    pub const fn is_bold(&self) -> bool {
        self.fs_selection & Self::BOLD != 0
    }
}
