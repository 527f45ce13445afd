#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HheaTable {
    /// Distance from baseline of highest ascender
    pub ascender: i16,

    /// Distance from baseline of lowest descender
    pub descender: i16,

    /// Number of advance widths stored explicitly in the `hmtx` table
    pub number_of_h_metrics: u16,
}
