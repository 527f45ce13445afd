#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostTable {
    /// Integer part of the italic angle in counter-clockwise degrees from the
    /// vertical
    pub italic_angle: i16,

    pub underline_position: i16,
    pub underline_thickness: i16,

    pub is_fixed_pitch: bool,
}
