use super::table::{CmapTable, Head, HheaTable, Os2Table, PostTable};

/// Font-wide bounding box, in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

/// Scalar metrics collected from `head`, `hhea`, `OS/2`, `post` and `cmap`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub bounding_box: BoundingBox,

    /// `hhea` ascender and descender
    pub ascender: i16,
    pub descender: i16,

    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub line_gap: i16,
    pub win_ascent: u16,
    pub win_descent: u16,

    pub cap_height: i16,

    pub italic_angle: i16,
    pub underline_position: i16,
    pub underline_thickness: i16,
    pub is_fixed_pitch: bool,

    pub embeddable: bool,
    pub bold: bool,
    pub symbolic: bool,

    os2_version: u16,
    os2_x_height: i16,
}

impl FontMetrics {
    /// PDF font flag bits describing the character set
    pub const SYMBOLIC: u32 = 1 << 2;
    pub const NON_SYMBOLIC: u32 = 1 << 5;

    pub(crate) fn new(
        head: &Head,
        hhea: &HheaTable,
        os2: &Os2Table,
        post: &PostTable,
        cmap: &CmapTable,
    ) -> Self {
        Self {
            units_per_em: head.units_per_em,
            bounding_box: BoundingBox {
                x_min: head.x_min,
                y_min: head.y_min,
                x_max: head.x_max,
                y_max: head.y_max,
            },
            ascender: hhea.ascender,
            descender: hhea.descender,
            typo_ascender: os2.typo_ascender,
            typo_descender: os2.typo_descender,
            line_gap: os2.typo_line_gap,
            win_ascent: os2.win_ascent,
            win_descent: os2.win_descent,
            cap_height: os2.cap_height,
            italic_angle: post.italic_angle,
            underline_position: post.underline_position,
            underline_thickness: post.underline_thickness,
            is_fixed_pitch: post.is_fixed_pitch,
            embeddable: os2.is_embeddable(),
            bold: os2.is_bold(),
            symbolic: cmap.symbol,
            os2_version: os2.version,
            os2_x_height: os2.x_height,
        }
    }

    pub const fn os2_version(&self) -> u16 {
        self.os2_version
    }

    /// `usWinAscent` once typographic metrics are present, else the `hhea`
    /// ascender
    pub fn effective_ascender(&self) -> i32 {
        if self.typo_ascender == 0 {
            return i32::from(self.ascender);
        }

        i32::from(self.win_ascent)
    }

    /// `usWinDescent` once typographic metrics are present, else the `hhea`
    /// descender. `usWinDescent` is unsigned, so it takes the sign of the `hhea`
    /// descender
    pub fn effective_descender(&self) -> i32 {
        if self.typo_descender == 0 {
            return i32::from(self.descender);
        }

        let descender = i32::from(self.win_descent);

        if self.descender < 0 {
            -descender
        } else {
            descender
        }
    }

    /// `sxHeight` when the `OS/2` table is new enough to carry one, else
    /// estimated from the ascender
    pub fn x_height(&self) -> i32 {
        if self.os2_version >= 2 && self.os2_x_height != 0 {
            return i32::from(self.os2_x_height);
        }

        (0.66 * f64::from(self.ascender)).round() as i32
    }

    pub fn flags(&self) -> u32 {
        if self.symbolic {
            Self::SYMBOLIC
        } else {
            Self::NON_SYMBOLIC
        }
    }
}
