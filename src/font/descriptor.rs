use std::fmt;

use crate::{data_structures::Rectangle, objects::Reference};

use super::true_type::{FontMetrics, TrueTypeFontFile};

/// Size of the PDF glyph space that font units are scaled into
const GLYPH_SPACE_UNITS: f64 = 1000.0;

/// Stem width written for bold faces; lighter faces get [`REGULAR_STEM_V`]
const BOLD_STEM_V: i32 = 120;
const REGULAR_STEM_V: i32 = 70;

pdf_enum!(
    /// The font dictionary subtype a descriptor is written for. It decides which
    /// key the embedded font program is attached under
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FontFamily {
        Type1 = "Type1",
        TrueType = "TrueType",
    }
);

impl FontFamily {
    pub const fn font_file_key(&self) -> &'static str {
        match self {
            Self::Type1 => "FontFile",
            Self::TrueType => "FontFile2",
        }
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::TrueType
    }
}

#[derive(Debug)]
pub struct FontDescriptor {
    /// The PostScript name of the font. This name shall be the same as the value of
    /// BaseFont in the font or CIDFont dictionary that refers to this font descriptor
    font_name: String,

    /// A collection of flags defining various characteristics of the font
    flags: FontDescriptorFlags,

    /// The font bounding box, in glyph space
    font_bounding_box: Rectangle,

    /// The angle, expressed in degrees counterclockwise from the vertical, of the dominant
    /// vertical strokes of the font.
    ///
    /// The value shall be negative for fonts that slope to the right, as almost all italic fonts do
    italic_angle: i32,

    /// The maximum height above the baseline reached by glyphs in this font
    ascent: i32,

    /// The maximum depth below the baseline reached by glyphs in this font
    descent: i32,

    /// The vertical coordinate of the top of flat capital letters, measured from the baseline
    cap_height: i32,

    /// The vertical coordinate of the top of flat nonascending lowercase letters
    x_height: i32,

    /// The thickness, measured horizontally, of the dominant vertical stems of glyphs in the font
    stem_v: i32,

    /// The width of `.notdef`, used for codes missing from the font's Widths array
    missing_width: i32,
}

impl FontDescriptor {
    const TYPE: &'static str = "FontDescriptor";

    pub fn from_true_type(font: &TrueTypeFontFile) -> Self {
        let metrics = font.metrics();
        let scale = Scale::new(metrics.units_per_em);
        let bbox = metrics.bounding_box;

        let stem_v = if metrics.bold {
            BOLD_STEM_V
        } else {
            REGULAR_STEM_V
        };

        Self {
            font_name: font.post_script_name().to_owned(),
            flags: FontDescriptorFlags(metrics.flags()),
            font_bounding_box: Rectangle::new(
                scale.apply(bbox.x_min.into()) as f32,
                scale.apply(bbox.y_min.into()) as f32,
                scale.apply(bbox.x_max.into()) as f32,
                scale.apply(bbox.y_max.into()) as f32,
            ),
            italic_angle: i32::from(metrics.italic_angle),
            ascent: scale.apply(metrics.effective_ascender()),
            descent: scale.apply(metrics.effective_descender()),
            cap_height: scale.apply(metrics.cap_height.into()),
            x_height: scale.apply(metrics.x_height()),
            stem_v,
            missing_width: scale.apply(font.advance_width(0).map_or(0, i32::from)),
        }
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub const fn flags(&self) -> FontDescriptorFlags {
        self.flags
    }

    pub const fn font_bounding_box(&self) -> Rectangle {
        self.font_bounding_box
    }

    pub const fn ascent(&self) -> i32 {
        self.ascent
    }

    pub const fn descent(&self) -> i32 {
        self.descent
    }

    pub const fn cap_height(&self) -> i32 {
        self.cap_height
    }

    pub const fn x_height(&self) -> i32 {
        self.x_height
    }

    pub const fn stem_v(&self) -> i32 {
        self.stem_v
    }

    pub const fn missing_width(&self) -> i32 {
        self.missing_width
    }

    /// Key and serialized value of every entry after `/FontName`, in output order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Flags", self.flags.0.to_string()),
            ("FontBBox", self.font_bounding_box.to_string()),
            ("ItalicAngle", self.italic_angle.to_string()),
            ("Ascent", self.ascent.to_string()),
            ("Descent", self.descent.to_string()),
            ("CapHeight", self.cap_height.to_string()),
            ("XHeight", self.x_height.to_string()),
            ("StemV", self.stem_v.to_string()),
            ("MissingWidth", self.missing_width.to_string()),
        ]
    }

    /// Renders the descriptor dictionary, attaching the font program at
    /// `font_file` under the key `family` expects
    pub fn to_pdf_string(&self, family: FontFamily, font_file: &Reference) -> String {
        let mut out = format!("<</Type /{} /FontName /{}", Self::TYPE, self.font_name);

        for (key, value) in self.entries() {
            out.push_str(&format!(" /{} {}", key, value));
        }

        out.push_str(&format!(" /{} {}>>\n", family.font_file_key(), font_file));

        out
    }
}

/// Converts font units to glyph space
#[derive(Debug, Clone, Copy)]
struct Scale {
    units_per_em: u16,
}

impl Scale {
    fn new(units_per_em: u16) -> Self {
        if units_per_em == 0 {
            log::warn!("unitsPerEm is 0; font units are written unscaled");
        }

        Self { units_per_em }
    }

    fn apply(self, v: i32) -> i32 {
        if self.units_per_em == 0 {
            return v;
        }

        (f64::from(v) * GLYPH_SPACE_UNITS / f64::from(self.units_per_em)).round() as i32
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FontDescriptorFlags(pub u32);

impl fmt::Debug for FontDescriptorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

impl FontDescriptorFlags {
    pub const SYMBOLIC: u32 = FontMetrics::SYMBOLIC;
    pub const NON_SYMBOLIC: u32 = FontMetrics::NON_SYMBOLIC;

    /// Font contains glyphs outside the Adobe standard Latin character set.
    ///
    /// This flag and the Nonsymbolic flag shall not both be set or both be clear
    pub const fn is_symbolic(&self) -> bool {
        self.0 & Self::SYMBOLIC != 0
    }

    /// Font uses the Adobe standard Latin character set or a subset of it
    pub const fn is_non_symbolic(&self) -> bool {
        self.0 & Self::NON_SYMBOLIC != 0
    }
}
