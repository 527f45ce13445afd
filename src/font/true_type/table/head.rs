/// Expected value of `magicNumber` in every `head` table
pub const HEAD_MAGIC_NUMBER: u32 = 0x5F0F_3CF5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    /// Range from 64 to 16384
    pub units_per_em: u16,

    /// Bounding box of all glyphs, in font units
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,

    pub index_to_loc_format: LocaFormat,
}

/// Width of the entries in the `loca` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaFormat {
    /// 16-bit entries holding the actual offset divided by two
    Short,

    /// 32-bit entries holding the actual offset
    Long,
}

impl LocaFormat {
    /// Only 0 selects the short format; any other value is treated as long
    pub const fn from_index_to_loc_format(format: i16) -> Self {
        match format {
            0 => Self::Short,
            _ => Self::Long,
        }
    }
}
