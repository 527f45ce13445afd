use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaTable {
    /// Byte offsets into the `glyf` table
    pub offsets: Vec<u32>,
}

impl LocaTable {
    /// Byte range of a glyph's outline inside the `glyf` table. Empty glyphs
    /// yield an empty range
    pub fn glyph_range(&self, glyph_id: u16) -> Option<Range<u32>> {
        let idx = usize::from(glyph_id);
        let start = *self.offsets.get(idx)?;
        let end = *self.offsets.get(idx + 1)?;

        if end < start {
            return None;
        }

        Some(start..end)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn consecutive_offsets_delimit_glyphs() {
        let loca = LocaTable {
            offsets: vec![0, 10, 10, 34],
        };

        assert_eq!(loca.glyph_range(0), Some(0..10));
        assert_eq!(loca.glyph_range(1), Some(10..10));
        assert_eq!(loca.glyph_range(2), Some(10..34));
        assert_eq!(loca.glyph_range(3), None);
    }

    #[test]
    fn decreasing_offsets_are_rejected() {
        let loca = LocaTable {
            offsets: vec![20, 10],
        };

        assert_eq!(loca.glyph_range(0), None);
    }
}
