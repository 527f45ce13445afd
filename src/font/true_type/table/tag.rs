use std::fmt::{self, Write};

/// Four byte table identifier, compared byte for byte
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableTag([u8; 4]);

impl TableTag {
    pub const CMAP: Self = Self::new(*b"cmap");
    pub const HEAD: Self = Self::new(*b"head");
    pub const HHEA: Self = Self::new(*b"hhea");
    pub const HMTX: Self = Self::new(*b"hmtx");
    pub const LOCA: Self = Self::new(*b"loca");
    pub const MAXP: Self = Self::new(*b"maxp");
    pub const NAME: Self = Self::new(*b"name");
    pub const OS2: Self = Self::new(*b"OS/2");
    pub const POST: Self = Self::new(*b"post");
    pub const GLYF: Self = Self::new(*b"glyf");

    pub const fn new(tag: [u8; 4]) -> Self {
        Self(tag)
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Debug for TableTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for TableTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(b as char)?;
        }

        Ok(())
    }
}
