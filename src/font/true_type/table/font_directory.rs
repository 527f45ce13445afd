use std::collections::HashMap;

use super::TableTag;

/// The sfnt version every TrueType outline font starts with
pub const SFNT_VERSION: [u8; 4] = [0x00, 0x01, 0x00, 0x00];

#[derive(Debug, Clone, Default)]
pub struct FontDirectory {
    entries: HashMap<TableTag, DirectoryTableEntry>,
}

impl FontDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries with the same tag replace earlier ones
    pub(crate) fn insert(&mut self, tag: TableTag, entry: DirectoryTableEntry) {
        self.entries.insert(tag, entry);
    }

    pub fn find_table_entry(&self, tag: TableTag) -> Option<DirectoryTableEntry> {
        self.entries.get(&tag).copied()
    }

    pub fn find_table_offset(&self, tag: TableTag) -> Option<u32> {
        self.find_table_entry(tag).map(|entry| entry.offset)
    }

    pub fn contains(&self, tag: TableTag) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TableTag, &DirectoryTableEntry)> {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryTableEntry {
    pub checksum: u32,

    /// Offset from the beginning of the file
    pub offset: u32,

    /// Length of the table in bytes, excluding padding
    pub length: u32,
}
