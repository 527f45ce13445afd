use std::{collections::BTreeMap, fmt};

use crate::{
    error::{TrueTypeError, TrueTypeResult},
    parse_binary::BinaryParser,
};

use super::table::{
    sanitize_post_script_name, CmapSubtableFormat4, CmapTable, DirectoryTableEntry,
    EncodingRecord, FontDirectory, Head, HheaTable, HmtxTable, LocaFormat, LocaTable, MaxpTable,
    NameTable, Os2Table, PostTable, TableTag, ENCODING_SYMBOL, ENCODING_UNICODE_BMP,
    HEAD_MAGIC_NUMBER, PLATFORM_MICROSOFT, POST_SCRIPT_NAME_ID, SFNT_VERSION,
};

pub(crate) struct TrueTypeParser<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl fmt::Debug for TrueTypeParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeParser")
            .field("cursor", &self.cursor)
            .field("buffer", &format!("[ {} bytes ]", self.buffer.len()))
            .finish()
    }
}

impl BinaryParser for TrueTypeParser<'_> {
    fn buffer(&self) -> &[u8] {
        self.buffer
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn cursor_mut(&mut self) -> &mut usize {
        &mut self.cursor
    }
}

/// Base parsing
impl<'a> TrueTypeParser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    fn read_u16_array(&mut self, len: usize) -> TrueTypeResult<Vec<u16>> {
        let mut arr = Vec::with_capacity(len);

        for _ in 0..len {
            arr.push(self.read_u16()?);
        }

        Ok(arr)
    }

    /// Moves the cursor to the start of `tag`
    pub fn seek_table(
        &mut self,
        directory: &FontDirectory,
        tag: TableTag,
    ) -> TrueTypeResult<DirectoryTableEntry> {
        let entry = directory
            .find_table_entry(tag)
            .ok_or(TrueTypeError::NotFound { tag })?;

        log::trace!(
            "reading '{}' at offset {} ({} bytes)",
            tag,
            entry.offset,
            entry.length
        );

        self.seek(entry.offset as usize);

        Ok(entry)
    }
}

/// Table parsing
impl<'a> TrueTypeParser<'a> {
    fn read_dir_table_entry(&mut self) -> TrueTypeResult<(TableTag, DirectoryTableEntry)> {
        let tag = TableTag::new(self.read_tag_bytes()?);
        let checksum = self.read_u32()?;
        let offset = self.read_u32()?;
        let length = self.read_u32()?;

        Ok((
            tag,
            DirectoryTableEntry {
                checksum,
                offset,
                length,
            },
        ))
    }

    /// Every table the directory names must lie inside the buffer, whether or
    /// not it is read later
    fn check_table_bounds(&self, tag: TableTag, entry: DirectoryTableEntry) -> TrueTypeResult<()> {
        let offset = entry.offset as usize;
        let requested = entry.length as usize;
        let available = self.buffer.len().saturating_sub(offset);

        if available < requested {
            log::debug!(
                "table '{}' ends at {} but the font is {} bytes",
                tag,
                offset.saturating_add(requested),
                self.buffer.len()
            );

            return Err(TrueTypeError::ShortRead {
                offset,
                requested,
                available,
            });
        }

        Ok(())
    }

    pub fn read_font_directory(&mut self) -> TrueTypeResult<FontDirectory> {
        self.seek(0);

        let sfnt_version = self.read_tag_bytes()?;
        if sfnt_version != SFNT_VERSION {
            return Err(TrueTypeError::UnsupportedFormat {
                found: sfnt_version,
            });
        }

        let number_of_tables = self.read_u16()?;
        // searchRange, entrySelector, rangeShift
        self.skip(6);

        let mut directory = FontDirectory::new();

        for _ in 0..number_of_tables {
            let (tag, entry) = self.read_dir_table_entry()?;
            self.check_table_bounds(tag, entry)?;
            directory.insert(tag, entry);
        }

        log::debug!(
            "font directory declares {} tables ({} unique)",
            number_of_tables,
            directory.len()
        );

        Ok(directory)
    }

    pub fn read_head_table(&mut self, directory: &FontDirectory) -> TrueTypeResult<Head> {
        self.seek_table(directory, TableTag::HEAD)?;

        // version, fontRevision, checkSumAdjustment
        self.skip(12);

        let magic_number = self.read_u32()?;
        if magic_number != HEAD_MAGIC_NUMBER {
            return Err(TrueTypeError::BadMagicNumber {
                found: magic_number,
            });
        }

        // flags
        self.skip(2);
        let units_per_em = self.read_u16()?;

        // created, modified
        self.skip(16);

        let x_min = self.read_i16()?;
        let y_min = self.read_i16()?;
        let x_max = self.read_i16()?;
        let y_max = self.read_i16()?;

        // macStyle, lowestRecPPEM, fontDirectionHint
        self.skip(6);

        let index_to_loc_format = LocaFormat::from_index_to_loc_format(self.read_i16()?);

        Ok(Head {
            units_per_em,
            x_min,
            y_min,
            x_max,
            y_max,
            index_to_loc_format,
        })
    }

    pub fn read_hhea_table(&mut self, directory: &FontDirectory) -> TrueTypeResult<HheaTable> {
        self.seek_table(directory, TableTag::HHEA)?;

        // version
        self.skip(4);

        let ascender = self.read_i16()?;
        let descender = self.read_i16()?;

        // lineGap through metricDataFormat
        self.skip(26);

        let number_of_h_metrics = self.read_u16()?;

        Ok(HheaTable {
            ascender,
            descender,
            number_of_h_metrics,
        })
    }

    pub fn read_maxp_table(&mut self, directory: &FontDirectory) -> TrueTypeResult<MaxpTable> {
        self.seek_table(directory, TableTag::MAXP)?;

        // version
        self.skip(4);

        let num_glyphs = self.read_u16()?;

        Ok(MaxpTable { num_glyphs })
    }

    pub fn read_hmtx_table(
        &mut self,
        directory: &FontDirectory,
        hhea: &HheaTable,
        maxp: &MaxpTable,
    ) -> TrueTypeResult<HmtxTable> {
        self.seek_table(directory, TableTag::HMTX)?;

        let number_of_h_metrics = usize::from(hhea.number_of_h_metrics);
        let num_glyphs = usize::from(maxp.num_glyphs);

        let mut advance_widths = Vec::with_capacity(number_of_h_metrics.max(num_glyphs));

        for _ in 0..number_of_h_metrics {
            advance_widths.push(self.read_u16()?);
            let _left_side_bearing = self.read_i16()?;
        }

        if number_of_h_metrics < num_glyphs {
            let last = *advance_widths
                .last()
                .ok_or(TrueTypeError::EmptyHorizontalMetrics {
                    num_glyphs: maxp.num_glyphs,
                })?;

            advance_widths.resize(num_glyphs, last);
        }

        Ok(HmtxTable { advance_widths })
    }

    fn read_encoding_record(&mut self) -> TrueTypeResult<EncodingRecord> {
        let platform_id = self.read_u16()?;
        let encoding_id = self.read_u16()?;
        let offset = self.read_u32()?;

        Ok(EncodingRecord {
            platform_id,
            encoding_id,
            offset,
        })
    }

    pub fn read_cmap_table(&mut self, directory: &FontDirectory) -> TrueTypeResult<CmapTable> {
        let table_offset = self.seek_table(directory, TableTag::CMAP)?.offset as usize;

        // version
        self.skip(2);

        let number_subtables = self.read_u16()?;

        let mut unicode_offset = None;
        let mut symbol = false;

        for _ in 0..number_subtables {
            let record = self.read_encoding_record()?;

            if record.platform_id != PLATFORM_MICROSOFT {
                continue;
            }

            match record.encoding_id {
                ENCODING_UNICODE_BMP => unicode_offset = Some(record.offset),
                ENCODING_SYMBOL => symbol = true,
                _ => {}
            }
        }

        // a zero offset would point back at the cmap header
        let subtable_offset = unicode_offset
            .filter(|&offset| offset != 0)
            .ok_or(TrueTypeError::NoUnicodeEncoding)?;

        self.seek(table_offset + subtable_offset as usize);

        let subtable = self.read_cmap_subtable_format_4()?;
        let chars = self.map_cmap_segments(&subtable)?;

        log::debug!(
            "cmap: {} segments, {} mapped codepoints, symbolic: {}",
            subtable.seg_count,
            chars.len(),
            symbol
        );

        Ok(CmapTable {
            symbol,
            subtable,
            chars,
        })
    }

    fn read_cmap_subtable_format_4(&mut self) -> TrueTypeResult<CmapSubtableFormat4> {
        let format = self.read_u16()?;
        if format != 4 {
            return Err(TrueTypeError::UnsupportedSubtableFormat { format });
        }

        let length = self.read_u16()?;

        // language
        self.skip(2);

        let seg_count = self.read_u16()? / 2;

        // searchRange, entrySelector, rangeShift
        self.skip(6);

        let fixed_size = CmapSubtableFormat4::HEADER_SIZE + 8 * usize::from(seg_count);
        if usize::from(length) < fixed_size {
            log::warn!(
                "cmap format 4 length {} is shorter than its {} segment arrays",
                length,
                seg_count
            );
        }

        let glyph_id_count = CmapSubtableFormat4::glyph_id_count(length, seg_count);

        let end_code = self.read_u16_array(usize::from(seg_count))?;

        // reservedPad
        self.skip(2);

        let start_code = self.read_u16_array(usize::from(seg_count))?;
        let id_delta = self.read_u16_array(usize::from(seg_count))?;

        let id_range_offset_start = self.cursor;
        let id_range_offset = self.read_u16_array(usize::from(seg_count))?;
        let glyph_id_array = self.read_u16_array(glyph_id_count)?;

        Ok(CmapSubtableFormat4 {
            length,
            seg_count,
            end_code,
            start_code,
            id_delta,
            id_range_offset,
            glyph_id_array,
            id_range_offset_start,
        })
    }

    /// Resolves every codepoint of every segment, in file order, so that a later
    /// segment overrides an earlier one for the same codepoint
    fn map_cmap_segments(
        &mut self,
        subtable: &CmapSubtableFormat4,
    ) -> TrueTypeResult<BTreeMap<u32, u16>> {
        let mut chars = BTreeMap::new();

        for segment in subtable.segments() {
            for c in segment.codepoints() {
                let glyph_id = if segment.id_range_offset == 0 {
                    c.wrapping_add(segment.id_delta)
                } else {
                    self.seek(segment.glyph_id_offset(subtable.id_range_offset_start, c));

                    match self.read_u16()? {
                        0 => 0,
                        glyph_id => glyph_id.wrapping_add(segment.id_delta),
                    }
                };

                if glyph_id != 0 {
                    chars.insert(u32::from(c), glyph_id);
                }
            }
        }

        Ok(chars)
    }

    pub fn read_name_table(&mut self, directory: &FontDirectory) -> TrueTypeResult<NameTable> {
        let table_offset = self.seek_table(directory, TableTag::NAME)?.offset as usize;

        // format
        self.skip(2);

        let count = self.read_u16()?;
        let string_offset = usize::from(self.read_u16()?);

        for _ in 0..count {
            // platformID, encodingID, languageID
            self.skip(6);

            let name_id = self.read_u16()?;
            let length = self.read_u16()?;
            let offset = self.read_u16()?;

            if name_id != POST_SCRIPT_NAME_ID {
                continue;
            }

            self.seek(table_offset + string_offset + usize::from(offset));

            let post_script_name = sanitize_post_script_name(self.read_bytes(usize::from(length))?);

            if post_script_name.is_empty() {
                break;
            }

            return Ok(NameTable { post_script_name });
        }

        Err(TrueTypeError::PostScriptNameNotFound)
    }

    pub fn read_os2_table(
        &mut self,
        directory: &FontDirectory,
        hhea: &HheaTable,
    ) -> TrueTypeResult<Os2Table> {
        self.seek_table(directory, TableTag::OS2)?;

        let version = self.read_u16()?;

        // xAvgCharWidth, usWeightClass, usWidthClass
        self.skip(6);

        let fs_type = self.read_u16()?;

        // subscript, superscript and strikeout metrics, sFamilyClass, panose,
        // ulUnicodeRange1-4, achVendID
        self.skip(11 * 2 + 10 + 4 * 4 + 4);

        let fs_selection = self.read_u16()?;

        // usFirstCharIndex, usLastCharIndex
        self.skip(4);

        let typo_ascender = self.read_i16()?;
        let typo_descender = self.read_i16()?;
        let typo_line_gap = self.read_i16()?;
        let win_ascent = self.read_u16()?;
        let win_descent = self.read_u16()?;

        let (x_height, cap_height) = if version >= 2 {
            // ulCodePageRange1-2
            self.skip(8);

            (self.read_i16()?, self.read_i16()?)
        } else {
            (0, hhea.ascender)
        };

        Ok(Os2Table {
            version,
            fs_type,
            fs_selection,
            typo_ascender,
            typo_descender,
            typo_line_gap,
            win_ascent,
            win_descent,
            x_height,
            cap_height,
        })
    }

    pub fn read_post_table(&mut self, directory: &FontDirectory) -> TrueTypeResult<PostTable> {
        self.seek_table(directory, TableTag::POST)?;

        // version
        self.skip(4);

        let italic_angle = self.read_i16()?;
        let italic_angle_fraction = self.read_u16()?;
        if italic_angle_fraction != 0 {
            log::warn!(
                "dropping fractional italic angle {}+{}/65536",
                italic_angle,
                italic_angle_fraction
            );
        }

        let underline_position = self.read_i16()?;
        let underline_thickness = self.read_i16()?;
        let is_fixed_pitch = self.read_u32()? != 0;

        Ok(PostTable {
            italic_angle,
            underline_position,
            underline_thickness,
            is_fixed_pitch,
        })
    }

    pub fn read_loca_table(
        &mut self,
        directory: &FontDirectory,
        format: LocaFormat,
    ) -> TrueTypeResult<LocaTable> {
        let entry = self.seek_table(directory, TableTag::LOCA)?;
        let length = entry.length as usize;

        let offsets = match format {
            LocaFormat::Short => self
                .read_bytes(length / 2 * 2)?
                .chunks_exact(2)
                .map(|bytes| u32::from(u16::from_be_bytes([bytes[0], bytes[1]])) * 2)
                .collect(),
            LocaFormat::Long => self
                .read_bytes(length / 4 * 4)?
                .chunks_exact(4)
                .map(|bytes| u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
                .collect(),
        };

        Ok(LocaTable { offsets })
    }
}
