use crate::error::{TrueTypeError, TrueTypeResult};

/// Generic trait for parsing big-endian binary formats
pub trait BinaryParser {
    fn buffer(&self) -> &[u8];
    fn cursor(&self) -> usize;
    fn cursor_mut(&mut self) -> &mut usize;

    /// Borrow exactly `length` bytes starting at the cursor and advance past them
    fn read_bytes(&mut self, length: usize) -> TrueTypeResult<&[u8]> {
        let start = self.cursor();
        let available = self.buffer().len().saturating_sub(start);

        if available < length {
            return Err(TrueTypeError::ShortRead {
                offset: start,
                requested: length,
                available,
            });
        }

        *self.cursor_mut() += length;

        Ok(&self.buffer()[start..start + length])
    }

    /// Reads an unsigned big-endian integer `width` bytes wide. Only widths of
    /// 1 through 4 are meaningful
    fn read_uint(&mut self, width: usize) -> TrueTypeResult<u32> {
        debug_assert!((1..=4).contains(&width));

        Ok(self
            .read_bytes(width)?
            .iter()
            .fold(0, |acc, &b| (acc << 8) | u32::from(b)))
    }

    fn read_u16(&mut self) -> TrueTypeResult<u16> {
        Ok(self.read_uint(2)? as u16)
    }

    fn read_u32(&mut self) -> TrueTypeResult<u32> {
        self.read_uint(4)
    }

    /// Two's complement reinterpretation of a 16-bit read
    fn read_i16(&mut self) -> TrueTypeResult<i16> {
        Ok(self.read_u16()? as i16)
    }

    fn read_tag_bytes(&mut self) -> TrueTypeResult<[u8; 4]> {
        let bytes = self.read_bytes(4)?;

        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Moves the cursor forward. Skipping past the end is not an error on its
    /// own; the next read will fail instead
    fn skip(&mut self, n: usize) {
        *self.cursor_mut() += n;
    }

    fn seek(&mut self, offset: usize) {
        *self.cursor_mut() = offset;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct SliceParser<'a> {
        buffer: &'a [u8],
        cursor: usize,
    }

    impl BinaryParser for SliceParser<'_> {
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

    fn parser(buffer: &[u8]) -> SliceParser<'_> {
        SliceParser { buffer, cursor: 0 }
    }

    #[test]
    fn reads_are_big_endian() {
        let mut p = parser(&[0x12, 0x34, 0xde, 0xad, 0xbe, 0xef]);

        assert_eq!(p.read_u16().unwrap(), 0x1234);
        assert_eq!(p.read_u32().unwrap(), 0xdead_beef);
        assert_eq!(p.cursor(), 6);
    }

    #[test]
    fn signed_read_is_twos_complement() {
        let mut p = parser(&[0xff, 0xff, 0x80, 0x00, 0x7f, 0xff]);

        assert_eq!(p.read_i16().unwrap(), -1);
        assert_eq!(p.read_i16().unwrap(), -32768);
        assert_eq!(p.read_i16().unwrap(), 32767);
    }

    #[test]
    fn short_read_reports_what_was_available() {
        let mut p = parser(&[0x00, 0x01, 0x02]);
        p.skip(1);

        match p.read_u32() {
            Err(TrueTypeError::ShortRead {
                offset,
                requested,
                available,
            }) => {
                assert_eq!(offset, 1);
                assert_eq!(requested, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected short read, got {:?}", other),
        }
    }

    #[test]
    fn failed_read_does_not_move_cursor() {
        let mut p = parser(&[0xaa]);

        assert!(p.read_u16().is_err());
        assert_eq!(p.cursor(), 0);
        assert_eq!(p.read_uint(1).unwrap(), 0xaa);
    }

    #[test]
    fn reading_after_seeking_past_end_fails() {
        let mut p = parser(&[0, 0, 0, 0]);
        p.seek(10);

        assert!(matches!(
            p.read_u16(),
            Err(TrueTypeError::ShortRead { available: 0, .. })
        ));
    }
}
