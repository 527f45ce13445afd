/// Name ID of the PostScript name record
pub const POST_SCRIPT_NAME_ID: u16 = 6;

const FORBIDDEN: &[u8] = b" []{}()<>/%";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    pub post_script_name: String,
}

/// Removes NUL bytes, which collapses the UTF-16BE encoding of an ASCII name,
/// and every character that may not appear in a PDF name token
pub fn sanitize_post_script_name(raw: &[u8]) -> String {
    raw.iter()
        .copied()
        .filter(|&b| b != 0 && !FORBIDDEN.contains(&b))
        .map(char::from)
        .collect()
}
