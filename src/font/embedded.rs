use std::{fmt, io::Write};

use flate2::{write::ZlibEncoder, Compression};

use crate::error::EmbedError;

use super::true_type::TrueTypeFontFile;

#[derive(Debug, Clone, Copy)]
pub struct EmbedOptions {
    /// Deflate the font program and mark the stream `/FlateDecode`
    pub compress: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self { compress: true }
    }
}

/// A font program stream, the object a descriptor's `/FontFile2` (or
/// `/FontFile`) entry refers to
#[derive(Clone)]
pub struct EmbeddedFontStream {
    /// The length in bytes of the entire TrueType font program, before the
    /// stream's filters are applied
    length_one: usize,

    compressed: bool,

    stream: Vec<u8>,
}

impl fmt::Debug for EmbeddedFontStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFontStream")
            .field("length_one", &self.length_one)
            .field("compressed", &self.compressed)
            .field("stream", &format!("[ {} bytes ]", self.stream.len()))
            .finish()
    }
}

impl EmbeddedFontStream {
    pub fn new(font_program: &[u8], options: EmbedOptions) -> anyhow::Result<Self> {
        let stream = if options.compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(font_program)?;
            encoder.finish()?
        } else {
            font_program.to_vec()
        };

        log::debug!(
            "font program stream: {} bytes, {} after filters",
            font_program.len(),
            stream.len()
        );

        Ok(Self {
            length_one: font_program.len(),
            compressed: options.compress,
            stream,
        })
    }

    /// Wraps the cached bytes of a parsed font, refusing fonts whose license
    /// bits forbid embedding
    pub fn for_font(font: &TrueTypeFontFile, options: EmbedOptions) -> anyhow::Result<Self> {
        if !font.metrics().embeddable {
            anyhow::bail!(EmbedError::NotEmbeddable {
                font_name: font.post_script_name().to_owned(),
            });
        }

        Self::new(font.data(), options)
    }

    pub const fn length_one(&self) -> usize {
        self.length_one
    }

    pub fn stream(&self) -> &[u8] {
        &self.stream
    }

    pub fn dictionary_string(&self) -> String {
        let filter = if self.compressed {
            " /Filter /FlateDecode"
        } else {
            ""
        };

        format!(
            "<</Length {} /Length1 {}{}>>",
            self.stream.len(),
            self.length_one,
            filter
        )
    }

    /// The stream object body, dictionary through `endstream`
    pub fn to_pdf_bytes(&self) -> Vec<u8> {
        let mut out = self.dictionary_string().into_bytes();

        out.extend_from_slice(b"stream\n");
        out.extend_from_slice(&self.stream);
        out.extend_from_slice(b"\nendstream\n");

        out
    }
}
