use anyhow::Context;

use ttf_embed::{
    EmbedOptions, EmbeddedFontStream, FontDescriptor, FontFamily, Reference, TrueTypeFontFile,
};

const USAGE: &str = "usage: ttf-embed <font-path> [Type1|TrueType] [--no-compress]";

/// Object numbers the printed descriptor and stream are given
const DESCRIPTOR_OBJECT: usize = 1;
const FONT_FILE_OBJECT: usize = 2;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut path = None;
    let mut family = FontFamily::default();
    let mut options = EmbedOptions::default();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-compress" => options.compress = false,
            _ if path.is_none() => path = Some(arg),
            _ => family = FontFamily::from_str(&arg)?,
        }
    }

    let path = path.context(USAGE)?;

    let font = TrueTypeFontFile::open(&path).with_context(|| format!("parsing {}", path))?;
    let metrics = font.metrics();

    log::info!(
        "{}: {} glyphs, {} tables",
        font.post_script_name(),
        font.num_glyphs(),
        font.directory().len()
    );

    println!("name:          {}", font.post_script_name());
    println!("units per em:  {}", metrics.units_per_em);
    println!("glyphs:        {}", font.num_glyphs());
    println!("mapped chars:  {}", font.chars().len());
    println!("embeddable:    {}", metrics.embeddable);
    println!("bold:          {}", metrics.bold);
    println!("symbolic:      {}", metrics.symbolic);
    println!("fixed pitch:   {}", metrics.is_fixed_pitch);
    println!();

    let descriptor = FontDescriptor::from_true_type(&font);
    let font_file = Reference::new(FONT_FILE_OBJECT, 0);

    print!(
        "{} 0 obj\n{}endobj\n",
        DESCRIPTOR_OBJECT,
        descriptor.to_pdf_string(family, &font_file)
    );

    let stream = EmbeddedFontStream::for_font(&font, options)?;

    println!(
        "{} 0 obj\n{}stream\n[ {} bytes ]\nendstream\nendobj",
        font_file.object_number,
        stream.dictionary_string(),
        stream.stream().len()
    );

    Ok(())
}
