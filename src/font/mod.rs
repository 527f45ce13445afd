pub use descriptor::{FontDescriptor, FontDescriptorFlags, FontFamily};
pub use embedded::{EmbedOptions, EmbeddedFontStream};

mod descriptor;
mod embedded;
pub mod true_type;
