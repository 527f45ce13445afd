/// Declares an enum whose variants are spelled as PDF names, with conversions
/// to and from that spelling
macro_rules! pdf_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$doc:meta])*
                $variant:ident = $val:literal
            ),*,
        }
    ) => {
        $(#[$attr])*
        $vis enum $name {
            $(
                $(#[$doc])*
                $variant
            ),*,
        }

        impl $name {
            pub fn from_str(s: &str) -> anyhow::Result<Self> {
                Ok(match s {
                    $($val => Self::$variant),*,
                    _ => anyhow::bail!(crate::error::EmbedError::UnrecognizedVariant {
                        ty: stringify!($name),
                        found: s.to_owned(),
                    }),
                })
            }

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $val),*,
                }
            }
        }
    };
}
