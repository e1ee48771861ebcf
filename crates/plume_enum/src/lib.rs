//! Enumerated-type helper.
//!
//! [`Enumerated`] gives an enum a fixed, compile-time mapping between its
//! variants and their canonical names: variant listing, name lookup, and
//! parsing (fallible and safe-try forms). No runtime reflection is
//! involved; each implementing type declares its variant table once,
//! usually through the [`enumerated!`] macro.

/// Error parsing an enumerated type from a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {type_name} variant `{name}`")]
pub struct UnknownVariant {
    /// The rejected name.
    pub name: String,
    /// Type name of the enum being parsed.
    pub type_name: &'static str,
}

/// An enum with a fixed variant table.
///
/// Implementors supply the variant list and per-variant names; the trait
/// provides listing, lookup and parsing on top. Names are matched
/// exactly (case-sensitive).
pub trait Enumerated: Sized + Copy + 'static {
    /// All variants, in declaration order.
    const VARIANTS: &'static [Self];

    /// Type name used in parse errors.
    const TYPE_NAME: &'static str;

    /// Canonical name of this variant.
    fn name(self) -> &'static str;

    /// All variants, in declaration order.
    fn values() -> &'static [Self] {
        Self::VARIANTS
    }

    /// The first declared variant, if the enum has any.
    fn first() -> Option<Self> {
        Self::VARIANTS.first().copied()
    }

    /// Find the variant with the given name. Safe try-parse: unknown
    /// names yield `None`.
    fn lookup(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name() == name)
    }

    /// Parse the variant with the given name, failing with the rejected
    /// name on no match.
    fn parse(name: &str) -> Result<Self, UnknownVariant> {
        Self::lookup(name).ok_or_else(|| UnknownVariant {
            name: name.to_owned(),
            type_name: Self::TYPE_NAME,
        })
    }
}

/// Define an enum and implement [`Enumerated`] (plus `Display` via the
/// variant name) for it.
///
/// Each generated type gets:
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` derives
/// - an `Enumerated` impl with the listed `Variant => "name"` table
/// - a `Display` impl writing the variant name
///
/// # Example
///
/// ```
/// use plume_enum::{enumerated, Enumerated};
///
/// enumerated! {
///     /// Compass direction.
///     pub enum Direction {
///         North => "north",
///         South => "south",
///     }
/// }
///
/// assert_eq!(Direction::parse("south"), Ok(Direction::South));
/// assert_eq!(Direction::North.to_string(), "north");
/// ```
#[macro_export]
macro_rules! enumerated {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $variant_name:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::Enumerated for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant,)+];
            const TYPE_NAME: &'static str = stringify!($name);

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $variant_name,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Enumerated::name(*self))
            }
        }
    };
}

#[cfg(test)]
mod tests;
