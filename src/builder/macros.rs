//! Macros for ergonomic state machine construction.

/// Generate a state identifier enum and its `StateId` implementation.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`,
/// `Serialize` and `Deserialize`; do not derive those again. Variants must be
/// plain (no fields, no explicit discriminants).
///
/// The expansion refers to `serde` by name, so the calling crate needs `serde`
/// (with the `derive` feature) as a dependency.
///
/// # Example
///
/// ```
/// use delve::core::StateId;
/// use delve::state_id;
///
/// state_id! {
///     pub enum Stance {
///         Standing,
///         Crouching,
///         Prone,
///     }
/// }
///
/// assert_eq!(Stance::Prone.name(), "Prone");
/// assert_eq!(Stance::Crouching.index(), 1);
/// assert_eq!(Stance::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_id {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}
