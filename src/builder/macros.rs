//! Macros for ergonomic state machine construction.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Besides the trait impl, the enum gets an `ALL` constant listing its
/// variants in declaration order, which pairs well with
/// [`cycle`](crate::builder::cycle).
///
/// # Example
///
/// ```
/// use monty_hall::core::State;
/// use monty_hall::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Pick,
///         Reveal,
///         Outcome,
///     }
/// }
///
/// assert_eq!(Phase::Reveal.name(), "Reveal");
/// assert_eq!(Phase::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
