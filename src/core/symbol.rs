//! Identifier trait shared by states and inputs.
//!
//! States and inputs are small dense identifiers. Anything that can report a
//! stable index and a display name can drive the engine, whether a bare
//! integer or a symbolic enum generated with [`symbol_enum!`](crate::symbol_enum).

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and input identifiers.
///
/// # Required Traits
///
/// - `Copy`: identifiers are passed by value through every registry
/// - `Eq` + `Hash`: identifiers key the transition table and action registries
/// - `Debug`: identifiers appear in diagnostics
/// - `Send` + `Sync`: engines are shareable across threads
///
/// # Example
///
/// ```rust
/// use fsmkit::core::Symbol;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl Symbol for Light {
///     fn index(&self) -> usize {
///         *self as usize
///     }
///
///     fn name(&self) -> std::borrow::Cow<'_, str> {
///         match self {
///             Self::Red => "Red".into(),
///             Self::Green => "Green".into(),
///         }
///     }
/// }
///
/// assert_eq!(Light::Green.index(), 1);
/// assert_eq!(Light::Red.name(), "Red");
/// ```
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Dense non-negative index used for bitset membership.
    ///
    /// Two distinct identifiers of the same type must never share an index.
    /// Registries size their storage to the highest index, and reject any
    /// index at or above [`CompactSet::MAX_SLOTS`](crate::core::CompactSet::MAX_SLOTS).
    fn index(&self) -> usize;

    /// Name for display and logging.
    ///
    /// Default implementation renders the index.
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.index().to_string())
    }
}

macro_rules! impl_symbol_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Symbol for $ty {
                fn index(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_symbol_for_unsigned!(u8, u16, u32, usize);
