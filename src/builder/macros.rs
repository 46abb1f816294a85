//! Macros for ergonomic machine declaration.

/// Generate a symbolic state or input enum implementing `Symbol`.
///
/// The generated enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug` and
/// serde's `Serialize, Deserialize` (through this crate's re-export, so the
/// host needs no serde dependency of its own). It uses the declaration
/// position as its index and the variant name as its name. An `ALL` constant
/// lists every variant in declaration order.
///
/// # Example
///
/// ```
/// use fsmkit::core::Symbol;
/// use fsmkit::symbol_enum;
///
/// symbol_enum! {
///     pub enum DoorState {
///         Opened,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(DoorState::Locked.index(), 2);
/// assert_eq!(DoorState::Closed.name(), "Closed");
/// assert_eq!(DoorState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! symbol_enum {
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
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::serde::Serialize,
            $crate::serde::Deserialize,
        )]
        #[serde(crate = "fsmkit::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Symbol for $name {
            fn index(&self) -> usize {
                *self as usize
            }

            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                match self {
                    $(Self::$variant => ::std::borrow::Cow::Borrowed(stringify!($variant))),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Symbol;

    symbol_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn symbol_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.index(), 0);
        assert_eq!(TestState::Complete.index(), 2);
        assert_eq!(TestState::Processing.name(), "Processing");
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            TestState::ALL,
            &[TestState::Initial, TestState::Processing, TestState::Complete]
        );
    }

    #[test]
    fn symbol_enum_supports_visibility_and_attributes() {
        symbol_enum! {
            /// Public inputs.
            pub enum PublicInput {
                A,
                #[allow(dead_code)]
                B,
            }
        }

        assert_eq!(PublicInput::A.index(), 0);
        assert_eq!(PublicInput::ALL.len(), 2);
    }

    #[test]
    fn generated_enums_serialize_by_variant_name() {
        let json = serde_json::to_string(&TestState::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");

        let parsed: TestState = serde_json::from_str("\"Complete\"").unwrap();
        assert_eq!(parsed, TestState::Complete);
    }
}
