//! Macros for declaring state and action enums.

/// Generate a state enum, its tag enum and the `State` implementation.
///
/// Variants may be unit, tuple or struct variants. The tag enum gets one
/// fieldless variant per state variant, with the same name.
///
/// # Example
///
/// ```
/// use typemata::core::State;
/// use typemata::state_enum;
///
/// state_enum! {
///     pub enum Upload {
///         Pending,
///         Sending { sent: u64, total: u64 },
///         Done(String),
///         Failed,
///     }
///     tag: UploadTag
///     final: [Done, Failed]
///     error: [Failed]
/// }
///
/// let state = Upload::Sending { sent: 0, total: 10 };
/// assert_eq!(state.tag(), UploadTag::Sending);
/// assert!(Upload::Failed.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($body:tt)* }

        tag: $tag:ident
        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $crate::__tagged_enum! {
            $(#[$meta])*
            $vis enum $name { $($body)* }
            tag: $tag
        }

        impl $crate::core::State for $name {
            type Tag = $tag;

            fn tag(&self) -> $tag {
                self.__variant_tag()
            }

            fn is_final(&self) -> bool {
                match self.__variant_tag() {
                    $($($tag::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self.__variant_tag() {
                    $($($tag::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate an action enum, its tag enum and the `Action` implementation.
///
/// # Example
///
/// ```
/// use typemata::core::Action;
/// use typemata::action_enum;
///
/// action_enum! {
///     pub enum Vend {
///         InsertCoin,
///         Refill { amount: u32 },
///     }
///     tag: VendTag
/// }
///
/// assert_eq!(Vend::Refill { amount: 3 }.name(), "Refill");
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($body:tt)* }

        tag: $tag:ident
    ) => {
        $crate::__tagged_enum! {
            $(#[$meta])*
            $vis enum $name { $($body)* }
            tag: $tag
        }

        impl $crate::core::Action for $name {
            type Tag = $tag;

            fn tag(&self) -> $tag {
                self.__variant_tag()
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tagged_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple:ty),* $(,)? ) )?
                $( { $($field:ident : $fty:ty),* $(,)? } )?
            ),* $(,)?
        }
        tag: $tag:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple),* ) )?
                $( { $($field : $fty),* } )?
            ),*
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $tag {
            $($variant),*
        }

        impl $crate::core::Tag for $tag {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $tag {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Tag::name(self))
            }
        }

        impl $name {
            #[doc(hidden)]
            fn __variant_tag(&self) -> $tag {
                match self {
                    $(Self::$variant { .. } => $tag::$variant),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Action, State, Tag};

    state_enum! {
        enum TestState {
            Initial,
            Counting(u32),
            Labelled { label: String, count: u32 },
            Complete,
            Failed,
        }
        tag: TestTag
        final: [Complete, Failed]
        error: [Failed]
    }

    action_enum! {
        enum TestAction {
            Tick,
            Jump(u32, u32),
            Rename { to: String },
        }
        tag: TestActionTag
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = TestState::Initial;
        assert_eq!(state.name(), "Initial");
        assert!(!state.is_final());
        assert!(!state.is_error());

        let complete = TestState::Complete;
        assert!(complete.is_final());
        assert!(!complete.is_error());

        let failed = TestState::Failed;
        assert!(failed.is_final());
        assert!(failed.is_error());
    }

    #[test]
    fn state_enum_maps_payload_variants_to_tags() {
        assert_eq!(TestState::Counting(7).tag(), TestTag::Counting);
        assert_eq!(
            TestState::Labelled {
                label: "x".to_string(),
                count: 1
            }
            .tag(),
            TestTag::Labelled
        );
    }

    #[test]
    fn action_enum_macro_generates_trait() {
        assert_eq!(TestAction::Tick.tag(), TestActionTag::Tick);
        assert_eq!(TestAction::Jump(1, 2).name(), "Jump");
        assert_eq!(
            TestAction::Rename {
                to: "y".to_string()
            }
            .tag(),
            TestActionTag::Rename
        );
    }

    #[test]
    fn tags_display_their_names() {
        assert_eq!(TestTag::Labelled.to_string(), "Labelled");
        assert_eq!(TestActionTag::Jump.name(), "Jump");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            tag: PublicTag
            final: [B]
        }

        assert!(PublicState::B.is_final());
        assert_eq!(PublicState::A.tag(), PublicTag::A);
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum MinimalState {
                One,
                Two(bool),
            }
            tag: MinimalTag
        }

        let state = MinimalState::Two(true);
        assert!(!state.is_final());
        assert!(!state.is_error());
        assert_eq!(MinimalState::One.tag(), MinimalTag::One);
    }
}
