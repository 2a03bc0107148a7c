//! Opaque handle plumbing shared by every primitive kind.
//!
//! Consumer code must be able to hold and pass primitive values without the
//! active backend's types appearing in any public signature — otherwise a
//! backend migration leaks into every downstream build, and during the
//! migration window two backends' definitions of "the same" primitive can
//! end up visible at once. A plain type alias would re-export the backend
//! type; an erased pointer would give up type checking between kinds. So
//! each kind gets its own nominal wrapper struct, transparent over the
//! backend type, with conversions that never leave this crate.
//!
//! [`opaque_handle!`] is the registration point: one invocation per kind,
//! naming the public handle and the backend type it stands for. The macro is
//! the whole mechanism; adding a primitive kind never means editing it.
//!
//! The conversions relabel references, they do not copy. A mutation made
//! through the recovered backend reference is immediately visible through
//! the handle, because both denote the same memory.

/// Declares an opaque handle type over a backend core type, plus the
/// crate-private conversions between them.
///
/// The generated struct is `#[repr(transparent)]`, so the handle has exactly
/// the layout of the core type and the reference casts below change only the
/// type, never the address.
macro_rules! opaque_handle {
    (
        $(#[$attr:meta])*
        pub struct $handle:ident wraps $core:ty;
    ) => {
        $(#[$attr])*
        #[repr(transparent)]
        pub struct $handle {
            raw: $core,
        }

        // Not every kind converts in every direction; unused directions are
        // kept so the surface stays uniform across kinds.
        #[allow(dead_code)]
        impl $handle {
            /// Relabels a borrowed backend value as its opaque handle.
            pub(crate) fn wrap(raw: &$core) -> &Self {
                // SAFETY: repr(transparent) guarantees identical layout, and
                // the returned borrow keeps the input borrow's lifetime.
                unsafe { &*(raw as *const $core as *const Self) }
            }

            /// Mutable counterpart of [`Self::wrap`].
            pub(crate) fn wrap_mut(raw: &mut $core) -> &mut Self {
                // SAFETY: as in `wrap`; uniqueness carries over from `raw`.
                unsafe { &mut *(raw as *mut $core as *mut Self) }
            }

            /// Takes ownership of a freshly built backend value.
            pub(crate) fn from_raw(raw: $core) -> Self {
                Self { raw }
            }

            /// Recovers the backend value behind the handle.
            pub(crate) fn unwrap(&self) -> &$core {
                &self.raw
            }

            /// Mutable counterpart of [`Self::unwrap`].
            pub(crate) fn unwrap_mut(&mut self) -> &mut $core {
                &mut self.raw
            }

            /// Releases the handle back into its backend value.
            pub(crate) fn into_raw(self) -> $core {
                self.raw
            }
        }
    };
}

pub(crate) use opaque_handle;
