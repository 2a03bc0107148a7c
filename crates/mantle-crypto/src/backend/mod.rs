//! Concrete backend selection.
//!
//! Exactly one backend feature is active per build. Each backend supplies
//! the same type names (`Bn`, `CipherState`, `HashState`, `RsaParts`) with
//! the same operation set and the same observable semantics for big-integer
//! arithmetic; digests and keystreams are backend-specific by nature. Only
//! the active backend's dependency crates are compiled in, so a replaced
//! backend's symbols cannot linger in the build.
//!
//! Everything in this module is crate-private. The public modules expose
//! these types solely through their opaque handles.

#[cfg(all(feature = "backend-rustcrypto", not(feature = "backend-blake3")))]
mod rustcrypto;
#[cfg(all(feature = "backend-rustcrypto", not(feature = "backend-blake3")))]
pub(crate) use rustcrypto::{Bn, CipherState, HashState, RsaParts, NAME};

#[cfg(all(feature = "backend-blake3", not(feature = "backend-rustcrypto")))]
mod blake3;
#[cfg(all(feature = "backend-blake3", not(feature = "backend-rustcrypto")))]
pub(crate) use self::blake3::{Bn, CipherState, HashState, RsaParts, NAME};

#[cfg(all(feature = "backend-rustcrypto", feature = "backend-blake3"))]
compile_error!(
    "features `backend-rustcrypto` and `backend-blake3` are mutually exclusive: \
     two active backends would mean two competing definitions of every primitive \
     (use --no-default-features when selecting backend-blake3)"
);

#[cfg(not(any(feature = "backend-rustcrypto", feature = "backend-blake3")))]
compile_error!(
    "no backend selected: enable `backend-rustcrypto` (default) or `backend-blake3`"
);
