//! Streaming digest contexts behind an opaque handle.
//!
//! Digest values are backend-specific; each backend is self-consistent
//! between the streaming and one-shot forms.

use crate::backend;
use crate::opaque::opaque_handle;

/// Digest length in bytes, common to every backend.
pub const DIGEST_LEN: usize = 32;

opaque_handle! {
    /// A streaming digest context owned by the active backend.
    pub struct Hasher wraps backend::HashState;
}

impl Hasher {
    pub fn new() -> Hasher {
        Hasher::from_raw(backend::HashState::new())
    }

    /// Absorbs more input.
    pub fn update(&mut self, data: &[u8]) {
        self.unwrap_mut().update(data);
    }

    /// Consumes the context and returns the digest.
    pub fn finish(self) -> [u8; DIGEST_LEN] {
        self.into_raw().finish()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Hasher::new()
    }
}

/// One-shot digest of `data` under the active backend.
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streaming_matches_oneshot() {
        let mut hasher = Hasher::new();
        hasher.update(b"split ");
        hasher.update(b"input");
        assert_eq!(hasher.finish(), digest(b"split input"));
    }

    #[test]
    fn distinct_inputs_distinct_digests() {
        assert_ne!(digest(b"a"), digest(b"b"));
        assert_eq!(digest(b"").len(), DIGEST_LEN);
    }
}
