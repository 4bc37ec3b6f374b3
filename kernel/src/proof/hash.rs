//! Content hashing with typed domain separation.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Every digest in the
//! workspace is produced by [`canonical_hash`].

use sha2::{Digest, Sha256};

/// Typed domain separator for [`canonical_hash`].
///
/// Each variant maps to a unique, null-terminated byte prefix so that equal
/// payloads hashed for different purposes never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Canonical JSON of a search report.
    SearchReport,
    /// Canonical JSON of a search policy.
    SearchPolicy,
    /// Canonical JSON of a harness world run (world id + report).
    WorldRun,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        HashDomain::SearchReport,
        HashDomain::SearchPolicy,
        HashDomain::WorldRun,
    ];

    /// The raw prefix bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::SearchReport => b"TRAILHEAD::SEARCH_REPORT::V1\0",
            Self::SearchPolicy => b"TRAILHEAD::SEARCH_POLICY::V1\0",
            Self::WorldRun => b"TRAILHEAD::WORLD_RUN::V1\0",
        }
    }
}

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Hash `data` under `domain`. Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex_digest}");
    ContentHash { full, colon: 6 }
}
