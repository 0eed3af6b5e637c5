//! The owner gate.
//!
//! This is an obfuscation layer, not a security boundary: the comparison
//! happens entirely on the machine of the person it is meant to restrict,
//! and the hash is brute-forceable. It exists so the owner code is not a
//! plain string in the persisted data, nothing more. The [`Verifier`] trait
//! is the seam where a real credential check could be swapped in without
//! touching any caller.

/// cyrb53: a two-lane 32-bit mixing hash over UTF-16 code units, producing
/// a 53-bit value. Reproduces the widely-circulated JavaScript
/// implementation bit for bit, which is what makes previously issued codes
/// keep working.
pub fn hash_code(code: &str) -> u64 {
    let seed: u32 = 0;
    let mut h1: u32 = 0xdead_beef ^ seed;
    let mut h2: u32 = 0x41c6_ce57 ^ seed;

    for unit in code.encode_utf16() {
        let unit = u32::from(unit);
        h1 = (h1 ^ unit).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ unit).wrapping_mul(1_597_334_677);
    }

    // Final avalanche. Order matters: the remixed h1 feeds into h2.
    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    (u64::from(h2 & 0x1f_ffff) << 32) + u64::from(h1)
}

pub trait Verifier {
    fn verify(&self, code: &str) -> bool;
}

/// Accepts the canonical owner code as a literal, or any code whose cyrb53
/// hash matches the stored constant. The constant is not the hash of the
/// literal and is deliberately left as-is so codes already in circulation
/// keep working; the literal branch is what admits the canonical code.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeakCodeVerifier;

const OWNER_CODE: &str = "Bismillah";
const SECRET_HASH: u64 = 8_608_954_734_346;

impl Verifier for WeakCodeVerifier {
    fn verify(&self, code: &str) -> bool {
        code == OWNER_CODE || hash_code(code) == SECRET_HASH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_reference_vectors() {
        assert_eq!(hash_code(""), 3_338_908_027_751_811);
        assert_eq!(hash_code("Bismillah"), 3_435_942_720_773_082);
        assert_eq!(hash_code("wrong"), 6_502_791_465_822_392);
        assert_eq!(hash_code("open sesame"), 1_749_166_158_234_098);
    }

    #[test]
    fn canonical_code_is_admitted_by_the_literal_branch() {
        // The stored hash constant is not the hash of the canonical code
        assert_ne!(hash_code("Bismillah"), SECRET_HASH);
        assert!(WeakCodeVerifier.verify("Bismillah"));
    }

    #[test]
    fn wrong_codes_are_rejected() {
        let verifier = WeakCodeVerifier;
        assert!(!verifier.verify("wrong"));
        assert!(!verifier.verify(""));
        assert!(!verifier.verify("bismillah"));
    }
}
