//! SHA-256 over hex-encoded nodes.

use sha2::{Digest as _, Sha256};

/// Preimage hashed to form the root of a tree without leaves.
pub const EMPTY_TREE_PREIMAGE: &str = "empty";

/// Lowercase hex SHA-256 digest of `data`.
#[must_use]
pub fn sha256_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(data.as_ref()))
}

/// sha256(min(a, b) || max(a, b))
///
/// Ordering is lexicographic over the hex strings, which makes the function commutative.
#[must_use]
pub fn hash_pair(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(first.as_bytes());
    hasher.update(second.as_bytes());
    hex::encode(hasher.finalize())
}

/// Root of a tree without leaves.
#[must_use]
pub fn empty_root() -> String {
    sha256_hex(EMPTY_TREE_PREIMAGE)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn sha256_hex_matches_known_vectors() {
        let empty = hex::decode(sha256_hex("")).expect("valid hex");
        assert_eq!(
            empty,
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );

        let abc = hex::decode(sha256_hex("abc")).expect("valid hex");
        assert_eq!(
            abc,
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn sha256_hex_is_lowercase() {
        let digest = sha256_hex("capsule");
        assert_eq!(digest.len(), 64);
        assert!(
            digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn hash_pair_is_commutative() {
        let a = sha256_hex("a");
        let b = sha256_hex("b");
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn hash_pair_puts_smaller_first() {
        // "0f" sorts before "f0"
        assert_eq!(hash_pair("f0", "0f"), sha256_hex("0ff0"));
        assert_eq!(hash_pair("0f", "f0"), sha256_hex("0ff0"));
    }

    #[test]
    fn hash_pair_with_itself_duplicates() {
        let a = sha256_hex("a");
        assert_eq!(hash_pair(&a, &a), sha256_hex(format!("{a}{a}")));
    }

    #[test]
    fn empty_root_hashes_marker() {
        assert_eq!(empty_root(), sha256_hex("empty"));
    }
}
