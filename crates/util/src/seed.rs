//! World-seed parsing.
//!
//! Seeds are accepted as decimal or `0x`-prefixed hex numerals. Any other
//! text is hashed, so players can use memorable phrases as world seeds and
//! always get the same world back.

/// Parses a world seed.
///
/// # Examples
///
/// ```
/// use voxl_util::read_seed;
///
/// assert_eq!(read_seed("123"), 123);
/// assert_eq!(read_seed("0xff"), 255);
/// // Non-numeric seeds hash to a stable value
/// assert_eq!(read_seed("dragon"), read_seed("dragon"));
/// ```
pub fn read_seed(input: &str) -> u64 {
    let parsed = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex_digits) => u64::from_str_radix(hex_digits, 16),
        None => input.parse::<u64>(),
    };

    parsed.unwrap_or_else(|_| murmur_hash_64(input.as_bytes(), 0x1337))
}

/// MurmurHash64A, byte-at-a-time (alignment-safe).
fn murmur_hash_64(data: &[u8], seed: u64) -> u64 {
    const M: u64 = 0xc6a4_a793_5bd1_e995;
    const R: u32 = 47;

    let mut h = seed ^ (data.len() as u64).wrapping_mul(M);

    let mut chunks = data.chunks_exact(8);
    for chunk in chunks.by_ref() {
        let mut k = 0u64;
        for (i, &byte) in chunk.iter().enumerate() {
            k |= u64::from(byte) << (8 * i);
        }
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);
        h ^= k;
        h = h.wrapping_mul(M);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut k = 0u64;
        for (i, &byte) in tail.iter().enumerate() {
            k |= u64::from(byte) << (8 * i);
        }
        h ^= k;
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_seed() {
        assert_eq!(read_seed("0"), 0);
        assert_eq!(read_seed("123"), 123);
        assert_eq!(read_seed("18446744073709551615"), u64::MAX);
    }

    #[test]
    fn test_hex_seed() {
        assert_eq!(read_seed("0xff"), 0xff);
        assert_eq!(read_seed("0XFF"), 0xff);
        assert_eq!(read_seed("0xdeadbeef"), 0xdead_beef);
    }

    #[test]
    fn test_phrase_seed_is_stable() {
        assert_eq!(read_seed("dragon"), read_seed("dragon"));
        assert_ne!(read_seed("dragon"), read_seed("Dragon"));
    }

    #[test]
    fn test_trailing_garbage_falls_back_to_hash() {
        assert_ne!(read_seed("123abc"), 123);
        assert_eq!(read_seed("123abc"), murmur_hash_64(b"123abc", 0x1337));
    }

    #[test]
    fn test_overflow_falls_back_to_hash() {
        let too_big = "99999999999999999999999999";
        assert_eq!(read_seed(too_big), murmur_hash_64(too_big.as_bytes(), 0x1337));
    }

    #[test]
    fn test_hash_depends_on_length_and_content() {
        assert_ne!(murmur_hash_64(b"", 0x1337), murmur_hash_64(b"\0", 0x1337));
        assert_ne!(
            murmur_hash_64(b"12345678", 0x1337),
            murmur_hash_64(b"12345679", 0x1337)
        );
        // Seed participates in the hash
        assert_ne!(murmur_hash_64(b"abc", 1), murmur_hash_64(b"abc", 2));
    }
}
