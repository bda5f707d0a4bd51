//! Type-name hash used to pick a dispatch bucket.
//!
//! The hash is the classic polynomial string hash over UTF-16 code units:
//!
//! ```text
//! h = c[0]·31^(n-1) + c[1]·31^(n-2) + … + c[n-1]
//! ```
//!
//! computed with 32-bit two's-complement wraparound. Generated registries and
//! the generator must agree on it bit for bit, otherwise entries land in a
//! bucket the lookup never visits.

/// Polynomial multiplier.
pub const HASH_MULTIPLIER: i32 = 31;

/// Hash a dot-normalized type name.
///
/// `&str` is UTF-8, so code points are decoded on the fly and code points
/// outside the BMP contribute their surrogate pair, matching a hash taken
/// over the UTF-16 form of the same string. The empty string hashes to 0.
pub const fn type_name_hash(name: &str) -> i32 {
    let bytes = name.as_bytes();
    let mut hash: i32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i] as u32;
        let (code_point, width) = if b0 < 0x80 {
            (b0, 1)
        } else if b0 < 0xE0 {
            ((b0 & 0x1F) << 6 | (bytes[i + 1] as u32 & 0x3F), 2)
        } else if b0 < 0xF0 {
            (
                (b0 & 0x0F) << 12 | (bytes[i + 1] as u32 & 0x3F) << 6 | (bytes[i + 2] as u32 & 0x3F),
                3,
            )
        } else {
            (
                (b0 & 0x07) << 18
                    | (bytes[i + 1] as u32 & 0x3F) << 12
                    | (bytes[i + 2] as u32 & 0x3F) << 6
                    | (bytes[i + 3] as u32 & 0x3F),
                4,
            )
        };

        if code_point < 0x1_0000 {
            hash = mix(hash, code_point);
        } else {
            let offset = code_point - 0x1_0000;
            hash = mix(hash, 0xD800 + (offset >> 10));
            hash = mix(hash, 0xDC00 + (offset & 0x3FF));
        }
        i += width;
    }
    hash
}

#[inline]
const fn mix(hash: i32, code_unit: u32) -> i32 {
    hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(code_unit as i32)
}

/// Bucket index for `name` under `mask`.
///
/// Only meaningful for non-negative masks; the all-ones sentinel used by
/// empty registries never matches a materialized bucket.
#[inline]
pub const fn bucket_of(name: &str, mask: i32) -> i32 {
    type_name_hash(name) & mask
}
