//! Storage key derivation.
//!
//! Catalog rows store absolute library paths (`/media/Movies/film.mkv`);
//! the bucket holds the same tree without the leading separator.

/// Derive the storage object key from a catalog file path.
///
/// Strips exactly one leading `/`. Anything after that is the key as-is;
/// deeper normalization belongs to whoever populated the bucket.
pub fn object_key(stored_path: &str) -> &str {
    stored_path.strip_prefix('/').unwrap_or(stored_path)
}
