//! Chunk identity normalization
//!
//! Bundlers append a content hash to every emitted asset
//! (`app-a1b2c3d4e5.js`), so the same logical chunk gets a new filename
//! whenever its content changes. Stripping that suffix yields a stable key
//! that joins snapshots taken from different builds.
//!
//! This is a heuristic: a logical name that itself ends in a dash and six or
//! more alphanumeric characters (`icons-outline.js`) is indistinguishable
//! from a hash and will be shortened too. Comparisons tolerate that drift by
//! reporting unmatched identities as new or removed chunks.

use regex::Regex;
use std::sync::OnceLock;

/// prefix, optional `-<MARKER>`, then `-<hash>` of at least 6 characters
static HASH_SUFFIX_RE: OnceLock<Regex> = OnceLock::new();

fn hash_suffix_re() -> &'static Regex {
    HASH_SUFFIX_RE.get_or_init(|| {
        // SAFETY: This regex pattern is a fixed literal and always compiles.
        Regex::new(r"^(.*?)(?:-[A-Z0-9])?-[A-Za-z0-9_-]{6,}$").expect("hash suffix regex is valid")
    })
}

/// Split a filename into stem and extension (extension keeps its dot)
///
/// Leading dots belong to the stem, so `.eslintrc` has no extension.
///
/// # Examples
///
/// ```
/// use bundlesize::snapshot::normalize::split_extension;
///
/// assert_eq!(split_extension("app.min.js"), ("app.min", ".js"));
/// assert_eq!(split_extension("LICENSE"), ("LICENSE", ""));
/// assert_eq!(split_extension(".env"), (".env", ""));
/// ```
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading_dots..].rfind('.') {
        Some(idx) => file_name.split_at(leading_dots + idx),
        None => (file_name, ""),
    }
}

/// Map a build-output filename to its chunk identity
///
/// Names without a recognizable hash suffix are returned unchanged.
///
/// # Examples
///
/// ```
/// use bundlesize::snapshot::normalize;
///
/// assert_eq!(normalize("app-a1b2c3d4e5.js"), "app.js");
/// assert_eq!(normalize("chunk-A-f9e8d7c6b5a4.css"), "chunk.css");
/// assert_eq!(normalize("vendor.js"), "vendor.js");
/// ```
pub fn normalize(file_name: &str) -> String {
    let (stem, ext) = split_extension(file_name);

    let stem = hash_suffix_re()
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .map_or(stem, |prefix| prefix.as_str());

    format!("{}{}", stem, ext)
}
