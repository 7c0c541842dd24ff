//! Rewrites coverage map keys from absolute to repo-relative paths by
//! stripping a caller-supplied prefix.

use crate::model::CoverageMap;

/// Strip `prefix` from the front of every key that starts with it (exact,
/// case-sensitive match); other keys pass through untouched. An empty
/// prefix is the identity. The caller is expected to have terminated the
/// prefix with a path separator — nothing here treats `/` specially, so
/// `"/foo"` would also strip the front of `"/foobar.ts"`.
///
/// Two keys collapsing to the same stripped key is not detected;
/// last-write-wins.
pub fn remove_prefix(input: CoverageMap, prefix: &str) -> CoverageMap {
    if prefix.is_empty() {
        return input;
    }

    input
        .into_iter()
        .map(|(path, lines)| {
            let stripped = path.strip_prefix(prefix).map(str::to_string);
            (stripped.unwrap_or(path), lines)
        })
        .collect()
}
