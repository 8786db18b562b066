//! Remote path normalization.
//!
//! Paths are root-relative, `/`-joined, with no leading or trailing slash.
//! The root is the empty string.

/// Normalize a raw path expression.
///
/// Empty and `.` segments are dropped, `..` pops the previous segment, and
/// popping past the root is a no-op (navigation clamps at the root instead of
/// erroring, so the remote root can never be escaped).
pub fn resolve(raw: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(segment),
        }
    }
    parts.join("/")
}

/// Parent of a normalized path; the root is its own parent.
pub fn parent_of(path: &str) -> String {
    resolve(&format!("{path}/.."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_root() {
        assert_eq!(resolve(""), "");
        assert_eq!(resolve("/"), "");
        assert_eq!(resolve("."), "");
    }

    #[test]
    fn resolve_drops_empty_and_dot_segments() {
        assert_eq!(resolve("/a//b/./"), "a/b");
        assert_eq!(resolve("a/./b"), "a/b");
    }

    #[test]
    fn resolve_pops_parent_segments() {
        assert_eq!(resolve("a/b/.."), "a");
        assert_eq!(resolve("a/b/../.."), "");
        assert_eq!(resolve("a/../b"), "b");
    }

    #[test]
    fn resolve_clamps_at_root() {
        assert_eq!(resolve(".."), "");
        assert_eq!(resolve("../../a"), "a");
        assert_eq!(resolve("a/../../.."), "");
    }

    #[test]
    fn resolve_is_idempotent() {
        for raw in ["", "/a//b/./", "a/b/..", "..", "x/y/z", "./a/../b/c/"] {
            let once = resolve(raw);
            assert_eq!(resolve(&once), once, "resolve not idempotent for {raw:?}");
        }
    }

    #[test]
    fn parent_walks_up_one_level() {
        assert_eq!(parent_of("a/b"), "a");
        assert_eq!(parent_of("a"), "");
        assert_eq!(parent_of(""), "");
    }
}
