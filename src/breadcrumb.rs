//! Breadcrumb trail derived from the current path.

use crate::path;

/// One clickable segment of the breadcrumb bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Normalized navigation target, same form the resolver and loader use.
    pub target: String,
}

/// Build the trail for a path, root first.
///
/// Every crumb is a valid navigation target, including the last one, so
/// clicking the current segment re-fetches in place. Targets are re-resolved
/// cumulative prefixes rather than raw string concatenations, which keeps them
/// in the same normalized form as `current_path`.
pub fn trail(path: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Root".to_string(),
        target: String::new(),
    }];

    let mut prefix: Vec<&str> = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        prefix.push(segment);
        crumbs.push(Crumb {
            label: segment.to_string(),
            target: path::resolve(&prefix.join("/")),
        });
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumb(label: &str, target: &str) -> Crumb {
        Crumb {
            label: label.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn root_trail_is_just_root() {
        assert_eq!(trail(""), vec![crumb("Root", "")]);
    }

    #[test]
    fn nested_trail_accumulates_targets() {
        assert_eq!(
            trail("a/b"),
            vec![crumb("Root", ""), crumb("a", "a"), crumb("b", "a/b")]
        );
    }

    #[test]
    fn targets_never_carry_a_leading_slash() {
        for c in trail("data/runs/2024") {
            assert!(!c.target.starts_with('/'), "bad target {:?}", c.target);
            assert_eq!(path::resolve(&c.target), c.target);
        }
    }
}
