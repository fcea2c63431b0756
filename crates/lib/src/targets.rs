//! Target pattern helpers and attribution of unresolved targets.
//!
//! A pattern is either a concrete target such as `//app:bin` or a recursive
//! wildcard such as `//lib/...`. Canonical targets reported by `buck` are
//! always concrete.

use std::collections::BTreeSet;

use crate::consts::WILDCARD_SUFFIX;

/// The package prefix of a `/...` wildcard, or `None` for a concrete pattern.
pub fn wildcard_package(pattern: &str) -> Option<&str> {
  pattern.strip_suffix(WILDCARD_SUFFIX)
}

/// Whether `pattern` names `target`.
///
/// A wildcard `P/...` covers targets inside package `P` or below it, so the
/// character after `P` must be a package (`/`) or target (`:`) separator:
/// `//lib/...` covers `//lib:a` and `//lib/sub:b` but not `//library:c`.
/// A concrete pattern only names an identical target.
pub fn pattern_matches(pattern: &str, target: &str) -> bool {
  match wildcard_package(pattern) {
    Some(package) => target
      .strip_prefix(package)
      .is_some_and(|rest| rest.starts_with('/') || rest.starts_with(':')),
    None => pattern == target,
  }
}

/// Map targets without a link tree back to the patterns the user typed.
///
/// For each target the last matching pattern in input order wins. A target
/// no pattern matches is reported under its own name. The result is
/// de-duplicated and sorted.
pub fn attribute_unresolved(unresolved: &[String], original: &[String]) -> Vec<String> {
  let attributed: BTreeSet<String> = unresolved
    .iter()
    .map(|target| {
      original
        .iter()
        .rfind(|pattern| pattern_matches(pattern, target))
        .unwrap_or(target)
        .clone()
    })
    .collect();
  attributed.into_iter().collect()
}

/// The directory a pattern most likely refers to, relative to the build root.
///
/// `cell//app/sub:bin` and `//app/sub/...` both give `app/sub`.
pub fn presumed_target_root(pattern: &str) -> String {
  let relative = match pattern.find("//") {
    Some(index) => &pattern[index + 2..],
    None => pattern,
  };
  let relative = relative.replace(WILDCARD_SUFFIX, "");
  match relative.split_once(':') {
    Some((package, _)) => package.to_string(),
    None => relative,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn exact_pattern_attributes_to_itself() {
    let result = attribute_unresolved(&strings(&["//app:bin"]), &strings(&["//app:bin", "//other:x"]));
    assert_eq!(result, vec!["//app:bin"]);
  }

  #[test]
  fn wildcard_covers_package_and_subpackages() {
    let original = strings(&["//lib/..."]);
    assert_eq!(attribute_unresolved(&strings(&["//lib:a"]), &original), vec!["//lib/..."]);
    assert_eq!(attribute_unresolved(&strings(&["//lib/sub:b"]), &original), vec!["//lib/..."]);
  }

  #[test]
  fn wildcard_respects_package_boundary() {
    let original = strings(&["//pkg/..."]);
    assert!(pattern_matches("//pkg/...", "//pkg/x:y"));
    assert!(!pattern_matches("//pkg/...", "//pkgX/x:y"));
    assert_eq!(attribute_unresolved(&strings(&["//pkgX/x:y"]), &original), vec!["//pkgX/x:y"]);
  }

  #[test]
  fn concrete_pattern_requires_equality() {
    assert!(!pattern_matches("//app:bin", "//app:binary"));
    assert!(!pattern_matches("//app", "//app:bin"));
  }

  #[test]
  fn unmatched_target_falls_back_to_itself() {
    let result = attribute_unresolved(&strings(&["//x:y"]), &strings(&["//lib/...", "//app:bin"]));
    assert_eq!(result, vec!["//x:y"]);
  }

  #[test]
  fn last_matching_pattern_wins() {
    let result = attribute_unresolved(&strings(&["//lib/sub:b"]), &strings(&["//lib/sub/...", "//lib/..."]));
    assert_eq!(result, vec!["//lib/..."]);

    let result = attribute_unresolved(&strings(&["//lib/sub:b"]), &strings(&["//lib/...", "//lib/sub/..."]));
    assert_eq!(result, vec!["//lib/sub/..."]);
  }

  #[test]
  fn attributions_are_deduplicated() {
    let result = attribute_unresolved(&strings(&["//lib:a", "//lib/sub:b", "//app:bin"]), &strings(&["//lib/..."]));
    assert_eq!(result, vec!["//app:bin", "//lib/..."]);
  }

  #[test]
  fn presumed_roots() {
    assert_eq!(presumed_target_root("//app/sub:bin"), "app/sub");
    assert_eq!(presumed_target_root("cell//app/sub/..."), "app/sub");
    assert_eq!(presumed_target_root("//lib/..."), "lib");
    assert_eq!(presumed_target_root("app"), "app");
  }
}
