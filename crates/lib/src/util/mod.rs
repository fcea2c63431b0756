//! Shared utilities.

#[cfg(test)]
pub mod testutil;

/// `"target"` for one, `"targets"` otherwise.
pub fn plural(count: usize, word: &str) -> String {
  if count == 1 { word.to_string() } else { format!("{}s", word) }
}

/// Render targets the way log lines quote them: `` `a`, `b` ``.
pub fn quote_list(items: &[String]) -> String {
  format!("`{}`", items.join("`, `"))
}
