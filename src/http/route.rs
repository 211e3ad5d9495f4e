/// Template served for the root path.
pub const DEFAULT_TEMPLATE: &str = "index.html";

/// Maps a raw request path to a template identifier.
///
/// `/` resolves to the default template. Any other path has its single
/// leading `/` stripped and every occurrence of the substring `..` removed,
/// so the identifier cannot climb out of the template root. No further
/// normalization is applied; percent-encoded sequences pass through as-is.
pub fn template_name(path: &str) -> String {
    if path == "/" {
        return DEFAULT_TEMPLATE.to_string();
    }

    let trimmed = path.strip_prefix('/').unwrap_or(path);
    trimmed.replace("..", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_default_template() {
        assert_eq!(template_name("/"), "index.html");
    }

    #[test]
    fn traversal_sequences_are_stripped() {
        assert_eq!(template_name("/../secret.html"), "/secret.html");
        assert!(!template_name("/../../etc/passwd").contains(".."));
    }
}
