// Rendering of several legal candidates for one word

/// How several legal candidates of one word are shown: `[Masse|Maße]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternatives {
    pub left: String,
    pub right: String,
    pub separator: String,
}

impl Alternatives {
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            separator: separator.into(),
        }
    }

    /// Join candidates into one string. A single candidate is returned
    /// as-is, without delimiters; no candidates give an empty string.
    pub fn represent(&self, candidates: &[String]) -> String {
        match candidates {
            [] => String::new(),
            [single] => single.clone(),
            _ => {
                let mut out = self.left.clone();
                out.push_str(&candidates.join(&self.separator));
                out.push_str(&self.right);
                out
            }
        }
    }
}

impl Default for Alternatives {
    fn default() -> Self {
        Self::new("[", "]", "|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_candidate_has_no_delimiters() {
        let alt = Alternatives::default();
        assert_eq!(alt.represent(&strings(&["\u{00DC}bel"])), "\u{00DC}bel");
    }

    #[test]
    fn several_candidates_default_format() {
        let alt = Alternatives::default();
        assert_eq!(alt.represent(&strings(&["a", "b", "c"])), "[a|b|c]");
    }

    #[test]
    fn custom_delimiters() {
        let alt = Alternatives::new("{", "}", ", ");
        assert_eq!(alt.represent(&strings(&["x", "y"])), "{x, y}");
    }

    #[test]
    fn empty_candidates() {
        assert_eq!(Alternatives::default().represent(&[]), "");
    }
}
