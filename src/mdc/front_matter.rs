use crate::lib::errors::DocumentIssue;

/// Delimiter line that opens and closes the YAML block.
pub const DELIMITER: &str = "---\n";

/// A document split at its first two delimiter lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// YAML text between the delimiters, including its trailing newline.
    pub yaml: &'a str,
    /// Everything after the closing delimiter, untouched.
    pub body: &'a str,
}

impl FrontMatter<'_> {
    /// Reassemble a document around replacement YAML.
    pub fn render_with(&self, yaml: &str) -> String {
        format!("{DELIMITER}{yaml}{DELIMITER}{}", self.body)
    }
}

/// Split `content` into front matter and body.
///
/// The document must begin with `---\n`; the YAML block ends at the next
/// occurrence of `---\n`, wherever it falls.
pub fn split_front_matter(content: &str) -> Result<FrontMatter<'_>, DocumentIssue> {
    let rest = content
        .strip_prefix(DELIMITER)
        .ok_or(DocumentIssue::MissingFrontMatter)?;
    let end = rest
        .find(DELIMITER)
        .ok_or(DocumentIssue::MalformedFrontMatter)?;
    Ok(FrontMatter {
        yaml: &rest[..end],
        body: &rest[end + DELIMITER.len()..],
    })
}
