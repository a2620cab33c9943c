// Book-card accessible labels.

const AUTHOR_PREFIX: &str = "Por ";

/// Composes the aria-label for a book card from its title and author
/// sub-texts. The visible author line carries a leading "Por " that would
/// read twice in the label, so it is stripped.
#[must_use]
pub fn accessible_label(title: &str, author: &str) -> String {
    let author = author.trim();
    let author = author.strip_prefix(AUTHOR_PREFIX).unwrap_or(author);
    format!("Tarjeta de libro: {} por {author}", title.trim())
}
