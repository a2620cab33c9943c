use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum query length after trimming.
pub const MIN_QUERY_CHARS: usize = 2;

// Letters (including Spanish accented forms), whitespace, hyphen, period
// and comma. Digits and other punctuation are rejected.
static ALLOWED_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúüñÁÉÍÓÚÜÑ\s\-.,]+$").expect("query charset pattern")
});

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("Por favor ingresa al menos 2 caracteres para buscar")]
    TooShort,
    #[error("Por favor usa solo letras, espacios y signos de puntuación básicos")]
    InvalidCharacters,
}

/// Validates a raw search query, returning the trimmed query on success.
/// Checks short-circuit: length first, then the allowed character set.
///
/// # Errors
/// Returns [`QueryError::TooShort`] when the trimmed query has fewer than
/// [`MIN_QUERY_CHARS`] characters and [`QueryError::InvalidCharacters`]
/// when any character falls outside the allowed set.
pub fn validate_query(raw: &str) -> Result<String, QueryError> {
    let query = raw.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Err(QueryError::TooShort);
    }
    if !ALLOWED_QUERY.is_match(query) {
        return Err(QueryError::InvalidCharacters);
    }
    Ok(query.to_string())
}

/// Body of the transient success banner shown for a valid query.
#[must_use]
pub fn success_message(query: &str) -> String {
    format!("Buscando \"{query}\"...")
}

/// Assertive screen-reader text for a failed validation.
#[must_use]
pub fn error_announcement(error: QueryError) -> String {
    format!("Error en el formulario: {error}")
}
