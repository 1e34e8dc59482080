use thiserror::Error;

/// Failure to interpret a CSS color string.
///
/// Parsing never falls back to a default color: a string that matches none
/// of the supported syntaxes is an error the caller has to handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("unsupported color syntax: {0:?}")]
    UnsupportedSyntax(String),

    #[error("malformed hex color: {0:?}")]
    MalformedHex(String),

    #[error("malformed rgb()/rgba() color: {0:?}")]
    MalformedRgb(String),

    #[error("malformed hsl()/hsla() color: {0:?}")]
    MalformedHsl(String),
}
