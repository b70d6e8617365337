use crate::error::ArithError;

/// Prefix printed before every result unless configured otherwise.
pub const DEFAULT_PREFIX: &str = "=> ";

/// Controls how results are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Number of decimal places to round to, or `None` for the shortest
    /// exact representation. Bounded by the formatter's precision limit.
    pub precision: Option<u16>,
    /// Text printed before the value.
    pub prefix:    String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { precision: None,
               prefix:    DEFAULT_PREFIX.to_string(), }
    }
}

/// Formats an evaluated value for display.
///
/// Negative zero is shown as `0`. With a precision the value is rounded to
/// that many decimals. Trailing zeros after the decimal point are removed,
/// then a dangling decimal point.
///
/// ## Errors
/// Returns [`ArithError::UndefinedValue`] if the value is infinite or NaN.
///
/// ## Example
/// ```
/// use stagecalc::util::format::{DisplayOptions, format_result};
///
/// let options = DisplayOptions::default();
/// assert_eq!(format_result(3.5, &options).unwrap(), "=> 3.5");
///
/// let rounded = DisplayOptions { precision: Some(3),
///                                prefix:    String::new(), };
/// assert_eq!(format_result(1.0 / 3.0, &rounded).unwrap(), "0.333");
/// assert_eq!(format_result(2.0, &rounded).unwrap(), "2");
///
/// assert!(format_result(f64::INFINITY, &options).is_err());
/// ```
pub fn format_result(value: f64, options: &DisplayOptions) -> Result<String, ArithError> {
    if !value.is_finite() {
        return Err(ArithError::UndefinedValue);
    }

    let text = match options.precision {
        Some(places) => format!("{value:.places$}", places = usize::from(places)),
        None => value.to_string(),
    };

    let text = match trim_fraction(&text) {
        "-0" => "0",
        trimmed => trimmed,
    };

    Ok(format!("{}{text}", options.prefix))
}

/// Strips trailing zeros and a trailing decimal point from a decimal string.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
