/// Result formatting.
///
/// This module turns evaluated values into the text shown to users. It
/// rejects values without a printable form, applies optional rounding and
/// strips redundant trailing digits.
pub mod format;
