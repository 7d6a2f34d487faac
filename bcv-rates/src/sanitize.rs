//! Locale number normalization.

/// Converts a Venezuelan-formatted decimal (`1.234.567,89`) into the form
/// `str::parse::<f64>` understands (`1234567.89`).
///
/// Every `.` is dropped as a thousands separator and every `,` becomes the
/// decimal point. Nothing is validated: `"1,2,3"` comes out as `"1.2.3"` and
/// is left for the parser to reject.
pub fn sanitize(raw: &str) -> String {
    raw.replace('.', "").replace(',', ".").trim().to_string()
}
