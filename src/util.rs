/// Number formatting helpers.
///
/// Printed values are rendered the way a C++ output stream prints a `double`
/// by default: six significant digits, trailing zeros dropped, switching to
/// exponent notation for very large or very small magnitudes.
pub mod num;
