/// Numeric conversion and formatting helpers.
///
/// This module provides a lossless float to integer conversion and the
/// formatting used to print results. Use these helpers whenever a result has
/// to be shown to a user.
pub mod num;
