use crate::server::error::{request::RequestError, AppError};

/// Parses a path id segment as a decimal integer.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::RequestErr(InvalidId))` - The segment is not a decimal integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    let result = value
        .trim()
        .parse::<i32>()
        .map_err(|e| RequestError::InvalidId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}
