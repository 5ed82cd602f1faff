//! Custom field validators for `validator` derives.

use validator::ValidationError;

/// Reject strings that are empty or only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Jane").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
    }
}
