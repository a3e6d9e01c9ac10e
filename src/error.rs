use thiserror::Error;

/// Domain errors surfaced to the end user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalcError {
    /// No semester row yielded a usable SGPA value.
    #[error("Please enter valid SGPA for at least one semester")]
    NoValidInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_valid_input_message_is_exact() {
        assert_eq!(
            CalcError::NoValidInput.to_string(),
            "Please enter valid SGPA for at least one semester"
        );
    }
}
