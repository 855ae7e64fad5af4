//! Tests for error message formatting and source chaining

#[cfg(test)]
mod tests {
    use gridroute::GridError;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests the empty row message names the row
    // Verified by dropping the index from the message
    #[test]
    fn test_empty_row_message() {
        let error = GridError::EmptyRow { index: 3 };
        assert_eq!(error.to_string(), "Empty row at index: 3");
        assert!(error.source().is_none());
    }

    // Tests both widths appear in the inconsistent width message
    // Verified by swapping expected and actual in the message
    #[test]
    fn test_inconsistent_width_message() {
        let error = GridError::InconsistentWidth {
            expected: 4,
            actual: 7,
        };

        assert_eq!(
            error.to_string(),
            "Each line must have uniform length (expected: 4, current 7)"
        );
    }

    #[test]
    fn test_feature_not_found_message() {
        let error = GridError::FeatureNotFound { marker: 'q' };
        assert_eq!(error.to_string(), "Feature not found: q");
    }

    // Tests input errors chain the I/O error
    // Verified by returning None from source()
    #[test]
    fn test_input_error_source_chain() {
        let error = GridError::Input {
            path: PathBuf::from("/tmp/grid.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        let message = error.to_string();
        assert!(message.contains("/tmp/grid.txt"));
        assert!(message.contains("no such file"));
        assert!(error.source().is_some());
    }
}
