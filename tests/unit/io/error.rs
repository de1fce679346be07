//! Tests for error message formatting

#[cfg(test)]
mod tests {
    use tilegrid::GridError;
    use tilegrid::io::error::invalid_parameter;

    // Tests InvalidMapSize names the axis and size
    // Verified by omitting the axis from the message
    #[test]
    fn test_invalid_map_size_error() {
        let message = GridError::InvalidMapSize { axis: "y", size: 300 }.to_string();
        assert!(message.contains("300"));
        assert!(message.contains("axis y"));
    }

    // Tests RecordCountMismatch reports all three counts
    #[test]
    fn test_record_count_mismatch_error() {
        let message = GridError::RecordCountMismatch {
            expected: 4096,
            tiles: 4000,
            extended: 4096,
        }
        .to_string();
        assert!(message.contains("4096 tiles"));
        assert!(message.contains("4000 core"));
        assert!(message.contains("4096 extended"));
    }

    // Tests the InvalidParameter helper keeps every field
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("tiles", &9, &"ragged");
        assert_eq!(
            error,
            GridError::InvalidParameter {
                parameter: "tiles",
                value: "9".to_string(),
                reason: "ragged".to_string(),
            }
        );
    }
}
