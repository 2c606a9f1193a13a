//! Formatting utilities for display values.

/// Format file size for display (e.g., "1.2K", "3.4M").
///
/// Directories have no size and render as "-".
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) => {
            if bytes >= 1_000_000 {
                format!("{:.1}M", bytes as f64 / 1_000_000.0)
            } else if bytes >= 1_000 {
                format!("{:.1}K", bytes as f64 / 1_000.0)
            } else {
                format!("{}B", bytes)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(0)), "0B");
        assert_eq!(format_size(Some(500)), "500B");
        assert_eq!(format_size(Some(1500)), "1.5K");
        assert_eq!(format_size(Some(1_500_000)), "1.5M");
    }
}
