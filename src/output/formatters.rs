//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled against the table's best score
#[must_use]
pub fn entropy_bar(entropy: f64, best: f64, width: usize) -> String {
    let max = if best > 0.0 { best } else { 1.0 };
    create_progress_bar(entropy, max, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_overflow_clamped() {
        let bar = create_progress_bar(150.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn entropy_bar_best_row_is_full() {
        let bar = entropy_bar(5.2, 5.2, 8);
        assert_eq!(bar, "████████");
    }

    #[test]
    fn entropy_bar_zero_best_does_not_divide_by_zero() {
        let bar = entropy_bar(0.0, 0.0, 8);
        assert_eq!(bar, "░░░░░░░░");
    }
}
