//! Plain-text interview report offered as a download.

use crate::interview::aggregate::FinalResult;

pub const REPORT_FILE_NAME: &str = "Interview_Report.txt";

/// `Content-Disposition` value for the report download.
pub fn content_disposition() -> String {
    format!("attachment; filename=\"{REPORT_FILE_NAME}\"")
}

/// Two lines, no trailing newline.
pub fn render_report(result: &FinalResult) -> String {
    format!(
        "Final Score: {}%\nPerformance Level: {}",
        format_score(result.score),
        result.level
    )
}

/// Shortest decimal form with at least one fractional digit (`60.0`, `66.67`).
pub fn format_score(score: f64) -> String {
    format!("{score:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::aggregate::{final_result, PerformanceLevel};

    #[test]
    fn test_report_shape() {
        let result = final_result(&[80.0, 60.0, 40.0]).unwrap();
        assert_eq!(
            render_report(&result),
            "Final Score: 60.0%\nPerformance Level: Average Candidate"
        );
    }

    #[test]
    fn test_report_keeps_two_decimals() {
        let result = FinalResult {
            score: 66.67,
            level: PerformanceLevel::Average,
        };
        assert_eq!(
            render_report(&result),
            "Final Score: 66.67%\nPerformance Level: Average Candidate"
        );
    }

    #[test]
    fn test_format_score_whole_numbers_keep_a_decimal() {
        assert_eq!(format_score(100.0), "100.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(72.5), "72.5");
    }

    #[test]
    fn test_content_disposition_names_report_file() {
        assert_eq!(
            content_disposition(),
            "attachment; filename=\"Interview_Report.txt\""
        );
    }
}
