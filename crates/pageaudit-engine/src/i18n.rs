//! UI strings shown in audit results. English only.

pub mod ui_strings {
    pub const BF_CACHE_TITLE: &str = "Page didn't prevent back/forward cache restoration";
    pub const BF_CACHE_FAILURE_TITLE: &str = "Page prevented back/forward cache restoration";
    pub const BF_CACHE_DESCRIPTION: &str = "Many navigations are performed by going back to a previous page, or forwards again. The back/forward cache (bfcache) can speed up these return navigations. [Learn more about the bfcache](https://developer.chrome.com/docs/lighthouse/performance/bf-cache/)";
    pub const FAILURE_REASON_COLUMN: &str = "Failure reason";
    pub const FAILURE_TYPE_COLUMN: &str = "Failure type";
}

/// "1 actionable failure reason" / "N actionable failure reasons".
pub fn actionable_display_value(count: usize) -> String {
    match count {
        1 => "1 actionable failure reason".to_string(),
        n => format!("{} actionable failure reasons", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        assert_eq!(actionable_display_value(1), "1 actionable failure reason");
    }

    #[test]
    fn test_plural_including_zero() {
        assert_eq!(actionable_display_value(0), "0 actionable failure reasons");
        assert_eq!(actionable_display_value(2), "2 actionable failure reasons");
    }
}
