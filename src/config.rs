//! Demo Configuration
//!
//! Defaults, optionally overridden by the page URL (`?items=N`).

/// Items in the list when the URL does not say otherwise
pub const DEFAULT_ITEM_COUNT: usize = 10;
/// Upper bound for `?items=`
pub const MAX_ITEM_COUNT: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub item_count: usize,
    pub droppable_id: &'static str,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            droppable_id: "droppable",
        }
    }
}

impl DemoConfig {
    /// Read overrides from the current page's query string
    pub fn from_location() -> Self {
        let items = web_sys::window()
            .and_then(|win| win.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get("items"));

        Self {
            item_count: parse_item_count(items.as_deref()),
            ..Self::default()
        }
    }
}

/// Parse `?items=`; missing or malformed values fall back to the default
pub fn parse_item_count(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .map(|n| n.clamp(1, MAX_ITEM_COUNT))
        .unwrap_or(DEFAULT_ITEM_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.item_count, 10);
        assert_eq!(config.droppable_id, "droppable");
    }

    #[test]
    fn test_parse_item_count() {
        assert_eq!(parse_item_count(None), DEFAULT_ITEM_COUNT);
        assert_eq!(parse_item_count(Some("25")), 25);
        assert_eq!(parse_item_count(Some(" 3 ")), 3);
        assert_eq!(parse_item_count(Some("abc")), DEFAULT_ITEM_COUNT);
        assert_eq!(parse_item_count(Some("-4")), DEFAULT_ITEM_COUNT);
        assert_eq!(parse_item_count(Some("0")), 1);
        assert_eq!(parse_item_count(Some("5000")), MAX_ITEM_COUNT);
    }
}
