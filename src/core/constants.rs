//! Read-boundary defaults for descriptive location fields

/// Name reported for a location whose name was never set
pub const DEFAULT_NAME: &str = "Untitled";

/// Category reported for a location whose category was never set
pub const DEFAULT_CATEGORY: &str = "default";
