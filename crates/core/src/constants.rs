/// Sector label used when a position carries none
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Currency assumed when a position omits one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Number of entries in the top and worst performer lists
pub const RANKED_LIST_SIZE: usize = 5;

/// Holdings count treated as fully diversified by the risk score
pub const FULL_DIVERSIFICATION_POSITIONS: usize = 20;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Months per year, for monthly income averages
pub const MONTHS_PER_YEAR: i64 = 12;
