// Tunables and storage keys shared by the engine and the UI glue.

/// localStorage key holding the serialized game.
pub const SAVE_KEY: &str = "cookie_clicker_save_v1";
/// localStorage key holding the theme preference ("dark" / "light").
pub const THEME_KEY: &str = "theme";

/// Each upgrade unit costs this much more than the previous one.
pub const COST_GROWTH: f64 = 1.15;

/// Accrual timer period.
pub const TICK_MS: i32 = 100;
/// Simulated seconds advanced per accrual tick.
pub const TICK_SECS: f64 = 0.1;
/// Every Nth accrual tick also persists the game (~5s at 100ms).
pub const SAVE_EVERY_TICKS: u32 = 50;

/// How long the Save button reads "Saved!" after a manual save.
pub const SAVED_FLASH_MS: i32 = 700;
