pub mod session;
pub mod storage;
pub mod theme;
pub mod ticker;

pub use session::{GameAction, Session};
pub use storage::{LocalStore, load_game, persist};
pub use theme::{Theme, apply_theme, load_theme, save_theme};
pub use ticker::TickDriver;
