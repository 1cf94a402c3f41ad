pub mod card;
pub mod config;
pub mod countdown;
pub mod cursor;
pub mod date;
pub mod forms;
pub mod menu;
pub mod pagination;
pub mod settings;
pub mod theme;

pub use card::{CardStyle, CardView, WordCase};
pub use config::{ConfigError, SiteConfig};
pub use cursor::{CardDate, Cursor, CursorError};
pub use date::{DateError, DateFormat};
pub use pagination::{FailurePolicy, PageError, Pagination, PaginationError, Phase};
pub use theme::{Theme, ThemeSwitcher, UnknownTheme};
