pub mod chat;
pub mod common;
pub mod health;
pub mod levels;
pub mod logistics;
pub mod status;
pub mod tickets;

pub use chat::post_chat;
pub use health::{health, ready};
pub use levels::get_levels;
pub use logistics::{get_forecast, post_dispatch};
pub use status::get_status;
pub use tickets::get_discrepancies;
