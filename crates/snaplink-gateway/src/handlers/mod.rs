mod health;
mod links;
mod redirect;

pub use health::health_handler;
pub use links::{create_link_handler, disable_link_handler, link_stats_handler};
pub use redirect::redirect_handler;
