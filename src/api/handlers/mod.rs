//! HTTP request handlers for both services.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod techniques;
pub mod urls;

pub use health::{health_handler, service_info_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use techniques::{list_techniques_handler, technique_detail_handler};
pub use urls::list_urls_handler;
