//! API access layer: transport seam, response cache, high-level client.

pub mod api;
pub mod cache;
pub mod transport;

pub use api::LukmanClient;
pub use cache::{Clock, ResponseCache, SystemClock};
pub use transport::{HttpTransport, Transport};
