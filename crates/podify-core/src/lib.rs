//! Types shared by the Podify adapter and server crates

mod error;
mod http_client;

pub use error::{ErrorBody, HttpError};
pub use http_client::build_http_client;
