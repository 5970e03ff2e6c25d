//! Shared helpers: the image fetcher seam and URL handling

pub mod http_client;
pub mod url;

pub use http_client::{HttpImageFetcher, ImageFetcher};
pub use url::UrlUtils;
