pub mod ftp;

pub use ftp::config::FetchConfig;
pub use ftp::error::FetchError;
pub use ftp::fetcher::fetch;
