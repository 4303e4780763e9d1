//! User directory client

mod http_directory;

pub use http_directory::HttpUserDirectory;
