// Start of file: /src/request/mod.rs

/*
    * Read-only helpers for request metadata: locale, cookies, headers.
*/

pub mod cookie;
pub mod headers;
pub mod locale;

pub use cookie::cookie_value;
pub use headers::{header_multimap, required_header};
pub use locale::Locale;

// End of file: /src/request/mod.rs
