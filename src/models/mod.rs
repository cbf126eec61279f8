// Start of file: /src/models/mod.rs

/*
    * This module groups the data models exchanged over HTTP.
*/

pub mod hello_data;

pub use hello_data::HelloData;

// End of file: /src/models/mod.rs
