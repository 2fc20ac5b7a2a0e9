//! Extract the HTTP method/path pairs declared in an OpenAPI document and
//! write them out grouped by method:
//!
//! ```json
//! {
//!   "GET": ["/pets", "/pets/{petId}"],
//!   "POST": ["/pets"]
//! }
//! ```

pub mod error;
pub mod openapi;
pub mod summary;

pub use error::{Error, Result};
pub use openapi::{
    collect_method_paths, extract_methods_urls, read_document, write_method_paths, Method,
    MethodPaths,
};
pub use summary::Summary;
