//! # Sectionmatch Loader
//!
//! The I/O boundary around the pure matcher: reads and normalizes the two
//! JSON input shapes (topic specification, document) and discovers document
//! files on disk. All failures surface here as [`LoaderError`]; the matcher
//! itself never fails.

mod error;
mod load;
mod scanner;

pub use error::{LoaderError, Result};
pub use load::{load_document, load_topic_spec};
pub use scanner::DocumentScanner;
