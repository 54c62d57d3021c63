//! Output generation for extracted homepage data.
//!
//! One submodule per output format:
//!
//! - [`csv`]: writes one CSV file per source site with a
//!   `Link,Title,Description` header and one row per article

pub mod csv;
