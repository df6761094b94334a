//! OpenStreetMap XML ingestion.
//!
//! This crate turns an OSM XML document of any size into a lazy sequence of
//! [`RawElement`](osm_model::RawElement)s, one per top-level `node` or `way`,
//! in document order. Relations, bounds and other elements are skipped.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use osm_ingest::ElementStream;
//!
//! let stream = ElementStream::open(Path::new("newyork-sample.osm"))?;
//! let ways = stream
//!     .filter_map(Result::ok)
//!     .filter(|element| element.kind() == osm_model::ElementKind::Way)
//!     .count();
//! ```

mod error;
mod stream;

pub use error::{IngestError, Result};
pub use stream::ElementStream;
