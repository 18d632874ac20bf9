//! PDF geometry extraction using lopdf and pdf-extract.

mod geometry;

pub use geometry::{load_geometry, GeometryItem, GeometryOutput, PageGeometry};
