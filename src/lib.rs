pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PolyshrinkError, Result};
pub use geometry::Polygon2;
pub use math::{Point2, Vector2};
pub use operations::offset::{
    offset_polygon_inwards, ShrinkOptions, ShrinkPolygon2D, ShrinkReport, ShrinkStats, Winding,
};
