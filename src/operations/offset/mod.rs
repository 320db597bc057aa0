pub mod shrink_polygon;

pub use shrink_polygon::{
    offset_polygon_inwards, ShrinkOptions, ShrinkPolygon2D, ShrinkReport, ShrinkStats, Winding,
};
