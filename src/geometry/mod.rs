pub mod polygon;

pub use polygon::Polygon2;
