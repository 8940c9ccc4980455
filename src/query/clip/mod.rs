//! Clipping of polygons.

pub use self::clip_halfspace_polygon::{
    clip_halfspace_polygon, ClippedPolygon, MAX_CLIPPED_POLYGON_VERTICES,
};

mod clip_halfspace_polygon;
