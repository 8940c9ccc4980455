//! Closest points between primitive features.

pub use self::closest_points_segment_segment::closest_points_segment_segment_params;

mod closest_points_segment_segment;
