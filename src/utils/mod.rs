//! Small helpers shared by the shape, query and pipeline modules.

pub use self::isometry_ops::IsometryOps;
pub use self::point_cloud_support_point::point_cloud_support_point_id;
pub use self::timer::Timer;
pub(crate) use self::wops::WSign;

mod isometry_ops;
mod point_cloud_support_point;
mod timer;
mod wops;
