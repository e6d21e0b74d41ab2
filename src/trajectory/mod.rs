mod builder;
mod error;
mod side;
mod types;

pub use builder::build_trajectory;
pub use error::TrajectoryError;
pub use side::sun_side;
pub use types::{SunSide, Trajectory, TrajectorySample};
