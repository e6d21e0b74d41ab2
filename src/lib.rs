//! Great-circle trajectory and sun-side engine.
//!
//! Given two geographic endpoints and their local departure/arrival times,
//! the engine interpolates the minor-arc great-circle route, assigns a UTC
//! timestamp to each sample assuming uniform ground speed, asks an injected
//! [`SolarPositionProvider`] for the sun's altitude and azimuth at each
//! sample, and labels whether the sun sits left or right of the direction of
//! travel. The result is a single immutable [`Trajectory`].
//!
//! The engine is a pure function of its inputs: no I/O of its own, no shared
//! state, no partial results. Solar geometry and time-zone resolution are
//! capabilities supplied by the caller (see [`SolarPositionProvider`] and
//! [`ZoneResolver`]).

pub mod geo;
pub mod solar;
pub mod time;
pub mod trajectory;

pub use geo::{GeoError, GeoPoint};
pub use solar::{SolarError, SolarPosition, SolarPositionProvider};
pub use time::{TimeError, ZoneResolver};
pub use trajectory::{build_trajectory, SunSide, Trajectory, TrajectoryError, TrajectorySample};
