mod error;
mod normalize;
mod sampler;
mod zone;

pub use error::TimeError;
pub use normalize::to_utc;
pub use sampler::sample_times;
pub use zone::{zone_or_utc, ZoneResolver};
