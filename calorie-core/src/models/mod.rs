mod gender;
mod intensity;

pub use gender::{Gender, UnknownGenderError};
pub use intensity::{IntensityLevel, UnknownIntensityError};
