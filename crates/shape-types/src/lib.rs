pub mod camera;
pub mod descriptor;
pub mod ids;
pub mod math;
pub mod spec;

pub use camera::*;
pub use descriptor::*;
pub use ids::*;
pub use math::*;
pub use spec::*;
