pub mod beam;
pub mod field;
pub mod paint;
pub mod particle;
pub mod resize;
pub mod scheme;
pub mod sizing;

pub use beam::*;
pub use field::*;
pub use paint::*;
pub use particle::*;
pub use resize::*;
pub use scheme::*;
pub use sizing::*;
