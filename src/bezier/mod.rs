mod basis;
mod subdivide;
mod roots;

pub use self::basis::*;
pub use self::subdivide::*;
pub use self::roots::*;
