pub use number::Number;
pub use point::{Point, pt};
pub use rectangle::{Rectangle, rect};

mod number;
mod point;
mod rectangle;
