//! Generic 2D geometry: [`Point`] and the half-open [`Rectangle`] over any
//! primitive integer or float scalar.
//!
//! ```
//! use imggg::{pt, rect};
//!
//! let r = rect(0, 0, 10, 10).intersect(rect(5, 5, 15, 15));
//! assert_eq!(r, rect(5, 5, 10, 10));
//! assert!(pt(5, 5).is_in(r));
//! assert!(!pt(10, 10).is_in(r));
//! assert_eq!(r.to_string(), "(5,5)-(10,10)");
//! ```

pub mod color;
pub mod interop;
pub mod math;
pub mod stencil;

pub use color::{Alpha16, ColorModel};
pub use interop::{StdPoint, StdRect};
pub use math::{Number, Point, Rectangle, pt, rect};
pub use stencil::SampledImage;
