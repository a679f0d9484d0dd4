mod vector_2d;
mod body;
mod universe;
mod quadrant;

pub use vector_2d::*;
pub use body::*;
pub use universe::*;
pub use quadrant::*;
