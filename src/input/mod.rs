mod batch;
mod calculation;

pub use batch::*;
pub use calculation::*;
