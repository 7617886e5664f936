pub mod limit;
pub mod observe;
pub mod significance;

pub use observe::Observer;
