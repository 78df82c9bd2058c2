pub mod draft;
pub mod finalize;
pub mod outline;
pub mod research;
pub mod review;

pub use draft::*;
pub use finalize::*;
pub use outline::*;
pub use research::*;
pub use review::*;
