pub mod brief;
pub mod bundle;
pub mod content;
pub mod review;

pub use brief::*;
pub use bundle::*;
pub use content::*;
pub use review::*;
