pub mod nutrition;
pub mod product;
pub mod profile;
pub mod verdict;

pub use nutrition::*;
pub use product::*;
pub use profile::*;
pub use verdict::*;
