pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;
pub mod tokens;

pub use claims::{AuthUser, Claims};
