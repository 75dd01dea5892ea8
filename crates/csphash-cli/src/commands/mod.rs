pub mod csp;
pub mod hash;
