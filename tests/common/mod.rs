pub mod asserts;
pub mod builders;
pub mod delegates;
pub mod headers;
