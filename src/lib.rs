//! Compile declarative column descriptions into MySQL `CREATE TABLE`
//! statements and apply them through a database gateway.

pub mod libs;

pub use libs::*;
