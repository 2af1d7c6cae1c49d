pub mod compiler;
pub mod error;
pub mod gateway;
pub mod manager;
pub mod schema;
pub mod settings;
pub mod store;

// Re-export them for easier access from main.rs
pub use compiler::*;
pub use error::*;
pub use gateway::*;
pub use manager::*;
pub use schema::*;
pub use settings::*;
pub use store::*;
