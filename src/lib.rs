mod generic_structs;
pub mod server;
pub mod standings;

pub use generic_structs::*;
