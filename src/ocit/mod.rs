pub mod client;
pub mod entry;
pub mod proj;
pub mod structs;
