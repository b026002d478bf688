pub mod handler;

pub use handler::{translate, Command};
