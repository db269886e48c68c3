pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod viewer;

pub use error::{Result, ShowroomError};
