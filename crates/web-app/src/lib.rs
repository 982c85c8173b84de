#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod browser;
pub mod environment;
pub mod log;

pub use browser::Browser;
pub use environment::Environment;
