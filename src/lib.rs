pub mod cache;
pub mod cli;
pub mod clock;
pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod request;
pub mod source;
pub mod teams;

pub use error::{Error, Result};
