pub mod cascade;
pub mod db;
pub mod entities;
pub mod error;
pub mod record;
pub mod services;

pub use error::{Error, Result};
