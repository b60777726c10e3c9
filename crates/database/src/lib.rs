pub mod db;
pub mod entities;
pub mod error;
pub mod seed;
pub mod services;
