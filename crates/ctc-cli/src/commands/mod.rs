pub mod config;
pub mod feed;
pub mod score;
pub mod session;
