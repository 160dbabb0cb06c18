pub mod config;
pub mod details;
pub mod error;
pub mod models;
pub mod parse;
pub mod selection;
pub mod session;
pub mod summary;
pub mod ticket;
pub mod watchlist;
