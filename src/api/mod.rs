pub mod client;
pub mod endpoints;
pub mod models;
pub mod options;
pub mod transport;
pub mod validators;
