pub mod log;

pub use log::LogManager;
