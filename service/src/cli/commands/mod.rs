//! One command per deployment adapter

pub mod convert;
pub mod serve;

pub use convert::ConvertCommand;
pub use serve::ServeCommand;
