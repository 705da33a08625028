pub mod logging;

pub use logging::TaskLevel;
