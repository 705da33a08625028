//! 单元测试与集成测试共用的测试替身

pub mod logs;
pub mod mocks;

pub use logs::LogCapture;
pub use mocks::{sample_user, Call, LoginBehavior, MockBili};
