//! Infrastructure layer - Storage implementations and logging setup

pub mod logging;
pub mod storage;
