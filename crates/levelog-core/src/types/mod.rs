//! Core value types shared by the logger and its configuration.

mod severity;
mod init_mode;

pub use severity::Severity;
pub use init_mode::InitMode;
