//! 文件服务模块
//!
//! 提供文件系统抽象，持久化层通过 FileProvider 访问磁盘

pub mod local;

pub use local::LocalFileProvider;
