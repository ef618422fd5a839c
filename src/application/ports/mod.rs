//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod blog_store;

pub use blog_store::BlogStorePort;
