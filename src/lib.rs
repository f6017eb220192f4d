//! wcode - 浏览器代码编辑器外壳的无头内核
//!
//! 模块结构：
//! - kernel: 应用核心（State, Action, Effect, Store）
//! - kernel::services: 服务层（ports 契约 + adapters 网关实现）
//! - logging: tracing 日志初始化

pub mod kernel;
pub mod logging;
