// ==========================================
// 物品参数加载工具 - 核心库
// ==========================================
// 定位: 一次性数据加载工具
// 流程: 打开源数据库 → 读取 items 表结构 → 遍历行 → 发布非空属性参数
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 参数值与加载报告
pub mod domain;

// 存储层 - 参数注册表访问
pub mod store;

// 加载层 - 物品参数加载器
pub mod loader;

// 数据库基础设施(连接初始化/PRAGMA 统一)
pub mod db;

// 日志系统
pub mod logging;

// 应用层 - 装配与缺省路径
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{LoadReport, ParamValue};
pub use loader::{ItemParameterLoader, LoadError, LoadResult, ITEM_TABLE};
pub use store::{
    MemoryParameterStore, ParameterStore, RegistryParameterStore, StoreError, StoreResult,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "物品参数加载工具";
