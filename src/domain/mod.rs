// ==========================================
// 物品参数加载工具 - 领域层
// ==========================================
// 职责: 参数值与加载报告的类型定义
// ==========================================

pub mod report;
pub mod types;

// 重导出核心类型
pub use report::LoadReport;
pub use types::ParamValue;
