// ==========================================
// 物品参数加载工具 - 加载报告
// ==========================================
// 职责: 记录单次加载的批次信息、计数与被吞掉的错误类别
// 说明: 结构读取失败与行遍历失败不中断进程,只落在日志与报告里
// ==========================================

use serde::{Deserialize, Serialize};

/// 单次加载的结果报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// 批次 ID (UUID v4)
    pub batch_id: String,

    /// 运行时发现的有序列名(降级时为空)
    pub columns: Vec<String>,

    /// 完整发布完成的行数
    pub rows_processed: usize,

    /// 写入的参数个数
    pub params_set: usize,

    /// 表结构读取失败信息(失败后以空列表继续)
    pub schema_error: Option<String>,

    /// 行遍历中止信息(剩余行被放弃)
    pub abort_error: Option<String>,

    /// 开始时间
    pub started_at: String,

    /// 结束时间
    pub finished_at: String,
}

impl LoadReport {
    /// 本次加载是否全程无降级、无中止
    pub fn is_complete(&self) -> bool {
        self.schema_error.is_none() && self.abort_error.is_none()
    }
}
