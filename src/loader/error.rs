// ==========================================
// 物品参数加载工具 - 加载器错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 两类被吞掉的失败(结构读取/行遍历)在此显式建模,
//       由调用方决定记日志降级还是中止剩余行
// ==========================================

use thiserror::Error;

/// 加载器错误类型
#[derive(Error, Debug)]
pub enum LoadError {
    // ===== 结构读取错误 =====
    #[error("表结构读取失败: {0}")]
    SchemaIntrospection(String),

    // ===== 行遍历错误 =====
    #[error("行遍历失败: {0}")]
    RowIteration(String),

    #[error("参数写入失败 (key: {key}): {message}")]
    StoreWrite { key: String, message: String },

    // ===== 数据库错误 =====
    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<rusqlite::Error>
// 结构读取阶段自行用 map_err 归类,其余驱动错误都发生在行遍历中
impl From<rusqlite::Error> for LoadError {
    fn from(err: rusqlite::Error) -> Self {
        LoadError::RowIteration(err.to_string())
    }
}

/// Result 类型别名
pub type LoadResult<T> = Result<T, LoadError>;
