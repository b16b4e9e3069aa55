// ==========================================
// 物品参数加载工具 - 参数存储 Trait
// ==========================================
// 职责: 定义参数写入接口(不包含实现)
// ==========================================

use crate::domain::ParamValue;
use crate::store::error::StoreResult;

// ==========================================
// ParameterStore Trait
// ==========================================
// 用途: 运行时参数注册表的最小能力约定
// 实现者: RegistryParameterStore, MemoryParameterStore
pub trait ParameterStore: Send + Sync {
    /// 写入一个参数,键已存在时覆盖
    ///
    /// # 参数
    /// - key: 层级键,如 items/widget/color
    /// - value: 参数值,按原存储类写入
    fn set(&self, key: &str, value: ParamValue) -> StoreResult<()>;
}
