// ==========================================
// 物品参数加载工具 - 内存参数存储
// ==========================================
// 职责: 进程内 HashMap 实现,用于测试与嵌入场景
// ==========================================

use crate::domain::ParamValue;
use crate::store::error::{StoreError, StoreResult};
use crate::store::param_store_trait::ParameterStore;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryParameterStore {
    entries: Mutex<HashMap<String, ParamValue>>,
}

impl MemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按键读取参数值
    pub fn get(&self, key: &str) -> StoreResult<Option<ParamValue>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    /// 当前参数个数
    pub fn len(&self) -> StoreResult<usize> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// 全量快照(拷贝)
    pub fn snapshot(&self) -> StoreResult<HashMap<String, ParamValue>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        Ok(entries.clone())
    }
}

impl ParameterStore for MemoryParameterStore {
    fn set(&self, key: &str, value: ParamValue) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
