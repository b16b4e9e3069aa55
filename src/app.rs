// ==========================================
// 物品参数加载工具 - 应用装配
// ==========================================
// 职责: 参数注册表定位与组件装配
// ==========================================

use crate::domain::LoadReport;
use crate::loader::ItemParameterLoader;
use crate::store::{ParameterStore, RegistryParameterStore};
use std::error::Error;
use std::sync::Arc;

/// 注册表路径环境变量(便于调试/测试/CI 显式指定)
pub const REGISTRY_PATH_ENV: &str = "ITEM_PARAM_REGISTRY_PATH";

/// 获取默认的参数注册表路径
///
/// 优先级: 环境变量 > 用户数据目录 > 当前目录回退。
pub fn get_default_registry_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var(REGISTRY_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // 先给一个默认回退值,后续如果能拿到 data_dir 再覆盖
    let mut path = PathBuf::from("./item_param_registry.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录,避免污染生产注册表
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("item-param-loader-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("item-param-loader");
        }

        path = path.join("registry.db");
    }

    path.to_string_lossy().into_owned()
}

/// 装配注册表与加载器并执行一次加载
///
/// # 参数
/// - db_path: 源数据库文件路径
/// - registry_path: 参数注册表路径(父目录不存在时创建)
///
/// # 返回
/// - Ok(LoadReport): 加载报告(结构读取/行遍历失败也在报告中,不走 Err)
/// - Err: 注册表/源数据库打开失败
pub fn run(db_path: &str, registry_path: &str) -> Result<LoadReport, Box<dyn Error>> {
    if let Some(parent) = std::path::Path::new(registry_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let store: Arc<dyn ParameterStore> = Arc::new(RegistryParameterStore::new(registry_path)?);
    let loader = ItemParameterLoader::new(db_path, store)?;

    Ok(loader.load())
}
