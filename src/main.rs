// ==========================================
// 物品参数加载工具 - 主入口
// ==========================================
// 用法: item-param-loader <源数据库路径>
// 说明: 结构读取失败与行遍历失败不产生失败退出码,仅记录日志
// ==========================================

use item_param_loader::app::{get_default_registry_path, run};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // 初始化日志系统
    item_param_loader::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", item_param_loader::APP_NAME);
    tracing::info!("系统版本: {}", item_param_loader::VERSION);
    tracing::info!("==================================================");

    let db_path = std::env::args()
        .nth(1)
        .ok_or("用法: item-param-loader <源数据库路径>")?;

    let registry_path = get_default_registry_path();
    tracing::info!("源数据库: {}", db_path);
    tracing::info!("参数注册表: {}", registry_path);

    let report = run(&db_path, &registry_path)?;

    tracing::info!(
        "本次共处理 {} 行,写入 {} 个参数",
        report.rows_processed,
        report.params_set
    );
    tracing::debug!("加载报告: {}", serde_json::to_string(&report)?);

    Ok(())
}
