// ==========================================
// 物品参数加载工具 - 物品参数加载器
// ==========================================
// 职责: 读取源数据库 items 表,将非空属性列发布为运行时参数
// 键格式: items/<行标识>/<列名>
// 红线: 结构读取失败降级为空列表继续;行遍历失败放弃剩余行;
//       两类失败都不中断进程,结束日志无条件落盘
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::{LoadReport, ParamValue};
use crate::loader::error::{LoadError, LoadResult};
use crate::store::ParameterStore;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// 源表名(固定)
pub const ITEM_TABLE: &str = "items";

/// 保留列数: 列 0 为内部 id,列 1 为行标识,属性列从列 2 起
const RESERVED_COLUMNS: usize = 2;

pub struct ItemParameterLoader {
    conn: Arc<Mutex<Connection>>,
    store: Arc<dyn ParameterStore>,
}

impl ItemParameterLoader {
    /// 打开源数据库并创建加载器
    ///
    /// 路径不做存在性/格式校验,交由驱动处理
    /// (与 SQLite 行为一致:路径不存在时会新建空库)。
    pub fn new(db_path: &str, store: Arc<dyn ParameterStore>) -> LoadResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| LoadError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            store,
        })
    }

    /// 从已有连接创建加载器
    pub fn from_connection(conn: Arc<Mutex<Connection>>, store: Arc<dyn ParameterStore>) -> Self {
        Self { conn, store }
    }

    fn get_conn(&self) -> LoadResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| LoadError::LockError(e.to_string()))
    }

    /// 执行一次完整加载
    ///
    /// 直线流程,不返回 Err:
    /// 1. 读取 items 表结构,失败则告警并以空列表继续
    /// 2. 遍历行,发布列 2 起的非空单元格
    /// 3. 行遍历出错即告警并放弃剩余行,已发布的参数保留
    /// 4. 无论成败都记录结束日志并返回报告
    pub fn load(&self) -> LoadReport {
        let batch_id = Uuid::new_v4().to_string();
        let started_at = now_string();
        tracing::info!("开始加载物品参数: batch_id={}", batch_id);

        let mut schema_error = None;
        let columns = match self.fetch_columns() {
            Ok(columns) => columns,
            Err(e) => {
                tracing::warn!("无法读取 {} 表结构: {}, 以空列表继续", ITEM_TABLE, e);
                schema_error = Some(e.to_string());
                Vec::new()
            }
        };

        let mut rows_processed = 0usize;
        let mut params_set = 0usize;
        let abort_error =
            match self.publish_rows(&columns, &mut rows_processed, &mut params_set) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!("无法加载 SQLite 参数: {}, 放弃剩余行", e);
                    Some(e.to_string())
                }
            };

        tracing::info!(
            "物品参数加载结束: batch_id={}, rows={}, params={}",
            batch_id,
            rows_processed,
            params_set
        );

        LoadReport {
            batch_id,
            columns,
            rows_processed,
            params_set,
            schema_error,
            abort_error,
            started_at,
            finished_at: now_string(),
        }
    }

    /// 读取 items 表的有序列名
    ///
    /// 说明: 表不存在时 PRAGMA 返回空集而非错误,此分支不视为失败;
    /// 只有驱动级错误(文件不是数据库等)会进入 Err。
    fn fetch_columns(&self) -> LoadResult<Vec<String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({})", ITEM_TABLE))
            .map_err(|e| LoadError::SchemaIntrospection(e.to_string()))?;

        // PRAGMA table_info 的列 1 是列名
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| LoadError::SchemaIntrospection(e.to_string()))?;

        Ok(columns)
    }

    /// 遍历 items 表并发布非空属性列
    ///
    /// 行内任一错误(取标识列、取单元格、写存储)都会中止整个遍历;
    /// rows_processed 只统计完整发布完成的行。
    fn publish_rows(
        &self,
        columns: &[String],
        rows_processed: &mut usize,
        params_set: &mut usize,
    ) -> LoadResult<()> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("SELECT * FROM {}", ITEM_TABLE))?;
        let mut rows = stmt.query([])?;

        while let Some(row) = rows.next()? {
            // 行标识取列 1; NULL 标识渲染为 "null" 路径段
            let ident = match ParamValue::from_value_ref(row.get_ref(1)?) {
                Some(v) => v.as_key_segment(),
                None => "null".to_string(),
            };

            for (index, column) in columns.iter().enumerate().skip(RESERVED_COLUMNS) {
                let value = match ParamValue::from_value_ref(row.get_ref(index)?) {
                    Some(v) => v,
                    // NULL 单元格跳过: 缺席,而非写入哨兵值
                    None => continue,
                };

                let key = format!("{}/{}/{}", ITEM_TABLE, ident, column);
                self.store.set(&key, value).map_err(|e| LoadError::StoreWrite {
                    key: key.clone(),
                    message: e.to_string(),
                })?;
                *params_set += 1;
            }

            *rows_processed += 1;
        }

        Ok(())
    }
}

fn now_string() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
