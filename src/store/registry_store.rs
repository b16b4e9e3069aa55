// ==========================================
// 物品参数加载工具 - 参数注册表存储
// ==========================================
// 职责: 管理 param_kv 表 (key-value)
// 说明: 注册表由外部运行时共享,value 列不声明类型,
//       整数/浮点/文本/Blob 按原存储类落库
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::ParamValue;
use crate::store::error::{StoreError, StoreResult};
use crate::store::param_store_trait::ParameterStore;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct RegistryParameterStore {
    conn: Arc<Mutex<Connection>>,
}

impl RegistryParameterStore {
    pub fn new(db_path: &str) -> StoreResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| StoreError::DatabaseConnectionError(e.to_string()))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.ensure_table()?;
        Ok(store)
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> StoreResult<Self> {
        let store = Self { conn };
        store.ensure_table()?;
        Ok(store)
    }

    fn get_conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))
    }

    /// 确保注册表存在(如果不存在则创建)
    fn ensure_table(&self) -> StoreResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS param_kv (
              key TEXT PRIMARY KEY,
              value NOT NULL,
              updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX IF NOT EXISTS idx_param_kv_updated_at
              ON param_kv(updated_at DESC);
            "#,
        )?;
        Ok(())
    }

    /// 按键读取参数值
    pub fn get(&self, key: &str) -> StoreResult<Option<ParamValue>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT value FROM param_kv WHERE key = ?1",
            params![key],
            |row| row.get::<_, ParamValue>(0),
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 按键前缀列出参数(按键名排序)
    pub fn list_by_prefix(&self, prefix: &str) -> StoreResult<Vec<(String, ParamValue)>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT key, value
            FROM param_kv
            WHERE key LIKE ?1 || '%'
            ORDER BY key ASC
            "#,
        )?;

        let rows = stmt
            .query_map(params![prefix], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, ParamValue>(1)?))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }
}

impl ParameterStore for RegistryParameterStore {
    /// 创建或覆盖参数 (Upsert 操作)
    fn set(&self, key: &str, value: ParamValue) -> StoreResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO param_kv (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }
}
