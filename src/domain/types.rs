// ==========================================
// 物品参数加载工具 - 领域类型定义
// ==========================================
// 职责: 参数值类型与键名路径段渲染
// 红线: 值按 SQLite 存储类透传,不做类型转换
// ==========================================

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 参数值 (Parameter Value)
// ==========================================
// 与 SQLite 的四种非空存储类一一对应
// SQL NULL 不设变体: 空单元格用 Option<ParamValue>::None 表达(缺席,而非哨兵值)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl ParamValue {
    /// 从查询结果单元格构造参数值
    ///
    /// # 返回
    /// - Some(ParamValue): 非空单元格,值原样拷出
    /// - None: SQL NULL
    pub fn from_value_ref(value: ValueRef<'_>) -> Option<Self> {
        match value {
            ValueRef::Null => None,
            ValueRef::Integer(i) => Some(ParamValue::Integer(i)),
            ValueRef::Real(f) => Some(ParamValue::Real(f)),
            ValueRef::Text(t) => Some(ParamValue::Text(String::from_utf8_lossy(t).into_owned())),
            ValueRef::Blob(b) => Some(ParamValue::Blob(b.to_vec())),
        }
    }

    /// 渲染为参数键的路径段
    ///
    /// 整数/浮点渲染为十进制文本,文本原样,Blob 按 UTF-8 宽松解码。
    pub fn as_key_segment(&self) -> String {
        match self {
            ParamValue::Integer(i) => i.to_string(),
            ParamValue::Real(f) => f.to_string(),
            ParamValue::Text(t) => t.clone(),
            ParamValue::Blob(b) => String::from_utf8_lossy(b).into_owned(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(i) => write!(f, "{}", i),
            ParamValue::Real(r) => write!(f, "{}", r),
            ParamValue::Text(t) => write!(f, "{}", t),
            ParamValue::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

// 绑定到 SQL 语句时保持原存储类
impl ToSql for ParamValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            ParamValue::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            ParamValue::Real(f) => ToSqlOutput::Owned(Value::Real(*f)),
            ParamValue::Text(t) => ToSqlOutput::Borrowed(ValueRef::Text(t.as_bytes())),
            ParamValue::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b.as_slice())),
        })
    }
}

// 从注册表读回时同样透传; 注册表列带 NOT NULL 约束, NULL 视为类型错误
impl FromSql for ParamValue {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        ParamValue::from_value_ref(value).ok_or(FromSqlError::InvalidType)
    }
}
