// ==========================================
// 全球服装生产管理系统 - 产能修改日志仓储
// ==========================================
// 红线: Repository 不做业务逻辑, 只做数据映射
// 红线: 日志只追加, 不更新不删除
// ==========================================

use crate::domain::capacity_log::CapacityEditRecord;
use crate::domain::types::PoolType;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

// ==========================================
// CapacityLogRepository - 产能修改日志仓储
// ==========================================
pub struct CapacityLogRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CapacityLogRepository {
    /// 从共享连接创建仓储实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 插入产能修改记录
    ///
    /// # 返回
    /// - Ok(log_id): 成功插入, 返回 log_id
    pub fn insert(&self, record: &CapacityEditRecord) -> RepositoryResult<String> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO capacity_edit_log (
                log_id, edited_at, site_code, pool, old_lines, new_lines, actor
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record.log_id,
                record.edited_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                record.site_code,
                record.pool.as_str(),
                record.old_lines,
                record.new_lines,
                record.actor,
            ],
        )?;

        Ok(record.log_id.clone())
    }

    /// 查询全部修改记录 (按追加顺序)
    pub fn find_all(&self) -> RepositoryResult<Vec<CapacityEditRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT log_id, edited_at, site_code, pool, old_lines, new_lines, actor
            FROM capacity_edit_log
            ORDER BY rowid
            "#,
        )?;

        let records = stmt
            .query_map([], |row| {
                let edited_at_str: String = row.get(1)?;
                let pool_str: String = row.get(3)?;
                Ok(CapacityEditRecord {
                    log_id: row.get(0)?,
                    edited_at: NaiveDateTime::parse_from_str(&edited_at_str, "%Y-%m-%d %H:%M:%S")
                        .unwrap_or_else(|_| {
                            chrono::NaiveDate::from_ymd_opt(1970, 1, 1)
                                .unwrap()
                                .and_hms_opt(0, 0, 0)
                                .unwrap()
                        }),
                    site_code: row.get(2)?,
                    pool: PoolType::from_str(&pool_str).unwrap_or(PoolType::Main),
                    old_lines: row.get(4)?,
                    new_lines: row.get(5)?,
                    actor: row.get(6)?,
                })
            })?
            .collect::<SqliteResult<Vec<CapacityEditRecord>>>()?;

        Ok(records)
    }

    /// 日志长度
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM capacity_edit_log", [], |row| row.get(0))?;
        Ok(count)
    }
}
