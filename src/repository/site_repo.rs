// ==========================================
// 全球服装生产管理系统 - 生产基地数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::site::Site;
use crate::domain::types::{PoolType, Region};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// SiteRepository - 生产基地仓储
// ==========================================

/// 生产基地仓储
/// 职责: 管理 site 表的查询与产能更新
pub struct SiteRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SiteRepository {
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

    /// 行映射
    fn map_row(row: &Row) -> rusqlite::Result<Site> {
        let region_str: String = row.get(2)?;
        Ok(Site {
            site_code: row.get(0)?,
            site_name: row.get(1)?,
            region: Region::from_str(&region_str).unwrap_or(Region::Asia),
            currency: row.get(3)?,
            main_lines: row.get(4)?,
            outsourced_lines: row.get(5)?,
        })
    }

    /// 查询全部生产基地 (按录入顺序, 即仪表盘展示顺序)
    pub fn find_all(&self) -> RepositoryResult<Vec<Site>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT site_code, site_name, region, currency, main_lines, outsourced_lines
            FROM site
            ORDER BY rowid
            "#,
        )?;

        let sites = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<Site>>>()?;

        Ok(sites)
    }

    /// 按基地代码查询
    ///
    /// # 返回
    /// - Ok(Some(Site)): 找到基地
    /// - Ok(None): 未找到
    pub fn find_by_code(&self, site_code: &str) -> RepositoryResult<Option<Site>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT site_code, site_name, region, currency, main_lines, outsourced_lines
            FROM site
            WHERE site_code = ?1
            "#,
        )?;

        let site = stmt.query_row(params![site_code], Self::map_row).optional()?;
        Ok(site)
    }

    /// 更新指定产能池的线数, 返回修改前的值
    ///
    /// 说明: 读旧值与写新值在同一事务内完成,
    ///       保证审计记录中的 old/new 与实际变更一致
    ///
    /// # 返回
    /// - Ok(old_lines): 修改前的线数
    /// - Err(NotFound): 基地不存在
    pub fn update_pool_lines(
        &self,
        site_code: &str,
        pool: PoolType,
        new_lines: i64,
    ) -> RepositoryResult<i64> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;

        let column = match pool {
            PoolType::Main => "main_lines",
            PoolType::Outsourced => "outsourced_lines",
        };

        let old_lines: i64 = tx
            .query_row(
                &format!("SELECT {} FROM site WHERE site_code = ?1", column),
                params![site_code],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Site".to_string(),
                id: site_code.to_string(),
            })?;

        tx.execute(
            &format!("UPDATE site SET {} = ?1 WHERE site_code = ?2", column),
            params![new_lines, site_code],
        )?;

        tx.commit()?;
        Ok(old_lines)
    }
}
