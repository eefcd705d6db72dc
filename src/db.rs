// ==========================================
// 全球服装生产管理系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一 PRAGMA 行为 (外键/超时)
// - 会话使用内存库: 状态随会话消亡, 不落盘
// - 建表与种子数据写入集中在此处
// ==========================================

use crate::domain::site::seed_catalog;
use rusqlite::{params, Connection};
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明:
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开会话内存库并应用统一配置
///
/// 每个用户会话独占一个连接, 会话之间互不可见
pub fn open_session_connection() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 建表
///
/// - site: 产能注册表
/// - production_order: 订单台账 (seq 为落账规范顺序)
/// - capacity_edit_log: 产能修改审计日志
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS site (
            site_code        TEXT PRIMARY KEY,
            site_name        TEXT NOT NULL,
            region           TEXT NOT NULL,
            currency         TEXT,
            main_lines       INTEGER NOT NULL CHECK (main_lines >= 0),
            outsourced_lines INTEGER NOT NULL CHECK (outsourced_lines >= 0)
        );

        CREATE TABLE IF NOT EXISTS production_order (
            seq             INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id        TEXT NOT NULL UNIQUE,
            buyer           TEXT NOT NULL,
            style_no        TEXT NOT NULL,
            quantity        INTEGER NOT NULL,
            unit_price      REAL NOT NULL,
            delivery_date   TEXT NOT NULL,
            site_code       TEXT NOT NULL REFERENCES site(site_code),
            pool            TEXT NOT NULL,
            detail_factory  TEXT NOT NULL,
            lines_required  INTEGER NOT NULL,
            status          TEXT NOT NULL,
            yarn_cost       REAL,
            fabric_cost     REAL,
            processing_cost REAL,
            sewing_cost     REAL,
            finishing_cost  REAL,
            transport_cost  REAL,
            overhead_cost   REAL,
            sga_cost        REAL,
            progress_stage  TEXT,
            vendors_json    TEXT,
            power_kwh       REAL,
            water_ton       REAL,
            carbon_kg       REAL,
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS capacity_edit_log (
            log_id     TEXT PRIMARY KEY,
            edited_at  TEXT NOT NULL,
            site_code  TEXT NOT NULL REFERENCES site(site_code),
            pool       TEXT NOT NULL,
            old_lines  INTEGER NOT NULL,
            new_lines  INTEGER NOT NULL,
            actor      TEXT NOT NULL
        );

        -- 台账按基地/池聚合是高频查询, 保持索引
        CREATE INDEX IF NOT EXISTS idx_order_site_pool ON production_order(site_code, pool);
        "#,
    )?;
    Ok(())
}

/// 写入种子基地目录 (幂等: 已存在则跳过)
pub fn seed_sites(conn: &Connection) -> rusqlite::Result<usize> {
    let mut inserted = 0;
    for site in seed_catalog() {
        let affected = conn.execute(
            r#"
            INSERT OR IGNORE INTO site (
                site_code, site_name, region, currency, main_lines, outsourced_lines
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                site.site_code,
                site.site_name,
                site.region.as_str(),
                site.currency,
                site.main_lines,
                site.outsourced_lines,
            ],
        )?;
        inserted += affected;
    }
    Ok(inserted)
}

/// 初始化会话库 (连接 + 建表 + 种子数据)
pub fn init_session_db() -> rusqlite::Result<Connection> {
    let conn = open_session_connection()?;
    create_schema(&conn)?;
    seed_sites(&conn)?;
    Ok(conn)
}
