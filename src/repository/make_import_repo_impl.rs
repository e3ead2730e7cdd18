// ==========================================
// 品牌数据批量导入服务 - 品牌导入 Repository 实现
// ==========================================
// 职责: 实现导入相关数据访问(使用 rusqlite)
// 事务: 批量插入在单个事务内完成,失败即整体回滚
// ==========================================

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::{ImportRecord, Make};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::make_import_repo::MakeImportRepository;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, Transaction};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// MakeImportRepositoryImpl
// ==========================================
pub struct MakeImportRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl MakeImportRepositoryImpl {
    /// 创建新的 Repository 实例(打开连接并确保建表)
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 基于已有连接创建实例(连接由进程启动时显式构造并传入)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 在事务中批量插入品牌记录
    fn insert_makes_tx(tx: &Transaction, records: &[ImportRecord]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO makes (name, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )?;

        let now = Utc::now();
        let mut count = 0;
        for record in records {
            stmt.execute(params![record.name(), record.description(), now, now])?;
            count += 1;
        }

        Ok(count)
    }
}

#[async_trait]
impl MakeImportRepository for MakeImportRepositoryImpl {
    async fn insert_makes(&self, records: Vec<ImportRecord>) -> RepositoryResult<usize> {
        let mut conn = self.lock_conn()?;

        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = Self::insert_makes_tx(&tx, &records)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(count)
    }

    async fn count_makes(&self) -> RepositoryResult<usize> {
        let conn = self.lock_conn()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM makes WHERE deleted_at IS NULL",
            [],
            |row| row.get(0),
        )?;

        Ok(count as usize)
    }

    async fn list_makes(&self) -> RepositoryResult<Vec<Make>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, description, created_at, updated_at, deleted_at
            FROM makes
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )?;

        let makes = stmt
            .query_map([], |row| {
                Ok(Make {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    created_at: row.get(3)?,
                    updated_at: row.get(4)?,
                    deleted_at: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(makes)
    }
}
