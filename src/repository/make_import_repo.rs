// ==========================================
// 品牌数据批量导入服务 - 品牌导入 Repository Trait
// ==========================================
// 职责: 定义导入相关数据访问接口(不包含实现)
// 红线: Repository 不含业务规则,只做数据 CRUD
// ==========================================

use crate::domain::{ImportRecord, Make};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// MakeImportRepository Trait
// ==========================================
// 用途: 品牌导入相关数据访问
// 实现者: MakeImportRepositoryImpl(使用 rusqlite)
#[async_trait]
pub trait MakeImportRepository: Send + Sync {
    /// 在单个事务中批量插入品牌记录
    ///
    /// # 参数
    /// - records: 已通过校验的品牌记录(按文件顺序)
    ///
    /// # 返回
    /// - Ok(usize): 成功插入的记录数
    /// - Err: 数据库错误(整个事务回滚,零条落库)
    ///
    /// 空序列同样开启并提交事务。
    async fn insert_makes(&self, records: Vec<ImportRecord>) -> RepositoryResult<usize>;

    /// 统计未软删除的品牌记录数
    async fn count_makes(&self) -> RepositoryResult<usize>;

    /// 按插入顺序列出未软删除的品牌记录
    async fn list_makes(&self) -> RepositoryResult<Vec<Make>>;
}
