// ==========================================
// 品牌数据批量导入服务 - 数据仓储层
// ==========================================
// 职责: 数据访问
// 红线: Repository 不含业务规则,只做数据 CRUD
// ==========================================

pub mod error;
pub mod make_import_repo;
pub mod make_import_repo_impl;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use make_import_repo::MakeImportRepository;
pub use make_import_repo_impl::MakeImportRepositoryImpl;
