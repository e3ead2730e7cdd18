// ==========================================
// 品牌数据批量导入服务 - 领域层
// ==========================================
// 职责: 实体与导入流水线的值对象
// ==========================================

pub mod import;
pub mod make;

// 重导出核心类型
pub use import::{ImportError, ImportJob, ImportJobResult, ImportOutcome, ImportRecord, RawRow};
pub use make::Make;
