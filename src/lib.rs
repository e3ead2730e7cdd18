// ==========================================
// 品牌数据批量导入服务 - 核心库
// ==========================================
// 技术栈: Tokio + Rust + SQLite
// 定位: 异步文件导入流水线(全量入库 xor 错误报告)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与值对象
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 解析/校验/报告/流水线
pub mod importer;

// 任务队列层 - 工作协程池
pub mod queue;

// 配置层 - 运行配置
pub mod config;

// 数据库基础设施(连接初始化/PRAGMA 统一)
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ImportError, ImportJob, ImportJobResult, ImportOutcome, ImportRecord, Make, RawRow,
};

// 导入流水线
pub use importer::{
    CsvParser, ExcelParser, FileFormat, MakeImporter, MakeImporterImpl, PipelineError,
    XlsxReportGenerator,
};

// 任务队列
pub use queue::{ImportQueue, JobHandle, QueueError};

// 仓储
pub use repository::{MakeImportRepository, MakeImportRepositoryImpl};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "品牌数据批量导入服务";
