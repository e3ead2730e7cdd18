// ==========================================
// 品牌数据批量导入服务 - 应用配置
// ==========================================
// 职责: 从环境变量读取运行配置,缺省值指向平台数据目录
// ==========================================

use std::env;
use std::path::PathBuf;

/// 默认工作协程数
pub const DEFAULT_WORKER_COUNT: usize = 2;

/// 默认队列深度
pub const DEFAULT_QUEUE_DEPTH: usize = 32;

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,      // SQLite 数据库文件路径
    pub report_dir: PathBuf,  // 错误报告输出目录
    pub worker_count: usize,  // 工作协程数(≥1)
    pub queue_depth: usize,   // 任务队列深度(≥1)
}

impl AppConfig {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    /// - IMPORT_DB_PATH: 数据库路径
    /// - IMPORT_REPORT_DIR: 报告目录
    /// - IMPORT_WORKER_COUNT: 工作协程数
    /// - IMPORT_QUEUE_DEPTH: 队列深度
    pub fn from_env() -> Self {
        let data_dir = default_data_dir();

        let db_path = env::var("IMPORT_DB_PATH")
            .unwrap_or_else(|_| data_dir.join("makes.db").display().to_string());

        let report_dir = env::var("IMPORT_REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("reports"));

        let worker_count = parse_count(env::var("IMPORT_WORKER_COUNT").ok(), DEFAULT_WORKER_COUNT);
        let queue_depth = parse_count(env::var("IMPORT_QUEUE_DEPTH").ok(), DEFAULT_QUEUE_DEPTH);

        Self {
            db_path,
            report_dir,
            worker_count,
            queue_depth,
        }
    }
}

/// 默认数据目录(平台数据目录下的应用子目录)
pub fn default_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("make-bulk-import")
    } else {
        PathBuf::from(".")
    }
}

/// 解析数量型配置; 非法或非正值回落到缺省值
fn parse_count(value: Option<String>, default: usize) -> usize {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}
