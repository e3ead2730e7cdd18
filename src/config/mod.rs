// ==========================================
// 品牌数据批量导入服务 - 配置层
// ==========================================
// 职责: 运行配置管理
// 来源: 环境变量 + 平台数据目录缺省值
// ==========================================

pub mod app_config;

// 重导出核心配置类型
pub use app_config::{default_data_dir, AppConfig, DEFAULT_QUEUE_DEPTH, DEFAULT_WORKER_COUNT};
