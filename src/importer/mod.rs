// ==========================================
// 品牌数据批量导入服务 - 导入层
// ==========================================
// 职责: 文件解析、行校验、错误报告与流水线编排
// 支持: Excel (.xlsx) / CSV (.csv)
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod make_importer_impl;
pub mod make_importer_trait;
pub mod report_generator;
pub mod row_validator;

// 重导出核心类型
pub use error::{PipelineError, PipelineResult};
pub use file_parser::{CsvParser, ExcelParser, FileFormat};
pub use make_importer_impl::MakeImporterImpl;
pub use report_generator::XlsxReportGenerator;
pub use row_validator::validate_row;

// 重导出 Trait 接口
pub use make_importer_trait::{FileParser, MakeImporter, ReportGenerator};
