// ==========================================
// 品牌数据批量导入服务 - 导入流水线错误类型
// ==========================================
// 工具: thiserror 派生宏
// 行级校验问题不在此列: 它们是数据(ImportError 值),只影响分支走向
// ==========================================

use crate::importer::file_parser::FileFormat;
use thiserror::Error;

/// 导入流水线错误类型
///
/// 文件级与基础设施级问题中止整次运行; CleanupFailed 仅记录日志,
/// 不改变本次运行的主结果。
#[derive(Error, Debug)]
pub enum PipelineError {
    // ===== 文件级错误 =====
    #[error("文件格式不支持: {0}(仅支持 .xlsx/.csv)")]
    UnsupportedFormat(String),

    #[error("{format} 解析失败: {message}")]
    ParseFailure { format: FileFormat, message: String },

    #[error("Excel 文件无工作表")]
    WorksheetNotFound,

    // ===== 基础设施错误 =====
    #[error("错误报告生成失败: {0}")]
    ReportGenerationFailed(String),

    #[error("数据入库失败: {0}")]
    PersistenceFailed(String),

    // ===== 非致命错误 =====
    #[error("上传文件清理失败: {0}")]
    CleanupFailed(String),
}

// 仓储层错误统一归入 PersistenceFailed
impl From<crate::repository::RepositoryError> for PipelineError {
    fn from(err: crate::repository::RepositoryError) -> Self {
        PipelineError::PersistenceFailed(err.to_string())
    }
}

// 报告写出错误统一归入 ReportGenerationFailed
impl From<rust_xlsxwriter::XlsxError> for PipelineError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        PipelineError::ReportGenerationFailed(err.to_string())
    }
}

/// Result 类型别名
pub type PipelineResult<T> = Result<T, PipelineError>;
