// ==========================================
// 品牌数据批量导入服务 - 导入接口定义
// ==========================================
// 职责: 定义导入流水线各组件接口(不包含实现)
// ==========================================

use crate::domain::{ImportError, ImportJob, ImportOutcome, RawRow};
use crate::importer::error::PipelineResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

// ==========================================
// MakeImporter Trait
// ==========================================
// 用途: 导入流水线主接口
// 实现者: MakeImporterImpl
#[async_trait]
pub trait MakeImporter: Send + Sync {
    /// 处理一个导入任务: 识别格式 → 解析 → 逐行校验 → 入库 xor 报告 → 清理
    ///
    /// # 参数
    /// - job: 任务载荷(已上传文件的路径)
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 终态结果(全量入库 xor 错误报告)
    /// - Err(PipelineError): 文件级或基础设施级失败
    ///
    /// 无论走到哪个分支,上传源文件都会在返回前被清理。
    async fn process_file(&self, job: ImportJob) -> PipelineResult<ImportOutcome>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: CsvParser, ExcelParser
#[async_trait]
pub trait FileParser: Send + Sync {
    /// 解析文件为带行位的原始行序列
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 按文件顺序的数据行(不含表头)
    /// - Err(PipelineError): 文件级读取/解码错误(行级问题不在此报错)
    async fn parse_rows(&self, file_path: &Path) -> PipelineResult<Vec<RawRow>>;
}

// ==========================================
// ReportGenerator Trait
// ==========================================
// 用途: 错误报告生成接口
// 实现者: XlsxReportGenerator
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// 将收集到的行级错误渲染为表格报告文件
    ///
    /// # 参数
    /// - errors: 按文件顺序收集的错误(调用方保证非空)
    ///
    /// # 返回
    /// - Ok(PathBuf): 报告文件位置(独立于上传目录的新路径)
    /// - Err(PipelineError): 写出失败(对本次运行是致命的)
    async fn generate(&self, errors: &[ImportError]) -> PipelineResult<PathBuf>;
}
