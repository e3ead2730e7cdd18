// ==========================================
// 品牌数据批量导入服务 - 错误报告生成器
// ==========================================
// 职责: 将行级错误渲染为 Excel 报告(Row | Column | Error)
// 输出: 报告目录下的全新文件,不与上传文件混放
// ==========================================

use crate::domain::ImportError;
use crate::importer::error::{PipelineError, PipelineResult};
use crate::importer::make_importer_trait::ReportGenerator;
use async_trait::async_trait;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

// ==========================================
// XlsxReportGenerator
// ==========================================
pub struct XlsxReportGenerator {
    report_dir: PathBuf, // 报告输出目录(按需创建)
}

impl XlsxReportGenerator {
    pub fn new(report_dir: impl Into<PathBuf>) -> Self {
        Self {
            report_dir: report_dir.into(),
        }
    }

    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }
}

#[async_trait]
impl ReportGenerator for XlsxReportGenerator {
    /// 按收集顺序渲染错误报告
    ///
    /// 工作表名固定为 Errors; 每次调用产生独立的新文件。
    async fn generate(&self, errors: &[ImportError]) -> PipelineResult<PathBuf> {
        tokio::fs::create_dir_all(&self.report_dir)
            .await
            .map_err(|e| PipelineError::ReportGenerationFailed(e.to_string()))?;

        let report_path = self
            .report_dir
            .join(format!("error_report_{}.xlsx", Uuid::new_v4()));

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Errors")?;

        // 表头: Row | Column | Error
        worksheet.write_string(0, 0, "Row")?;
        worksheet.write_string(0, 1, "Column")?;
        worksheet.write_string(0, 2, "Error")?;
        worksheet.set_column_width(0, 10)?;
        worksheet.set_column_width(1, 20)?;
        worksheet.set_column_width(2, 30)?;

        for (idx, error) in errors.iter().enumerate() {
            let row = idx as u32 + 1;
            worksheet.write_number(row, 0, error.row)?;
            worksheet.write_string(row, 1, &error.column)?;
            worksheet.write_string(row, 2, &error.error)?;
        }

        workbook.save(&report_path)?;

        info!(
            report_path = %report_path.display(),
            error_count = errors.len(),
            "错误报告已生成"
        );

        Ok(report_path)
    }
}
