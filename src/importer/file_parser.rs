// ==========================================
// 品牌数据批量导入服务 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx) / CSV (.csv)
// ==========================================

use crate::domain::RawRow;
use crate::importer::error::{PipelineError, PipelineResult};
use crate::importer::make_importer_trait::FileParser;
use async_trait::async_trait;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::fmt;
use std::path::Path;

// ==========================================
// FileFormat - 按扩展名识别的文件格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
}

impl FileFormat {
    /// 根据扩展名识别文件格式(大小写不敏感)
    ///
    /// # 返回
    /// - Some(FileFormat): 可识别的格式
    /// - None: 扩展名缺失或不支持
    pub fn from_path(path: &Path) -> Option<FileFormat> {
        let ext = path.extension().and_then(|e| e.to_str())?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(FileFormat::Csv),
            "xlsx" => Some(FileFormat::Xlsx),
            _ => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "CSV"),
            FileFormat::Xlsx => write!(f, "Excel"),
        }
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
// 固定逗号分隔,不处理引号包裹与转义 —— 已知约束
// 行位: 首个数据行为 1,空行同样占据行位(由校验器报错)
pub struct CsvParser;

#[async_trait]
impl FileParser for CsvParser {
    async fn parse_rows(&self, file_path: &Path) -> PipelineResult<Vec<RawRow>> {
        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            PipelineError::ParseFailure {
                format: FileFormat::Csv,
                message: e.to_string(),
            }
        })?;

        // 首行为表头,丢弃; lines() 不会在文件末尾换行后产生幻影行
        let rows = content
            .lines()
            .skip(1)
            .enumerate()
            .map(|(idx, line)| RawRow {
                position: idx as u32 + 1,
                fields: line.split(',').map(|field| field.to_string()).collect(),
            })
            .collect();

        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// 仅读取第一个工作表; 行位采用工作表原生行号(首个数据行为 2)
pub struct ExcelParser;

#[async_trait]
impl FileParser for ExcelParser {
    async fn parse_rows(&self, file_path: &Path) -> PipelineResult<Vec<RawRow>> {
        let mut workbook: Xlsx<_> =
            open_workbook(file_path).map_err(|e: calamine::XlsxError| {
                PipelineError::ParseFailure {
                    format: FileFormat::Xlsx,
                    message: e.to_string(),
                }
            })?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or(PipelineError::WorksheetNotFound)?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| PipelineError::ParseFailure {
                format: FileFormat::Xlsx,
                message: e.to_string(),
            })?;

        // 空工作表(无任何单元格)视为零数据行
        let start_row = range.start().map(|(row, _)| row).unwrap_or(0);

        let mut rows = Vec::new();
        for (idx, data_row) in range.rows().enumerate() {
            let row_number = start_row + idx as u32 + 1;

            // 按原生行号跳过表头行
            if row_number == 1 {
                continue;
            }

            // 仅取前两个单元格(name/description),其余忽略
            let fields = data_row.iter().take(2).map(cell_to_string).collect();

            rows.push(RawRow {
                position: row_number,
                fields,
            });
        }

        Ok(rows)
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
