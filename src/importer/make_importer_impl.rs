// ==========================================
// 品牌数据批量导入服务 - 导入流水线实现
// ==========================================
// 流程: 识别格式 → 解析 → 逐行校验 → 分支(入库 xor 报告) → 清理
// 分支策略: 任一行校验失败即整体走报告路径,不做部分入库
// ==========================================

use crate::domain::{ImportJob, ImportOutcome};
use crate::importer::error::{PipelineError, PipelineResult};
use crate::importer::file_parser::FileFormat;
use crate::importer::make_importer_trait::{FileParser, MakeImporter, ReportGenerator};
use crate::importer::row_validator::validate_row;
use crate::repository::MakeImportRepository;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// MakeImporterImpl - 导入流水线
// ==========================================
pub struct MakeImporterImpl<R>
where
    R: MakeImportRepository,
{
    // 数据访问层
    import_repo: R,

    // 导入组件
    csv_parser: Box<dyn FileParser>,
    excel_parser: Box<dyn FileParser>,
    report_generator: Box<dyn ReportGenerator>,
}

impl<R> MakeImporterImpl<R>
where
    R: MakeImportRepository,
{
    /// 创建新的 MakeImporter 实例
    ///
    /// # 参数
    /// - import_repo: 品牌导入仓储
    /// - csv_parser: CSV 解析器
    /// - excel_parser: Excel 解析器
    /// - report_generator: 错误报告生成器
    pub fn new(
        import_repo: R,
        csv_parser: Box<dyn FileParser>,
        excel_parser: Box<dyn FileParser>,
        report_generator: Box<dyn ReportGenerator>,
    ) -> Self {
        Self {
            import_repo,
            csv_parser,
            excel_parser,
            report_generator,
        }
    }

    /// 流水线主体(不含清理)
    async fn run_pipeline(&self, file_path: &Path) -> PipelineResult<ImportOutcome> {
        // === 步骤 1: 识别文件格式 ===
        let format = FileFormat::from_path(file_path).ok_or_else(|| {
            let ext = file_path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string();
            PipelineError::UnsupportedFormat(ext)
        })?;
        debug!(format = %format, "步骤 1: 文件格式识别完成");

        // === 步骤 2: 解析文件 ===
        let parser: &dyn FileParser = match format {
            FileFormat::Csv => self.csv_parser.as_ref(),
            FileFormat::Xlsx => self.excel_parser.as_ref(),
        };
        let raw_rows = parser.parse_rows(file_path).await?;
        info!(total_rows = raw_rows.len(), "步骤 2: 文件解析完成");

        // === 步骤 3: 逐行校验(单行失败不中断后续行) ===
        let mut records = Vec::new();
        let mut errors = Vec::new();
        for row in &raw_rows {
            match validate_row(row.field(0), row.field(1), row.position) {
                Ok(record) => records.push(record),
                Err(err) => errors.push(err),
            }
        }
        info!(
            valid = records.len(),
            invalid = errors.len(),
            "步骤 3: 行校验完成"
        );

        // === 步骤 4: 分支 —— 全部有效才入库,任一错误走报告 ===
        if errors.is_empty() {
            let records_inserted = self.import_repo.insert_makes(records).await?;
            info!(records_inserted, "步骤 4: 批量入库完成");
            Ok(ImportOutcome::Success { records_inserted })
        } else {
            let error_count = errors.len();
            let error_report_path = self.report_generator.generate(&errors).await?;
            info!(
                error_count,
                report = %error_report_path.display(),
                "步骤 4: 错误报告生成完成"
            );
            Ok(ImportOutcome::Failure {
                error_report_path,
                error_count,
            })
        }
    }

    /// 清理上传源文件; 失败仅记录日志,不改变主结果
    async fn cleanup_file(&self, file_path: &Path) {
        match tokio::fs::remove_file(file_path).await {
            Ok(()) => debug!(file_path = %file_path.display(), "上传文件已清理"),
            Err(e) => {
                let err = PipelineError::CleanupFailed(e.to_string());
                warn!(file_path = %file_path.display(), error = %err, "上传文件清理失败");
            }
        }
    }
}

#[async_trait]
impl<R> MakeImporter for MakeImporterImpl<R>
where
    R: MakeImportRepository + Send + Sync,
{
    #[instrument(skip(self, job))]
    async fn process_file(&self, job: ImportJob) -> PipelineResult<ImportOutcome> {
        info!(file_path = %job.file_path.display(), "开始处理导入任务");

        let outcome = self.run_pipeline(&job.file_path).await;

        // 清理在所有退出路径上执行:
        // 成功 / 校验失败 / 解析错误 / 入库错误 / 不支持的格式
        self.cleanup_file(&job.file_path).await;

        match &outcome {
            Ok(ImportOutcome::Success { records_inserted }) => {
                info!(records_inserted, "导入任务处理完成")
            }
            Ok(ImportOutcome::Failure { error_count, .. }) => {
                info!(error_count, "导入任务完成但存在校验错误")
            }
            Err(err) => error!(error = %err, "导入任务处理失败"),
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ImportError, ImportRecord, Make};
    use crate::repository::{RepositoryError, RepositoryResult};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Default, Clone)]
    struct MockRepo {
        insert_calls: Arc<AtomicUsize>,
        inserted: Arc<Mutex<Vec<ImportRecord>>>,
        fail_insert: bool,
    }

    #[async_trait]
    impl MakeImportRepository for MockRepo {
        async fn insert_makes(&self, records: Vec<ImportRecord>) -> RepositoryResult<usize> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_insert {
                return Err(RepositoryError::DatabaseTransactionError(
                    "模拟事务失败".to_string(),
                ));
            }
            let count = records.len();
            self.inserted.lock().unwrap().extend(records);
            Ok(count)
        }

        async fn count_makes(&self) -> RepositoryResult<usize> {
            Ok(self.inserted.lock().unwrap().len())
        }

        async fn list_makes(&self) -> RepositoryResult<Vec<Make>> {
            Ok(Vec::new())
        }
    }

    #[derive(Default, Clone)]
    struct MockReportGenerator {
        generate_calls: Arc<AtomicUsize>,
        captured: Arc<Mutex<Vec<ImportError>>>,
        fail_generate: bool,
    }

    #[async_trait]
    impl ReportGenerator for MockReportGenerator {
        async fn generate(&self, errors: &[ImportError]) -> PipelineResult<PathBuf> {
            self.generate_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_generate {
                return Err(PipelineError::ReportGenerationFailed(
                    "模拟写出失败".to_string(),
                ));
            }
            self.captured.lock().unwrap().extend_from_slice(errors);
            Ok(PathBuf::from("mock_report.xlsx"))
        }
    }

    fn build_importer(
        repo: MockRepo,
        report_generator: MockReportGenerator,
    ) -> MakeImporterImpl<MockRepo> {
        MakeImporterImpl::new(
            repo,
            Box::new(crate::importer::file_parser::CsvParser),
            Box::new(crate::importer::file_parser::ExcelParser),
            Box::new(report_generator),
        )
    }

    fn write_upload(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(file_name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_all_valid_persists_exactly_once() {
        let dir = TempDir::new().unwrap();
        let file_path = write_upload(&dir, "makes.csv", "name,description\nHonda,d1\nFord,d2\n");

        let repo = MockRepo::default();
        let report = MockReportGenerator::default();
        let importer = build_importer(repo.clone(), report.clone());

        let outcome = importer
            .process_file(ImportJob::new(&file_path))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            ImportOutcome::Success {
                records_inserted: 2
            }
        ));
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.generate_calls.load(Ordering::SeqCst), 0);

        let inserted = repo.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 2);
        assert_eq!(inserted[0].name(), "Honda");
        assert_eq!(inserted[1].name(), "Ford");

        // 成功路径同样清理上传文件
        assert!(!file_path.exists());
    }

    #[tokio::test]
    async fn test_any_invalid_never_persists() {
        let dir = TempDir::new().unwrap();
        let file_path = write_upload(
            &dir,
            "makes.csv",
            "name,description\nToyota,desc\n,missing name\n",
        );

        let repo = MockRepo::default();
        let report = MockReportGenerator::default();
        let importer = build_importer(repo.clone(), report.clone());

        let outcome = importer
            .process_file(ImportJob::new(&file_path))
            .await
            .unwrap();

        assert!(matches!(outcome, ImportOutcome::Failure { error_count: 1, .. }));
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 0);
        assert_eq!(report.generate_calls.load(Ordering::SeqCst), 1);

        let captured = report.captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].row, 2);
        assert_eq!(captured[0].column, "name");
        assert_eq!(captured[0].error, "Name is required");

        assert!(!file_path.exists());
    }

    #[tokio::test]
    async fn test_errors_reported_in_file_order() {
        let dir = TempDir::new().unwrap();
        let file_path = write_upload(
            &dir,
            "makes.csv",
            "name,description\n,a\nToyota,\n,\n",
        );

        let report = MockReportGenerator::default();
        let importer = build_importer(MockRepo::default(), report.clone());

        let outcome = importer
            .process_file(ImportJob::new(&file_path))
            .await
            .unwrap();

        assert!(matches!(outcome, ImportOutcome::Failure { error_count: 3, .. }));

        // 文件顺序: 行1 name 缺失, 行2 description 缺失, 行3 双缺失(仅报 name)
        let captured = report.captured.lock().unwrap();
        assert_eq!(captured[0].row, 1);
        assert_eq!(captured[0].column, "name");
        assert_eq!(captured[1].row, 2);
        assert_eq!(captured[1].column, "description");
        assert_eq!(captured[2].row, 3);
        assert_eq!(captured[2].column, "name");
    }

    #[tokio::test]
    async fn test_unsupported_format_still_cleans_up() {
        let dir = TempDir::new().unwrap();
        let file_path = write_upload(&dir, "makes.txt", "whatever");

        let repo = MockRepo::default();
        let report = MockReportGenerator::default();
        let importer = build_importer(repo.clone(), report.clone());

        let result = importer.process_file(ImportJob::new(&file_path)).await;

        assert!(matches!(result, Err(PipelineError::UnsupportedFormat(ext)) if ext == "txt"));
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 0);
        assert_eq!(report.generate_calls.load(Ordering::SeqCst), 0);
        assert!(!file_path.exists());
    }

    #[tokio::test]
    async fn test_persistence_failure_propagates_after_cleanup() {
        let dir = TempDir::new().unwrap();
        let file_path = write_upload(&dir, "makes.csv", "name,description\nHonda,d1\n");

        let repo = MockRepo {
            fail_insert: true,
            ..MockRepo::default()
        };
        let importer = build_importer(repo.clone(), MockReportGenerator::default());

        let result = importer.process_file(ImportJob::new(&file_path)).await;

        assert!(matches!(result, Err(PipelineError::PersistenceFailed(_))));
        assert!(!file_path.exists());
    }

    #[tokio::test]
    async fn test_report_failure_propagates_after_cleanup() {
        let dir = TempDir::new().unwrap();
        let file_path = write_upload(&dir, "makes.csv", "name,description\n,no name\n");

        let report = MockReportGenerator {
            fail_generate: true,
            ..MockReportGenerator::default()
        };
        let importer = build_importer(MockRepo::default(), report.clone());

        let result = importer.process_file(ImportJob::new(&file_path)).await;

        assert!(matches!(result, Err(PipelineError::ReportGenerationFailed(_))));
        assert!(!file_path.exists());
    }

    #[tokio::test]
    async fn test_empty_data_rows_commit_empty_insert() {
        let dir = TempDir::new().unwrap();
        let file_path = write_upload(&dir, "makes.csv", "name,description\n");

        let repo = MockRepo::default();
        let importer = build_importer(repo.clone(), MockReportGenerator::default());

        let outcome = importer
            .process_file(ImportJob::new(&file_path))
            .await
            .unwrap();

        // 零数据行仍视为成功,且入库调用发生一次(空序列)
        assert!(matches!(
            outcome,
            ImportOutcome::Success {
                records_inserted: 0
            }
        ));
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 1);
    }
}
