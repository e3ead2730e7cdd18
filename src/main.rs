// ==========================================
// 品牌数据批量导入服务 - 主入口
// ==========================================
// 形态: 工作进程 —— 启动队列与协程池,处理命令行给出的上传文件
// ==========================================

use anyhow::Context;
use make_bulk_import::config::AppConfig;
use make_bulk_import::domain::ImportJob;
use make_bulk_import::importer::{CsvParser, ExcelParser, MakeImporterImpl, XlsxReportGenerator};
use make_bulk_import::queue::ImportQueue;
use make_bulk_import::repository::MakeImportRepositoryImpl;
use make_bulk_import::logging;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", make_bulk_import::APP_NAME);
    tracing::info!("系统版本: {}", make_bulk_import::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config = AppConfig::from_env();
    tracing::info!(
        db_path = %config.db_path,
        report_dir = %config.report_dir.display(),
        worker_count = config.worker_count,
        "配置加载完成"
    );

    // 确保数据目录存在
    if let Some(parent) = Path::new(&config.db_path).parent() {
        std::fs::create_dir_all(parent).context("创建数据目录失败")?;
    }

    // 显式构造数据库连接并传入流水线
    let import_repo =
        MakeImportRepositoryImpl::new(&config.db_path).context("初始化数据库失败")?;

    let importer = Arc::new(MakeImporterImpl::new(
        import_repo,
        Box::new(CsvParser),
        Box::new(ExcelParser),
        Box::new(XlsxReportGenerator::new(config.report_dir.clone())),
    ));

    // 启动队列与工作协程池
    let queue = ImportQueue::start(importer, config.worker_count, config.queue_depth);

    // 将命令行给出的文件逐个入队
    let mut handles = Vec::new();
    for file_path in std::env::args().skip(1) {
        tracing::info!(file_path = %file_path, "任务已入队");
        let handle = queue.submit(ImportJob::new(file_path)).await?;
        handles.push(handle);
    }

    // 等待全部任务完成并输出结果
    for handle in handles {
        let result = handle.finished().await?;
        if result.status {
            tracing::info!("{}", result.message);
        } else {
            match &result.report_path {
                Some(path) => tracing::warn!(report = %path.display(), "{}", result.message),
                None => tracing::error!("{}", result.message),
            }
        }

        // 结果主体以 JSON 输出,供上游采集
        println!("{}", serde_json::to_string(&result)?);
    }

    queue.shutdown().await;

    Ok(())
}
