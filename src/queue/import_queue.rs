// ==========================================
// 品牌数据批量导入服务 - 导入任务队列
// ==========================================
// 职责: 接收 {file_path} 任务,由工作协程池逐个调用导入流水线
// 红线: 流水线对队列一无所知; 跨文件并发由本层负责
// ==========================================

use crate::domain::{ImportJob, ImportJobResult, ImportOutcome};
use crate::importer::error::PipelineResult;
use crate::importer::make_importer_trait::MakeImporter;
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// 队列层错误类型
#[derive(Error, Debug)]
pub enum QueueError {
    #[error("导入队列已关闭")]
    QueueClosed,

    #[error("工作协程提前退出,结果通道已断开")]
    WorkerGone,
}

// 入队任务: 载荷 + 结果回传通道
struct QueuedTask {
    job: ImportJob,
    result_tx: oneshot::Sender<ImportJobResult>,
}

// ==========================================
// JobHandle - 单个任务的等待句柄
// ==========================================
pub struct JobHandle {
    result_rx: oneshot::Receiver<ImportJobResult>,
}

impl JobHandle {
    /// 等待任务完成并取回结果信封
    pub async fn finished(self) -> Result<ImportJobResult, QueueError> {
        self.result_rx.await.map_err(|_| QueueError::WorkerGone)
    }
}

// ==========================================
// ImportQueue - 队列与工作协程池
// ==========================================
pub struct ImportQueue {
    task_tx: mpsc::Sender<QueuedTask>,
    workers: Vec<JoinHandle<()>>,
}

impl ImportQueue {
    /// 启动队列与工作协程池
    ///
    /// # 参数
    /// - importer: 导入流水线(所有工作协程共享)
    /// - worker_count: 工作协程数(至少 1)
    /// - queue_depth: 队列深度(满时 submit 等待)
    pub fn start(importer: Arc<dyn MakeImporter>, worker_count: usize, queue_depth: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (task_tx, task_rx) = mpsc::channel::<QueuedTask>(queue_depth.max(1));
        let task_rx = Arc::new(Mutex::new(task_rx));

        let workers = (0..worker_count)
            .map(|worker_id| {
                let importer = Arc::clone(&importer);
                let task_rx = Arc::clone(&task_rx);
                tokio::spawn(worker_loop(worker_id, importer, task_rx))
            })
            .collect();

        info!(worker_count, "导入队列已启动");

        Self { task_tx, workers }
    }

    /// 提交导入任务,返回可等待的任务句柄
    pub async fn submit(&self, job: ImportJob) -> Result<JobHandle, QueueError> {
        let (result_tx, result_rx) = oneshot::channel();

        self.task_tx
            .send(QueuedTask { job, result_tx })
            .await
            .map_err(|_| QueueError::QueueClosed)?;

        Ok(JobHandle { result_rx })
    }

    /// 关闭队列: 不再接收新任务,排空在途任务后回收工作协程
    pub async fn shutdown(self) {
        drop(self.task_tx);
        join_all(self.workers).await;
        info!("导入队列已关闭");
    }
}

/// 工作协程主循环: 共享接收端,逐个取任务并执行流水线
async fn worker_loop(
    worker_id: usize,
    importer: Arc<dyn MakeImporter>,
    task_rx: Arc<Mutex<mpsc::Receiver<QueuedTask>>>,
) {
    loop {
        let task = {
            let mut rx = task_rx.lock().await;
            rx.recv().await
        };

        let Some(task) = task else { break };

        debug!(
            worker_id,
            file_path = %task.job.file_path.display(),
            "工作协程取得任务"
        );

        let result = importer.process_file(task.job).await;
        let job_result = render_job_result(result);

        // 提交方可能已放弃等待; 发送失败不影响任务处理本身
        if task.result_tx.send(job_result).is_err() {
            warn!(worker_id, "任务结果无人接收");
        }
    }

    debug!(worker_id, "工作协程退出");
}

/// 将流水线结果渲染为任务结果信封
fn render_job_result(result: PipelineResult<ImportOutcome>) -> ImportJobResult {
    match result {
        Ok(ImportOutcome::Success { records_inserted }) => ImportJobResult {
            status: true,
            message: format!("文件处理成功,已入库 {} 条记录", records_inserted),
            report_path: None,
        },
        Ok(ImportOutcome::Failure {
            error_report_path,
            error_count,
        }) => ImportJobResult {
            status: false,
            message: format!("文件存在校验错误,已生成错误报告,共 {} 条", error_count),
            report_path: Some(error_report_path),
        },
        Err(error) => ImportJobResult {
            status: false,
            message: format!("文件处理失败: {}", error),
            report_path: None,
        },
    }
}
