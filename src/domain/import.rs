// ==========================================
// 品牌数据批量导入服务 - 导入领域模型
// ==========================================
// 职责: 导入流水线的值对象与终态结果
// 生命周期: RawRow/ImportRecord 仅存活于单次流水线运行
// ==========================================

use serde::Serialize;
use std::path::PathBuf;

// ==========================================
// RawRow - 解析器产出的原始行
// ==========================================
// 用途: 解析层产出,校验层立即消费
// 行位口径: CSV 数据行从 1 起算; Excel 采用工作表原生行号(首个数据行为 2)
#[derive(Debug, Clone)]
pub struct RawRow {
    pub position: u32,       // 数据行位置(1 起算)
    pub fields: Vec<String>, // 原始字段值(按文件内顺序)
}

impl RawRow {
    /// 按下标取字段值(越界视为字段缺失)
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|s| s.as_str())
    }
}

// ==========================================
// ImportRecord - 已通过校验的可入库单元
// ==========================================
// 红线: 字段私有,仅行校验器可构造 —— 不存在非法状态的实例
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
    name: String,
    description: String,
}

impl ImportRecord {
    pub(crate) fn new(name: String, description: String) -> Self {
        Self { name, description }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

// ==========================================
// ImportError - 单条行级校验错误
// ==========================================
// 同一行最多产生一条错误(首个失败字段胜出)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportError {
    pub row: u32,       // 行位(≥1)
    pub column: String, // 失败字段名
    pub error: String,  // 错误描述
}

// ==========================================
// ImportOutcome - 流水线终态结果
// ==========================================
// 有且仅有一个变体成立: 全量入库 xor 错误报告
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImportOutcome {
    /// 全部行有效,已事务化入库
    Success { records_inserted: usize },
    /// 存在无效行,已生成错误报告
    Failure {
        error_report_path: PathBuf,
        error_count: usize,
    },
}

// ==========================================
// ImportJob - 入站任务载荷
// ==========================================
// 核心不关心文件如何到达该路径
#[derive(Debug, Clone)]
pub struct ImportJob {
    pub file_path: PathBuf, // 已上传文件的可读路径
}

impl ImportJob {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

// ==========================================
// ImportJobResult - 任务结果信封
// ==========================================
// 用途: 工作协程回传给提交方的最终信息
// 三种形态: 成功消息 / 错误报告文件 / 失败消息
#[derive(Debug, Clone, Serialize)]
pub struct ImportJobResult {
    pub status: bool,                  // true=全量入库成功
    pub message: String,               // 人类可读的结果描述
    pub report_path: Option<PathBuf>,  // 错误报告文件位置(仅校验失败时)
}
