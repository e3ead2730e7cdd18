// ==========================================
// 品牌数据批量导入服务 - 品牌领域模型
// ==========================================
// 用途: 导入层写入,读取仅用于校验与查询
// 对齐: makes 表
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Make - 品牌主数据
// ==========================================
// 生成字段(id/时间戳)由持久化层负责,导入核心只构造插入前形态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Make {
    // ===== 主键 =====
    pub id: i64, // 自增主键

    // ===== 基础信息 =====
    pub name: String,        // 品牌名称(非空)
    pub description: String, // 品牌描述(非空)

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,         // 记录创建时间
    pub updated_at: Option<DateTime<Utc>>, // 记录更新时间
    pub deleted_at: Option<DateTime<Utc>>, // 软删除标记(NULL=未删除)
}
