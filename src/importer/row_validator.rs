// ==========================================
// 品牌数据批量导入服务 - 行校验器
// ==========================================
// 职责: 单行字段校验,纯函数,无副作用
// 规则: 短路合取 —— name 先于 description,首个失败字段胜出
// ==========================================

use crate::domain::{ImportError, ImportRecord};

/// 校验单行数据
///
/// # 参数
/// - name: 原始 name 字段(None=字段缺失)
/// - description: 原始 description 字段(None=字段缺失)
/// - position: 数据行位置(用于错误定位)
///
/// # 返回
/// - Ok(ImportRecord): 两个字段均非空,返回去除首尾空白后的记录
/// - Err(ImportError): 首个失败字段对应的错误
///
/// 两个解析器以完全相同的方式调用本函数; 同一输入恒产生同一输出。
pub fn validate_row(
    name: Option<&str>,
    description: Option<&str>,
    position: u32,
) -> Result<ImportRecord, ImportError> {
    let name = name.map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(ImportError {
            row: position,
            column: "name".to_string(),
            error: "Name is required".to_string(),
        });
    }

    let description = description.map(str::trim).unwrap_or("");
    if description.is_empty() {
        return Err(ImportError {
            row: position,
            column: "description".to_string(),
            error: "Description is required".to_string(),
        });
    }

    Ok(ImportRecord::new(name.to_string(), description.to_string()))
}
