// ==========================================
// 问题文件留存
// ==========================================
// 运行失败时将输入文件复制到问题文件目录,供事后排查
// 文件名: <文件名> (<YYYY-MM-DD HH-MM-SS>).<扩展名>
// ==========================================

use crate::importer::error::ReportResult;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 生成问题文件名（时间戳不含冒号,兼容 Windows 文件名）
pub fn problem_file_name(input: &Path, at: NaiveDateTime) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let stamp = at.format("%Y-%m-%d %H-%M-%S");
    match input.extension() {
        Some(ext) => format!("{} ({}).{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{} ({})", stem, stamp),
    }
}

/// 复制输入文件到问题文件目录
///
/// # 返回
/// - Ok(PathBuf): 留存文件路径
/// - Err: 目录创建或复制失败
pub fn preserve_problem_file(input: &Path, dir: &Path) -> ReportResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let target = dir.join(problem_file_name(input, Local::now().naive_local()));
    std::fs::copy(input, &target)?;
    info!(source = %input.display(), target = %target.display(), "问题文件已留存");
    Ok(target)
}

/// 留存问题文件,失败只记日志
pub fn try_preserve_problem_file(input: &Path, dir: &Path) -> Option<PathBuf> {
    match preserve_problem_file(input, dir) {
        Ok(path) => Some(path),
        Err(e) => {
            error!(error = %e, "问题文件留存失败");
            None
        }
    }
}
