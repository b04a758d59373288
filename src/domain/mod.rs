// ==========================================
// 采购明细汇总报表 - 领域层
// ==========================================
// 职责: 物料身份、数量记录、输出单元格类型
// ==========================================

pub mod material;
pub mod types;

pub use material::{is_main_supplier, Material, MaterialInfo, MaterialInfoBuilder};
pub use types::{CellStyle, CellValue, OutputCell, OutputRow};
