// ==========================================
// 采购明细汇总报表 - 物料领域模型
// ==========================================
// 职责: 物料身份 (供应商/名称/单位/单价) 与数量记录
// 红线: 值对象不可变,合并产生新实例
// ==========================================

use crate::importer::error::{ReportError, ReportResult};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

lazy_static! {
    // 次要供应商编码: 可选数字 + 连字符 + 可选数字 (整串匹配)
    static ref SECONDARY_SUPPLIER: Regex = Regex::new(r"^[0-9]*-[0-9]*$").unwrap();
}

/// 判断供应商文本是否为主供应商
///
/// 不匹配次要供应商编码的一律视为主供应商（包括空串）。
pub fn is_main_supplier(supplier: &str) -> bool {
    !SECONDARY_SUPPLIER.is_match(supplier)
}

// ==========================================
// Material - 物料身份
// ==========================================
// 用途: 聚合分组键
// 相等: 四个字段全部相等（单价按位比较）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub supplier: String, // 供应商
    pub name: String,     // 物料名称
    pub units: String,    // 规范化后的单位（已剥离包装倍数）
    pub price: f64,       // 单件单价（已除以包装倍数）
}

impl Material {
    pub fn new(
        supplier: impl Into<String>,
        name: impl Into<String>,
        units: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            supplier: supplier.into(),
            name: name.into(),
            units: units.into(),
            price,
        }
    }

    pub fn is_main_supplier(&self) -> bool {
        is_main_supplier(&self.supplier)
    }

    /// 报表排序
    ///
    /// 排序键:
    /// 1) 主供应商在前
    /// 2) 同层级内按名称升序
    ///
    /// 该顺序比相等关系更粗,因此不实现 `Ord`。
    pub fn report_order(&self, other: &Material) -> Ordering {
        other
            .is_main_supplier()
            .cmp(&self.is_main_supplier())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.supplier == other.supplier
            && self.name == other.name
            && self.units == other.units
            && self.price.to_bits() == other.price.to_bits()
    }
}

impl Eq for Material {}

impl Hash for Material {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.supplier.hash(state);
        self.name.hash(state);
        self.units.hash(state);
        self.price.to_bits().hash(state);
    }
}

// ==========================================
// MaterialInfo - 物料数量记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    pub material: Material,
    pub amount: f64, // 已按包装倍数换算,计件单位已取整
}

impl MaterialInfo {
    pub fn new(material: Material, amount: f64) -> Self {
        Self { material, amount }
    }

    /// 金额 = 数量 × 单价
    pub fn cost(&self) -> f64 {
        self.amount * self.material.price
    }

    /// 合并同一物料的两条记录（数量相加）
    ///
    /// # 错误
    /// - ReportError::IncompatibleMerge: 物料身份不同（程序缺陷,不应发生）
    pub fn merge(self, other: MaterialInfo) -> ReportResult<MaterialInfo> {
        if self.material != other.material {
            return Err(ReportError::IncompatibleMerge {
                left: format!("{:?}", self.material),
                right: format!("{:?}", other.material),
            });
        }
        Ok(MaterialInfo {
            amount: self.amount + other.amount,
            material: self.material,
        })
    }
}

// ==========================================
// MaterialInfoBuilder - 逐字段组装
// ==========================================
// 行解析按列顺序逐个填充字段,全部就绪后 build()
#[derive(Debug, Default, Clone)]
pub struct MaterialInfoBuilder {
    supplier: Option<String>,
    name: Option<String>,
    units: Option<String>,
    amount: Option<f64>,
    price: Option<f64>,
}

impl MaterialInfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// # 错误
    /// - ReportError::MissingField: 存在未设置的字段（程序缺陷）
    pub fn build(self) -> ReportResult<MaterialInfo> {
        let supplier = self.supplier.ok_or(ReportError::MissingField("supplier"))?;
        let name = self.name.ok_or(ReportError::MissingField("name"))?;
        let units = self.units.ok_or(ReportError::MissingField("units"))?;
        let price = self.price.ok_or(ReportError::MissingField("price"))?;
        let amount = self.amount.ok_or(ReportError::MissingField("amount"))?;

        Ok(MaterialInfo::new(
            Material::new(supplier, name, units, price),
            amount,
        ))
    }
}
