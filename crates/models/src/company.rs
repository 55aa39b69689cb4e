use std::{fmt, str::FromStr};

use sea_orm::{entity::prelude::*, sea_query::{LikeExpr, SimpleExpr}, Iterable};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub ceo: Option<String>,
    pub foundation_date: Option<Date>,
    pub revenue: Option<i64>,
    pub sector: Sector,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Economic sector of a company, persisted by its symbolic name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sector {
    #[sea_orm(string_value = "AGRICULTURE")]
    Agriculture,
    #[sea_orm(string_value = "CONSTRUCTION")]
    Construction,
    #[sea_orm(string_value = "ENERGY")]
    Energy,
    #[sea_orm(string_value = "FINANCE")]
    Finance,
    #[sea_orm(string_value = "HEALTHCARE")]
    Healthcare,
    #[sea_orm(string_value = "MANUFACTURING")]
    Manufacturing,
    #[sea_orm(string_value = "REAL_ESTATE")]
    RealEstate,
    #[sea_orm(string_value = "RETAIL")]
    Retail,
    #[sea_orm(string_value = "TECHNOLOGY")]
    Technology,
    #[sea_orm(string_value = "TELECOMMUNICATIONS")]
    Telecommunications,
    #[sea_orm(string_value = "TRANSPORTATION")]
    Transportation,
    #[sea_orm(string_value = "DEFAULT_SECTOR")]
    DefaultSector,
}

impl Sector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Agriculture => "AGRICULTURE",
            Sector::Construction => "CONSTRUCTION",
            Sector::Energy => "ENERGY",
            Sector::Finance => "FINANCE",
            Sector::Healthcare => "HEALTHCARE",
            Sector::Manufacturing => "MANUFACTURING",
            Sector::RealEstate => "REAL_ESTATE",
            Sector::Retail => "RETAIL",
            Sector::Technology => "TECHNOLOGY",
            Sector::Telecommunications => "TELECOMMUNICATIONS",
            Sector::Transportation => "TRANSPORTATION",
            Sector::DefaultSector => "DEFAULT_SECTOR",
        }
    }

    /// All sectors in declaration order.
    pub fn all() -> Vec<Sector> {
        Sector::iter().collect()
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = errors::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sector::iter()
            .find(|sector| sector.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| errors::ModelError::Validation(format!("unknown sector: {wanted}")))
    }
}

/// Escape LIKE wildcards so a keyword matches literally.
pub fn escape_like(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Condition matching companies whose name contains `keyword`.
pub fn name_contains(keyword: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(keyword));
    Column::Name.like(LikeExpr::new(pattern).escape('\\'))
}
