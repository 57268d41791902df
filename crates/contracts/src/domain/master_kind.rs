//! Registry of all master-data kinds
//!
//! Runtime lookup by table name for code that does not know the concrete
//! field type (HTTP routing, storage whitelisting, admin navigation).

use serde::{Deserialize, Serialize};

use crate::domain::a001_country::aggregate::CountryFields;
use crate::domain::a002_region::aggregate::RegionFields;
use crate::domain::a003_company_size::aggregate::CompanySizeFields;
use crate::domain::a004_revenue_range::aggregate::RevenueRangeFields;
use crate::domain::a005_company_age::aggregate::CompanyAgeFields;
use crate::domain::a006_tech_category::aggregate::TechCategoryFields;
use crate::domain::a007_business_event::aggregate::BusinessEventFields;
use crate::domain::a008_intent_topic::aggregate::IntentTopicFields;
use crate::domain::a009_training_category::aggregate::TrainingCategoryFields;
use crate::domain::a010_event_type::aggregate::EventTypeFields;
use crate::domain::a011_scheme_category::aggregate::SchemeCategoryFields;
use crate::domain::common::MasterFields;
use crate::shared::column_schema::ColumnDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasterKind {
    Country,
    Region,
    CompanySize,
    RevenueRange,
    CompanyAge,
    TechCategory,
    BusinessEvent,
    IntentTopic,
    TrainingCategory,
    EventType,
    SchemeCategory,
}

/// Serializable description of one kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterKindInfo {
    pub index: String,
    pub table: String,
    pub element_name: String,
    pub list_name: String,
    pub description: Option<String>,
    pub columns: Vec<ColumnDef>,
}

fn info_of<F: MasterFields>() -> MasterKindInfo {
    MasterKindInfo {
        index: F::kind_index().to_string(),
        table: F::table_name().to_string(),
        element_name: F::element_name().to_string(),
        list_name: F::list_name().to_string(),
        description: F::description().map(str::to_string),
        columns: F::columns(),
    }
}

impl MasterKind {
    pub const ALL: [MasterKind; 11] = [
        MasterKind::Country,
        MasterKind::Region,
        MasterKind::CompanySize,
        MasterKind::RevenueRange,
        MasterKind::CompanyAge,
        MasterKind::TechCategory,
        MasterKind::BusinessEvent,
        MasterKind::IntentTopic,
        MasterKind::TrainingCategory,
        MasterKind::EventType,
        MasterKind::SchemeCategory,
    ];

    pub fn info(&self) -> MasterKindInfo {
        match self {
            Self::Country => info_of::<CountryFields>(),
            Self::Region => info_of::<RegionFields>(),
            Self::CompanySize => info_of::<CompanySizeFields>(),
            Self::RevenueRange => info_of::<RevenueRangeFields>(),
            Self::CompanyAge => info_of::<CompanyAgeFields>(),
            Self::TechCategory => info_of::<TechCategoryFields>(),
            Self::BusinessEvent => info_of::<BusinessEventFields>(),
            Self::IntentTopic => info_of::<IntentTopicFields>(),
            Self::TrainingCategory => info_of::<TrainingCategoryFields>(),
            Self::EventType => info_of::<EventTypeFields>(),
            Self::SchemeCategory => info_of::<SchemeCategoryFields>(),
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Country => CountryFields::table_name(),
            Self::Region => RegionFields::table_name(),
            Self::CompanySize => CompanySizeFields::table_name(),
            Self::RevenueRange => RevenueRangeFields::table_name(),
            Self::CompanyAge => CompanyAgeFields::table_name(),
            Self::TechCategory => TechCategoryFields::table_name(),
            Self::BusinessEvent => BusinessEventFields::table_name(),
            Self::IntentTopic => IntentTopicFields::table_name(),
            Self::TrainingCategory => TrainingCategoryFields::table_name(),
            Self::EventType => EventTypeFields::table_name(),
            Self::SchemeCategory => SchemeCategoryFields::table_name(),
        }
    }

    pub fn from_table(table: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.table_name() == table)
    }

    pub fn columns(&self) -> Vec<ColumnDef> {
        self.info().columns
    }
}
