pub mod common;
pub mod master_kind;

pub mod a001_country;
pub mod a002_region;
pub mod a003_company_size;
pub mod a004_revenue_range;
pub mod a005_company_age;
pub mod a006_tech_category;
pub mod a007_business_event;
pub mod a008_intent_topic;
pub mod a009_training_category;
pub mod a010_event_type;
pub mod a011_scheme_category;
