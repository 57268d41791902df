use contracts::domain::a001_country::aggregate::CountryFields;
use contracts::domain::a002_region::aggregate::RegionFields;
use contracts::domain::a003_company_size::aggregate::CompanySizeFields;
use contracts::domain::a004_revenue_range::aggregate::RevenueRangeFields;
use contracts::domain::a005_company_age::aggregate::CompanyAgeFields;
use contracts::domain::a006_tech_category::aggregate::TechCategoryFields;
use contracts::domain::a007_business_event::aggregate::BusinessEventFields;
use contracts::domain::a008_intent_topic::aggregate::IntentTopicFields;
use contracts::domain::a009_training_category::aggregate::TrainingCategoryFields;
use contracts::domain::a010_event_type::aggregate::EventTypeFields;
use contracts::domain::a011_scheme_category::aggregate::SchemeCategoryFields;
use contracts::domain::master_kind::MasterKind;
use leptos::prelude::*;
use thaw::{Tab, TabList};

use super::section::master_section;

fn section_of(kind: MasterKind) -> AnyView {
    match kind {
        MasterKind::Country => master_section::<CountryFields>(),
        MasterKind::Region => master_section::<RegionFields>(),
        MasterKind::CompanySize => master_section::<CompanySizeFields>(),
        MasterKind::RevenueRange => master_section::<RevenueRangeFields>(),
        MasterKind::CompanyAge => master_section::<CompanyAgeFields>(),
        MasterKind::TechCategory => master_section::<TechCategoryFields>(),
        MasterKind::BusinessEvent => master_section::<BusinessEventFields>(),
        MasterKind::IntentTopic => master_section::<IntentTopicFields>(),
        MasterKind::TrainingCategory => master_section::<TrainingCategoryFields>(),
        MasterKind::EventType => master_section::<EventTypeFields>(),
        MasterKind::SchemeCategory => master_section::<SchemeCategoryFields>(),
    }
}

/// Admin page: one tab per master-data kind
#[component]
pub fn MasterDataPage() -> impl IntoView {
    let selected = RwSignal::new(MasterKind::Country.table_name().to_string());

    let active_section = move || {
        let table = selected.get();
        match MasterKind::from_table(&table) {
            Some(kind) => section_of(kind),
            None => view! { <p>{format!("Unknown table {}", table)}</p> }.into_any(),
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Master data"</h1>
                </div>
            </div>
            <TabList selected_value=selected>
                {MasterKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let info = kind.info();
                        view! { <Tab value=info.table>{info.list_name}</Tab> }
                    })
                    .collect_view()}
            </TabList>
            <div class="page__content">{active_section}</div>
        </div>
    }
}
