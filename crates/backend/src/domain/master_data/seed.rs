use contracts::domain::master_kind::MasterKind;
use contracts::shared::record_values::RecordValues;
use serde_json::{json, Value};

fn rows(items: Vec<Value>) -> Vec<RecordValues> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| {
            let mut map = v.as_object()?.clone();
            map.entry("sort_order").or_insert_with(|| json!(i + 1));
            Some(map)
        })
        .collect()
}

fn named(items: &[(&str, &str, Option<&str>)]) -> Vec<RecordValues> {
    rows(items
        .iter()
        .map(|(code, name, description)| json!({"code": code, "name": name, "description": description}))
        .collect())
}

/// Demo rows inserted by `POST /api/master/:table/testdata`
pub fn test_rows(kind: MasterKind) -> Vec<RecordValues> {
    match kind {
        MasterKind::Country => rows(vec![
            json!({"code": "in", "name": "India", "region": "Asia"}),
            json!({"code": "id", "name": "Indonesia", "region": "Asia"}),
            json!({"code": "fr", "name": "France", "region": "Europe"}),
            json!({"code": "de", "name": "Germany", "region": "Europe"}),
            json!({"code": "us", "name": "United States", "region": "North America"}),
            json!({"code": "br", "name": "Brazil", "region": "South America"}),
        ]),
        MasterKind::Region => named(&[
            ("apac", "Asia Pacific", None),
            ("emea", "Europe, Middle East and Africa", None),
            ("na", "North America", None),
            ("latam", "Latin America", None),
        ]),
        MasterKind::CompanySize => rows(vec![
            json!({"code": "micro", "label": "1-10 employees", "min_employees": 1, "max_employees": 10}),
            json!({"code": "small", "label": "11-50 employees", "min_employees": 11, "max_employees": 50}),
            json!({"code": "medium", "label": "51-250 employees", "min_employees": 51, "max_employees": 250}),
            json!({"code": "large", "label": "251-1000 employees", "min_employees": 251, "max_employees": 1000}),
            json!({"code": "enterprise", "label": "1000+ employees", "min_employees": 1001, "max_employees": null}),
        ]),
        MasterKind::RevenueRange => rows(vec![
            json!({"code": "lt1m", "label": "Under $1M", "min_revenue": 0, "max_revenue": 1_000_000}),
            json!({"code": "1m-10m", "label": "$1M - $10M", "min_revenue": 1_000_000, "max_revenue": 10_000_000}),
            json!({"code": "10m-100m", "label": "$10M - $100M", "min_revenue": 10_000_000, "max_revenue": 100_000_000}),
            json!({"code": "gt100m", "label": "Over $100M", "min_revenue": 100_000_000, "max_revenue": null}),
        ]),
        MasterKind::CompanyAge => rows(vec![
            json!({"code": "startup", "label": "Less than 2 years", "min_years": 0, "max_years": 2}),
            json!({"code": "growing", "label": "2-5 years", "min_years": 2, "max_years": 5}),
            json!({"code": "established", "label": "5-15 years", "min_years": 5, "max_years": 15}),
            json!({"code": "mature", "label": "15+ years", "min_years": 15, "max_years": null}),
        ]),
        MasterKind::TechCategory => rows(vec![
            json!({"code": "cloud", "name": "Cloud infrastructure", "icon": "cloud"}),
            json!({"code": "security", "name": "Security", "icon": "shield"}),
            json!({"code": "data", "name": "Data and analytics", "icon": "chart"}),
            json!({"code": "collab", "name": "Collaboration", "icon": "people"}),
        ]),
        MasterKind::BusinessEvent => named(&[
            ("funding", "Funding round", Some("Company raised a new round")),
            ("expansion", "Office expansion", None),
            ("leadership", "Leadership change", None),
            ("merger", "Merger or acquisition", None),
        ]),
        MasterKind::IntentTopic => named(&[
            ("migration", "Cloud migration", None),
            ("zero-trust", "Zero trust", None),
            ("ai", "AI adoption", None),
        ]),
        MasterKind::TrainingCategory => rows(vec![
            json!({"code": "sales", "name": "Sales enablement", "icon": "briefcase"}),
            json!({"code": "tech", "name": "Technical certification", "icon": "certificate"}),
            json!({"code": "onboarding", "name": "Partner onboarding", "icon": "rocket"}),
        ]),
        MasterKind::EventType => named(&[
            ("webinar", "Webinar", None),
            ("workshop", "Workshop", None),
            ("conference", "Conference", None),
        ]),
        MasterKind::SchemeCategory => named(&[
            ("rebate", "Rebate", Some("Volume-based rebates")),
            ("mdf", "Market development funds", None),
            ("spiff", "SPIFF", Some("Sales performance incentives")),
        ]),
    }
}
