use crate::domain::master_data::ui::MasterDataPage;
use crate::shared::master_data::MasterDataContext;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    // One query cache for every master-data table of the app
    MasterDataContext::provide();

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <MasterDataPage />
            </ToasterProvider>
        </ConfigProvider>
    }
}
