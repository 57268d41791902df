use std::sync::Arc;

use contracts::shared::master_data::QueryCache;
use leptos::prelude::*;

use crate::shared::api_utils::api_base;

/// Shared by every master-data resource of the app
#[derive(Clone)]
pub struct MasterDataContext {
    pub cache: Arc<QueryCache>,
    pub api_base: String,
}

impl MasterDataContext {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            cache: QueryCache::shared(),
            api_base: api_base.into(),
        }
    }

    /// Context pointing at the backend of the current window location
    pub fn provide() -> Self {
        let ctx = Self::new(api_base());
        provide_context(ctx.clone());
        ctx
    }
}
