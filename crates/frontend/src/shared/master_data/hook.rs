use std::rc::Rc;

use contracts::domain::common::{MasterFields, RecordId};
use contracts::shared::master_data::{LoadState, MasterResource, SubmitState};
use contracts::shared::record_values::RecordValues;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::MasterDataContext;
use super::http_client::HttpTableClient;
use super::toast_notifier::ToastNotifier;

type HttpResource<F> = MasterResource<F, HttpTableClient, ToastNotifier>;

/// Numbers overlapping list requests so only the newest may publish rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Ticket of a request that starts now
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Reactive handle on one master-data table
#[derive(Clone, Copy)]
pub struct MasterResourceHandle {
    pub state: RwSignal<LoadState<RecordValues>>,
    pub create_state: RwSignal<SubmitState>,
    pub update_state: RwSignal<SubmitState>,
    pub delete_state: RwSignal<SubmitState>,
    pub on_create: Callback<RecordValues>,
    pub on_update: Callback<(String, RecordValues)>,
    pub on_delete: Callback<String>,
    pub refresh: Callback<()>,
}

/// Build the resource of kind `F` from context and start loading its list.
///
/// Requires a `MasterDataContext` and a thaw `ToasterProvider` above the caller.
pub fn use_master_resource<F: MasterFields>() -> MasterResourceHandle {
    let ctx = expect_context::<MasterDataContext>();
    let resource: Rc<HttpResource<F>> = Rc::new(MasterResource::new(
        HttpTableClient::new(ctx.api_base.clone()),
        ctx.cache.clone(),
        ToastNotifier::from_context(),
    ));
    let resource = StoredValue::new_local(resource);

    let state = RwSignal::new(LoadState::Loading);
    let create_state = RwSignal::new(SubmitState::Idle);
    let update_state = RwSignal::new(SubmitState::Idle);
    let delete_state = RwSignal::new(SubmitState::Idle);

    let refresh_seq = StoredValue::new(RequestSeq::default());

    let refresh = Callback::new(move |_: ()| {
        let Some(resource) = resource.try_get_value() else {
            return;
        };
        let mut seq = refresh_seq.get_value();
        let ticket = seq.next();
        refresh_seq.set_value(seq);
        // keep showing the current rows while re-fetching
        if matches!(state.get_untracked(), LoadState::Error(_)) {
            state.set(LoadState::Loading);
        }
        spawn_local(async move {
            let result = resource.list_values().await;
            // a newer refresh started meanwhile: its rows win
            if refresh_seq.try_get_value().is_some_and(|s| s.is_latest(ticket)) {
                state.try_set(LoadState::from_result(result));
            }
        });
    });

    let on_create = Callback::new(move |values: RecordValues| {
        let Some(resource) = resource.try_get_value() else {
            return;
        };
        create_state.set(SubmitState::Submitting);
        spawn_local(async move {
            let result = resource.create(values).await;
            create_state.try_set(SubmitState::from_result(&result));
            if result.is_ok() {
                refresh.try_run(());
            }
        });
    });

    let on_update = Callback::new(move |(id, values): (String, RecordValues)| {
        let Some(resource) = resource.try_get_value() else {
            return;
        };
        update_state.set(SubmitState::Submitting);
        spawn_local(async move {
            let result = resource.update(&RecordId::new(id), values).await;
            update_state.try_set(SubmitState::from_result(&result));
            if result.is_ok() {
                refresh.try_run(());
            }
        });
    });

    let on_delete = Callback::new(move |id: String| {
        let Some(resource) = resource.try_get_value() else {
            return;
        };
        delete_state.set(SubmitState::Submitting);
        spawn_local(async move {
            let result = resource.delete(&RecordId::new(id)).await;
            delete_state.try_set(SubmitState::from_result(&result));
            if result.is_ok() {
                refresh.try_run(());
            }
        });
    });

    refresh.run(());

    MasterResourceHandle {
        state,
        create_state,
        update_state,
        delete_state,
        on_create,
        on_update,
        on_delete,
        refresh,
    }
}
