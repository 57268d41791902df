use contracts::domain::common::MasterFields;
use leptos::prelude::*;

use crate::shared::components::master_table::MasterTable;
use crate::shared::master_data::use_master_resource;

/// Admin table of kind `F`, wired to its resource
pub fn master_section<F: MasterFields>() -> AnyView {
    let handle = use_master_resource::<F>();

    view! {
        <MasterTable
            title=F::list_name()
            description=F::description().map(str::to_string)
            state=handle.state
            columns=F::columns()
            on_create=handle.on_create
            on_update=handle.on_update
            on_delete=handle.on_delete
            create_state=handle.create_state
            update_state=handle.update_state
            delete_state=handle.delete_state
        />
    }
    .into_any()
}
