pub mod context;
pub mod hook;
pub mod http_client;
pub mod toast_notifier;

pub use context::MasterDataContext;
pub use hook::{use_master_resource, MasterResourceHandle};
