pub mod activity;
pub mod responses;

pub use activity::{Activity, ActivityCatalog, ActivityView};
pub use responses::{DetailResponse, MessageResponse};
