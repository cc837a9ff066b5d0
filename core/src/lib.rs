pub mod labels;
pub mod model;
pub mod store;
pub mod view;

pub use labels::{Labels, Locale};
pub use model::task::Task;
pub use store::{StoreEvent, SubscriptionId, TaskStore};
pub use view::{DashboardView, TaskRow};
