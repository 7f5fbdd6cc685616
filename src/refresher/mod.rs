mod live_view;
mod refresher;
mod source;

pub use live_view::LiveSnapshot;
pub use refresher::Refresher;
pub use source::{HttpSource, SnapshotSource, StoreSource};
