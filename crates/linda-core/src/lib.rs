//! linda core: classify analytics beacons from finished network requests and
//! derive a filterable view of them.

pub mod config;
pub mod logging;

pub mod classifier;
pub mod demo;
pub mod event;
pub mod filter;
pub mod har;
pub mod present;
pub mod request;
pub mod session;
pub mod store;
pub mod stream;
pub mod tracker;

pub use classifier::{ClassifyError, Classifier};
pub use event::{EventRow, Param, TrackerEvent};
pub use filter::{filter_events, FilterError, TextFilter, ViewToggles};
pub use present::{CapturePresenter, JsonPresenter, Presenter, TextPresenter};
pub use request::FinishedRequest;
pub use session::{Control, FilterSettings, Ingest, Session};
pub use store::EventStore;
pub use stream::StreamRecord;
pub use tracker::TrackerType;
