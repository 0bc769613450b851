//! A single inspection session: classifier, event store, filter state and
//! the presenter that receives the view.
//!
//! Every mutation (new request, reset, filter change) recomputes the full
//! filtered view and hands it to the presenter before returning.

use serde::Deserialize;
use std::collections::BTreeSet;

use crate::classifier::{ClassifyError, Classifier};
use crate::event::EventRow;
use crate::filter::{filter_events, FilterError, TextFilter};
use crate::present::Presenter;
use crate::request::FinishedRequest;
use crate::store::EventStore;
use crate::tracker::TrackerType;

/// Outcome of feeding one finished request into the session.
#[derive(Debug)]
pub enum Ingest {
    /// Classified and appended to the store.
    Recorded(TrackerType),
    /// Not a tracker beacon (or gated out).
    Ignored,
    /// Looked like a beacon but could not be parsed; already logged.
    Failed(ClassifyError),
}

impl Ingest {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Ingest::Recorded(_))
    }
}

/// Live control from the front end: the Clear button, the filter box, the
/// type checkboxes and "only this type".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "control", rename_all = "lowercase")]
pub enum Control {
    Reset,
    Filter {
        #[serde(default)]
        text: String,
    },
    /// `included` is the checkbox state before the click.
    Toggle {
        #[serde(rename = "type")]
        tracker: TrackerType,
        included: bool,
    },
    Only {
        #[serde(rename = "type")]
        tracker: TrackerType,
    },
}

/// Initial filter state, applied in one step by [`Session::configure`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSettings {
    pub excluded: Vec<TrackerType>,
    /// Show only this tracker; overrides `excluded`.
    pub only: Option<TrackerType>,
    pub filter_text: String,
}

pub struct Session<P: Presenter> {
    classifier: Classifier,
    store: EventStore,
    filter_text: String,
    text_filter: Option<TextFilter>,
    excluded: BTreeSet<TrackerType>,
    presenter: P,
}

impl<P: Presenter> Session<P> {
    pub fn new(presenter: P) -> Self {
        tracing::info!("linda session started");
        Self {
            classifier: Classifier::new(),
            store: EventStore::new(),
            filter_text: String::new(),
            text_filter: None,
            excluded: BTreeSet::new(),
            presenter,
        }
    }

    /// Ingestion entry point, called once per finished request.
    ///
    /// Classification failures are logged and swallowed here; they never
    /// affect later requests.
    pub fn on_request(&mut self, finished: &FinishedRequest) -> Ingest {
        match self.classifier.classify(finished) {
            Ok(Some(event)) => {
                let tracker = event.tracker();
                tracing::debug!(%tracker, summary = event.summary(), "recorded tracker event");
                self.store.append(event);
                self.refresh();
                Ingest::Recorded(tracker)
            }
            Ok(None) => Ingest::Ignored,
            Err(e) => {
                let cause = std::error::Error::source(&e)
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                tracing::warn!(url = %finished.request.url, %cause, "unexpected classification error: {}", e);
                Ingest::Failed(e)
            }
        }
    }

    /// Replace the whole filter state and refresh once.
    ///
    /// An invalid filter expression leaves the session untouched.
    pub fn configure(&mut self, settings: &FilterSettings) -> Result<(), FilterError> {
        let text_filter = TextFilter::new(&settings.filter_text)?;
        self.filter_text = settings.filter_text.clone();
        self.text_filter = text_filter;
        self.excluded.clear();
        match settings.only {
            Some(keep) => self
                .excluded
                .extend(TrackerType::ALL.into_iter().filter(|t| *t != keep)),
            None => self.excluded.extend(settings.excluded.iter().copied()),
        }
        self.refresh();
        Ok(())
    }

    /// Route a front-end control to the matching mutation. Filter text is trimmed here.
    pub fn apply_control(&mut self, control: &Control) -> Result<(), FilterError> {
        match control {
            Control::Reset => self.reset(),
            Control::Filter { text } => self.set_filter_text(text.trim())?,
            Control::Toggle { tracker, included } => self.toggle_type_filter(*tracker, *included),
            Control::Only { tracker } => self.isolate_type(&TrackerType::ALL, *tracker),
        }
        Ok(())
    }

    /// Replace the filter text. An invalid expression leaves the current filter in place.
    pub fn set_filter_text(&mut self, text: &str) -> Result<(), FilterError> {
        let text_filter = TextFilter::new(text)?;
        self.filter_text = text.to_string();
        self.text_filter = text_filter;
        self.refresh();
        Ok(())
    }

    /// Checkbox semantics: unchecking an included type excludes it, checking re-includes it.
    pub fn toggle_type_filter(&mut self, tracker: TrackerType, currently_included: bool) {
        if currently_included {
            self.excluded.insert(tracker);
        } else {
            self.excluded.remove(&tracker);
        }
        self.refresh();
    }

    /// Show only `keep`: exclude every other tracker in `all`.
    pub fn isolate_type(&mut self, all: &[TrackerType], keep: TrackerType) {
        self.excluded.clear();
        self.excluded
            .extend(all.iter().copied().filter(|t| *t != keep));
        self.refresh();
    }

    /// Drop every captured event. Filter state is kept.
    pub fn reset(&mut self) {
        self.store.reset();
        self.refresh();
    }

    /// Current filtered view, without presenting it.
    pub fn view(&self) -> Vec<EventRow> {
        filter_events(
            self.store.all(),
            &self.excluded,
            self.text_filter.as_ref(),
            self.presenter.toggles(),
        )
    }

    /// Recompute the view and hand it to the presenter.
    pub fn refresh(&mut self) {
        let rows = self.view();
        self.presenter.present(&rows);
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn excluded(&self) -> &BTreeSet<TrackerType> {
        &self.excluded
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
