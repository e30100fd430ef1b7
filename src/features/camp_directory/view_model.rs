//! Directory screen state as a pure reducer.
//!
//! [`DirectoryViewModel::update`] never performs I/O. It returns the next
//! state plus an optional [`Effect`] the caller must carry out, feeding the
//! outcome back in as another event.

use super::filter::{apply_filters, FilterState, SessionTime};
use super::models::GovtCamp;
use super::navigation::{Navigator, Route};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryEvent {
    FetchSucceeded(Vec<GovtCamp>),
    FetchFailed(String),
    Retry,
    /// The screen regained focus
    Refocus,
    SetSearch(String),
    SetSession(Option<SessionTime>),
    SetMinPopulation(Option<i64>),
    SetMaxDistance(Option<f64>),
    ClearFilters,
    ToggleExpanded(String),
    OpenCamp(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch,
    Navigate(Route),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryViewModel {
    pub state: LoadState,
    camps: Vec<GovtCamp>,
    pub filter: FilterState,
    pub expanded: Option<String>,
}

impl DirectoryViewModel {
    /// Initial state; the caller must run the returned fetch
    pub fn new() -> (Self, Effect) {
        let model = Self {
            state: LoadState::Loading,
            camps: Vec::new(),
            filter: FilterState::default(),
            expanded: None,
        };
        (model, Effect::Fetch)
    }

    pub fn update(mut self, event: DirectoryEvent) -> (Self, Option<Effect>) {
        use DirectoryEvent::*;

        match event {
            FetchSucceeded(camps) => {
                if self.state == LoadState::Loading {
                    self.camps = camps;
                    self.state = LoadState::Ready;
                    self.drop_stale_expansion();
                }
                (self, None)
            }
            FetchFailed(message) => {
                if self.state == LoadState::Loading {
                    self.camps.clear();
                    self.expanded = None;
                    self.state = LoadState::Error(message);
                }
                (self, None)
            }
            Retry => match self.state {
                LoadState::Ready | LoadState::Error(_) => self.reload(),
                LoadState::Loading => (self, None),
            },
            Refocus => match self.state {
                LoadState::Ready => self.reload(),
                _ => (self, None),
            },
            SetSearch(text) => {
                self.filter.search_text = text;
                (self, None)
            }
            SetSession(session) => {
                self.filter.session_time = session;
                (self, None)
            }
            SetMinPopulation(min) => {
                self.filter.min_population = min;
                (self, None)
            }
            SetMaxDistance(max) => {
                self.filter.max_distance = max;
                (self, None)
            }
            ClearFilters => {
                self.filter.clear();
                (self, None)
            }
            ToggleExpanded(id) => {
                self.expanded = match self.expanded.take() {
                    Some(current) if current == id => None,
                    _ => Some(id),
                };
                (self, None)
            }
            OpenCamp(id) => {
                let effect = (self.state == LoadState::Ready
                    && self.camps.iter().any(|c| c.id == id))
                .then(|| Effect::Navigate(Route::GovtCampDetails { camp_id: id }));
                (self, effect)
            }
        }
    }

    /// Every loaded camp, unfiltered
    pub fn all_camps(&self) -> &[GovtCamp] {
        &self.camps
    }

    /// Camps passing the current filters; empty unless the state is `Ready`
    pub fn visible_camps(&self) -> Vec<&GovtCamp> {
        match self.state {
            LoadState::Ready => apply_filters(&self.camps, &self.filter),
            _ => Vec::new(),
        }
    }

    fn reload(mut self) -> (Self, Option<Effect>) {
        self.state = LoadState::Loading;
        self.camps.clear();
        (self, Some(Effect::Fetch))
    }

    fn drop_stale_expansion(&mut self) {
        if let Some(id) = &self.expanded {
            if !self.camps.iter().any(|c| &c.id == id) {
                self.expanded = None;
            }
        }
    }
}

/// Hand navigation effects to the host; other effects are returned untouched
pub fn dispatch_navigation(effect: Effect, navigator: &mut dyn Navigator) -> Option<Effect> {
    match effect {
        Effect::Navigate(route) => {
            navigator.push(route);
            None
        }
        other => Some(other),
    }
}
