use std::sync::Arc;

use tracing::{debug, error};

use crate::core::error::{AppError, Result};
use crate::features::camp_directory::dtos::DirectoryListDto;
use crate::features::camp_directory::models::{camps_from_district_documents, GovtCamp};
use crate::features::camp_directory::navigation::{Navigator, RecordingNavigator, Route};
use crate::features::camp_directory::view_model::{
    dispatch_navigation, DirectoryEvent, DirectoryViewModel, Effect, LoadState,
};
use crate::features::camp_directory::FilterState;
use crate::modules::store::{collections, DocumentStore, StoreError};

const FETCH_FAILED: &str = "Failed to fetch government camps. Please try again later.";

/// Runs the directory view model against the document store
pub struct DirectoryService {
    store: Arc<dyn DocumentStore>,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn fetch(&self) -> std::result::Result<Vec<GovtCamp>, StoreError> {
        let docs = self.store.query(collections::GOVT_DATA, &[]).await?;
        let camps = camps_from_district_documents(&docs);
        debug!(
            "Loaded {} govt camps from {} district documents",
            camps.len(),
            docs.len()
        );
        Ok(camps)
    }

    /// Carry out fetch effects until the model settles
    async fn settle(
        &self,
        mut model: DirectoryViewModel,
        mut effect: Option<Effect>,
    ) -> DirectoryViewModel {
        while let Some(Effect::Fetch) = effect {
            let event = match self.fetch().await {
                Ok(camps) => DirectoryEvent::FetchSucceeded(camps),
                Err(e) => {
                    error!("Failed to fetch government camps: {:?}", e);
                    DirectoryEvent::FetchFailed(FETCH_FAILED.to_string())
                }
            };
            (model, effect) = model.update(event);
        }
        model
    }

    /// Fresh model, loaded, with `filter` applied through the usual events
    pub async fn load(&self, filter: FilterState) -> DirectoryViewModel {
        let (model, effect) = DirectoryViewModel::new();

        let model = [
            DirectoryEvent::SetSearch(filter.search_text),
            DirectoryEvent::SetSession(filter.session_time),
            DirectoryEvent::SetMinPopulation(filter.min_population),
            DirectoryEvent::SetMaxDistance(filter.max_distance),
        ]
        .into_iter()
        .fold(model, |model, event| model.update(event).0);

        self.settle(model, Some(effect)).await
    }

    pub async fn list(&self, filter: FilterState) -> Result<DirectoryListDto> {
        let model = self.load(filter).await;
        ready_or_error(&model)?;

        Ok(DirectoryListDto {
            total_loaded: model.all_camps().len(),
            camps: model.visible_camps().into_iter().cloned().collect(),
        })
    }

    /// Resolve one camp the way the directory screen opens it
    pub async fn open(&self, camp_id: &str) -> Result<GovtCamp> {
        let model = self.load(FilterState::default()).await;
        ready_or_error(&model)?;

        let (model, effect) = model.update(DirectoryEvent::OpenCamp(camp_id.to_string()));
        let mut navigator = RecordingNavigator::default();
        if let Some(effect) = effect {
            dispatch_navigation(effect, &mut navigator);
        }

        match navigator.back() {
            Some(Route::GovtCampDetails { camp_id }) => model
                .all_camps()
                .iter()
                .find(|c| c.id == camp_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Govt camp '{}' not found", camp_id))),
            None => Err(AppError::NotFound(format!(
                "Govt camp '{}' not found",
                camp_id
            ))),
        }
    }
}

fn ready_or_error(model: &DirectoryViewModel) -> Result<()> {
    match &model.state {
        LoadState::Ready => Ok(()),
        LoadState::Error(message) => Err(AppError::ExternalServiceError(message.clone())),
        LoadState::Loading => Err(AppError::Internal(
            "Directory did not finish loading".to_string(),
        )),
    }
}
