// --- File: crates/lokal_console/src/panel.rs ---
//! The CRUD view-model behind each admin settings page.

use lokal_gateway::{ApiResult, Gateway};
use tracing::{debug, info, warn};

use crate::confirm::Confirm;
use crate::error::ConsoleError;
use crate::resource::AdminResource;

/// The single form a panel can have open.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSlot<D> {
    #[default]
    Closed,
    New(D),
    Existing { id: String, draft: D },
}

impl<D> EditSlot<D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditSlot::Closed)
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            EditSlot::Closed => None,
            EditSlot::New(draft) | EditSlot::Existing { draft, .. } => Some(draft),
        }
    }
}

/// Loaded records plus the edit slot for one [`AdminResource`].
pub struct CrudPanel<R: AdminResource> {
    resource: R,
    gateway: Gateway,
    records: Vec<R::Record>,
    slot: EditSlot<R::Draft>,
    loading: bool,
    saving: bool,
    last_error: Option<String>,
}

impl<R: AdminResource> CrudPanel<R> {
    pub fn new(resource: R, gateway: Gateway) -> Self {
        Self {
            resource,
            gateway,
            records: Vec::new(),
            slot: EditSlot::Closed,
            loading: false,
            saving: false,
            last_error: None,
        }
    }

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn slot(&self) -> &EditSlot<R::Draft> {
        &self.slot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn find(&self, id: &str) -> Option<&R::Record> {
        self.records.iter().find(|r| R::record_id(r) == id)
    }

    /// Fetches the collection. A failed fetch keeps the previous records.
    pub async fn load(&mut self) -> Result<(), ConsoleError> {
        self.loading = true;
        let result = self.resource.list(&self.gateway).await;
        self.loading = false;

        match result {
            ApiResult::Data(records) => {
                debug!("Loaded {} {} record(s)", records.len(), R::LABEL);
                self.records = records;
                self.last_error = None;
                Ok(())
            }
            ApiResult::Error(message) => Err(self.fail(message)),
        }
    }

    /// Opens an empty form seeded with the draft's defaults.
    pub fn open_new(&mut self) {
        self.slot = EditSlot::New(R::Draft::default());
        self.last_error = None;
    }

    /// Opens a form seeded from the loaded record with this id.
    pub fn open_edit(&mut self, id: &str) -> Result<(), ConsoleError> {
        let draft = self
            .find(id)
            .map(R::draft_from)
            .ok_or_else(|| ConsoleError::NotFound {
                label: R::LABEL,
                id: id.to_string(),
            })?;
        self.slot = EditSlot::Existing {
            id: id.to_string(),
            draft,
        };
        self.last_error = None;
        Ok(())
    }

    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match &mut self.slot {
            EditSlot::Closed => None,
            EditSlot::New(draft) | EditSlot::Existing { draft, .. } => Some(draft),
        }
    }

    pub fn cancel(&mut self) {
        self.slot = EditSlot::Closed;
    }

    /// Submits the open form, then closes it and reloads the collection.
    ///
    /// Validation and backend failures leave the form open with
    /// `last_error` set. Once the backend accepts the record the save
    /// counts as done, even if the reload fails.
    pub async fn save(&mut self) -> Result<R::Record, ConsoleError> {
        let (id, draft) = match &self.slot {
            EditSlot::Closed => return Err(ConsoleError::NothingToSave),
            EditSlot::New(draft) => (None, draft),
            EditSlot::Existing { id, draft } => (Some(id.clone()), draft),
        };

        let prepared = match R::prepare(draft) {
            Ok(prepared) => prepared,
            Err(err) => {
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        };

        self.saving = true;
        let result = match &id {
            Some(id) => self.resource.update(&self.gateway, id, &prepared).await,
            None => self.resource.create(&self.gateway, &prepared).await,
        };
        self.saving = false;

        let record = match result {
            ApiResult::Data(record) => record,
            ApiResult::Error(message) => return Err(self.fail(message)),
        };

        info!(
            "Saved {} '{}'",
            R::LABEL,
            id.as_deref().unwrap_or_else(|| R::record_id(&record))
        );
        self.slot = EditSlot::Closed;
        self.reload_after_change().await;
        Ok(record)
    }

    /// Deletes a record once `confirm` approves. Returns whether anything
    /// was deleted.
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> Result<bool, ConsoleError> {
        let prompt = format!("Delete {} '{}'?", R::LABEL, id);
        if !confirm.confirm(&prompt) {
            debug!("Delete of {} '{}' declined", R::LABEL, id);
            return Ok(false);
        }

        match self.resource.delete(&self.gateway, id).await {
            ApiResult::Data(_) => {
                info!("Deleted {} '{}'", R::LABEL, id);
                self.reload_after_change().await;
                Ok(true)
            }
            ApiResult::Error(message) => Err(self.fail(message)),
        }
    }

    // The mutation already happened; a failed reload only leaves the list
    // stale, with the message in `last_error`.
    async fn reload_after_change(&mut self) {
        if let Err(err) = self.load().await {
            warn!("{} list is stale after a successful change: {}", R::LABEL, err);
        }
    }

    fn fail(&mut self, message: String) -> ConsoleError {
        warn!("{} request failed: {}", R::LABEL, message);
        self.last_error = Some(message.clone());
        ConsoleError::Api(message)
    }
}
