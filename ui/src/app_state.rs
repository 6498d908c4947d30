use rewards_types::Reward;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    /// The catalog is fixed for the lifetime of the session.
    pub catalog: Vec<Reward>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(catalog: Vec<Reward>) -> Self {
        Self(Arc::new(AppStateData { catalog }))
    }
}
