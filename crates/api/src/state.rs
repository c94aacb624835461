use infra::db::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    introspection_enabled: bool,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self {
            db,
            introspection_enabled: false,
        }
    }

    pub fn with_introspection(mut self, enabled: bool) -> Self {
        self.introspection_enabled = enabled;
        self
    }

    pub fn introspection_enabled(&self) -> bool {
        self.introspection_enabled
    }
}
