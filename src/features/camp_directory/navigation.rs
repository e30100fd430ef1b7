//! Navigation seam between the directory and whatever hosts it.

/// Screens the directory can send the user to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    GovtCampDetails { camp_id: String },
}

impl Route {
    /// Path-style name of the route
    pub fn path(&self) -> String {
        match self {
            Route::GovtCampDetails { camp_id } => format!("/govt-camps/{}", camp_id),
        }
    }
}

/// Host-provided navigation stack
pub trait Navigator {
    fn push(&mut self, route: Route);
    fn back(&mut self) -> Option<Route>;
}

/// Navigator that only records the stack, for hosts without screens
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub stack: Vec<Route>,
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, route: Route) {
        tracing::debug!("navigate -> {}", route.path());
        self.stack.push(route);
    }

    fn back(&mut self) -> Option<Route> {
        self.stack.pop()
    }
}
