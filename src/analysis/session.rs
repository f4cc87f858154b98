use url::Url;

use crate::analysis::analyzer::ProfileAnalyzer;
use crate::error::Result;
use crate::models::DashboardViewModel;

/// Query parameter that carries the handle in a dashboard location.
pub const USER_PARAM: &str = "user";

/// Idle → Loading → {Dashboard | Error}; any new invocation goes back to
/// Loading. There is no partially rendered state.
#[derive(Debug, Clone, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading {
        handle: String,
        invocation: u64,
    },
    Dashboard {
        handle: String,
        view: Box<DashboardViewModel>,
    },
    Error {
        handle: String,
        message: String,
    },
}

impl AnalysisState {
    pub fn begin(&mut self, handle: &str, invocation: u64) {
        tracing::debug!("{} -> loading ({})", self.label(), handle);
        *self = AnalysisState::Loading {
            handle: handle.to_string(),
            invocation,
        };
    }

    /// Applies a finished analysis. Results for anything but the current
    /// invocation are discarded and `false` is returned.
    pub fn settle(&mut self, invocation: u64, result: Result<DashboardViewModel>) -> bool {
        let handle = match self {
            AnalysisState::Loading {
                handle,
                invocation: current,
            } if *current == invocation => std::mem::take(handle),
            _ => {
                tracing::debug!("Discarding stale result for invocation {}", invocation);
                return false;
            }
        };

        *self = match result {
            Ok(view) => AnalysisState::Dashboard {
                handle,
                view: Box::new(view),
            },
            Err(e) => AnalysisState::Error {
                handle,
                message: e.to_string(),
            },
        };
        tracing::debug!("loading -> {}", self.label());
        true
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Loading { .. } => "loading",
            AnalysisState::Dashboard { .. } => "dashboard",
            AnalysisState::Error { .. } => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading { .. })
    }

    pub fn handle(&self) -> Option<&str> {
        match self {
            AnalysisState::Idle => None,
            AnalysisState::Loading { handle, .. }
            | AnalysisState::Dashboard { handle, .. }
            | AnalysisState::Error { handle, .. } => Some(handle),
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardViewModel> {
        match self {
            AnalysisState::Dashboard { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Host-side owner of the analysis state and of the shareable location.
pub struct DashboardSession {
    analyzer: ProfileAnalyzer,
    state: AnalysisState,
    location: Option<Url>,
    invocations: u64,
}

impl DashboardSession {
    pub fn new(analyzer: ProfileAnalyzer) -> Self {
        Self {
            analyzer,
            state: AnalysisState::Idle,
            location: None,
            invocations: 0,
        }
    }

    pub fn with_location(analyzer: ProfileAnalyzer, location: Url) -> Self {
        Self {
            location: Some(location),
            ..Self::new(analyzer)
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    /// Handle supplied through the location's `user` parameter, if any.
    pub fn initial_handle(&self) -> Option<String> {
        self.location.as_ref().and_then(handle_from_location)
    }

    /// Runs the analysis requested by the location, if it names a handle.
    pub async fn load(&mut self) -> &AnalysisState {
        if let Some(handle) = self.initial_handle() {
            tracing::info!("Auto-analyzing {} from location", handle);
            self.submit(&handle).await;
        }
        &self.state
    }

    /// Trims the input and analyzes it; blank input leaves everything as is.
    pub async fn submit(&mut self, input: &str) -> &AnalysisState {
        let handle = input.trim();
        if handle.is_empty() {
            tracing::debug!("Ignoring empty handle");
            return &self.state;
        }

        self.invocations += 1;
        let invocation = self.invocations;
        self.state.begin(handle, invocation);

        let result = self.analyzer.analyze(handle).await;
        let succeeded = result.is_ok();

        if self.state.settle(invocation, result) && succeeded {
            self.reflect_handle(handle);
        }

        match &self.state {
            AnalysisState::Error { message, .. } => tracing::warn!("{}", message),
            state => tracing::info!("Analysis of {} finished: {}", handle, state.label()),
        }

        &self.state
    }

    fn reflect_handle(&mut self, handle: &str) {
        if let Some(location) = self.location.as_mut() {
            location
                .query_pairs_mut()
                .clear()
                .append_pair(USER_PARAM, handle);
            tracing::debug!("Location updated to {}", location);
        }
    }
}

pub fn handle_from_location(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == USER_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
