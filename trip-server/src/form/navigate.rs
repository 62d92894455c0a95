//! The navigation effect triggered by a successful submit.

use crate::query::{EncodedSearchParams, QueryError};

/// Errors raised while navigating to the results view.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The parameters could not be turned into a query string
    #[error("failed to encode search parameters: {0}")]
    Encode(#[from] QueryError),

    /// The results route is not an absolute path
    #[error("invalid results route: {0:?}")]
    InvalidRoute(String),
}

/// Carries encoded search parameters to the results view.
///
/// Fire-and-forget: the form does not wait for any response beyond
/// success or failure of the hand-off itself.
pub trait Navigator {
    fn navigate(&mut self, params: &EncodedSearchParams) -> Result<(), NavigationError>;
}

/// Navigator that records a redirect target `route?query`.
///
/// # Examples
///
/// ```
/// use trip_server::form::{Navigator, RedirectNavigator, SearchFormState};
/// use trip_server::query::encode;
///
/// let mut nav = RedirectNavigator::new("/search");
/// let state = SearchFormState { from: "HCM".into(), ..SearchFormState::default() };
/// nav.navigate(&encode(&state)).unwrap();
/// assert_eq!(nav.target(), Some("/search?mode=bus&from=HCM&to=&dep=&passengers=1"));
/// ```
#[derive(Debug, Clone)]
pub struct RedirectNavigator {
    route: String,
    target: Option<String>,
}

impl RedirectNavigator {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            target: None,
        }
    }

    /// The recorded target, once navigation has happened.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn into_target(self) -> Option<String> {
        self.target
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, params: &EncodedSearchParams) -> Result<(), NavigationError> {
        if !self.route.starts_with('/') {
            return Err(NavigationError::InvalidRoute(self.route.clone()));
        }
        let query = params.to_query_string()?;
        self.target = Some(format!("{}?{}", self.route, query));
        Ok(())
    }
}
