//! Encoded search parameters.

use serde::Serialize;

use crate::domain::format_iso_date;
use crate::form::SearchFormState;

use super::error::QueryError;

/// Flat string parameters describing a search.
///
/// Field order is the wire order. `ret` is left out entirely when there is
/// no return date; an empty `ret` is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedSearchParams {
    pub mode: String,
    pub from: String,
    pub to: String,
    /// Departure date, `YYYY-MM-DD`
    pub dep: String,
    /// Return date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ret: Option<String>,
    /// Decimal passenger count
    pub passengers: String,
}

/// Flatten a form state into search parameters.
///
/// Total: missing values become empty strings (or, for the return date, an
/// absent key).
pub fn encode(state: &SearchFormState) -> EncodedSearchParams {
    EncodedSearchParams {
        mode: state.mode.as_str().to_string(),
        from: state.from.clone(),
        to: state.to.clone(),
        dep: format_iso_date(state.departure_date),
        ret: state.return_date.map(|d| format_iso_date(Some(d))),
        passengers: state
            .passengers
            .map(|n| n.to_string())
            .unwrap_or_default(),
    }
}

impl EncodedSearchParams {
    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "mode" => Some(self.mode.as_str()),
            "from" => Some(self.from.as_str()),
            "to" => Some(self.to.as_str()),
            "dep" => Some(self.dep.as_str()),
            "ret" => self.ret.as_deref(),
            "passengers" => Some(self.passengers.as_str()),
            _ => None,
        }
    }

    /// Present parameters as `(key, value)` pairs in wire order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("mode", self.mode.as_str()),
            ("from", self.from.as_str()),
            ("to", self.to.as_str()),
            ("dep", self.dep.as_str()),
        ];
        if let Some(ret) = &self.ret {
            pairs.push(("ret", ret.as_str()));
        }
        pairs.push(("passengers", self.passengers.as_str()));
        pairs
    }

    /// Form-urlencode the parameters, e.g. `mode=bus&from=HCM&...`.
    pub fn to_query_string(&self) -> Result<String, QueryError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}
