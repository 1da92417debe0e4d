use serde::{Deserialize, Serialize};

use crate::state::sort_state::{SortDirection, SortKey};

/// Filter values owned by the caller and passed through to the data source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
}

impl PatientFilters {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            patient_name: Some(name.into()),
        }
    }

    /// The name filter, or `None` when it is absent or blank.
    pub fn name_query(&self) -> Option<&str> {
        self.patient_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParams {
    pub filters: PatientFilters,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

pub fn derive_query_params(
    filters: &PatientFilters,
    sort_key: SortKey,
    sort_direction: SortDirection,
) -> QueryParams {
    QueryParams {
        filters: filters.clone(),
        sort_key,
        sort_direction,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryRequest {
    pub id: RequestId,
    pub params: QueryParams,
}

/// Remembers the last issued query so unchanged parameters are not re-sent,
/// and tags every request so late responses to older ones can be dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryTracker {
    last_issued: Option<QueryParams>,
    generation: u64,
    stale: bool,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_issued(&self) -> Option<&QueryParams> {
        self.last_issued.as_ref()
    }

    /// Issues a request for `params` unless they match the last issued ones
    /// and nothing has invalidated them since.
    pub fn issue(&mut self, params: QueryParams) -> Option<QueryRequest> {
        if !self.stale && self.last_issued.as_ref() == Some(&params) {
            return None;
        }

        self.generation += 1;
        self.stale = false;
        self.last_issued = Some(params.clone());
        Some(QueryRequest {
            id: RequestId(self.generation),
            params,
        })
    }

    /// Forces the next `issue` to go out even with identical parameters.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.generation != 0 && id.0 == self.generation
    }
}
