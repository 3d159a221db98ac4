//! Feeds API section.

use crate::catalog::{lookup, FEED_PROCESSING_STATUSES, FEED_TYPES, MARKETPLACE_IDS};
use crate::constants::*;
use crate::params::{date_param, indexed_params, require_non_empty, require_range};
use crate::{Client, Section};
use mwsign_core::time::DateTime;
use mwsign_core::{Body, Error, RequestParameters, Response, Result};

/// Feeds lives at the root path.
pub const SECTION: Section = Section {
    path: "/",
    version: "2009-01-01",
    seller_key: MERCHANT,
};

const FEED_SUBMISSION_ID: &str = "FeedSubmissionId";
const FEED_SUBMISSION_ID_LIST: &str = "FeedSubmissionIdList.Id";
const FEED_TYPE: &str = "FeedType";
const FEED_TYPE_LIST: &str = "FeedTypeList.Type";
const FEED_PROCESSING_STATUS_LIST: &str = "FeedProcessingStatusList.Status";
const SUBMITTED_FROM_DATE: &str = "SubmittedFromDate";
const SUBMITTED_TO_DATE: &str = "SubmittedToDate";

/// Criteria shared by listing and counting submissions.
///
/// Feed types and statuses may be given as aliases from
/// [`FEED_TYPES`] and [`FEED_PROCESSING_STATUSES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionQuery {
    /// Only submissions of these feed types.
    pub feed_types: Vec<String>,
    /// Only submissions in these processing statuses.
    pub statuses: Vec<String>,
    /// Submitted at or after.
    pub from_date: Option<DateTime>,
    /// Submitted at or before.
    pub to_date: Option<DateTime>,
}

impl SubmissionQuery {
    fn to_params(&self) -> Result<RequestParameters> {
        let mut params = indexed_params(
            FEED_TYPE_LIST,
            self.feed_types.iter().map(|v| lookup(&FEED_TYPES, v)),
        )?;
        params.append(indexed_params(
            FEED_PROCESSING_STATUS_LIST,
            self.statuses
                .iter()
                .map(|v| lookup(&FEED_PROCESSING_STATUSES, v)),
        )?);
        push_date_range(&mut params, self.from_date, self.to_date);
        Ok(params)
    }
}

/// Which submissions to list: either by id or by query, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFilter {
    /// These submission ids.
    Ids(Vec<String>),
    /// Submissions matching a query.
    Query {
        /// Page size, 1 to 100.
        max_count: Option<u32>,
        /// Criteria.
        query: SubmissionQuery,
    },
}

impl Default for SubmissionFilter {
    fn default() -> Self {
        SubmissionFilter::Query {
            max_count: None,
            query: SubmissionQuery::default(),
        }
    }
}

/// Which submissions to cancel.
///
/// Only submissions still in `_SUBMITTED_` can be cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelSubmissions {
    /// These submission ids.
    Ids(Vec<String>),
    /// Submissions matching a query. At least one criterion must be set,
    /// use [`CancelSubmissions::All`] to cancel everything.
    Query {
        /// Only submissions of these feed types.
        feed_types: Vec<String>,
        /// Submitted at or after.
        from_date: Option<DateTime>,
        /// Submitted at or before.
        to_date: Option<DateTime>,
    },
    /// Every pending submission.
    All,
}

fn push_date_range(params: &mut RequestParameters, from: Option<DateTime>, to: Option<DateTime>) {
    if let Some(t) = from {
        params.push(SUBMITTED_FROM_DATE, date_param(t));
    }
    if let Some(t) = to {
        params.push(SUBMITTED_TO_DATE, date_param(t));
    }
}

/// Feeds submits feeds and tracks their processing.
#[derive(Debug, Clone)]
pub struct Feeds {
    client: Client,
}

impl Feeds {
    /// Create a new Feeds section on top of `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send any Feeds action with caller supplied parameters.
    pub async fn call(&self, action: &str, params: RequestParameters) -> Result<Response> {
        self.client.send(&SECTION, action, params, None, None).await
    }

    /// Submit a feed.
    ///
    /// `feed_type` may be an alias from [`FEED_TYPES`]. `content_type` must
    /// match the feed encoding, see
    /// [`feed_content_type`](crate::catalog::feed_content_type).
    pub async fn submit_feed(
        &self,
        feed_type: &str,
        body: impl Into<Body>,
        content_type: &str,
        marketplaces: &[&str],
    ) -> Result<Response> {
        require_non_empty("feed_type", feed_type)?;

        let mut params = RequestParameters::new().with(FEED_TYPE, lookup(&FEED_TYPES, feed_type));
        params.append(indexed_params(
            MARKETPLACE_ID_LIST,
            marketplaces.iter().map(|v| lookup(&MARKETPLACE_IDS, v)),
        )?);

        self.client
            .send(
                &SECTION,
                "SubmitFeed",
                params,
                Some(body.into()),
                Some(content_type),
            )
            .await
    }

    /// List submissions.
    pub async fn list_submissions(&self, filter: &SubmissionFilter) -> Result<Response> {
        let params = match filter {
            SubmissionFilter::Ids(ids) => {
                if ids.is_empty() {
                    return Err(Error::validation("submission ids must not be empty"));
                }
                indexed_params(FEED_SUBMISSION_ID_LIST, ids)?
            }
            SubmissionFilter::Query { max_count, query } => {
                let mut params = query.to_params()?;
                if let Some(n) = *max_count {
                    require_range("max_count", n, 1, MAX_PAGE_SIZE)?;
                    params.push(MAX_COUNT, n);
                }
                params
            }
        };

        self.call("GetFeedSubmissionList", params).await
    }

    /// Fetch the next page of [`list_submissions`](Self::list_submissions).
    pub async fn list_submissions_next(&self, next_token: &str) -> Result<Response> {
        require_non_empty("next_token", next_token)?;
        self.call(
            "GetFeedSubmissionListByNextToken",
            RequestParameters::new().with(NEXT_TOKEN, next_token),
        )
        .await
    }

    /// Count submissions matching `query`.
    pub async fn count_submissions(&self, query: &SubmissionQuery) -> Result<Response> {
        self.call("GetFeedSubmissionCount", query.to_params()?)
            .await
    }

    /// Cancel submissions.
    pub async fn cancel_submissions(&self, which: &CancelSubmissions) -> Result<Response> {
        let params = match which {
            CancelSubmissions::Ids(ids) => {
                if ids.is_empty() {
                    return Err(Error::validation("submission ids must not be empty"));
                }
                indexed_params(FEED_SUBMISSION_ID_LIST, ids)?
            }
            CancelSubmissions::Query {
                feed_types,
                from_date,
                to_date,
            } => {
                if feed_types.is_empty() && from_date.is_none() && to_date.is_none() {
                    return Err(Error::validation(
                        "cancel query has no criteria, use CancelSubmissions::All to cancel everything",
                    ));
                }
                let mut params = indexed_params(
                    FEED_TYPE_LIST,
                    feed_types.iter().map(|v| lookup(&FEED_TYPES, v)),
                )?;
                push_date_range(&mut params, *from_date, *to_date);
                params
            }
            CancelSubmissions::All => RequestParameters::new(),
        };

        self.call("CancelFeedSubmissions", params).await
    }

    /// Fetch the processing report of a submission.
    pub async fn get_submission_result(&self, submission_id: &str) -> Result<Response> {
        require_non_empty("submission_id", submission_id)?;
        self.call(
            "GetFeedSubmissionResult",
            RequestParameters::new().with(FEED_SUBMISSION_ID, submission_id),
        )
        .await
    }
}
