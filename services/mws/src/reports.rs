//! Reports API section.

use crate::catalog::{
    lookup, MARKETPLACE_IDS, REPORT_PROCESSING_STATUSES, REPORT_SCHEDULES, REPORT_TYPES,
};
use crate::constants::*;
use crate::params::{date_param, indexed_params, require_non_empty, require_range};
use crate::{Client, Section};
use mwsign_core::time::DateTime;
use mwsign_core::{Error, RequestParameters, Response, Result};

/// Reports lives at the root path.
pub const SECTION: Section = Section {
    path: "/",
    version: "2009-01-01",
    seller_key: MERCHANT,
};

/// Max number of reports [`Reports::update_report_acknowledgements`] takes.
pub const MAX_ACKNOWLEDGEMENTS: usize = 100;

const ACKNOWLEDGED: &str = "Acknowledged";
const REPORT_ID: &str = "ReportId";
const REPORT_ID_LIST: &str = "ReportIdList.Id";
const REPORT_REQUEST_ID_LIST: &str = "ReportRequestIdList.Id";
const REPORT_TYPE: &str = "ReportType";
const REPORT_TYPE_LIST: &str = "ReportTypeList.Type";
const REPORT_PROCESSING_STATUS_LIST: &str = "ReportProcessingStatusList.Status";
const REQUESTED_FROM_DATE: &str = "RequestedFromDate";
const REQUESTED_TO_DATE: &str = "RequestedToDate";

/// Options of [`Reports::request_report`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
    /// Start of the reported period.
    pub start_date: Option<DateTime>,
    /// End of the reported period.
    pub end_date: Option<DateTime>,
    /// Add the sales channel column to order reports.
    pub show_sales_channel: Option<bool>,
    /// Marketplaces to report on, aliases from [`MARKETPLACE_IDS`] allowed.
    pub marketplaces: Vec<String>,
}

/// Criteria to select report requests.
///
/// Report types and statuses may be aliases from [`REPORT_TYPES`] and
/// [`REPORT_PROCESSING_STATUSES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequestQuery {
    /// These report request ids.
    pub request_ids: Vec<String>,
    /// Only requests of these report types.
    pub report_types: Vec<String>,
    /// Only requests in these processing statuses.
    pub statuses: Vec<String>,
    /// Requested at or after.
    pub from_date: Option<DateTime>,
    /// Requested at or before.
    pub to_date: Option<DateTime>,
    /// Marketplaces, aliases from [`MARKETPLACE_IDS`] allowed.
    pub marketplaces: Vec<String>,
}

impl ReportRequestQuery {
    fn to_params(&self) -> Result<RequestParameters> {
        let mut params = indexed_params(REPORT_REQUEST_ID_LIST, &self.request_ids)?;
        params.append(report_type_params(&self.report_types)?);
        params.append(indexed_params(
            REPORT_PROCESSING_STATUS_LIST,
            self.statuses
                .iter()
                .map(|v| lookup(&REPORT_PROCESSING_STATUSES, v)),
        )?);
        push_date_range(&mut params, self.from_date, self.to_date);
        params.append(marketplace_params(&self.marketplaces)?);
        Ok(params)
    }
}

/// Criteria to select generated reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    /// Only reports produced by these request ids.
    pub request_ids: Vec<String>,
    /// Only reports of these types.
    pub report_types: Vec<String>,
    /// Only acknowledged (`true`) or unacknowledged (`false`) reports.
    pub acknowledged: Option<bool>,
    /// Available at or after.
    pub from_date: Option<DateTime>,
    /// Available at or before.
    pub to_date: Option<DateTime>,
    /// Marketplaces, aliases from [`MARKETPLACE_IDS`] allowed.
    pub marketplaces: Vec<String>,
}

impl ReportQuery {
    fn to_params(&self) -> Result<RequestParameters> {
        let mut params = indexed_params(REPORT_REQUEST_ID_LIST, &self.request_ids)?;
        params.append(report_type_params(&self.report_types)?);
        if let Some(v) = self.acknowledged {
            params.push(ACKNOWLEDGED, v);
        }
        push_date_range(&mut params, self.from_date, self.to_date);
        params.append(marketplace_params(&self.marketplaces)?);
        Ok(params)
    }
}

fn report_type_params(report_types: &[String]) -> Result<RequestParameters> {
    indexed_params(
        REPORT_TYPE_LIST,
        report_types.iter().map(|v| lookup(&REPORT_TYPES, v)),
    )
}

fn marketplace_params(marketplaces: &[String]) -> Result<RequestParameters> {
    indexed_params(
        MARKETPLACE_ID_LIST,
        marketplaces.iter().map(|v| lookup(&MARKETPLACE_IDS, v)),
    )
}

fn push_date_range(params: &mut RequestParameters, from: Option<DateTime>, to: Option<DateTime>) {
    if let Some(t) = from {
        params.push(REQUESTED_FROM_DATE, date_param(t));
    }
    if let Some(t) = to {
        params.push(REQUESTED_TO_DATE, date_param(t));
    }
}

fn check_max_count(max_count: Option<u32>, params: &mut RequestParameters) -> Result<()> {
    if let Some(n) = max_count {
        require_range("max_count", n, 1, MAX_PAGE_SIZE)?;
        params.push(MAX_COUNT, n);
    }
    Ok(())
}

/// Reports requests, schedules and downloads reports.
#[derive(Debug, Clone)]
pub struct Reports {
    client: Client,
}

impl Reports {
    /// Create a new Reports section on top of `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send any Reports action with caller supplied parameters.
    pub async fn call(&self, action: &str, params: RequestParameters) -> Result<Response> {
        self.client.send(&SECTION, action, params, None, None).await
    }

    /// Request a report to be generated.
    ///
    /// `report_type` may be an alias from [`REPORT_TYPES`].
    pub async fn request_report(&self, report_type: &str, opts: &ReportRequest) -> Result<Response> {
        require_non_empty("report_type", report_type)?;

        let mut params =
            RequestParameters::new().with(REPORT_TYPE, lookup(&REPORT_TYPES, report_type));
        if let Some(t) = opts.start_date {
            params.push("StartDate", date_param(t));
        }
        if let Some(t) = opts.end_date {
            params.push("EndDate", date_param(t));
        }
        if let Some(v) = opts.show_sales_channel {
            params.push("ReportOptions", format!("ShowSalesChannel={v}"));
        }
        params.append(marketplace_params(&opts.marketplaces)?);

        self.call("RequestReport", params).await
    }

    /// List report requests matching `query`.
    ///
    /// Request ids exclude every other criterion.
    pub async fn get_report_request_list(
        &self,
        query: &ReportRequestQuery,
        max_count: Option<u32>,
    ) -> Result<Response> {
        if !query.request_ids.is_empty()
            && (max_count.is_some()
                || !query.report_types.is_empty()
                || !query.statuses.is_empty()
                || query.from_date.is_some()
                || query.to_date.is_some())
        {
            return Err(Error::validation(
                "request ids cannot be combined with other report request criteria",
            ));
        }

        let mut params = query.to_params()?;
        check_max_count(max_count, &mut params)?;
        self.call("GetReportRequestList", params).await
    }

    /// Fetch the next page of [`get_report_request_list`](Self::get_report_request_list).
    pub async fn get_report_request_list_next(&self, next_token: &str) -> Result<Response> {
        require_non_empty("next_token", next_token)?;
        self.call(
            "GetReportRequestListByNextToken",
            RequestParameters::new().with(NEXT_TOKEN, next_token),
        )
        .await
    }

    /// Count report requests matching `query`.
    pub async fn get_report_request_count(&self, query: &ReportRequestQuery) -> Result<Response> {
        if !query.request_ids.is_empty() {
            return Err(Error::validation(
                "request ids cannot be used to count report requests",
            ));
        }
        self.call("GetReportRequestCount", query.to_params()?)
            .await
    }

    /// Cancel report requests matching `query`.
    pub async fn cancel_report_requests(&self, query: &ReportRequestQuery) -> Result<Response> {
        self.call("CancelReportRequests", query.to_params()?)
            .await
    }

    /// List generated reports matching `query`.
    ///
    /// Request ids exclude every other criterion.
    pub async fn get_report_list(
        &self,
        query: &ReportQuery,
        max_count: Option<u32>,
    ) -> Result<Response> {
        if !query.request_ids.is_empty()
            && (max_count.is_some()
                || !query.report_types.is_empty()
                || query.acknowledged.is_some()
                || query.from_date.is_some()
                || query.to_date.is_some())
        {
            return Err(Error::validation(
                "request ids cannot be combined with other report criteria",
            ));
        }

        let mut params = query.to_params()?;
        check_max_count(max_count, &mut params)?;
        self.call("GetReportList", params).await
    }

    /// Fetch the next page of [`get_report_list`](Self::get_report_list).
    pub async fn get_report_list_next(&self, next_token: &str) -> Result<Response> {
        require_non_empty("next_token", next_token)?;
        self.call(
            "GetReportListByNextToken",
            RequestParameters::new().with(NEXT_TOKEN, next_token),
        )
        .await
    }

    /// Count generated reports matching `query`.
    pub async fn get_report_count(&self, query: &ReportQuery) -> Result<Response> {
        if !query.request_ids.is_empty() {
            return Err(Error::validation(
                "request ids cannot be used to count reports",
            ));
        }
        self.call("GetReportCount", query.to_params()?).await
    }

    /// Download one report.
    pub async fn get_report(&self, report_id: &str, marketplaces: &[&str]) -> Result<Response> {
        require_non_empty("report_id", report_id)?;

        let mut params = RequestParameters::new().with(REPORT_ID, report_id);
        params.append(indexed_params(
            MARKETPLACE_ID_LIST,
            marketplaces.iter().map(|v| lookup(&MARKETPLACE_IDS, v)),
        )?);

        self.call("GetReport", params).await
    }

    /// Mark up to [`MAX_ACKNOWLEDGEMENTS`] reports as (un)acknowledged.
    pub async fn update_report_acknowledgements(
        &self,
        report_ids: &[&str],
        acknowledged: Option<bool>,
        marketplaces: &[&str],
    ) -> Result<Response> {
        require_range("report_ids length", report_ids.len(), 1, MAX_ACKNOWLEDGEMENTS)?;

        let mut params = indexed_params(REPORT_ID_LIST, report_ids)?;
        if let Some(v) = acknowledged {
            params.push(ACKNOWLEDGED, v);
        }
        params.append(indexed_params(
            MARKETPLACE_ID_LIST,
            marketplaces.iter().map(|v| lookup(&MARKETPLACE_IDS, v)),
        )?);

        self.call("UpdateReportAcknowledgements", params).await
    }

    /// Create, update or delete the schedule of a report type.
    ///
    /// `schedule` may be an alias from [`REPORT_SCHEDULES`], `never` removes
    /// the schedule.
    pub async fn manage_report_schedule(
        &self,
        report_type: &str,
        schedule: &str,
        schedule_date: Option<DateTime>,
    ) -> Result<Response> {
        require_non_empty("report_type", report_type)?;
        require_non_empty("schedule", schedule)?;

        let mut params = RequestParameters::new()
            .with(REPORT_TYPE, lookup(&REPORT_TYPES, report_type))
            .with("Schedule", lookup(&REPORT_SCHEDULES, schedule));
        if let Some(t) = schedule_date {
            params.push("ScheduleDate", date_param(t));
        }

        self.call("ManageReportSchedule", params).await
    }

    /// List report schedules, optionally of the given report types only.
    pub async fn get_report_schedule_list(&self, report_types: &[String]) -> Result<Response> {
        self.call("GetReportScheduleList", report_type_params(report_types)?)
            .await
    }

    /// Fetch the next page of [`get_report_schedule_list`](Self::get_report_schedule_list).
    pub async fn get_report_schedule_list_next(&self, next_token: &str) -> Result<Response> {
        require_non_empty("next_token", next_token)?;
        self.call(
            "GetReportScheduleListByNextToken",
            RequestParameters::new().with(NEXT_TOKEN, next_token),
        )
        .await
    }

    /// Count report schedules, optionally of the given report types only.
    pub async fn get_report_schedule_count(&self, report_types: &[String]) -> Result<Response> {
        self.call("GetReportScheduleCount", report_type_params(report_types)?)
            .await
    }
}
