//! Orders API section.

use crate::catalog::{lookup, MARKETPLACE_IDS, ORDER_STATUSES};
use crate::constants::*;
use crate::params::{date_param, indexed_params, list_key, require_non_empty, require_range};
use crate::{Client, Section};
use log::debug;
use mwsign_core::time::DateTime;
use mwsign_core::{Error, ParamValue, RequestParameters, Response, Result};

/// Orders lives under its own versioned path.
pub const SECTION: Section = Section {
    path: "/Orders/2011-01-01",
    version: "2011-01-01",
    seller_key: SELLER_ID,
};

/// Actions [`Orders::call`] accepts.
pub const SUPPORTED_ACTIONS: [&str; 6] = [
    "ListOrders",
    "ListOrdersByNextToken",
    "GetOrder",
    "ListOrderItems",
    "ListOrderItemsByNextToken",
    "GetServiceStatus",
];

const AMAZON_ORDER_ID: &str = "AmazonOrderId";
const ORDER_STATUS: &str = "OrderStatus";

/// Max number of orders [`Orders::get_order`] takes.
pub const MAX_ORDER_IDS: usize = 50;

/// Time criterion of [`Orders::list_orders`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderQuery {
    /// Orders created after this time.
    CreatedAfter(DateTime),
    /// Orders updated after this time.
    LastUpdatedAfter(DateTime),
}

/// Orders lists and fetches orders.
#[derive(Debug, Clone)]
pub struct Orders {
    client: Client,
}

impl Orders {
    /// Create a new Orders section on top of `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send one of [`SUPPORTED_ACTIONS`].
    ///
    /// List values are expanded to the Orders list form: a `MarketplaceId`
    /// list becomes `MarketplaceId.Id.1`, `MarketplaceId.Id.2`, ...
    pub async fn call(&self, action: &str, params: RequestParameters) -> Result<Response> {
        if !SUPPORTED_ACTIONS.contains(&action) {
            return Err(Error::validation(format!(
                "action {action} is not supported by the Orders API"
            )));
        }

        let mut expanded = RequestParameters::new();
        for (k, v) in params.iter() {
            match v {
                ParamValue::Single(s) => expanded.push(k, s.as_str()),
                ParamValue::List(vs) => expanded.append(indexed_params(&list_key(k), vs)?),
            }
        }
        debug!("orders {action} with {} parameters", expanded.len());

        self.client
            .send(&SECTION, action, expanded, None, None)
            .await
    }

    /// List orders created or updated after a point in time.
    ///
    /// `statuses` may use aliases from [`ORDER_STATUSES`] and `marketplaces`
    /// aliases from [`MARKETPLACE_IDS`]. When given they must not be empty.
    pub async fn list_orders(
        &self,
        query: OrderQuery,
        statuses: Option<&[&str]>,
        marketplaces: Option<&[&str]>,
    ) -> Result<Response> {
        let mut params = match query {
            OrderQuery::CreatedAfter(t) => {
                RequestParameters::new().with("CreatedAfter", date_param(t))
            }
            OrderQuery::LastUpdatedAfter(t) => {
                RequestParameters::new().with("LastUpdatedAfter", date_param(t))
            }
        };

        if let Some(statuses) = statuses {
            if statuses.is_empty() {
                return Err(Error::validation("order statuses must not be empty"));
            }
            let statuses: Vec<&str> = statuses
                .iter()
                .map(|v| lookup(&ORDER_STATUSES, v))
                .collect();
            params.push(ORDER_STATUS, statuses);
        }
        if let Some(marketplaces) = marketplaces {
            if marketplaces.is_empty() {
                return Err(Error::validation("marketplaces must not be empty"));
            }
            let marketplaces: Vec<&str> = marketplaces
                .iter()
                .map(|v| lookup(&MARKETPLACE_IDS, v))
                .collect();
            params.push(MARKETPLACE_ID, marketplaces);
        }

        self.call("ListOrders", params).await
    }

    /// Fetch the next page of [`list_orders`](Self::list_orders).
    pub async fn list_orders_next(&self, next_token: &str) -> Result<Response> {
        require_non_empty("next_token", next_token)?;
        self.call(
            "ListOrdersByNextToken",
            RequestParameters::new().with(NEXT_TOKEN, next_token),
        )
        .await
    }

    /// Fetch up to [`MAX_ORDER_IDS`] orders by id.
    pub async fn get_order(&self, order_ids: &[&str]) -> Result<Response> {
        require_range("order_ids length", order_ids.len(), 1, MAX_ORDER_IDS)?;
        self.call(
            "GetOrder",
            RequestParameters::new().with(AMAZON_ORDER_ID, order_ids),
        )
        .await
    }

    /// List the items of one order.
    pub async fn list_order_items(&self, order_id: &str) -> Result<Response> {
        require_non_empty("order_id", order_id)?;
        self.call(
            "ListOrderItems",
            RequestParameters::new().with(AMAZON_ORDER_ID, order_id),
        )
        .await
    }

    /// Fetch the next page of [`list_order_items`](Self::list_order_items).
    pub async fn list_order_items_next(&self, next_token: &str) -> Result<Response> {
        require_non_empty("next_token", next_token)?;
        self.call(
            "ListOrderItemsByNextToken",
            RequestParameters::new().with(NEXT_TOKEN, next_token),
        )
        .await
    }

    /// Check the operational status of the Orders API.
    pub async fn get_service_status(&self) -> Result<Response> {
        self.call("GetServiceStatus", RequestParameters::new())
            .await
    }
}
