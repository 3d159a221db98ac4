//! Sellers API section.

use crate::constants::*;
use crate::params::require_non_empty;
use crate::{Client, Section};
use mwsign_core::{RequestParameters, Response, Result};

/// Sellers lives under its own versioned path.
pub const SECTION: Section = Section {
    path: "/Sellers/2011-07-01",
    version: "2011-07-01",
    seller_key: SELLER_ID,
};

/// Sellers reports which marketplaces the seller participates in.
#[derive(Debug, Clone)]
pub struct Sellers {
    client: Client,
}

impl Sellers {
    /// Create a new Sellers section on top of `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send any Sellers action with caller supplied parameters.
    pub async fn call(&self, action: &str, params: RequestParameters) -> Result<Response> {
        self.client.send(&SECTION, action, params, None, None).await
    }

    /// Check the operational status of the Sellers API.
    pub async fn get_service_status(&self) -> Result<Response> {
        self.call("GetServiceStatus", RequestParameters::new())
            .await
    }

    /// List the marketplaces the seller can sell in.
    pub async fn list_marketplace_participations(&self) -> Result<Response> {
        self.call("ListMarketplaceParticipations", RequestParameters::new())
            .await
    }

    /// Fetch the next page of
    /// [`list_marketplace_participations`](Self::list_marketplace_participations).
    pub async fn list_marketplace_participations_next(&self, next_token: &str) -> Result<Response> {
        require_non_empty("next_token", next_token)?;
        self.call(
            "ListMarketplaceParticipationsByNextToken",
            RequestParameters::new().with(NEXT_TOKEN, next_token),
        )
        .await
    }
}
