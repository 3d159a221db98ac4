//! Products API section.

use crate::catalog::{lookup, ID_TYPES, ITEM_CONDITIONS, MARKETPLACE_IDS, QUERY_CONTEXTS};
use crate::constants::*;
use crate::params::{indexed_params, require_non_empty, require_range};
use crate::{Client, Section};
use mwsign_core::{Error, RequestParameters, Response, Result};
use std::fmt;
use std::str::FromStr;

/// Products lives under its own versioned path.
pub const SECTION: Section = Section {
    path: "/Products/2011-10-01",
    version: "2011-10-01",
    seller_key: SELLER_ID,
};

/// Max number of ids [`Products::get_matching_product_for_id`] takes.
pub const MAX_MATCHING_IDS: usize = 5;
/// Max number of ids the pricing operations take.
pub const MAX_PRICING_IDS: usize = 20;

/// How the pricing and category operations identify a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductIdType {
    /// Amazon Standard Identification Number.
    Asin,
    /// The seller's own SKU.
    SellerSku,
}

impl ProductIdType {
    /// Wire name of this id type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductIdType::Asin => "ASIN",
            ProductIdType::SellerSku => "SellerSKU",
        }
    }

    /// Suffix of the per id type action names.
    fn action_suffix(&self) -> &'static str {
        match self {
            ProductIdType::Asin => "ASIN",
            ProductIdType::SellerSku => "SKU",
        }
    }

    /// List prefix, `ASINList.ASIN` or `SellerSKUList.SellerSKU`.
    fn list_prefix(&self) -> String {
        format!("{0}List.{0}", self.as_str())
    }
}

impl fmt::Display for ProductIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductIdType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ASIN" | "asin" => Ok(ProductIdType::Asin),
            "SellerSKU" | "sku" | "seller_sku" => Ok(ProductIdType::SellerSku),
            _ => Err(Error::validation(format!(
                "id type {s:?} is not ASIN or SellerSKU"
            ))),
        }
    }
}

/// Products looks up catalog items and prices.
#[derive(Debug, Clone)]
pub struct Products {
    client: Client,
}

impl Products {
    /// Create a new Products section on top of `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send any Products action with caller supplied parameters.
    pub async fn call(&self, action: &str, params: RequestParameters) -> Result<Response> {
        self.client.send(&SECTION, action, params, None, None).await
    }

    /// Search products by free text.
    ///
    /// `context` may be an alias from [`QUERY_CONTEXTS`].
    pub async fn list_matching_products(
        &self,
        marketplace: &str,
        query: &str,
        context: Option<&str>,
    ) -> Result<Response> {
        require_non_empty("query", query)?;

        let mut params = marketplace_params(marketplace)?.with("Query", query);
        if let Some(context) = context {
            params.push("QueryContextId", lookup(&QUERY_CONTEXTS, context));
        }

        self.call("ListMatchingProducts", params).await
    }

    /// Fetch up to [`MAX_MATCHING_IDS`] products by id.
    ///
    /// `id_type` may be an alias from [`ID_TYPES`], e.g. `upc` or `ean`.
    pub async fn get_matching_product_for_id(
        &self,
        marketplace: &str,
        id_type: &str,
        ids: &[&str],
    ) -> Result<Response> {
        require_non_empty("id_type", id_type)?;
        require_range("ids length", ids.len(), 1, MAX_MATCHING_IDS)?;

        let mut params = marketplace_params(marketplace)?.with("IdType", lookup(&ID_TYPES, id_type));
        params.append(indexed_params("IdList.Id", ids)?);

        self.call("GetMatchingProductForId", params).await
    }

    /// Fetch the competitive prices of up to [`MAX_PRICING_IDS`] products.
    pub async fn get_competitive_pricing(
        &self,
        marketplace: &str,
        id_type: ProductIdType,
        ids: &[&str],
    ) -> Result<Response> {
        let params = pricing_params(marketplace, id_type, ids)?;
        self.call(
            &format!("GetCompetitivePricingFor{}", id_type.action_suffix()),
            params,
        )
        .await
    }

    /// Fetch the lowest offers of up to [`MAX_PRICING_IDS`] products.
    ///
    /// `condition` may be an alias from [`ITEM_CONDITIONS`]. `exclude_me` is
    /// only accepted with [`ProductIdType::SellerSku`].
    pub async fn get_lowest_offer_listings(
        &self,
        marketplace: &str,
        id_type: ProductIdType,
        ids: &[&str],
        condition: Option<&str>,
        exclude_me: Option<bool>,
    ) -> Result<Response> {
        let mut params = pricing_params(marketplace, id_type, ids)?;
        if let Some(condition) = condition {
            params.push("ItemCondition", lookup(&ITEM_CONDITIONS, condition));
        }
        match (id_type, exclude_me) {
            (_, None) => {}
            (ProductIdType::SellerSku, Some(v)) => params.push("ExcludeMe", v),
            (ProductIdType::Asin, Some(_)) => {
                return Err(Error::validation(
                    "exclude_me is only accepted with SellerSKU ids",
                ))
            }
        }

        self.call(
            &format!("GetLowestOfferListingsFor{}", id_type.action_suffix()),
            params,
        )
        .await
    }

    /// Fetch the seller's own prices of up to [`MAX_PRICING_IDS`] products.
    pub async fn get_my_price(
        &self,
        marketplace: &str,
        id_type: ProductIdType,
        ids: &[&str],
        condition: Option<&str>,
    ) -> Result<Response> {
        let mut params = pricing_params(marketplace, id_type, ids)?;
        if let Some(condition) = condition {
            params.push("ItemCondition", lookup(&ITEM_CONDITIONS, condition));
        }

        self.call(
            &format!("GetMyPriceFor{}", id_type.action_suffix()),
            params,
        )
        .await
    }

    /// Fetch the categories of one product.
    pub async fn get_product_categories(
        &self,
        marketplace: &str,
        id_type: ProductIdType,
        id: &str,
    ) -> Result<Response> {
        require_non_empty("id", id)?;

        let params = marketplace_params(marketplace)?.with(id_type.as_str(), id);
        self.call(
            &format!("GetProductCategoriesFor{}", id_type.action_suffix()),
            params,
        )
        .await
    }

    /// Check the operational status of the Products API.
    pub async fn get_service_status(&self) -> Result<Response> {
        self.call("GetServiceStatus", RequestParameters::new())
            .await
    }
}

fn marketplace_params(marketplace: &str) -> Result<RequestParameters> {
    require_non_empty("marketplace", marketplace)?;
    Ok(RequestParameters::new().with(MARKETPLACE_ID, lookup(&MARKETPLACE_IDS, marketplace)))
}

fn pricing_params(
    marketplace: &str,
    id_type: ProductIdType,
    ids: &[&str],
) -> Result<RequestParameters> {
    require_range("ids length", ids.len(), 1, MAX_PRICING_IDS)?;

    let mut params = marketplace_params(marketplace)?;
    params.append(indexed_params(&id_type.list_prefix(), ids)?);
    Ok(params)
}
