use super::{client, Recorder};
use mwsign_core::ErrorKind;
use mwsign_mws::products::ProductIdType;
use mwsign_mws::Products;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_list_matching_products() {
    let recorder = Recorder::new();
    let products = Products::new(client(&recorder));

    products
        .list_matching_products("us", "rust programming", Some("books"))
        .await
        .unwrap();

    let req = recorder.last();
    assert_eq!(req.path, "/Products/2011-10-01");
    assert_eq!(req.param("Action"), Some("ListMatchingProducts"));
    assert_eq!(req.param("Version"), Some("2011-10-01"));
    assert_eq!(req.param("SellerId"), Some("M"));
    assert_eq!(req.param("MarketplaceId"), Some("ATVPDKIKX0DER"));
    assert_eq!(req.param("QueryContextId"), Some("Books"));
    assert!(req.uri.contains("&Query=rust%20programming&"));
    assert_eq!(
        req.param("Signature"),
        Some(req.expected_signature("SECRET").as_str())
    );
}

#[tokio::test]
async fn test_get_matching_product_for_id() {
    let recorder = Recorder::new();
    let products = Products::new(client(&recorder));

    products
        .get_matching_product_for_id("us", "upc", &["0123456789012", "0123456789013"])
        .await
        .unwrap();

    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetMatchingProductForId"));
    assert_eq!(req.param("IdType"), Some("UPC"));
    assert_eq!(req.param("IdList.Id.1"), Some("0123456789012"));
    assert_eq!(req.param("IdList.Id.2"), Some("0123456789013"));

    let err = products
        .get_matching_product_for_id("us", "upc", &["1", "2", "3", "4", "5", "6"])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(recorder.count(), 1);
}

#[tokio::test]
async fn test_get_competitive_pricing() {
    let recorder = Recorder::new();
    let products = Products::new(client(&recorder));

    products
        .get_competitive_pricing("uk", ProductIdType::SellerSku, &["SKU-1"])
        .await
        .unwrap();

    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetCompetitivePricingForSKU"));
    assert_eq!(req.param("MarketplaceId"), Some("A1F83G8C2ARO7P"));
    assert_eq!(req.param("SellerSKUList.SellerSKU.1"), Some("SKU-1"));
    assert_eq!(req.param("IdType"), None);

    products
        .get_competitive_pricing("uk", ProductIdType::Asin, &["B00EXAMPLE"])
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetCompetitivePricingForASIN"));
    assert_eq!(req.param("ASINList.ASIN.1"), Some("B00EXAMPLE"));
}

#[tokio::test]
async fn test_get_lowest_offer_listings() {
    let recorder = Recorder::new();
    let products = Products::new(client(&recorder));

    products
        .get_lowest_offer_listings(
            "us",
            ProductIdType::SellerSku,
            &["SKU-1", "SKU-2"],
            Some("new"),
            Some(true),
        )
        .await
        .unwrap();

    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetLowestOfferListingsForSKU"));
    assert_eq!(req.param("ItemCondition"), Some("New"));
    assert_eq!(req.param("ExcludeMe"), Some("true"));
    assert_eq!(req.param("SellerSKUList.SellerSKU.2"), Some("SKU-2"));

    let err = products
        .get_lowest_offer_listings("us", ProductIdType::Asin, &["B00EXAMPLE"], None, Some(true))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(recorder.count(), 1);
}

#[tokio::test]
async fn test_get_my_price() {
    let recorder = Recorder::new();
    let products = Products::new(client(&recorder));

    products
        .get_my_price("us", ProductIdType::Asin, &["B00EXAMPLE"], Some("Used"))
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetMyPriceForASIN"));
    assert_eq!(req.param("ItemCondition"), Some("Used"));

    let ids: Vec<String> = (0..21).map(|i| format!("SKU-{i}")).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    let err = products
        .get_my_price("us", ProductIdType::SellerSku, &ids, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = products
        .get_my_price("us", ProductIdType::SellerSku, &[], None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(recorder.count(), 1);
}

#[tokio::test]
async fn test_get_product_categories() {
    let recorder = Recorder::new();
    let products = Products::new(client(&recorder));

    products
        .get_product_categories("jp", ProductIdType::Asin, "B00EXAMPLE")
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetProductCategoriesForASIN"));
    assert_eq!(req.param("ASIN"), Some("B00EXAMPLE"));
    assert_eq!(req.param("MarketplaceId"), Some("A1VC38T7YXB528"));

    products
        .get_product_categories("jp", ProductIdType::SellerSku, "SKU-1")
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetProductCategoriesForSKU"));
    assert_eq!(req.param("SellerSKU"), Some("SKU-1"));

    products.get_service_status().await.unwrap();
    assert_eq!(recorder.last().path, "/Products/2011-10-01");
}
