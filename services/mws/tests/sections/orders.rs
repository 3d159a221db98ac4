use super::{client, Recorder};
use mwsign_core::time::timestamp_from_secs;
use mwsign_core::{ErrorKind, RequestParameters};
use mwsign_mws::orders::OrderQuery;
use mwsign_mws::Orders;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_list_orders() {
    let recorder = Recorder::new();
    let orders = Orders::new(client(&recorder));

    orders
        .list_orders(
            OrderQuery::CreatedAfter(timestamp_from_secs(1_577_836_800).unwrap()),
            Some(&["unshipped", "partially_shipped"][..]),
            Some(&["us"][..]),
        )
        .await
        .unwrap();

    let req = recorder.last();
    assert_eq!(req.path, "/Orders/2011-01-01");
    assert_eq!(req.param("Action"), Some("ListOrders"));
    assert_eq!(req.param("SellerId"), Some("M"));
    assert_eq!(req.param("Merchant"), None);
    assert_eq!(req.param("Version"), Some("2011-01-01"));
    assert_eq!(req.param("CreatedAfter"), Some("2020-01-01T00:00:00+00:00"));
    assert_eq!(req.param("LastUpdatedAfter"), None);
    assert_eq!(req.param("OrderStatus.Status.1"), Some("Unshipped"));
    assert_eq!(req.param("OrderStatus.Status.2"), Some("PartiallyShipped"));
    assert_eq!(req.param("MarketplaceId.Id.1"), Some("ATVPDKIKX0DER"));
    assert_eq!(
        req.param("Signature"),
        Some(req.expected_signature("SECRET").as_str())
    );
}

#[tokio::test]
async fn test_list_orders_updated_after() {
    let recorder = Recorder::new();
    let orders = Orders::new(client(&recorder));

    orders
        .list_orders(
            OrderQuery::LastUpdatedAfter(timestamp_from_secs(1_577_836_800).unwrap()),
            None,
            None,
        )
        .await
        .unwrap();

    let req = recorder.last();
    assert_eq!(req.param("CreatedAfter"), None);
    assert_eq!(
        req.param("LastUpdatedAfter"),
        Some("2020-01-01T00:00:00+00:00")
    );
    assert!(req.keys_with_prefix("OrderStatus").is_empty());
}

#[tokio::test]
async fn test_list_orders_empty_filters() {
    let recorder = Recorder::new();
    let orders = Orders::new(client(&recorder));
    let after = OrderQuery::CreatedAfter(timestamp_from_secs(1_577_836_800).unwrap());

    let err = orders
        .list_orders(after, Some(&[][..]), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = orders
        .list_orders(after, None, Some(&[][..]))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn test_get_order() {
    let recorder = Recorder::new();
    let orders = Orders::new(client(&recorder));

    orders
        .get_order(&["058-1233752-8214740", "058-1233752-8214741"])
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetOrder"));
    assert_eq!(
        req.param("AmazonOrderId.Id.1"),
        Some("058-1233752-8214740")
    );
    assert_eq!(
        req.param("AmazonOrderId.Id.2"),
        Some("058-1233752-8214741")
    );

    let too_many: Vec<String> = (0..51).map(|i| i.to_string()).collect();
    let too_many: Vec<&str> = too_many.iter().map(String::as_str).collect();
    for ids in [&[][..], &too_many[..]] {
        let err = orders.get_order(ids).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert_eq!(recorder.count(), 1);
}

#[tokio::test]
async fn test_order_items() {
    let recorder = Recorder::new();
    let orders = Orders::new(client(&recorder));

    orders.list_order_items("058-1233752-8214740").await.unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("ListOrderItems"));
    assert_eq!(req.param("AmazonOrderId"), Some("058-1233752-8214740"));

    orders.list_order_items_next("next").await.unwrap();
    assert_eq!(
        recorder.last().param("Action"),
        Some("ListOrderItemsByNextToken")
    );

    orders.list_orders_next("next").await.unwrap();
    assert_eq!(
        recorder.last().param("Action"),
        Some("ListOrdersByNextToken")
    );

    orders.get_service_status().await.unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetServiceStatus"));
    assert_eq!(req.path, "/Orders/2011-01-01");
}

#[tokio::test]
async fn test_call() {
    let recorder = Recorder::new();
    let orders = Orders::new(client(&recorder));

    orders
        .call(
            "ListOrders",
            RequestParameters::new()
                .with("CreatedAfter", "2020-01-01T00:00:00Z")
                .with("FulfillmentChannel", vec!["AFN", "MFN"]),
        )
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("FulfillmentChannel.Channel.1"), Some("AFN"));
    assert_eq!(req.param("FulfillmentChannel.Channel.2"), Some("MFN"));
    assert_eq!(req.param("FulfillmentChannel"), None);

    let err = orders
        .call("SubmitFeed", RequestParameters::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(recorder.count(), 1);
}
