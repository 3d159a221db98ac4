use super::{client, Recorder};
use http::StatusCode;
use mwsign_core::ErrorKind;
use mwsign_mws::Sellers;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_list_marketplace_participations() {
    let recorder = Recorder::new();
    let sellers = Sellers::new(client(&recorder));

    sellers.list_marketplace_participations().await.unwrap();
    let req = recorder.last();
    assert_eq!(req.path, "/Sellers/2011-07-01");
    assert_eq!(req.param("Action"), Some("ListMarketplaceParticipations"));
    assert_eq!(req.param("SellerId"), Some("M"));
    assert_eq!(req.param("Version"), Some("2011-07-01"));
    assert_eq!(
        req.param("Signature"),
        Some(req.expected_signature("SECRET").as_str())
    );

    sellers
        .list_marketplace_participations_next("next")
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(
        req.param("Action"),
        Some("ListMarketplaceParticipationsByNextToken")
    );
    assert_eq!(req.param("NextToken"), Some("next"));

    let err = sellers
        .list_marketplace_participations_next("")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    sellers.get_service_status().await.unwrap();
    assert_eq!(recorder.last().param("Action"), Some("GetServiceStatus"));
}

#[tokio::test]
async fn test_remote_fault_is_returned() {
    let body = "<ErrorResponse><Error><Code>SignatureDoesNotMatch</Code></Error></ErrorResponse>";
    let recorder = Recorder::with_response(StatusCode::FORBIDDEN, body);
    let sellers = Sellers::new(client(&recorder));

    let resp = sellers.get_service_status().await.unwrap();
    assert!(resp.is_fault());
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(resp.text(), body);
}

#[tokio::test]
async fn test_empty_fault_is_transport_error() {
    let recorder = Recorder::with_response(StatusCode::SERVICE_UNAVAILABLE, "");
    let sellers = Sellers::new(client(&recorder));

    let err = sellers.get_service_status().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(recorder.count(), 1);
}
