use super::{client, Recorder};
use mwsign_core::time::timestamp_from_secs;
use mwsign_core::ErrorKind;
use mwsign_mws::reports::{ReportQuery, ReportRequest, ReportRequestQuery};
use mwsign_mws::Reports;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_request_report() {
    let recorder = Recorder::new();
    let reports = Reports::new(client(&recorder));

    reports
        .request_report(
            "order_data",
            &ReportRequest {
                start_date: Some(timestamp_from_secs(1_577_836_800).unwrap()),
                end_date: Some(timestamp_from_secs(1_577_923_200).unwrap()),
                show_sales_channel: Some(true),
                marketplaces: vec!["jp".to_string()],
            },
        )
        .await
        .unwrap();

    let req = recorder.last();
    assert_eq!(req.path, "/");
    assert_eq!(req.param("Action"), Some("RequestReport"));
    assert_eq!(req.param("Merchant"), Some("M"));
    assert_eq!(req.param("SellerId"), None);
    assert_eq!(req.param("Version"), Some("2009-01-01"));
    assert_eq!(req.param("ReportType"), Some("_GET_FLAT_FILE_ORDERS_DATA_"));
    assert_eq!(req.param("StartDate"), Some("2020-01-01T00:00:00+00:00"));
    assert_eq!(req.param("EndDate"), Some("2020-01-02T00:00:00+00:00"));
    assert_eq!(req.param("ReportOptions"), Some("ShowSalesChannel=true"));
    assert!(req.uri.contains("&ReportOptions=ShowSalesChannel%3Dtrue&"));
    assert_eq!(req.param("MarketplaceIdList.Id.1"), Some("A1VC38T7YXB528"));
    assert_eq!(
        req.param("Signature"),
        Some(req.expected_signature("SECRET").as_str())
    );

    let err = reports
        .request_report("", &ReportRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_report_request_list() {
    let recorder = Recorder::new();
    let reports = Reports::new(client(&recorder));

    reports
        .get_report_request_list(
            &ReportRequestQuery {
                report_types: vec!["listing_data".to_string()],
                statuses: vec!["done_no_data".to_string()],
                ..Default::default()
            },
            Some(10),
        )
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetReportRequestList"));
    assert_eq!(req.param("MaxCount"), Some("10"));
    assert_eq!(
        req.param("ReportTypeList.Type.1"),
        Some("_GET_MERCHANT_LISTINGS_DATA_")
    );
    assert_eq!(
        req.param("ReportProcessingStatusList.Status.1"),
        Some("_DONE_NO_DATA_")
    );

    let by_id = ReportRequestQuery {
        request_ids: vec!["2291326454".to_string()],
        ..Default::default()
    };
    reports.get_report_request_list(&by_id, None).await.unwrap();
    assert_eq!(
        recorder.last().param("ReportRequestIdList.Id.1"),
        Some("2291326454")
    );

    let err = reports
        .get_report_request_list(&by_id, Some(10))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = reports
        .get_report_request_count(&by_id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    reports.cancel_report_requests(&by_id).await.unwrap();
    assert_eq!(
        recorder.last().param("Action"),
        Some("CancelReportRequests")
    );

    reports.get_report_request_list_next("next").await.unwrap();
    assert_eq!(
        recorder.last().param("Action"),
        Some("GetReportRequestListByNextToken")
    );

    reports
        .get_report_request_count(&ReportRequestQuery::default())
        .await
        .unwrap();
    assert_eq!(
        recorder.last().param("Action"),
        Some("GetReportRequestCount")
    );
    assert_eq!(recorder.count(), 5);
}

#[tokio::test]
async fn test_report_list() {
    let recorder = Recorder::new();
    let reports = Reports::new(client(&recorder));

    reports
        .get_report_list(
            &ReportQuery {
                acknowledged: Some(false),
                from_date: Some(timestamp_from_secs(1_577_836_800).unwrap()),
                ..Default::default()
            },
            Some(100),
        )
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetReportList"));
    assert_eq!(req.param("Acknowledged"), Some("false"));
    assert_eq!(
        req.param("RequestedFromDate"),
        Some("2020-01-01T00:00:00+00:00")
    );

    for max_count in [0, 101] {
        let err = reports
            .get_report_list(&ReportQuery::default(), Some(max_count))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    reports
        .get_report_count(&ReportQuery {
            report_types: vec!["settlement_xml".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetReportCount"));
    assert_eq!(
        req.param("ReportTypeList.Type.1"),
        Some("_GET_PAYMENT_SETTLEMENT_DATA_")
    );

    reports.get_report_list_next("next").await.unwrap();
    assert_eq!(
        recorder.last().param("Action"),
        Some("GetReportListByNextToken")
    );
}

#[tokio::test]
async fn test_get_report_and_acknowledge() {
    let recorder = Recorder::new();
    let reports = Reports::new(client(&recorder));

    reports.get_report("624169093", &[]).await.unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetReport"));
    assert_eq!(req.param("ReportId"), Some("624169093"));

    reports
        .update_report_acknowledgements(&["1", "2"], Some(true), &["us", "A2EUQ1WTGCTBG2"])
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("UpdateReportAcknowledgements"));
    assert_eq!(req.param("ReportIdList.Id.1"), Some("1"));
    assert_eq!(req.param("ReportIdList.Id.2"), Some("2"));
    assert_eq!(req.param("Acknowledged"), Some("true"));
    assert_eq!(req.param("MarketplaceIdList.Id.1"), Some("ATVPDKIKX0DER"));
    assert_eq!(req.param("MarketplaceIdList.Id.2"), Some("A2EUQ1WTGCTBG2"));
    assert_eq!(
        req.param("Signature"),
        Some(req.expected_signature("SECRET").as_str())
    );

    reports
        .update_report_acknowledgements(&["3"], None, &[])
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("ReportIdList.Id.1"), Some("3"));
    assert_eq!(req.param("Acknowledged"), None);
    assert!(req.keys_with_prefix("MarketplaceIdList").is_empty());

    let ids: Vec<String> = (0..101).map(|i| i.to_string()).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    for ids in [&[][..], &ids[..]] {
        let err = reports
            .update_report_acknowledgements(ids, None, &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert_eq!(recorder.count(), 3);
}

#[tokio::test]
async fn test_report_schedules() {
    let recorder = Recorder::new();
    let reports = Reports::new(client(&recorder));

    reports
        .manage_report_schedule(
            "listing_data",
            "1_day",
            Some(timestamp_from_secs(1_577_836_800).unwrap()),
        )
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("ManageReportSchedule"));
    assert_eq!(req.param("ReportType"), Some("_GET_MERCHANT_LISTINGS_DATA_"));
    assert_eq!(req.param("Schedule"), Some("_1_DAY_"));
    assert_eq!(req.param("ScheduleDate"), Some("2020-01-01T00:00:00+00:00"));

    reports.get_report_schedule_list(&[]).await.unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetReportScheduleList"));
    assert!(req.keys_with_prefix("ReportTypeList").is_empty());

    reports
        .get_report_schedule_count(&["order_data".to_string()])
        .await
        .unwrap();
    let req = recorder.last();
    assert_eq!(req.param("Action"), Some("GetReportScheduleCount"));
    assert_eq!(
        req.param("ReportTypeList.Type.1"),
        Some("_GET_FLAT_FILE_ORDERS_DATA_")
    );

    reports.get_report_schedule_list_next("next").await.unwrap();
    assert_eq!(
        recorder.last().param("Action"),
        Some("GetReportScheduleListByNextToken")
    );

    let err = reports
        .manage_report_schedule("listing_data", "", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
