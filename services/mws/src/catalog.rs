//! Static lookup tables.
//!
//! Every table maps a friendly alias to the token the remote side expects.
//! Callers may pass either: [`lookup`] returns unknown keys unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Alias to token table.
pub type Table = HashMap<&'static str, &'static str>;

/// Resolve `key` in `table`, or return `key` itself if it isn't an alias.
pub fn lookup<'a>(table: &Table, key: &'a str) -> &'a str {
    table.get(key).copied().unwrap_or(key)
}

/// Endpoint URLs by region.
pub static ENDPOINTS: Lazy<Table> =
    Lazy::new(|| mwsign_core::ENDPOINT_ALIASES.into_iter().collect());

/// Marketplace ids by country.
pub static MARKETPLACE_IDS: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("ca", "A2EUQ1WTGCTBG2"),
        ("cn", "AAHKV2X7AFYLW"),
        ("in", "A21TJRUUN4KGV"),
        ("jp", "A1VC38T7YXB528"),
        ("us", "ATVPDKIKX0DER"),
        ("de", "A1PA6795UKMFR9"),
        ("es", "A1RKKUPIHCS9HS"),
        ("fr", "A13V1IB3VIYZZH"),
        ("it", "APJ6JRA9NG5V4"),
        ("uk", "A1F83G8C2ARO7P"),
    ])
});

/// Feed types.
pub static FEED_TYPES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        // XML
        ("offer", "_POST_OFFER_ONLY_DATA_"),
        ("order_acknowledgement", "_POST_ORDER_ACKNOWLEDGEMENT_DATA_"),
        (
            "order_cancellation",
            "_POST_FULFILLMENT_ORDER_CANCELLATION_REQUEST_DATA_",
        ),
        ("order_fulfillment", "_POST_ORDER_FULFILLMENT_DATA_"),
        ("product_data", "_POST_PRODUCT_DATA_"),
        ("product_image", "_POST_PRODUCT_IMAGE_DATA_"),
        ("product_inventory", "_POST_INVENTORY_AVAILABILITY_DATA_"),
        ("product_item", "_POST_ITEM_DATA_"),
        ("product_override", "_POST_PRODUCT_OVERRIDES_DATA_"),
        ("product_pricing", "_POST_PRODUCT_PRICING_DATA_"),
        ("product_relationship", "_POST_PRODUCT_RELATIONSHIP_DATA_"),
        ("shipping_override", "_POST_SHIPPING_OVERRIDE_DATA_"),
        ("webstore_item", "_POST_WEBSTORE_ITEM_DATA_"),
        // Flat file
        ("flat_book", "_POST_FLAT_FILE_BOOKLOADER_DATA_"),
        ("flat_book_uiee", "_POST_UIEE_BOOKLOADER_DATA_"),
        (
            "flat_product_converge",
            "_POST_FLAT_FILE_CONVERGENCE_LISTINGS_DATA_",
        ),
        ("flat_product_data", "_POST_FLAT_FILE_LISTINGS_DATA_"),
        ("flat_product_inventory", "_POST_FLAT_FILE_INVLOADER_DATA_"),
        (
            "flat_product_price_inv",
            "_POST_FLAT_FILE_PRICEANDQUANTITYONLY_UPDATE_DATA_",
        ),
    ])
});

/// Feed processing statuses.
pub static FEED_PROCESSING_STATUSES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("cancelled", "_CANCELLED_"),
        ("done", "_DONE_"),
        ("in_progress", "_IN_PROGRESS_"),
        ("submitted", "_SUBMITTED_"),
    ])
});

/// Report types.
pub static REPORT_TYPES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("listing_cancelled", "_GET_MERCHANT_CANCELLED_LISTINGS_DATA_"),
        ("listing_compat", "_GET_MERCHANT_LISTINGS_DATA_BACK_COMPAT_"),
        ("listing_data", "_GET_MERCHANT_LISTINGS_DATA_"),
        ("listing_defect", "_GET_MERCHANT_LISTINGS_DEFECT_DATA_"),
        ("listing_lite", "_GET_MERCHANT_LISTINGS_DATA_LITE_"),
        ("listing_liter", "_GET_MERCHANT_LISTINGS_DATA_LITER_"),
        ("listing_open", "_GET_FLAT_FILE_OPEN_LISTINGS_DATA_"),
        ("order_actionable", "_GET_FLAT_FILE_ACTIONABLE_ORDER_DATA_"),
        ("order_data", "_GET_FLAT_FILE_ORDERS_DATA_"),
        ("order_reports", "_GET_FLAT_FILE_ORDER_REPORT_DATA_"),
        (
            "order_reports_converged",
            "_GET_CONVERGED_FLAT_FILE_ORDER_REPORT_DATA_",
        ),
        (
            "settlement_alt",
            "_GET_ALT_FLAT_FILE_PAYMENT_SETTLEMENT_DATA_",
        ),
        ("settlement_csv", "_GET_FLAT_FILE_PAYMENT_SETTLEMENT_DATA_"),
        ("settlement_xml", "_GET_PAYMENT_SETTLEMENT_DATA_"),
    ])
});

/// Report schedules.
pub static REPORT_SCHEDULES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("15_min", "_15_MINUTES_"),
        ("30_min", "_30_MINUTES_"),
        ("1_hr", "_1_HOUR_"),
        ("2_hr", "_2_HOURS_"),
        ("4_hr", "_4_HOURS_"),
        ("8_hr", "_8_HOURS_"),
        ("12_hr", "_12_HOURS_"),
        ("72_hr", "_72_HOURS_"),
        ("1_day", "_1_DAY_"),
        ("2_day", "_2_DAYS_"),
        ("3_day", "_72_HOURS_"),
        ("7_day", "_7_DAYS_"),
        ("14_day", "_14_DAYS_"),
        ("15_day", "_15_DAYS_"),
        ("30_day", "_30_DAYS_"),
        ("never", "_NEVER_"),
    ])
});

/// Report processing statuses.
pub static REPORT_PROCESSING_STATUSES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("cancelled", "_CANCELLED_"),
        ("done", "_DONE_"),
        ("done_no_data", "_DONE_NO_DATA_"),
        ("in_progress", "_IN_PROGRESS_"),
        ("submitted", "_SUBMITTED_"),
    ])
});

/// Order statuses. The remote side spells it `Canceled`.
pub static ORDER_STATUSES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("cancelled", "Canceled"),
        ("invoice_unconfirmed", "InvoiceUnconfirmed"),
        ("partially_shipped", "PartiallyShipped"),
        ("pending", "Pending"),
        ("shipped", "Shipped"),
        ("unfulfillable", "Unfulfillable"),
        ("unshipped", "Unshipped"),
    ])
});

/// Product id types.
pub static ID_TYPES: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("asin", "ASIN"),
        ("ean", "EAN"),
        ("isbn", "ISBN"),
        ("jan", "JAN"),
        ("sku", "SellerSKU"),
        ("upc", "UPC"),
    ])
});

/// Item conditions.
pub static ITEM_CONDITIONS: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("new", "New"),
        ("used", "Used"),
        ("collectible", "Collectible"),
        ("refurbished", "Refurbished"),
        ("club", "Club"),
    ])
});

/// Product search contexts.
pub static QUERY_CONTEXTS: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("all", "All"),
        ("apparel", "Apparel"),
        ("appliances", "Appliances"),
        ("arts_and_crafts", "ArtsAndCrafts"),
        ("automotive", "Automotive"),
        ("baby", "Baby"),
        ("beauty", "Beauty"),
        ("books", "Books"),
        ("classical", "Classical"),
        ("digital_music", "DigitalMusic"),
        ("dvd", "DVD"),
        ("electronics", "Electronics"),
        ("foreign_books", "ForeignBooks"),
        ("garden", "Garden"),
        ("grocery", "Grocery"),
        ("health_personal_care", "HealthPersonalCare"),
        ("hobbies", "Hobbies"),
        ("home", "Home"),
        ("home_garden", "HomeGarden"),
        ("home_improvement", "HomeImprovement"),
        ("industrial", "Industrial"),
        ("jewelry", "Jewelry"),
        ("kindle_store", "KindleStore"),
        ("kitchen", "Kitchen"),
        ("lighting", "Lighting"),
        ("magazines", "Magazines"),
        ("miscellaneous", "Miscellaneous"),
        ("mobile_apps", "MobileApps"),
        ("mp3_downloads", "MP3Downloads"),
        ("music", "Music"),
        ("musical_instruments", "MusicalInstruments"),
        ("music_tracks", "MusicTracks"),
        ("office_products", "OfficeProducts"),
        ("outdoor_living", "OutdoorLiving"),
        ("outlet", "Outlet"),
        ("pc_hardware", "PCHardware"),
        ("pet_supplies", "PetSupplies"),
        ("photo", "Photo"),
        ("shoes", "Shoes"),
        ("software", "Software"),
        ("software_video_games", "SoftwareVideoGames"),
        ("sporting_goods", "SportingGoods"),
        ("tools", "Tools"),
        ("toys", "Toys"),
        ("unbox_video", "UnboxVideo"),
        ("vhs", "VHS"),
        ("video", "Video"),
        ("video_games", "VideoGames"),
        ("watches", "Watches"),
        ("wireless", "Wireless"),
        ("wireless_accessories", "WirelessAccessories"),
    ])
});

/// How a feed type is encoded: `xml` or `flat-file`.
pub static FEED_METHODS: Lazy<Table> = Lazy::new(|| {
    FEED_TYPES
        .keys()
        .map(|k| {
            let method = if k.starts_with("flat_") {
                "flat-file"
            } else {
                "xml"
            };
            (*k, method)
        })
        .collect()
});

/// Feed content types by region, then by feed method.
pub static CONTENT_TYPES: Lazy<HashMap<&'static str, Table>> = Lazy::new(|| {
    const XML: &str = "text/xml";
    const LATIN1: &str = "text/tab-separated-values; charset=iso-8859-1";

    HashMap::from([
        ("ca", HashMap::from([("xml", XML), ("flat-file", LATIN1)])),
        (
            "cn",
            HashMap::from([
                ("xml", XML),
                ("flat-file", "text/tab-separated-values; charset=UTF-8"),
                ("flat-file-alt", "text/tab-separated-values; charset=UTF-16"),
            ]),
        ),
        ("eu", HashMap::from([("xml", XML), ("flat-file", LATIN1)])),
        ("in", HashMap::from([("xml", XML), ("flat-file", LATIN1)])),
        (
            "jp",
            HashMap::from([
                ("xml", XML),
                ("flat-file", "text/tab-separated-values; charset=Shift_JIS"),
            ]),
        ),
        ("us", HashMap::from([("xml", XML), ("flat-file", LATIN1)])),
    ])
});

/// Content type to submit a feed of `feed_type` in `region` with.
///
/// `feed_type` must be an alias from [`FEED_TYPES`].
pub fn feed_content_type(region: &str, feed_type: &str) -> Option<&'static str> {
    let method = FEED_METHODS.get(feed_type)?;
    CONTENT_TYPES.get(region)?.get(method).copied()
}
