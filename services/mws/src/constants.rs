// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Env values used by the MWS client.
pub const MWS_ACCESS_KEY_ID: &str = "MWS_ACCESS_KEY_ID";
pub const MWS_SECRET_KEY: &str = "MWS_SECRET_KEY";
pub const MWS_MERCHANT_ID: &str = "MWS_MERCHANT_ID";
pub const MWS_ENDPOINT: &str = "MWS_ENDPOINT";
pub const MWS_USER_AGENT: &str = "MWS_USER_AGENT";

// Parameters shared by every section.
pub const ACTION: &str = "Action";
pub const AWS_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const MERCHANT: &str = "Merchant";
pub const SELLER_ID: &str = "SellerId";
pub const TIMESTAMP: &str = "Timestamp";
pub const VERSION: &str = "Version";
pub const NEXT_TOKEN: &str = "NextToken";
pub const MAX_COUNT: &str = "MaxCount";
pub const MARKETPLACE_ID: &str = "MarketplaceId";
pub const MARKETPLACE_ID_LIST: &str = "MarketplaceIdList.Id";

/// Version reported as `MWSClientVersion` in the user agent.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest page size accepted by the list operations.
pub const MAX_PAGE_SIZE: u32 = 100;
