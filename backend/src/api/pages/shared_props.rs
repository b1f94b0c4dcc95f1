use chrono::Utc;
use common::page_props::SharedPageProps;

use crate::gql_utils::RequestMeter;

/// Shared metadata bundle attached to every successful page resolution.
pub fn shared_page_props(meter: &RequestMeter) -> SharedPageProps {
    SharedPageProps {
        last_build_at: Utc::now(),
        api_requests: meter.count(),
    }
}
