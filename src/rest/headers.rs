use axum::http::{HeaderMap, HeaderName, HeaderValue, header::LINK};
use tracing::debug;

use crate::pagination::Page;

pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Builds the `x-<app>-alert` / `x-<app>-params` headers sent with writes.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    application_name: String,
    alert: HeaderName,
    params: HeaderName,
}

impl AlertHeaders {
    pub fn new(application_name: impl Into<String>, alert: HeaderName, params: HeaderName) -> Self {
        Self {
            application_name: application_name.into(),
            alert,
            params,
        }
    }

    pub fn alert_name(&self) -> &HeaderName {
        &self.alert
    }

    pub fn params_name(&self) -> &HeaderName {
        &self.params
    }

    pub fn entity_created(&self, entity_name: &str, param: &str) -> HeaderMap {
        self.alert(entity_name, "created", param)
    }

    pub fn entity_updated(&self, entity_name: &str, param: &str) -> HeaderMap {
        self.alert(entity_name, "updated", param)
    }

    pub fn entity_deleted(&self, entity_name: &str, param: &str) -> HeaderMap {
        self.alert(entity_name, "deleted", param)
    }

    fn alert(&self, entity_name: &str, action: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let message = format!("{}.{}.{}", self.application_name, entity_name, action);
        match HeaderValue::from_str(&message) {
            Ok(value) => {
                headers.insert(self.alert.clone(), value);
            }
            Err(_) => debug!("alert message {} is not a valid header value", message),
        }
        match HeaderValue::from_str(param) {
            Ok(value) => {
                headers.insert(self.params.clone(), value);
            }
            Err(_) => debug!("alert param {} is not a valid header value", param),
        }
        headers
    }
}

/// `X-Total-Count` plus, for paged listings, an RFC 5988 `Link` header.
pub fn pagination_headers<T>(base_url: &str, page: &Page<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT, HeaderValue::from(page.total));

    let Some(paging) = page.paging else {
        return headers;
    };

    let total_pages = page.total_pages();
    let link = |index: u64, rel: &str| {
        format!(
            "<{}?page={}&size={}>; rel=\"{}\"",
            base_url, index, paging.size, rel
        )
    };

    let mut links = Vec::with_capacity(4);
    if paging.page + 1 < total_pages {
        links.push(link(paging.page + 1, "next"));
    }
    if paging.page > 0 {
        links.push(link(paging.page - 1, "prev"));
    }
    links.push(link(total_pages.saturating_sub(1), "last"));
    links.push(link(0, "first"));

    if let Ok(value) = HeaderValue::from_str(&links.join(",")) {
        headers.insert(LINK, value);
    }
    headers
}
