//! HTTP client for the PostgREST-style backend.

use serde::de::DeserializeOwned;

use pricelist_app::ports::{NomenclatureSource, ServiceSource};
use pricelist_domain::dataset::Dataset;
use pricelist_domain::error::CatalogError;
use pricelist_domain::nomenclature::NomenclatureItem;
use pricelist_domain::service::ServiceItem;

use crate::error::RestError;
use crate::rows::{AmbulatoryRow, LaboratoryRow, NomenclatureRow};

const AMBULATORY_TABLE: &str = "ambulatory_stationary_services";
const LABORATORY_TABLE: &str = "laboratory_services";
const NOMENCLATURE_TABLE: &str = "nomenclature_medical_services";
const NOMENCLATURE_SELECT: &str = "id,chapter,type,class,kod_nomen,name_nomen";

/// Configuration for the REST source adapter.
pub struct Config {
    /// Base URL of the tabular API (e.g. `https://example.supabase.co/rest/v1`).
    pub base_url: String,
    /// API key sent as both `apikey` and bearer token.
    pub api_key: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PRICELIST_SOURCE_URL` or `PRICELIST_SOURCE_KEY`
    /// is not set.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            base_url: std::env::var("PRICELIST_SOURCE_URL")?,
            api_key: std::env::var("PRICELIST_SOURCE_KEY")?,
        })
    }

    /// Build a [`RestSource`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<RestSource, RestError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(RestSource {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
        })
    }
}

/// REST-backed implementation of the source ports.
pub struct RestSource {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestSource {
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
        order: &str,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<T>, RestError> {
        let mut url = format!("{}/{table}?select={select}&order={order}", self.base_url);
        if let Some(offset) = offset {
            url.push_str(&format!("&offset={offset}"));
        }
        if let Some(limit) = limit {
            url.push_str(&format!("&limit={limit}"));
        }

        tracing::debug!(%table, %url, "fetching rows");
        let response = self.request(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RestError::Status { status, body });
        }
        Ok(response.json().await?)
    }

    async fn fetch_count(&self, table: &str) -> Result<u64, RestError> {
        let url = format!("{}/{table}?select=id&limit=0", self.base_url);

        let response = self
            .request(&url)
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RestError::Status { status, body });
        }

        let header = response
            .headers()
            .get(reqwest::header::CONTENT_RANGE)
            .ok_or_else(|| RestError::Count("missing Content-Range header".to_string()))?;
        let value = header
            .to_str()
            .map_err(|_| RestError::Count("non-ASCII Content-Range header".to_string()))?;
        parse_content_range(value)
    }
}

/// Extract the total from a `Content-Range` value such as `0-999/2500` or
/// `*/2500`.
fn parse_content_range(value: &str) -> Result<u64, RestError> {
    value
        .rsplit('/')
        .next()
        .and_then(|total| total.parse().ok())
        .ok_or_else(|| RestError::Count(format!("unparseable Content-Range `{value}`")))
}

impl ServiceSource for RestSource {
    async fn fetch_page(
        &self,
        dataset: Dataset,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<ServiceItem>, CatalogError> {
        let items = match dataset {
            Dataset::AmbulatoryStationary => self
                .fetch_rows::<AmbulatoryRow>(
                    AMBULATORY_TABLE,
                    "*",
                    "section.asc",
                    Some(offset),
                    Some(limit),
                )
                .await
                .map_err(CatalogError::from)?
                .into_iter()
                .map(ServiceItem::from)
                .collect(),
            Dataset::Laboratory => self
                .fetch_rows::<LaboratoryRow>(
                    LABORATORY_TABLE,
                    "*",
                    "section_lab.asc",
                    Some(offset),
                    Some(limit),
                )
                .await
                .map_err(CatalogError::from)?
                .into_iter()
                .map(ServiceItem::from)
                .collect(),
        };
        Ok(items)
    }

    async fn count(&self, dataset: Dataset) -> Result<u64, CatalogError> {
        let table = match dataset {
            Dataset::AmbulatoryStationary => AMBULATORY_TABLE,
            Dataset::Laboratory => LABORATORY_TABLE,
        };
        Ok(self.fetch_count(table).await?)
    }
}

impl NomenclatureSource for RestSource {
    async fn fetch_all(&self) -> Result<Vec<NomenclatureItem>, CatalogError> {
        let rows = self
            .fetch_rows::<NomenclatureRow>(
                NOMENCLATURE_TABLE,
                NOMENCLATURE_SELECT,
                "chapter.asc",
                None,
                None,
            )
            .await
            .map_err(CatalogError::from)?;
        Ok(rows.into_iter().map(NomenclatureItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pricelist_domain::service::ServiceType;

    fn source_for(server: &mockito::ServerGuard) -> RestSource {
        Config {
            base_url: server.url(),
            api_key: "test-key".to_string(),
        }
        .build()
        .unwrap()
    }

    #[tokio::test]
    async fn should_request_ranged_ordered_page_and_map_rows() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!([
            {
                "id": 1,
                "section": "Therapy",
                "subsection_1": "Consultations",
                "subsection_2": null,
                "kod_eru": "A01.01",
                "name_eru": "Initial consultation",
                "price": 1500.0
            },
            {
                "id": 2,
                "section": "Therapy",
                "subsection_1": null,
                "subsection_2": null,
                "kod_eru": "A01.02",
                "name_eru": "Repeat consultation",
                "price": 1200.0
            }
        ]);
        let mock = server
            .mock("GET", "/ambulatory_stationary_services")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("order".into(), "section.asc".into()),
                Matcher::UrlEncoded("offset".into(), "0".into()),
                Matcher::UrlEncoded("limit".into(), "1000".into()),
            ]))
            .match_header("apikey", "test-key")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let source = source_for(&server);
        let items = source
            .fetch_page(Dataset::AmbulatoryStationary, 0, 1000)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].subsection1, "Consultations");
        assert_eq!(items[1].subsection1, "");
        assert_eq!(items[0].service_type, ServiceType::OutpatientInpatient);
    }

    #[tokio::test]
    async fn should_order_laboratory_pages_by_lab_section() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!([
            {
                "id": 10,
                "section_lab": "Hematology",
                "subsection_1_lab": null,
                "subsection_2_lab": null,
                "kod_eru_lab": "L03.01",
                "name_eru_lab": "Complete blood count",
                "price_lab": 450.0
            }
        ]);
        let mock = server
            .mock("GET", "/laboratory_services")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("order".into(), "section_lab.asc".into()),
                Matcher::UrlEncoded("offset".into(), "1000".into()),
                Matcher::UrlEncoded("limit".into(), "1000".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let source = source_for(&server);
        let items = source
            .fetch_page(Dataset::Laboratory, 1000, 1000)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].section, "Hematology");
        assert_eq!(items[0].service_type, ServiceType::Laboratory);
    }

    #[tokio::test]
    async fn should_surface_http_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/ambulatory_stationary_services")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("service unavailable")
            .create_async()
            .await;

        let source = source_for(&server);
        let result = source.fetch_page(Dataset::AmbulatoryStationary, 0, 1000).await;

        assert!(matches!(result, Err(CatalogError::Source(_))));
    }

    #[tokio::test]
    async fn should_parse_exact_count_from_content_range() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/laboratory_services")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "id".into()),
                Matcher::UrlEncoded("limit".into(), "0".into()),
            ]))
            .match_header("prefer", "count=exact")
            .with_status(200)
            .with_header("content-range", "*/2500")
            .with_body("[]")
            .create_async()
            .await;

        let source = source_for(&server);
        let count = source.count(Dataset::Laboratory).await.unwrap();

        mock.assert_async().await;
        assert_eq!(count, 2500);
    }

    #[tokio::test]
    async fn should_fail_count_when_content_range_missing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/ambulatory_stationary_services")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let source = source_for(&server);
        let result = source.count(Dataset::AmbulatoryStationary).await;

        assert!(matches!(result, Err(CatalogError::Source(_))));
    }

    #[tokio::test]
    async fn should_fetch_nomenclature_in_one_ordered_request() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!([
            {
                "id": 3,
                "chapter": "A",
                "type": "Diagnostics",
                "class": "01",
                "kod_nomen": "A01.30.009",
                "name_nomen": "General examination"
            }
        ]);
        let mock = server
            .mock("GET", "/nomenclature_medical_services")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), NOMENCLATURE_SELECT.into()),
                Matcher::UrlEncoded("order".into(), "chapter.asc".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let source = source_for(&server);
        let items = source.fetch_all().await.unwrap();

        mock.assert_async().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].section, "A");
        assert_eq!(items[0].code, "A01.30.009");
    }

    #[test]
    fn should_parse_content_range_with_explicit_range() {
        assert_eq!(parse_content_range("0-999/2500").unwrap(), 2500);
    }

    #[test]
    fn should_parse_content_range_with_wildcard_range() {
        assert_eq!(parse_content_range("*/0").unwrap(), 0);
    }

    #[test]
    fn should_reject_unparseable_content_range() {
        assert!(matches!(
            parse_content_range("garbage"),
            Err(RestError::Count(_))
        ));
    }
}
