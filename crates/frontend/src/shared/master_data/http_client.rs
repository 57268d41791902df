use async_trait::async_trait;
use contracts::shared::master_data::{MasterDataError, TableClient};
use contracts::shared::record_values::RecordValues;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::error_message;

/// `TableClient` over the backend's `/api/master/:table` endpoints
#[derive(Debug, Clone)]
pub struct HttpTableClient {
    base: String,
}

impl HttpTableClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/api/master/{}", self.base, urlencoding::encode(table))
    }

    fn row_url(&self, table: &str, id: &str) -> String {
        format!("{}/{}", self.table_url(table), urlencoding::encode(id))
    }
}

fn transport(e: gloo_net::Error) -> MasterDataError {
    MasterDataError::Collaborator(e.to_string())
}

/// Non-2xx responses become errors carrying the server message
async fn checked(response: Response) -> Result<Response, MasterDataError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(MasterDataError::Collaborator(error_message(status, &body)))
}

#[async_trait(?Send)]
impl TableClient for HttpTableClient {
    async fn select_ordered(
        &self,
        table: &str,
        order_by: &str,
    ) -> Result<Vec<RecordValues>, MasterDataError> {
        let url = format!(
            "{}?order_by={}",
            self.table_url(table),
            urlencoding::encode(order_by)
        );
        let response = Request::get(&url).send().await.map_err(transport)?;
        checked(response).await?.json().await.map_err(transport)
    }

    async fn insert(
        &self,
        table: &str,
        values: RecordValues,
    ) -> Result<RecordValues, MasterDataError> {
        let response = Request::post(&self.table_url(table))
            .json(&values)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        checked(response).await?.json().await.map_err(transport)
    }

    async fn update(
        &self,
        table: &str,
        id: &str,
        values: RecordValues,
    ) -> Result<RecordValues, MasterDataError> {
        let response = Request::put(&self.row_url(table, id))
            .json(&values)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        checked(response).await?.json().await.map_err(transport)
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), MasterDataError> {
        let response = Request::delete(&self.row_url(table, id))
            .send()
            .await
            .map_err(transport)?;
        checked(response).await?;
        Ok(())
    }
}
