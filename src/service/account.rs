//! Account service: invoices

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::response::ApiResponse;
use crate::api::{ApiClient, RequestParameters};
use crate::output::TableRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub net: f64,
    #[serde(default)]
    pub vat: f64,
    #[serde(default)]
    pub gross: f64,
}

#[allow(async_fn_in_trait)]
pub trait AccountService {
    async fn get_invoices(&self, params: &RequestParameters) -> Result<Vec<Invoice>>;
    async fn get_invoice(&self, id: i64) -> Result<Invoice>;
}

impl AccountService for ApiClient {
    async fn get_invoices(&self, params: &RequestParameters) -> Result<Vec<Invoice>> {
        self.get_all(&["account", "v1", "invoices"], params).await
    }

    async fn get_invoice(&self, id: i64) -> Result<Invoice> {
        let id = id.to_string();
        let response: ApiResponse<Invoice> = self
            .get(&["account", "v1", "invoices", id.as_str()], &[])
            .await?;
        Ok(response.data)
    }
}

impl TableRow for Invoice {
    fn headers() -> &'static [&'static str] {
        &["ID", "DATE", "PAID", "NET", "VAT", "GROSS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.map(|d| d.to_string()).unwrap_or_default(),
            self.paid.to_string(),
            format!("{:.2}", self.net),
            format!("{:.2}", self.vat),
            format!("{:.2}", self.gross),
        ]
    }
}
