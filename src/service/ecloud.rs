//! eCloud service: hosts and sites

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, RequestParameters};
use crate::output::TableRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostCpu {
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub cores: i32,
    #[serde(default)]
    pub speed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostRam {
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub reserved: i32,
    #[serde(default)]
    pub allocated: i32,
    #[serde(default)]
    pub available: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: i64,
    #[serde(default)]
    pub solution_id: i32,
    #[serde(default)]
    pub pod_id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpu: HostCpu,
    #[serde(default)]
    pub ram: HostRam,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub solution_id: i32,
    #[serde(default)]
    pub pod_id: i32,
}

#[allow(async_fn_in_trait)]
pub trait ECloudService {
    async fn get_hosts(&self, params: &RequestParameters) -> Result<Vec<Host>>;
    async fn get_host(&self, id: i64) -> Result<Host>;
    async fn get_sites(&self, params: &RequestParameters) -> Result<Vec<Site>>;
    async fn get_site(&self, id: i64) -> Result<Site>;
}

impl ECloudService for ApiClient {
    async fn get_hosts(&self, params: &RequestParameters) -> Result<Vec<Host>> {
        self.get_all(&["ecloud", "v1", "hosts"], params).await
    }

    async fn get_host(&self, id: i64) -> Result<Host> {
        let id = id.to_string();
        Ok(self.get::<Host>(&["ecloud", "v1", "hosts", id.as_str()], &[]).await?.data)
    }

    async fn get_sites(&self, params: &RequestParameters) -> Result<Vec<Site>> {
        self.get_all(&["ecloud", "v1", "sites"], params).await
    }

    async fn get_site(&self, id: i64) -> Result<Site> {
        let id = id.to_string();
        Ok(self.get::<Site>(&["ecloud", "v1", "sites", id.as_str()], &[]).await?.data)
    }
}

impl TableRow for Host {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "SOLUTION ID", "POD ID", "CPU CORES", "RAM CAPACITY"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.solution_id.to_string(),
            self.pod_id.to_string(),
            self.cpu.cores.to_string(),
            format!("{}GB", self.ram.capacity),
        ]
    }
}

impl TableRow for Site {
    fn headers() -> &'static [&'static str] {
        &["ID", "STATE", "SOLUTION ID", "POD ID"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.state.clone(),
            self.solution_id.to_string(),
            self.pod_id.to_string(),
        ]
    }
}
