//! DDoSX service: domain verification

use anyhow::Result;

use crate::api::ApiClient;

/// A downloaded verification file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFile {
    pub content: String,
    pub filename: String,
}

#[allow(async_fn_in_trait)]
pub trait DDoSXService {
    async fn verify_domain_dns(&self, domain_name: &str) -> Result<()>;
    async fn verify_domain_file_upload(&self, domain_name: &str) -> Result<()>;
    async fn download_domain_verification_file(
        &self,
        domain_name: &str,
    ) -> Result<VerificationFile>;
}

impl DDoSXService for ApiClient {
    async fn verify_domain_dns(&self, domain_name: &str) -> Result<()> {
        self.post_empty(&["ddosx", "v1", "domains", domain_name, "verify", "dns"])
            .await
    }

    async fn verify_domain_file_upload(&self, domain_name: &str) -> Result<()> {
        self.post_empty(&["ddosx", "v1", "domains", domain_name, "verify", "file-upload"])
            .await
    }

    async fn download_domain_verification_file(
        &self,
        domain_name: &str,
    ) -> Result<VerificationFile> {
        let (content, filename) = self
            .download(&["ddosx", "v1", "domains", domain_name, "verify", "file-upload"])
            .await?;

        Ok(VerificationFile {
            content,
            filename: filename.unwrap_or_else(|| format!("{}.txt", domain_name)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::{http_response, serve};
    use crate::config::Config;

    fn client(base: String) -> ApiClient {
        ApiClient::new(Config {
            api_key: Some("k".to_string()),
            api_uri: base,
            ..Config::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn verify_dns_posts_to_domain() {
        let (base, seen) = serve(vec![http_response("200 OK", &[], "")]).await;

        client(base).verify_domain_dns("example.com").await.unwrap();

        assert!(seen.lock().unwrap()[0]
            .starts_with("POST /ddosx/v1/domains/example.com/verify/dns "));
    }

    #[tokio::test]
    async fn domain_name_stays_one_path_segment() {
        let (base, seen) = serve(vec![http_response("200 OK", &[], "")]).await;

        client(base).verify_domain_file_upload("a.com/b?x").await.unwrap();

        assert!(seen.lock().unwrap()[0]
            .starts_with("POST /ddosx/v1/domains/a.com%2Fb%3Fx/verify/file-upload "));
    }

    #[tokio::test]
    async fn download_falls_back_to_domain_filename() {
        let (base, _) = serve(vec![http_response("200 OK", &[], "abc")]).await;

        let file = client(base)
            .download_domain_verification_file("example.com")
            .await
            .unwrap();

        assert_eq!(
            file,
            VerificationFile {
                content: "abc".to_string(),
                filename: "example.com.txt".to_string(),
            }
        );
    }
}
