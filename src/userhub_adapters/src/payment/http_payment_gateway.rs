use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use userhub_core::{PaymentGateway, PaymentGatewayError};

/// HTTP client for the external payment service. Single attempt per call,
/// no retries.
pub struct HttpPaymentGateway {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl HttpPaymentGateway {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, PaymentGatewayError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| PaymentGatewayError::Gateway(e.to_string()))?;
        base.join(path)
            .map_err(|e| PaymentGatewayError::Gateway(e.to_string()))
    }

    async fn into_payload(response: reqwest::Response) -> Result<Value, PaymentGatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentGatewayError::Request {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| PaymentGatewayError::Gateway(e.to_string()))
    }
}

#[async_trait::async_trait]
impl PaymentGateway for HttpPaymentGateway {
    #[tracing::instrument(name = "Processing payment", skip_all)]
    async fn process_payment(&self, payment_data: Value) -> Result<Value, PaymentGatewayError> {
        let url = self.endpoint("payments")?;

        let response = self
            .http_client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payment_data)
            .send()
            .await
            .map_err(|e| PaymentGatewayError::Gateway(e.to_string()))?;

        Self::into_payload(response).await
    }

    #[tracing::instrument(name = "Fetching payment status", skip(self))]
    async fn get_payment_status(
        &self,
        transaction_id: &str,
    ) -> Result<Value, PaymentGatewayError> {
        let url = self.endpoint(&format!("payments/{transaction_id}"))?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| PaymentGatewayError::Gateway(e.to_string()))?;

        Self::into_payload(response).await
    }
}
