//! Minimal W3C WebDriver wire-protocol client.
//!
//! Speaks plain JSON-over-HTTP to a driver endpoint (chromedriver,
//! geckodriver, or a Selenium hub). Covers only what a scraping session
//! needs: session lifecycle, navigation, CSS element lookup, text and
//! attribute reads, and synchronous script execution.
//!
//! # Example
//!
//! ```rust,ignore
//! use webdriver::WebDriverClient;
//!
//! let driver = WebDriverClient::new_session("http://localhost:9515").await?;
//! driver.goto("https://example.com").await?;
//! let rows = driver.find_elements("div.dataRow").await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, WebDriverError};
pub use types::ElementRef;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use types::{ErrorValue, NewSessionValue, WireResponse};

pub struct WebDriverClient {
    client: reqwest::Client,
    base_url: String,
    session_id: String,
}

impl WebDriverClient {
    /// Open a new headless browser session against a driver endpoint.
    pub async fn new_session(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::new();
        let body = json!({
            "capabilities": {
                "alwaysMatch": {
                    "goog:chromeOptions": {
                        "args": ["--headless=new", "--window-size=1920,1080"]
                    }
                }
            }
        });

        let base_url = base_url.trim_end_matches('/').to_string();
        let resp = client
            .post(format!("{}/session", base_url))
            .json(&body)
            .send()
            .await?;
        let value: NewSessionValue = Self::decode(resp).await?;
        tracing::debug!(session_id = %value.session_id, "WebDriver session created");

        Ok(Self {
            client,
            base_url,
            session_id: value.session_id,
        })
    }

    /// Navigate the session to a URL.
    pub async fn goto(&self, url: &str) -> Result<()> {
        let _: Value = self.post("/url", json!({ "url": url })).await?;
        Ok(())
    }

    /// Find all elements matching a CSS selector. Empty vec when none match.
    pub async fn find_elements(&self, css: &str) -> Result<Vec<ElementRef>> {
        self.post(
            "/elements",
            json!({ "using": "css selector", "value": css }),
        )
        .await
    }

    /// Find the first element matching a CSS selector.
    pub async fn find_element(&self, css: &str) -> Result<ElementRef> {
        self.post(
            "/element",
            json!({ "using": "css selector", "value": css }),
        )
        .await
    }

    /// Rendered text of an element.
    pub async fn element_text(&self, element: &ElementRef) -> Result<String> {
        self.get(&format!("/element/{}/text", element.id)).await
    }

    /// Attribute value of an element, `None` when the attribute is unset.
    pub async fn element_attribute(
        &self,
        element: &ElementRef,
        name: &str,
    ) -> Result<Option<String>> {
        self.get(&format!("/element/{}/attribute/{}", element.id, name))
            .await
    }

    /// Execute a synchronous script in the page, returning its result.
    pub async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.post("/execute/sync", json!({ "script": script, "args": args }))
            .await
    }

    /// Tear down the browser session.
    pub async fn delete_session(&self) -> Result<()> {
        let url = format!("{}/session/{}", self.base_url, self.session_id);
        let resp = self.client.delete(&url).send().await?;
        let _: Value = Self::decode(resp).await?;
        tracing::debug!(session_id = %self.session_id, "WebDriver session closed");
        Ok(())
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        let url = format!("{}/session/{}{}", self.base_url, self.session_id, path);
        let resp = self.client.post(&url).json(&body).send().await?;
        Self::decode(resp).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/session/{}{}", self.base_url, self.session_id, path);
        let resp = self.client.get(&url).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<WireResponse<ErrorValue>>().await {
                Ok(err) => {
                    if err.value.error == "no such element" {
                        return Err(WebDriverError::NoSuchElement(err.value.message));
                    }
                    format!("{}: {}", err.value.error, err.value.message)
                }
                Err(_) => "unparseable error body".to_string(),
            };
            return Err(WebDriverError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: WireResponse<T> = resp.json().await?;
        Ok(body.value)
    }
}
