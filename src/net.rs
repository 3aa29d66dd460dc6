//! One-shot fetch of the event feed. Runs once at startup outside the
//! frame loop; the caller swaps the parsed list in whole on completion.

use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        return Err(anyhow!("feed request failed: HTTP {}", resp.status()));
    }
    let text_promise = resp.text().map_err(|e| anyhow!("{:?}", e))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    body.as_string()
        .ok_or_else(|| anyhow!("response body was not text"))
}
