use web_sys::wasm_bindgen::JsValue;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Fetch(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    /// The backend answered with an `error` message.
    #[error("{0}")]
    Rejected(String),
    #[error("Missing element {0}")]
    MissingElement(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for AppError {
    fn from(js_val: JsValue) -> Self {
        let js_err = js_sys::Error::from(js_val);
        Self::Dom(js_err.message().as_string().unwrap_or_default())
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Fetch(e.to_string())
    }
}
