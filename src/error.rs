use thiserror::Error;

/// Reasons a component could not be mounted on the page.
///
/// None of these are fatal: the caller logs and skips the component.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{0} is not the expected element type")]
    WrongElementType(String),
    #[error("no 2d context on #{0}")]
    NoContext(String),
    #[error("js error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        FxError::Js(format!("{:?}", v))
    }
}
