use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("expected anchor `{selector}` is missing from the page")]
    MissingAnchor { selector: String },

    #[error("{context}: {message}")]
    Dom { context: &'static str, message: String },

    #[error("a submission is already being sent")]
    SubmissionInFlight,
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        SiteError::MissingAnchor {
            selector: selector.into(),
        }
    }

    /// Wraps a JS exception thrown by a web-sys call.
    pub fn dom(context: &'static str, err: JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        SiteError::Dom { context, message }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_anchor_names_the_selector() {
        let err = SiteError::missing("#contactForm");
        assert_eq!(
            err.to_string(),
            "expected anchor `#contactForm` is missing from the page"
        );
    }

    #[test]
    fn dom_error_carries_context() {
        let err = SiteError::Dom {
            context: "scroll listener",
            message: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "scroll listener: denied");
    }
}
