//! # Redirect URLs
//!
//! Success and cancel targets for the hosted checkout page, built from the
//! storefront's public base URL.

/// Used when no public URL is configured
pub const DEFAULT_BASE_URL: &str = "https://ricijopooo-1sjx.vercel.app";

/// Placeholder the provider replaces with the real session ID on redirect
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Storefront redirect URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrls {
    base_url: String,
}

impl RedirectUrls {
    /// Create from a base URL. Empty or missing values fall back to
    /// `DEFAULT_BASE_URL`; a trailing `/` is dropped.
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Order confirmation page, with the session placeholder
    pub fn success_url(&self, reference: &str) -> String {
        format!(
            "{}/confirmacao.html?session_id={}&external_reference={}",
            self.base_url, SESSION_ID_PLACEHOLDER, reference
        )
    }

    /// Back to the cart, flagged as cancelled
    pub fn cancel_url(&self, reference: &str) -> String {
        format!(
            "{}/carrinho.html?cancelled=true&external_reference={}",
            self.base_url, reference
        )
    }
}

impl Default for RedirectUrls {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_urls() {
        let urls = RedirectUrls::new(Some("https://loja.example.com"));

        assert_eq!(
            urls.success_url("RICIJO-1"),
            "https://loja.example.com/confirmacao.html?session_id={CHECKOUT_SESSION_ID}&external_reference=RICIJO-1"
        );
        assert_eq!(
            urls.cancel_url("RICIJO-1"),
            "https://loja.example.com/carrinho.html?cancelled=true&external_reference=RICIJO-1"
        );
    }

    #[test]
    fn test_fallback_base_url() {
        assert_eq!(RedirectUrls::new(None).base_url(), DEFAULT_BASE_URL);
        assert_eq!(RedirectUrls::new(Some("  ")).base_url(), DEFAULT_BASE_URL);
        assert_eq!(RedirectUrls::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let urls = RedirectUrls::new(Some("https://loja.example.com/"));
        assert_eq!(urls.base_url(), "https://loja.example.com");
    }
}
