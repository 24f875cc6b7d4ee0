// app/src/services/uri_composer.rs

/// Token stored in catalog picture URI templates in place of the real
/// catalog base URL.
pub const PIC_BASE_URL_PLACEHOLDER: &str = "http://catalogbaseurltobereplaced";

/// Resolves catalog picture URI templates against the configured base URL.
#[derive(Debug, Clone)]
pub struct UriComposer {
  catalog_base_url: String,
}

impl UriComposer {
  pub fn new(catalog_base_url: String) -> Self {
    UriComposer { catalog_base_url }
  }

  pub fn compose_pic_uri(&self, uri_template: &str) -> String {
    uri_template.replace(PIC_BASE_URL_PLACEHOLDER, &self.catalog_base_url)
  }
}
