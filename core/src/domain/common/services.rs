use std::sync::Arc;

/// Generic service holding every injected collaborator.
///
/// Concrete adapters are chosen once at startup (see
/// `crate::application::create_service`); request handling only ever sees the
/// port traits. All collaborators are shared read-only across requests.
#[derive(Clone)]
pub struct Service<B, X, F, CL, CH> {
    pub barcode_lookup: Arc<B>,
    pub extractor: Arc<X>,
    pub fallback_catalog: Arc<F>,
    pub classifier: Arc<CL>,
    pub chat_model: Arc<CH>,
}

impl<B, X, F, CL, CH> Service<B, X, F, CL, CH> {
    pub fn new(barcode_lookup: B, extractor: X, fallback_catalog: F, classifier: CL, chat_model: CH) -> Self {
        Self {
            barcode_lookup: Arc::new(barcode_lookup),
            extractor: Arc::new(extractor),
            fallback_catalog: Arc::new(fallback_catalog),
            classifier: Arc::new(classifier),
            chat_model: Arc::new(chat_model),
        }
    }
}
