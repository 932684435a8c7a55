use crate::domain::{
    analysis::{
        entities::{BarcodeLookupOutcome, ResolvedSource, SourceProvenance},
        ports::{BarcodeLookup, FallbackCatalog, NutritionExtractor},
    },
    common::entities::app_errors::CoreError,
};

/// Resolves exactly one data source for a request.
///
/// Ordered strategies, first success wins, strictly sequential:
///   1. remote barcode lookup (when a barcode is supplied);
///   2. image extraction (when an image is supplied);
///   3. embedded fallback catalog (when a barcode is supplied).
///
/// A transient lookup failure degrades to the next strategy exactly like a
/// definitive miss. An extraction failure is remembered: if no later strategy
/// succeeds it surfaces as the upstream error, otherwise the request fails
/// with `NoSourceAvailable`.
pub async fn resolve_source<B, X, F>(
    barcode: Option<&str>,
    image: Option<&[u8]>,
    barcode_lookup: &B,
    extractor: &X,
    fallback_catalog: &F,
) -> Result<ResolvedSource, CoreError>
where
    B: BarcodeLookup,
    X: NutritionExtractor,
    F: FallbackCatalog,
{
    if barcode.is_none() && image.is_none() {
        return Err(CoreError::NoSourceAvailable);
    }

    if let Some(code) = barcode {
        match barcode_lookup.lookup(code.to_string()).await {
            Ok(BarcodeLookupOutcome::Found(data)) => {
                return Ok(ResolvedSource {
                    provenance: SourceProvenance::Barcode,
                    data,
                });
            }
            Ok(BarcodeLookupOutcome::NotFound) => {
                tracing::warn!(barcode = %code, "barcode not found, trying next source");
            }
            Err(e) => {
                tracing::warn!(barcode = %code, error = %e, "barcode lookup failed, trying next source");
            }
        }
    }

    let mut extraction_error = None;
    if let Some(image_data) = image {
        match extractor.extract(image_data.to_vec()).await {
            // an empty ingredient list is valid data, not a failure
            Ok(data) => {
                return Ok(ResolvedSource {
                    provenance: SourceProvenance::Gemini,
                    data,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "image extraction failed, trying next source");
                extraction_error = Some(e);
            }
        }
    }

    if let Some(code) = barcode {
        if let Some(data) = fallback_catalog.lookup(code) {
            tracing::warn!(barcode = %code, "serving product from local fallback catalog");
            return Ok(ResolvedSource {
                provenance: SourceProvenance::Fallback,
                data,
            });
        }
    }

    match extraction_error {
        Some(e) => Err(e),
        None => Err(CoreError::NoSourceAvailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::RawProductData;
    use crate::domain::analysis::ports::{
        MockBarcodeLookup, MockFallbackCatalog, MockNutritionExtractor,
    };

    fn product(ingredients: &[&str]) -> RawProductData {
        RawProductData::new(
            ingredients.iter().map(|i| i.to_string()).collect(),
            serde_json::Map::new(),
        )
    }

    fn no_lookup() -> MockBarcodeLookup {
        let mut mock = MockBarcodeLookup::new();
        mock.expect_lookup().never();
        mock
    }

    fn no_extractor() -> MockNutritionExtractor {
        let mut mock = MockNutritionExtractor::new();
        mock.expect_extract().never();
        mock
    }

    fn no_catalog() -> MockFallbackCatalog {
        let mut mock = MockFallbackCatalog::new();
        mock.expect_lookup().never();
        mock
    }

    #[tokio::test]
    async fn found_barcode_wins_and_image_is_never_tried() {
        let mut lookup = MockBarcodeLookup::new();
        lookup
            .expect_lookup()
            .returning(|_| Box::pin(async { Ok(BarcodeLookupOutcome::Found(product(&["oats"]))) }));

        let resolved = resolve_source(
            Some("123"),
            Some(&[1u8, 2, 3][..]),
            &lookup,
            &no_extractor(),
            &no_catalog(),
        )
        .await
        .unwrap();

        assert_eq!(resolved.provenance, SourceProvenance::Barcode);
        assert_eq!(resolved.data.ingredients, vec!["oats"]);
    }

    #[tokio::test]
    async fn not_found_barcode_falls_back_to_image() {
        let mut lookup = MockBarcodeLookup::new();
        lookup
            .expect_lookup()
            .returning(|_| Box::pin(async { Ok(BarcodeLookupOutcome::NotFound) }));
        let mut extractor = MockNutritionExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Box::pin(async { Ok(product(&["water", "sugar"])) }));

        let resolved = resolve_source(
            Some("123"),
            Some(&[1u8][..]),
            &lookup,
            &extractor,
            &no_catalog(),
        )
        .await
        .unwrap();

        assert_eq!(resolved.provenance, SourceProvenance::Gemini);
        assert_eq!(resolved.data.ingredients, vec!["water", "sugar"]);
    }

    #[tokio::test]
    async fn transient_lookup_error_degrades_like_not_found() {
        let mut lookup = MockBarcodeLookup::new();
        lookup.expect_lookup().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });
        let mut extractor = MockNutritionExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Box::pin(async { Ok(product(&["rice"])) }));

        let resolved = resolve_source(
            Some("123"),
            Some(&[1u8][..]),
            &lookup,
            &extractor,
            &no_catalog(),
        )
        .await
        .unwrap();

        assert_eq!(resolved.provenance, SourceProvenance::Gemini);
    }

    #[tokio::test]
    async fn empty_extracted_ingredients_is_success() {
        let mut extractor = MockNutritionExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Box::pin(async { Ok(product(&[])) }));

        let resolved = resolve_source(None, Some(&[1u8][..]), &no_lookup(), &extractor, &no_catalog())
            .await
            .unwrap();

        assert_eq!(resolved.provenance, SourceProvenance::Gemini);
        assert!(resolved.data.ingredients.is_empty());
    }

    #[tokio::test]
    async fn fallback_catalog_serves_after_both_remotes_fail() {
        let mut lookup = MockBarcodeLookup::new();
        lookup.expect_lookup().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
        });
        let mut extractor = MockNutritionExtractor::new();
        extractor.expect_extract().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
        });
        let mut catalog = MockFallbackCatalog::new();
        catalog
            .expect_lookup()
            .returning(|_| Some(product(&["cocoa"])));

        let resolved = resolve_source(Some("42"), Some(&[1u8][..]), &lookup, &extractor, &catalog)
            .await
            .unwrap();

        assert_eq!(resolved.provenance, SourceProvenance::Fallback);
    }

    #[tokio::test]
    async fn neither_barcode_nor_image_is_client_error() {
        let err = resolve_source(None, None, &no_lookup(), &no_extractor(), &no_catalog())
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NoSourceAvailable);
    }

    #[tokio::test]
    async fn extraction_failure_with_no_fallback_surfaces_upstream_error() {
        let mut extractor = MockNutritionExtractor::new();
        extractor.expect_extract().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("model down".to_string())) })
        });

        let err = resolve_source(None, Some(&[1u8][..]), &no_lookup(), &extractor, &no_catalog())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn barcode_miss_without_image_or_catalog_hit_is_no_source() {
        let mut lookup = MockBarcodeLookup::new();
        lookup
            .expect_lookup()
            .returning(|_| Box::pin(async { Ok(BarcodeLookupOutcome::NotFound) }));
        let mut catalog = MockFallbackCatalog::new();
        catalog.expect_lookup().returning(|_| None);

        let err = resolve_source(Some("404"), None, &lookup, &no_extractor(), &catalog)
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NoSourceAvailable);
    }
}
