//! Property tests for template rendering.

use proptest::prelude::*;

use uiforge::{AssetKind, TemplateCatalog};

fn kinds() -> impl Strategy<Value = AssetKind> {
    prop_oneof![
        Just(AssetKind::Markup),
        Just(AssetKind::Stylesheet),
        Just(AssetKind::BehaviorScript),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering is pure - identical inputs, identical bytes.
    #[test]
    fn property_render_is_deterministic(
        kind in kinds(),
        variant in "[a-z]{0,12}",
        stem in "[A-Za-z][A-Za-z0-9]{0,16}"
    ) {
        let catalog = TemplateCatalog::new();
        let first = catalog.render(kind, &variant, &stem, None);
        let second = catalog.render(kind, &variant, &stem, None);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "one render failed, the other did not"),
        }
    }

    /// PROPERTY: every non-custom tag produces a usable body.
    #[test]
    fn property_unknown_variants_fall_back(
        kind in kinds(),
        variant in "[a-z]{1,12}",
        stem in "[A-Z][a-z]{1,12}"
    ) {
        prop_assume!(variant != "custom");
        let catalog = TemplateCatalog::new();
        let body = catalog.render(kind, &variant, &stem, None).unwrap();
        prop_assert!(!body.is_empty());
    }

    /// PROPERTY: the custom variant round-trips any non-blank body untouched.
    #[test]
    fn property_custom_body_is_verbatim(
        kind in kinds(),
        body in "(?s).{1,200}"
    ) {
        prop_assume!(!body.trim().is_empty());
        let catalog = TemplateCatalog::new();
        let rendered = catalog.render(kind, "custom", "Ignored", Some(&body)).unwrap();
        prop_assert_eq!(rendered, body);
    }
}
