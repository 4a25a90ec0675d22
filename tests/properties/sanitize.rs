//! Property tests for logical-name sanitization.

use std::path::{Component, Path};

use proptest::prelude::*;

use uiforge::{sanitize, AssetKind};

fn kinds() -> impl Strategy<Value = AssetKind> {
    prop_oneof![
        Just(AssetKind::Markup),
        Just(AssetKind::Stylesheet),
        Just(AssetKind::BehaviorScript),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sanitization never panics on arbitrary input.
    #[test]
    fn property_sanitize_never_panics(
        kind in kinds(),
        name in "(?s).{0,256}"
    ) {
        let _ = sanitize(kind, &name);
    }

    /// PROPERTY: a sanitized stem joined to its target folder stays inside
    /// the assets root - no parent segments, no absolute override. This is
    /// checked on the joined result, not on the stem alone.
    #[test]
    fn property_joined_path_stays_inside_assets(
        kind in kinds(),
        name in "(?s).{0,128}"
    ) {
        if let Ok(stem) = sanitize(kind, &name) {
            let assets = Path::new("/project/Assets");
            let joined = assets.join("UI").join(format!("{stem}.{}", kind.extension()));
            prop_assert!(joined.starts_with(assets));
            prop_assert!(joined
                .components()
                .all(|c| !matches!(c, Component::ParentDir)));
        }
    }

    /// PROPERTY: sanitizing an already-sanitized stem is the identity.
    #[test]
    fn property_sanitize_is_idempotent(
        kind in kinds(),
        name in "(?s).{0,128}"
    ) {
        if let Ok(once) = sanitize(kind, &name) {
            prop_assert_eq!(sanitize(kind, &once).unwrap(), once);
        }
    }

    /// PROPERTY: a redundant extension never doubles up.
    #[test]
    fn property_extension_stripping(
        stem in "[A-Za-z][A-Za-z0-9_-]{0,24}"
    ) {
        let with_ext = format!("{stem}.uxml");
        prop_assert_eq!(
            sanitize(AssetKind::Markup, &with_ext).unwrap(),
            sanitize(AssetKind::Markup, &stem).unwrap()
        );
    }
}
