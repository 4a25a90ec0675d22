//! USS stylesheet skeletons
//!
//! The structural skeletons mirror the markup shapes class-for-class so a
//! paired render stays usable without manual edits.

use crate::models::StyleVariant;

pub(super) fn skeleton(variant: StyleVariant) -> &'static str {
    match variant {
        StyleVariant::Theme => THEME,
        StyleVariant::Utilities => UTILITIES,
        StyleVariant::Window => WINDOW,
        StyleVariant::Panel => PANEL,
        StyleVariant::Form => FORM,
        StyleVariant::Modal => MODAL,
        StyleVariant::Component | StyleVariant::Custom => COMPONENT,
    }
}

const THEME: &str = r#":root {
    --{{element}}-color-background: rgb(32, 32, 32);
    --{{element}}-color-surface: rgb(48, 48, 48);
    --{{element}}-color-accent: rgb(88, 166, 255);
    --{{element}}-color-text: rgb(238, 238, 238);
    --{{element}}-spacing: 8px;
    --{{element}}-radius: 4px;
}
"#;

const UTILITIES: &str = r#".{{element}}-hidden {
    display: none;
}

.{{element}}-row {
    flex-direction: row;
}

.{{element}}-grow {
    flex-grow: 1;
}

.{{element}}-centered {
    align-items: center;
    justify-content: center;
}
"#;

const COMPONENT: &str = r#".{{element}} {
    flex-grow: 0;
    padding: 8px;
}

.{{element}}__label {
    -unity-font-style: bold;
}

.{{element}}:hover {
    opacity: 0.9;
}
"#;

const WINDOW: &str = r#".{{element}} {
    flex-grow: 1;
    background-color: rgb(48, 48, 48);
}

.{{element}}__header {
    flex-direction: row;
    padding: 8px;
}

.{{element}}__title {
    -unity-font-style: bold;
    font-size: 16px;
}

.{{element}}__content {
    flex-grow: 1;
    padding: 8px;
}

.{{element}}__actions {
    flex-direction: row;
    justify-content: flex-end;
    padding: 8px;
}

.{{element}}__ok {
    min-width: 80px;
}

.{{element}}__cancel {
    min-width: 80px;
}
"#;

const PANEL: &str = r#".{{element}} {
    flex-grow: 1;
    padding: 8px;
}

.{{element}}__title {
    -unity-font-style: bold;
}

.{{element}}__body {
    flex-grow: 1;
}
"#;

const FORM: &str = r#".{{element}} {
    padding: 12px;
}

.{{element}}__title {
    -unity-font-style: bold;
    font-size: 14px;
}

.{{element}}__fields {
    margin-top: 8px;
    margin-bottom: 8px;
}

.{{element}}__field {
    margin-bottom: 4px;
}

.{{element}}__submit {
    align-self: flex-end;
    min-width: 96px;
}
"#;

const MODAL: &str = r#".{{element}}__overlay {
    position: absolute;
    left: 0;
    top: 0;
    right: 0;
    bottom: 0;
    background-color: rgba(0, 0, 0, 0.6);
    align-items: center;
    justify-content: center;
}

.{{element}} {
    min-width: 320px;
    padding: 16px;
    background-color: rgb(48, 48, 48);
}

.{{element}}__close {
    position: absolute;
    right: 4px;
    top: 4px;
}

.{{element}}__title {
    -unity-font-style: bold;
    font-size: 16px;
}

.{{element}}__content {
    margin-top: 12px;
}
"#;
