//! UXML document skeletons

use crate::models::MarkupVariant;

pub(super) fn skeleton(variant: MarkupVariant) -> &'static str {
    match variant {
        MarkupVariant::Window => WINDOW,
        MarkupVariant::Panel => PANEL,
        MarkupVariant::Form => FORM,
        MarkupVariant::Modal => MODAL,
        MarkupVariant::Document | MarkupVariant::Custom => DOCUMENT,
    }
}

const DOCUMENT: &str = r#"<ui:UXML xmlns:ui="UnityEngine.UIElements" xmlns:uie="UnityEditor.UIElements">
    <ui:VisualElement name="{{element}}-root" class="{{element}}">
        <ui:Label name="{{element}}-label" text="{{title}}" class="{{element}}__label" />
    </ui:VisualElement>
</ui:UXML>
"#;

const WINDOW: &str = r#"<ui:UXML xmlns:ui="UnityEngine.UIElements" xmlns:uie="UnityEditor.UIElements">
    <ui:VisualElement name="{{element}}-root" class="{{element}} window">
        <ui:VisualElement name="{{element}}-header" class="{{element}}__header">
            <ui:Label name="{{element}}-title" text="{{title}}" class="{{element}}__title" />
        </ui:VisualElement>
        <ui:VisualElement name="{{element}}-content" class="{{element}}__content" />
        <ui:VisualElement name="{{element}}-actions" class="{{element}}__actions">
            <ui:Button name="{{element}}-ok" text="OK" class="{{element}}__ok" />
            <ui:Button name="{{element}}-cancel" text="Cancel" class="{{element}}__cancel" />
        </ui:VisualElement>
    </ui:VisualElement>
</ui:UXML>
"#;

const PANEL: &str = r#"<ui:UXML xmlns:ui="UnityEngine.UIElements" xmlns:uie="UnityEditor.UIElements">
    <ui:VisualElement name="{{element}}-root" class="{{element}} panel">
        <ui:Label name="{{element}}-title" text="{{title}}" class="{{element}}__title" />
        <ui:ScrollView name="{{element}}-body" class="{{element}}__body" />
    </ui:VisualElement>
</ui:UXML>
"#;

const FORM: &str = r#"<ui:UXML xmlns:ui="UnityEngine.UIElements" xmlns:uie="UnityEditor.UIElements">
    <ui:VisualElement name="{{element}}-root" class="{{element}} form">
        <ui:Label name="{{element}}-title" text="{{title}}" class="{{element}}__title" />
        <ui:VisualElement name="{{element}}-fields" class="{{element}}__fields">
            <ui:TextField name="{{element}}-field" label="{{title}}" class="{{element}}__field" />
        </ui:VisualElement>
        <ui:Button name="{{element}}-submit" text="Submit" class="{{element}}__submit" />
    </ui:VisualElement>
</ui:UXML>
"#;

const MODAL: &str = r#"<ui:UXML xmlns:ui="UnityEngine.UIElements" xmlns:uie="UnityEditor.UIElements">
    <ui:VisualElement name="{{element}}-overlay" class="{{element}}__overlay">
        <ui:VisualElement name="{{element}}-root" class="{{element}} modal">
            <ui:Button name="{{element}}-close" text="X" class="{{element}}__close" />
            <ui:Label name="{{element}}-title" text="{{title}}" class="{{element}}__title" />
            <ui:VisualElement name="{{element}}-content" class="{{element}}__content" />
        </ui:VisualElement>
    </ui:VisualElement>
</ui:UXML>
"#;
