//! Behavior script skeletons
//!
//! Each skeleton declares a type named exactly after the PascalCase stem,
//! so the class name always matches its file name, and binds elements by
//! the same kebab-case names the markup skeletons declare.

use crate::models::ScriptVariant;

pub(super) fn skeleton(variant: ScriptVariant) -> &'static str {
    match variant {
        ScriptVariant::Window => WINDOW,
        ScriptVariant::Form => FORM,
        ScriptVariant::Modal => MODAL,
        ScriptVariant::Controller | ScriptVariant::Custom => CONTROLLER,
    }
}

const CONTROLLER: &str = r#"using UnityEngine;
using UnityEngine.UIElements;

// Pairs with {{name}}.uxml.
public class {{name}} : MonoBehaviour
{
    [SerializeField] private UIDocument document;

    private VisualElement root;

    private void OnEnable()
    {
        root = document.rootVisualElement.Q<VisualElement>("{{element}}-root");
    }
}
"#;

const WINDOW: &str = r#"using UnityEngine;
using UnityEngine.UIElements;

// Pairs with {{name}}.uxml.
public class {{name}} : MonoBehaviour
{
    [SerializeField] private UIDocument document;

    private VisualElement root;
    private Button okButton;
    private Button cancelButton;

    private void OnEnable()
    {
        root = document.rootVisualElement.Q<VisualElement>("{{element}}-root");
        okButton = root.Q<Button>("{{element}}-ok");
        cancelButton = root.Q<Button>("{{element}}-cancel");
        okButton.clicked += OnConfirm;
        cancelButton.clicked += OnDismiss;
    }

    private void OnDisable()
    {
        okButton.clicked -= OnConfirm;
        cancelButton.clicked -= OnDismiss;
    }

    private void OnConfirm()
    {
    }

    private void OnDismiss()
    {
        root.style.display = DisplayStyle.None;
    }
}
"#;

const FORM: &str = r#"using UnityEngine;
using UnityEngine.UIElements;

// Pairs with {{name}}.uxml.
public class {{name}} : MonoBehaviour
{
    [SerializeField] private UIDocument document;

    private VisualElement root;
    private Button submitButton;

    private void OnEnable()
    {
        root = document.rootVisualElement.Q<VisualElement>("{{element}}-root");
        submitButton = root.Q<Button>("{{element}}-submit");
        submitButton.clicked += OnSubmit;
    }

    private void OnDisable()
    {
        submitButton.clicked -= OnSubmit;
    }

    private void OnSubmit()
    {
    }
}
"#;

const MODAL: &str = r#"using UnityEngine;
using UnityEngine.UIElements;

// Pairs with {{name}}.uxml.
public class {{name}} : MonoBehaviour
{
    [SerializeField] private UIDocument document;

    private VisualElement overlay;
    private Button closeButton;

    private void OnEnable()
    {
        overlay = document.rootVisualElement.Q<VisualElement>("{{element}}-overlay");
        closeButton = overlay.Q<Button>("{{element}}-close");
        closeButton.clicked += OnClose;
    }

    private void OnDisable()
    {
        closeButton.clicked -= OnClose;
    }

    private void OnClose()
    {
        overlay.style.display = DisplayStyle.None;
    }
}
"#;
