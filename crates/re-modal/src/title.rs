//! Header content of the modal.

use yew::prelude::*;

/// Title shown in the modal header.
///
/// Plain text is wrapped in a paragraph; a prebuilt node is rendered as-is.
#[derive(Clone, PartialEq)]
pub enum ModalTitle {
    /// Plain text, rendered inside a `<p>`.
    Text(AttrValue),
    /// Caller-built markup, rendered unchanged.
    Node(Html),
}

impl ModalTitle {
    /// An empty text title counts as no title at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.as_str().is_empty())
    }

    /// Markup placed inside the header region.
    #[must_use]
    pub fn to_header(&self) -> Html {
        match self {
            Self::Text(text) => html! { <p>{ text.clone() }</p> },
            Self::Node(node) => node.clone(),
        }
    }
}

impl From<&'static str> for ModalTitle {
    fn from(text: &'static str) -> Self {
        Self::Text(AttrValue::from(text))
    }
}

impl From<String> for ModalTitle {
    fn from(text: String) -> Self {
        Self::Text(AttrValue::from(text))
    }
}

impl From<AttrValue> for ModalTitle {
    fn from(text: AttrValue) -> Self {
        Self::Text(text)
    }
}

impl From<Html> for ModalTitle {
    fn from(node: Html) -> Self {
        Self::Node(node)
    }
}
