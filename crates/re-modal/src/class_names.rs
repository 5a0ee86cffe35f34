//! Stable class names of the rendered markup.
//!
//! Host stylesheets and tests target these; renaming any of them is a breaking change.

use yew::prelude::*;

/// Root element.
pub const ROOT: &str = "re-modal";
/// Modifier added to the root while the modal is open.
pub const OPENED: &str = "--opened";
/// Full-coverage backdrop.
pub const OVERLAY: &str = "re-modal__overlay";
/// Box holding the close control, header and body.
pub const WRAPPER: &str = "re-modal__wrapper";
/// Close button.
pub const CLOSE: &str = "re-modal__close";
/// Header region, only rendered for non-blank titles.
pub const HEADER: &str = "re-modal__header";
/// Body region.
pub const BODY: &str = "re-modal__body";

/// Builds the root class list: base class, open modifier, then caller extras.
#[must_use]
pub fn root_classes(is_open: bool, extra: &Classes) -> Classes {
    let mut classes = classes!(ROOT, is_open.then_some(OPENED));
    classes.push(extra.clone());
    classes
}
