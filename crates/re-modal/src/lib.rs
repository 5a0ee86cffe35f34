#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Overlay modal dialog for Yew front-ends.
//!
//! The [`Modal`] component always renders; its visibility is driven by the
//! `--opened` modifier class and the stylesheet shipped in `static/re-modal.css`.

pub mod class_names;
pub mod diagnostics;
pub mod modal;
pub mod title;

pub use diagnostics::ContractViolation;
pub use modal::{Modal, ModalProps};
pub use title::ModalTitle;

#[cfg(target_arch = "wasm32")]
mod demo;

#[cfg(target_arch = "wasm32")]
pub use demo::run_demo;
