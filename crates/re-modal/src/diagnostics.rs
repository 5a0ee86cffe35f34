//! Development-time contract checks for [`Modal`](crate::Modal).
//!
//! # Design
//! - Checks are pure and return every violation found.
//! - Reporting only warns, and only in builds with debug assertions.
//! - Browser builds log through `gloo::console`, native builds through `tracing`.

use crate::modal::ModalProps;
use thiserror::Error;

const MODAL: &str = "Modal";

/// A prop combination the component accepts but should not receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// The component was given no content to render in its body.
    #[error("modal content missing")]
    MissingContent {
        /// Component that received the props.
        component: &'static str,
    },
}

impl ContractViolation {
    /// Component that received the offending props.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::MissingContent { component } => *component,
        }
    }
}

/// Collects contract violations in the given props.
#[must_use]
pub fn check(props: &ModalProps) -> Vec<ContractViolation> {
    let mut violations = Vec::new();
    if props.children.is_empty() {
        violations.push(ContractViolation::MissingContent { component: MODAL });
    }
    violations
}

/// Emits each violation as a warning in debug builds. Never fails.
pub fn report(violations: &[ContractViolation]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for violation in violations {
        emit(violation);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(violation: &ContractViolation) {
    gloo::console::warn!(violation.component(), violation.to_string());
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(violation: &ContractViolation) {
    tracing::warn!(
        component = violation.component(),
        violation = %violation,
        "component contract violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use yew::prelude::*;

    fn props_with(children: Vec<Html>) -> ModalProps {
        ModalProps {
            children: Children::new(children),
            title: None,
            is_open: true,
            on_close: Callback::from(|()| ()),
            class: Classes::new(),
        }
    }

    #[test]
    fn empty_content_is_a_violation() {
        let violations = check(&props_with(Vec::new()));
        assert_eq!(
            violations,
            vec![ContractViolation::MissingContent { component: "Modal" }]
        );
        assert_eq!(violations[0].component(), "Modal");
        assert_eq!(violations[0].to_string(), "modal content missing");
    }

    #[test]
    fn supplied_content_passes() {
        assert!(check(&props_with(vec![html! { "Hello" }])).is_empty());
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("capture poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    fn report_emits_a_warning_per_violation() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            report(&[ContractViolation::MissingContent { component: "Modal" }]);
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("WARN").count(), 1);
        assert!(output.contains("component contract violated"));
        assert!(output.contains("component=\"Modal\""));
        assert!(output.contains("violation=modal content missing"));
    }

    #[test]
    fn report_without_violations_is_silent() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || report(&[]));

        assert!(capture.0.lock().unwrap().is_empty());
    }
}
