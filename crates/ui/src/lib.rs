//! Page-local UI state for the storefront: image gallery, FAQ accordion,
//! count-up figures, quantity picker and contact form.
//!
//! Each state value is owned by the page that renders it and changes only
//! through the methods here; nothing is shared between pages.

pub mod accordion;
pub mod contact;
pub mod counter;
pub mod gallery;
pub mod quantity;

pub use accordion::Accordion;
pub use contact::{ContactField, ContactForm, ContactFormState, SubmissionStatus};
pub use counter::{AnimatedCounter, CounterPhase, StatFigure};
pub use gallery::Gallery;
pub use quantity::QuantityStepper;
