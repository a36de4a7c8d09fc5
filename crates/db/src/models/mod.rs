//! Typed content models and DTOs.
//!
//! Each submodule contains a `Serialize` + `Deserialize` struct matching one
//! document collection. Deserialization is the validation boundary: a stored
//! document that is missing a required field or carries a mismatched type
//! fails here instead of leaking through to clients. Unknown fields are
//! ignored.

pub mod datetime;
pub mod event;
pub mod faq;
pub mod leader;
pub mod program;
pub mod registration;
pub mod testimonial;

pub use event::Event;
pub use faq::Faq;
pub use leader::Leader;
pub use program::Program;
pub use registration::CreateRegistration;
pub use testimonial::Testimonial;
