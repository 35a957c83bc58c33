//! # SetupKit UI
//!
//! Everything between raw form input and a reported reference point.
//!
//! - [`form::FormState`] holds field text exactly as entered
//! - [`form::CalculationRequest`] is the parsed, millimeter-only request
//! - [`view_model::ViewModel`] derives which fields are shown
//! - [`session::Session`] runs a calculation, draws it and keeps the history
//!
//! No widget toolkit is involved; a front end only reads and writes these
//! types.

pub mod form;
pub mod history;
pub mod session;
pub mod view_model;

pub use form::{CalculationRequest, Edges, FormState, TargetMode, VertexRow};
pub use history::History;
pub use session::{evaluate, CalculationOutcome, Evaluation, ResultKind, Session};
pub use view_model::{Field, ViewModel};

pub use setupkit_settings::Config;
