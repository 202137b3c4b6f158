//! Shapes shared between the pantry flows and presentation code.
//!
//! * [`requests`] – what a user may submit, with the validation rules a raw
//!   form must pass before anything reaches the model.
//! * [`outputs`] – what the model must answer with, and the
//!   [`ActionResult`](outputs::ActionResult) handed back to callers.
//! * [`fragments`] – reusable prompt pieces.
pub mod fragments;
pub mod outputs;
pub mod requests;
