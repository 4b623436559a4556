//! Session glue: sign-out, unauthorized handling, and control binding.
//!
//! This module provides:
//! - `Session`: credential removal plus navigation on sign-out, and the
//!   401 reaction available for callers to invoke per response
//! - `SignOutControl`: explicit binding of the sign-out affordance
//! - `Navigator`: the seam standing in for page navigation

pub mod control;
pub mod session;

pub use control::SignOutControl;
pub use session::{Navigator, Session, SIGN_IN_PAGE};
