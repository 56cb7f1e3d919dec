//! Navigation logic for the picker.
//!
//! [`state::Navigation`] tracks the highlighted entry as the query changes
//! and the user moves the cursor.

pub mod state;
