// Applications: apply-time match scoring.
// The score is computed once when the application is created and stored as a snapshot.

pub mod apply;
pub mod handlers;
pub mod store;
