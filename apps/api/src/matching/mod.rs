// Candidate ↔ job matching.
// The scorer and recommender are pure; only handlers.rs touches the database.

pub mod handlers;
pub mod recommend;
pub mod scorer;
pub mod weights;
