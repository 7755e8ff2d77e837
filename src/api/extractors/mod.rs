//! Custom request extractors.

mod user_number;
mod validated_json;

pub use user_number::UserNumber;
pub use validated_json::ValidatedJson;
