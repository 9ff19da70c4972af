//! Random identifiers

use uuid::Uuid;

/// Generate a random version 4 UUID in lowercase hyphenated form
pub fn new_uuid() -> String {
    Uuid::new_v4().to_string()
}
