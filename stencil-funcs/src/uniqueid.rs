use uuid::Uuid;

/// Generates a random (version 4) UUID.
///
/// ```jinja
/// {{ uuidv4() }}
/// ```
pub fn uuidv4() -> String {
    Uuid::new_v4().to_string()
}
