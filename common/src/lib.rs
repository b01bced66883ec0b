use validator::ValidationErrors;

/// Joins every field error message into one `; `-separated string.
///
/// Fields are visited in name order so the message is stable.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    let mut names: Vec<_> = fields.keys().collect();
    names.sort();

    names
        .into_iter()
        .flat_map(|name| {
            fields[name]
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
