//! Validation helpers for DTOs.

use validator::ValidationErrors;

/// Return the message of the first field error that carries one.
///
/// Field errors are visited in name order so the result is stable when
/// several fields fail at once.
pub fn first_message(errors: &ValidationErrors) -> Option<String> {
    let field_errors = errors.field_errors();
    let mut fields = field_errors.keys().collect::<Vec<_>>();
    fields.sort();

    fields.into_iter().find_map(|field| {
        field_errors[field]
            .iter()
            .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
    })
}
