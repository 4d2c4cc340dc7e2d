use std::collections::HashMap;

use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::UnreplacedPlaceholdersRemain;

/// Fill `{{Key}}` placeholders in a statement template. Every placeholder in
/// the template must be covered by the map; a leftover placeholder means the
/// template and the report disagree on shape.
pub(crate) fn fill_template(
    template: &str,
    placeholders: &HashMap<String, String>,
) -> Result<String, ServerError> {
    let placeholder_pattern =
        Regex::new(r"\{\{(\w+)\}\}").expect("hardcoded regex should be valid");

    let mut unknown_keys = Vec::new();
    let filled = placeholder_pattern.replace_all(template, |caps: &regex::Captures| {
        let key = &caps[1]; // The content inside {{ }}.
        match placeholders.get(key) {
            Some(value) => value.clone(),
            None => {
                unknown_keys.push(key.to_string());
                caps[0].to_string() // The full '{{Key}}' string.
            }
        }
    });

    if !unknown_keys.is_empty() {
        return Err(UnreplacedPlaceholdersRemain::new(&unknown_keys));
    }

    Ok(filled.into_owned())
}
