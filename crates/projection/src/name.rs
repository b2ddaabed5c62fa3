//! Identifier-style conversion between the source model and the projected
//! interface.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Converts a hyphenated or underscored source-model name to camel case.
///
/// Total and idempotent: already camel-cased input comes back unchanged, and
/// empty or single-word input passes through without error.
pub fn convert_to_camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Synthesizes the conventional operation name for adding a child of
/// `child_type_key`, e.g. `connector` becomes `addConnector`.
///
/// Best-effort with respect to collisions: the factory suppresses a derived
/// operation when an explicit one already claimed the name.
pub fn add_operation_name(child_type_key: &str) -> String {
    format!("add{}", child_type_key.to_upper_camel_case())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_hyphenated_and_underscored_names() {
        assert_eq!(convert_to_camel_case("my-attribute"), "myAttribute");
        assert_eq!(convert_to_camel_case("socket_binding"), "socketBinding");
        assert_eq!(convert_to_camel_case("read-children-names"), "readChildrenNames");
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = convert_to_camel_case("my-attribute");
        assert_eq!(convert_to_camel_case(&once), once);
        assert_eq!(convert_to_camel_case("myAttribute"), "myAttribute");
    }

    #[test]
    fn handles_empty_and_single_word_input() {
        assert_eq!(convert_to_camel_case(""), "");
        assert_eq!(convert_to_camel_case("port"), "port");
    }

    #[test]
    fn add_operation_name_capitalizes_the_child_key() {
        assert_eq!(add_operation_name("connector"), "addConnector");
        assert_eq!(add_operation_name("socket-binding"), "addSocketBinding");
    }
}
