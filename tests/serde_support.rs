#[cfg(not(feature = "serde_support"))]
#[test]
fn serde_support_tests() {
    panic!("Feature `serde_support` must be activated to run these integration tests");
}

#[cfg(all(feature = "serde_support", test))]
pub mod tests {
    use plotree::*;
    use serde_json;

    #[test]
    fn serialization_keeps_structure_and_log() {
        let content = "

A crossing! Which path do you take?
#   Left
      A torch lies on the ground.
#   Right
      You enter a dark room.
        #   Light the torch
        #   Head back

";

        let tree = read_tree_from_string(content).unwrap();
        assert!(!tree.log().is_empty());

        let serialized = serde_json::to_string(&tree).unwrap();
        let deserialized: PlotTree = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, tree);
        assert_eq!(deserialized.clean(), tree.clean());
    }

    #[test]
    fn options_can_be_read_from_configuration() {
        let options: TreeOptions = serde_json::from_str(r#"{ "option_prefix": "*" }"#).unwrap();

        let tree = read_tree_from_string_with_options("Start\n* Go\n  End\n", &options).unwrap();

        assert_eq!(tree.option(1).unwrap().text(), "* Go");
    }

    #[test]
    fn nodes_serialize_with_kind_as_tag() {
        let tree = read_tree_from_string("Start\n#Go\n").unwrap();

        let value = serde_json::to_value(tree.get(1).unwrap()).unwrap();

        assert!(value.get("Option").is_some());
        assert_eq!(value["Option"]["text"], "#Go");
        assert!(value["Option"]["next"].is_null());
    }
}
