/**
 * Declaration Parser Tests
 *
 * Structure-level coverage for the C# declaration parser
 */

#[cfg(test)]
mod tests {
    use cs2ts::syntax::{ClassDecl, MemberDecl, Parser, SourceUnit};

    fn parse(source: &str) -> SourceUnit {
        Parser::new().parse(source).expect("source should parse")
    }

    fn parse_single(source: &str) -> ClassDecl {
        let unit = parse(source);
        assert_eq!(unit.classes.len(), 1, "expected a single class");
        unit.classes.into_iter().next().unwrap()
    }

    #[test]
    fn should_parse_an_empty_class() {
        let class = parse_single("public class Account { }");
        assert_eq!(class.name, "Account");
        assert!(class.base_list.is_empty());
        assert!(class.members.is_empty());
    }

    #[test]
    fn should_parse_the_base_list_in_order() {
        let class = parse_single("class Account : Base, IDisposable, IEquatable<Account> { }");
        assert_eq!(
            class.base_list,
            vec!["Base", "IDisposable", "IEquatable<Account>"]
        );
    }

    #[test]
    fn should_unwrap_namespace_and_skip_usings() {
        let class = parse_single(
            "using System;\nnamespace Banking.Core\n{\n    class Account { }\n}\n",
        );
        assert_eq!(class.name, "Account");
    }

    #[test]
    fn should_skip_attributes() {
        let class = parse_single("[Serializable]\nclass Account { [Obsolete] int _x; }");
        assert_eq!(class.members.len(), 1);
    }

    #[test]
    fn should_parse_fields_with_raw_initializer_text() {
        let class = parse_single(
            "class A { private List<string> _names = new List<string> (); }",
        );
        match &class.members[0] {
            MemberDecl::Field(field) => {
                assert_eq!(field.ty, "List<string>");
                assert_eq!(field.name, "_names");
                assert_eq!(field.initializer.as_deref(), Some("new List<string> ()"));
                assert_eq!(field.modifiers, vec!["private"]);
            }
            other => panic!("expected a field, got {:?}", other),
        }
    }

    #[test]
    fn should_detect_property_setters() {
        let class = parse_single("class A { public int X { get; set; } public int Y { get; } }");
        let props: Vec<_> = class.properties().collect();
        assert_eq!(props.len(), 2);
        assert!(props[0].has_setter);
        assert!(!props[1].has_setter);
    }

    #[test]
    fn should_tolerate_accessor_bodies() {
        let class = parse_single(
            "class A { public int X { get { return _x; } set { _x = value; } } }",
        );
        let props: Vec<_> = class.properties().collect();
        assert!(props[0].has_getter);
        assert!(props[0].has_setter);
    }

    #[test]
    fn should_parse_expression_bodied_properties_as_getter_only() {
        let class = parse_single("class A { public int X => _x; }");
        let props: Vec<_> = class.properties().collect();
        assert_eq!(props.len(), 1);
        assert!(props[0].has_getter);
        assert!(!props[0].has_setter);
    }

    #[test]
    fn should_parse_methods_and_skip_bodies() {
        let class = parse_single(
            "class A { public List<int> GetHistory(bool includeAll) { if (includeAll) { return null; } return null; } }",
        );
        let methods: Vec<_> = class.methods().collect();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].return_type, "List<int>");
        assert_eq!(methods[0].name, "GetHistory");
        assert_eq!(methods[0].params.len(), 1);
        assert_eq!(methods[0].params[0].ty, "bool");
        assert_eq!(methods[0].params[0].name, "includeAll");
    }

    #[test]
    fn should_capture_parameter_defaults_as_raw_text() {
        let class = parse_single("class A { void M(int retries = 3, string tag = \"x\") { } }");
        let methods: Vec<_> = class.methods().collect();
        assert_eq!(methods[0].params[0].default.as_deref(), Some("3"));
        assert_eq!(methods[0].params[1].default.as_deref(), Some("\"x\""));
    }

    #[test]
    fn should_capture_comparison_operators_in_parameter_defaults() {
        let class = parse_single("class A { void M(bool flag = 1 > 0) { } }");
        let methods: Vec<_> = class.methods().collect();
        assert_eq!(methods[0].params[0].default.as_deref(), Some("1 > 0"));
    }

    #[test]
    fn should_skip_event_declarations() {
        let class = parse_single("class A { public event EventHandler Click; int _x; }");
        let fields: Vec<_> = class.fields().collect();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "_x");
        assert_eq!(class.members.len(), 1);
    }

    #[test]
    fn should_parse_a_constructor_with_base_call() {
        let class = parse_single(
            "class A { public A(ILogger logger, double balance) : base(logger, 5) { } }",
        );
        let ctor = class.constructor().expect("constructor");
        assert_eq!(ctor.params.len(), 2);
        assert_eq!(
            ctor.base_call.as_deref(),
            Some(&["logger".to_string(), "5".to_string()][..])
        );
    }

    #[test]
    fn should_capture_comparison_operators_in_base_call_arguments() {
        let class =
            parse_single("class A : Base { public A(int x) : base(x > 0 ? x : 0) { } }");
        let ctor = class.constructor().expect("constructor");
        assert_eq!(
            ctor.base_call.as_deref(),
            Some(&["x > 0 ? x : 0".to_string()][..])
        );
    }

    #[test]
    fn should_model_a_missing_base_call_as_none() {
        let class = parse_single("class A { public A(int x) { } }");
        let ctor = class.constructor().expect("constructor");
        assert!(ctor.base_call.is_none());
    }

    #[test]
    fn should_attach_doc_comments_to_the_next_declaration() {
        let class = parse_single(
            "class A {\n    /// <summary>The count.</summary>\n    private int _count;\n}",
        );
        let fields: Vec<_> = class.fields().collect();
        assert_eq!(
            fields[0].doc.as_deref(),
            Some("/// <summary>The count.</summary>")
        );
    }

    #[test]
    fn should_join_multi_line_doc_blocks_without_indentation() {
        let class = parse_single(
            "/// <summary>\n/// Tracks things.\n/// </summary>\nclass A { }",
        );
        assert_eq!(
            class.doc.as_deref(),
            Some("/// <summary>\n/// Tracks things.\n/// </summary>")
        );
    }

    #[test]
    fn should_skip_nested_classes() {
        let class = parse_single("class A { class Inner { int _x; } int _y; }");
        assert_eq!(class.name, "A");
        let fields: Vec<_> = class.fields().collect();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "_y");
    }

    #[test]
    fn should_collect_multiple_top_level_classes() {
        let unit = parse("class A { } class B { }");
        assert_eq!(unit.classes.len(), 2);
    }

    #[test]
    fn should_fail_on_unbalanced_bodies() {
        let result = Parser::new().parse("class A { void M() { ");
        assert!(result.is_err());
    }
}
