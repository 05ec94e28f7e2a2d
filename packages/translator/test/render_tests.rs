/**
 * Skeleton Renderer Tests
 *
 * Section grouping, filtering, ordering, and boilerplate injection
 */

#[cfg(test)]
mod tests {
    use cs2ts::{extract_model, render::render};

    fn render_source(source: &str) -> String {
        let model = extract_model(source).expect("extraction should succeed");
        render(&model)
    }

    #[test]
    fn should_emit_extends_and_implements_clauses() {
        let output = render_source("class Account : Base, IDisposable, IEquatable<Account> { }");
        assert!(output
            .contains("export class Account extends Base implements IDisposable, IEquatable<Account> {"));
    }

    #[test]
    fn should_emit_a_plain_header_without_bases() {
        let output = render_source("class Account { }");
        assert!(output.starts_with("export class Account {"));
    }

    #[test]
    fn should_order_fields_alphabetically_by_final_name() {
        let output = render_source("class A { int _zebra; int _alpha; int _mango; }");
        let zebra = output.find("_zebra").unwrap();
        let alpha = output.find("_alpha").unwrap();
        let mango = output.find("_mango").unwrap();
        assert!(alpha < mango && mango < zebra);
    }

    #[test]
    fn should_exclude_logger_fields_and_the_disposal_flag() {
        let output = render_source(
            "class A { ILogger _logger; bool _isDisposed; int _kept; }",
        );
        assert!(!output.contains("_logger"));
        assert!(output.contains("private _kept: number;"));
        // The flag is not declared as a field; only the disposal block may
        // synthesize it, and this class is not disposable.
        assert!(!output.contains("_isDisposed"));
    }

    #[test]
    fn should_synthesize_backing_fields_for_properties() {
        let output = render_source("class A { public double Balance { get; set; } }");
        assert!(output.contains("private _balance: number;"));
        assert!(output.contains("get balance(): number {"));
        assert!(output.contains("return this._balance;"));
    }

    #[test]
    fn should_not_duplicate_a_field_that_backs_a_property() {
        let output = render_source(
            "class A { private int _balance; public int Balance { get; } }",
        );
        assert_eq!(output.matches("private _balance: number;").count(), 1);
    }

    #[test]
    fn should_collapse_fields_that_normalize_to_the_same_name() {
        let output = render_source("class A { int _x; int x; }");
        assert_eq!(output.matches("private _x: number;").count(), 1);
    }

    #[test]
    fn should_put_a_summary_comment_above_fields() {
        let output = render_source(
            "class A { /// <summary>The running total.</summary>\n int _total; }",
        );
        assert!(output.contains("// The running total.\n  private _total: number;"));
    }

    #[test]
    fn should_drop_logger_arguments_but_reproduce_the_base_call_verbatim() {
        let output = render_source(
            "class A : Base, IDisposable { A(ILogger logger, int amount) : base(logger, 5) { } }",
        );
        assert!(output.contains("constructor(amount: number) {"));
        assert!(!output.contains("logger: ILogger"));
        assert!(output.contains("super(logger, 5);"));
        assert!(output.contains("// IDisposable"));
    }

    #[test]
    fn should_reproduce_conditional_base_call_arguments_verbatim() {
        let output = render_source("class A : Base { public A(int x) : base(x > 0 ? x : 0) { } }");
        assert!(output.contains("super(x > 0 ? x : 0);"));
    }

    #[test]
    fn should_emit_a_bare_super_call_for_derived_classes_without_a_base_call() {
        let output = render_source("class A : Base { A(int x) { } }");
        assert!(output.contains("super();"));
    }

    #[test]
    fn should_not_emit_super_without_a_base_type() {
        let output = render_source("class A { A(int x) { } }");
        assert!(!output.contains("super("));
        assert!(!output.contains("super();"));
    }

    #[test]
    fn should_assign_constructor_arguments_to_matching_fields() {
        let output = render_source(
            "class A { private int _amount; A(int amount, int unrelated) { } }",
        );
        assert!(output.contains("this._amount = amount;"));
        assert!(!output.contains("this._unrelated"));
    }

    #[test]
    fn should_assign_field_initializers_in_the_constructor() {
        let output = render_source(
            "class A { Subject<int> _amountSubject = new Subject<int> (); A() { } }",
        );
        assert!(output.contains("private _amount: IObservable<number>;"));
        assert!(output.contains("this._amount = new IObservable<number>();"));
    }

    #[test]
    fn should_prune_dropped_argument_docs() {
        let output = render_source(
            "class A { /// <summary>Creates.</summary>\n/// <param name=\"logger\">Logs.</param>\n/// <param name=\"x\">X.</param>\n A(ILogger logger, int x) { } }",
        );
        assert!(!output.contains("<param name=\"logger\">"));
        assert!(output.contains("<param name=\"x\">"));
    }

    #[test]
    fn should_group_handler_properties_with_event_handlers() {
        let output = render_source("class A { public MouseEvent OnClick { get; } }");
        assert!(output.contains("// Event handlers"));
        assert!(!output.contains("// Properties"));
        assert!(output.contains("get onClick(): MouseEvent {"));
        assert!(output.contains("return this._onClick;"));
    }

    #[test]
    fn should_not_render_accessors_for_subject_properties() {
        let output = render_source("class A { public Subject<int> Changes { get; } }");
        assert!(!output.contains("get changes"));
        // the backing field is still synthesized
        assert!(output.contains("private _changes: IObservable<number>;"));
    }

    #[test]
    fn should_partition_handler_shaped_methods() {
        let output = render_source(
            "class A { private void OnClick(MouseEvent e) { } public void Refresh() { } }",
        );
        let handlers = output.find("// Event handlers").unwrap();
        let methods = output.find("// Methods").unwrap();
        let on_click = output.find("private _onClick(e: MouseEvent): void {").unwrap();
        let refresh = output.find("refresh(): void {").unwrap();
        assert!(handlers < on_click && on_click < methods && methods < refresh);
    }

    #[test]
    fn should_leave_method_bodies_as_placeholders() {
        let output = render_source("class A { public int Count() { return 1; } }");
        assert!(output.contains("count(): number {"));
        assert!(output.contains("// TODO: implement"));
        assert!(!output.contains("return 1"));
    }

    #[test]
    fn should_emit_the_disposal_block_only_for_disposable_classes() {
        let disposable = render_source(
            "class A : IDisposable { Subject<int> _changesSubject; CompositeDisposable _subscriptions; int _count; }",
        );
        assert!(disposable.contains("private _isDisposed: boolean = false;"));
        assert!(disposable.contains("dispose(): void {"));
        assert!(disposable.contains("if (this._isDisposed) {"));
        assert!(disposable.contains("this._changes.dispose();"));
        assert!(disposable.contains("this._subscriptions.dispose();"));
        assert!(!disposable.contains("this._count.dispose();"));
        assert!(disposable.contains("this._isDisposed = true;"));

        let plain = render_source("class A { int _count; }");
        assert!(!plain.contains("dispose"));
    }

    #[test]
    fn should_emit_the_equality_stub_only_for_equatable_classes() {
        let equatable = render_source("class A : IEquatable<A> { }");
        assert!(equatable.contains("// IEquatable"));
        assert!(equatable.contains("// equality members are intentionally hand-written"));

        let plain = render_source("class A { }");
        assert!(!plain.contains("IEquatable"));
    }

    #[test]
    fn should_convert_method_argument_defaults() {
        let output = render_source("class A { void M(List<int> xs = new List<int>()) { } }");
        assert!(output.contains("m(xs: number[] = new number[]()"));
    }
}
