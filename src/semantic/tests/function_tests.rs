use super::{assert_clean, assert_single_kind, errors_of, with_main};
use crate::semantic::SemanticErrorKind;

#[test]
fn forward_reference_to_a_later_function_is_allowed() {
    assert_clean(&with_main(
        r#"
        int helper() {
            return callee();
        }
        int callee() {
            return 1;
        }
        "#,
    ));
}

#[test]
fn mutual_recursion_is_allowed() {
    assert_clean(&with_main(
        r#"
        int is_even(int n) {
            if (n == 0) return 1;
            return is_odd(n - 1);
        }
        int is_odd(int n) {
            if (n == 0) return 0;
            return is_even(n - 1);
        }
        "#,
    ));
}

#[test]
fn prototype_then_matching_definition_is_not_a_redeclaration() {
    assert_clean(&with_main(
        r#"
        int helper(int x);
        int helper(int x) {
            return x;
        }
        "#,
    ));
}

#[test]
fn two_definitions_of_the_same_function_is_an_error() {
    assert_single_kind(
        &with_main(
            r#"
            int helper() { return 1; }
            int helper() { return 2; }
            "#,
        ),
        SemanticErrorKind::DuplicateFunction,
    );
}

#[test]
fn redeclaration_with_a_different_signature_is_an_error() {
    assert_single_kind(
        &with_main(
            r#"
            int helper(int x);
            char helper(int x) { return 'a'; }
            "#,
        ),
        SemanticErrorKind::DuplicateFunction,
    );
}

#[test]
fn calling_an_undeclared_function_is_an_error() {
    assert_single_kind(&with_main("int f() { return missing(); }"), SemanticErrorKind::UndefinedFunction);
}

#[test]
fn wrong_argument_count_is_reported_but_call_still_types_the_return() {
    let errors = errors_of(&with_main(
        r#"
        int add(int a, int b) { return a + b; }
        int f() {
            int x;
            x = add(1);
            return 0;
        }
        "#,
    ));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), SemanticErrorKind::ArgumentCountMismatch);
}

#[test]
fn wrong_argument_type_is_an_error() {
    assert_single_kind(
        &with_main(
            r#"
            int takes_int(int a) { return a; }
            int f() { return takes_int("nope"); }
            "#,
        ),
        SemanticErrorKind::TypeMismatch,
    );
}

#[test]
fn builtins_are_callable_without_a_user_written_prototype() {
    assert_clean(&with_main(
        r#"
        int f() {
            print("hi");
            print_int(1);
            print_char('c');
            int x;
            x = read_int();
            return 0;
        }
        "#,
    ));
}

#[test]
fn duplicate_parameter_names_are_an_error() {
    assert_single_kind(&with_main("int f(int a, int a) { return a; }"), SemanticErrorKind::DuplicateParameter);
}

#[test]
fn more_than_six_parameters_is_an_error_not_a_compiler_panic() {
    assert_single_kind(
        &with_main("int f(int a, int b, int c, int d, int e, int f, int g) { return a; }"),
        SemanticErrorKind::TooManyParameters,
    );
}
