use super::{assert_clean, errors_of};

#[test]
fn well_formed_main_is_clean() {
    assert_clean("int main() { return 0; }");
}

#[test]
fn a_program_with_no_main_is_clean() {
    assert_clean("int helper() { return 0; }");
}

#[test]
fn main_with_parameters_is_clean() {
    assert_clean("int main(int argc) { return 0; }");
}

#[test]
fn main_can_call_other_declared_functions() {
    let errors = errors_of(
        r#"
        int add(int a, int b) { return a + b; }
        int main() {
            int x;
            x = add(1, 2);
            return 0;
        }
        "#,
    );
    assert!(errors.is_empty(), "{errors:?}");
}
