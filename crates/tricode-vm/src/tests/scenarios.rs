//! End-to-end programs

use super::*;

#[test]
fn test_nested_builtin_call() {
    assert_eq!(run("println[+[2 3]]").unwrap(), "5\n");
}

#[test]
fn test_assignment_keeps_accumulator() {
    assert_eq!(run("5=x then[println[x]]?").unwrap(), "5\n");
}

#[test]
fn test_function_reading_global_register() {
    // `x` is global and still zero when `double` runs
    assert_eq!(run("F double 1 *[x 2]\nprintln[double[21]]").unwrap(), "0\n");
}

#[test]
fn test_function_reading_parameter() {
    assert_eq!(run("F double 1 *[i 2]\nprintln[double[21]]").unwrap(), "42\n");
}

#[test]
fn test_division_by_zero_prints_nothing() {
    let mut vm = capture_vm();
    let err = exec(&mut vm, "/[5 0]").unwrap_err();
    assert_eq!(err, RuntimeError::DivisionByZero);
    assert!(vm.output().is_empty());
}

#[test]
fn test_arity_mismatch() {
    assert_eq!(
        run_err("F inc 1 +[x 1]\ninc[1 2]"),
        RuntimeError::ArityMismatch {
            name: "inc".to_string(),
            expected: 1,
            got: 2,
        }
    );
}

#[test]
fn test_recursive_fibonacci() {
    let source = "\
F fib 1 <[i 2] then i else +[fib[-[i 1]] fib[-[i 2]]] ?
println[fib[10]]
println[fib[15]]";
    assert_eq!(run(source).unwrap(), "55\n610\n");
}

#[test]
fn test_countdown_loop_by_recursion() {
    let source = "\
F down 1 >[i 0] then println[i] down[-[i 1]] ?
down[3]";
    assert_eq!(run(source).unwrap(), "3\n2\n1\n");
}

#[test]
fn test_hello_with_write() {
    assert_eq!(run("write[72] write[105] nl[]").unwrap(), "Hi\n");
}

#[test]
fn test_syntax_error_reports_line() {
    let err = run("println[1]\n+[1 2").unwrap_err();
    assert_eq!(err, "Syntax error: incomplete function call (line 2)");
}
