//! Conditional execution

use super::*;

#[test]
fn test_then_taken() {
    assert_eq!(run("1 then println[1] ?").unwrap(), "1\n");
}

#[test]
fn test_then_skipped() {
    assert_eq!(run("0 then println[1] ?").unwrap(), "");
}

#[test]
fn test_else_branch() {
    assert_eq!(run("0 then println[1] else println[2] ?").unwrap(), "2\n");
    assert_eq!(run("7 then println[1] else println[2] ?").unwrap(), "1\n");
}

#[test]
fn test_comparison_drives_branch() {
    let source = "4 =x\n>[x 3] then println[1] else println[0] ?";
    assert_eq!(run(source).unwrap(), "1\n");
}

#[test]
fn test_nested_conditionals() {
    let source = "1 then 0 then println[1] else println[2] ? ?";
    assert_eq!(run(source).unwrap(), "2\n");

    let source = "0 then 1 then println[1] ? else println[3] ?";
    assert_eq!(run(source).unwrap(), "3\n");
}

#[test]
fn test_conditional_result_is_accumulator() {
    // The taken branch leaves its value behind for the next statement
    let source = "1 then 10 else 20 ? =y\n0 then 10 else 20 ? =z\nprintln[+[y z]]";
    assert_eq!(run(source).unwrap(), "30\n");
}

#[test]
fn test_empty_then_branch() {
    assert_eq!(run("3 then ? println[1]").unwrap(), "1\n");
}
