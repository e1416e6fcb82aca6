//! Comparison builtins: `> < = >= <=`, yielding 1 or 0

use crate::error::RuntimeError;
use std::io::Write;

fn truth(value: bool) -> Result<Option<i64>, RuntimeError> {
    Ok(Some(i64::from(value)))
}

pub fn vm_gt(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    truth(args[0] > args[1])
}

pub fn vm_lt(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    truth(args[0] < args[1])
}

pub fn vm_eq(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    truth(args[0] == args[1])
}

pub fn vm_ge(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    truth(args[0] >= args[1])
}

pub fn vm_le(_out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    truth(args[0] <= args[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparisons() {
        let mut sink: Vec<u8> = Vec::new();
        assert_eq!(vm_gt(&mut sink, &[2, 1]), Ok(Some(1)));
        assert_eq!(vm_lt(&mut sink, &[2, 1]), Ok(Some(0)));
        assert_eq!(vm_eq(&mut sink, &[-3, -3]), Ok(Some(1)));
        assert_eq!(vm_ge(&mut sink, &[1, 1]), Ok(Some(1)));
        assert_eq!(vm_le(&mut sink, &[2, 1]), Ok(Some(0)));
    }
}
