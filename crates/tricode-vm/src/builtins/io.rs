//! Output builtins: `nl`, `print`, `println`, `write`
//!
//! These produce no value of their own; the VM pushes the accumulator's
//! current value as their call result.

use crate::error::RuntimeError;
use std::io::Write;

/// Write a newline
pub fn vm_nl(out: &mut dyn Write, _args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    writeln!(out)?;
    Ok(None)
}

/// Write the decimal text of a value
pub fn vm_print(out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    write!(out, "{}", args[0])?;
    Ok(None)
}

/// Write the decimal text of a value and a newline
pub fn vm_println(out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    writeln!(out, "{}", args[0])?;
    Ok(None)
}

/// Write the character with the given code point
pub fn vm_write(out: &mut dyn Write, args: &[i64]) -> Result<Option<i64>, RuntimeError> {
    let code = args[0];
    let c = u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or(RuntimeError::InvalidCharacterCode(code))?;
    write!(out, "{}", c)?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_family() {
        let mut sink: Vec<u8> = Vec::new();
        vm_print(&mut sink, &[-12]).unwrap();
        vm_nl(&mut sink, &[]).unwrap();
        vm_println(&mut sink, &[7]).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "-12\n7\n");
    }

    #[test]
    fn test_write_characters() {
        let mut sink: Vec<u8> = Vec::new();
        vm_write(&mut sink, &[72]).unwrap();
        vm_write(&mut sink, &[0x00e9]).unwrap();
        vm_write(&mut sink, &[0x1f600]).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "Hé😀");
    }

    #[test]
    fn test_write_rejects_invalid_code_points() {
        let mut sink: Vec<u8> = Vec::new();
        for code in [-1, 0xd800, 0x110000, i64::MAX] {
            assert_eq!(
                vm_write(&mut sink, &[code]),
                Err(RuntimeError::InvalidCharacterCode(code))
            );
        }
        assert!(sink.is_empty());
    }
}
