//! Call scripts: the `kind:payload` arguments the probe replays.

use anyhow::{Context, Result, anyhow, bail};
use libc::{c_int, c_long};
use std::ffi::CString;
use std::str::FromStr;

use stlib::ffi;

/// One call into the runtime's C ABI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Str(String),
    Line(String),
    Int(i64),
    CStr(CString),
    CLine(CString),
    CInt(c_long),
}

impl Call {
    /// Call the exported symbol and return its result code.
    pub fn invoke(&self) -> c_int {
        match self {
            Call::Str(s) => unsafe { ffi::stlib_write_string(s.as_ptr(), s.len()) },
            Call::Line(s) => unsafe { ffi::stlib_write_line(s.as_ptr(), s.len()) },
            Call::Int(v) => ffi::stlib_write_integer(*v),
            Call::CStr(s) => unsafe { ffi::writestr(s.as_ptr()) },
            Call::CLine(s) => unsafe { ffi::writestrnewline(s.as_ptr()) },
            Call::CInt(v) => ffi::writeint(*v),
        }
    }
}

impl FromStr for Call {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self> {
        let (kind, payload) = arg
            .split_once(':')
            .ok_or_else(|| anyhow!("expected <kind>:<payload>, got `{}`", arg))?;

        let call = match kind {
            "str" => Call::Str(payload.to_string()),
            "line" => Call::Line(payload.to_string()),
            "int" => Call::Int(
                payload
                    .parse()
                    .with_context(|| format!("`{}` is not a 64-bit integer", payload))?,
            ),
            "cstr" => Call::CStr(c_string(payload)?),
            "cline" => Call::CLine(c_string(payload)?),
            "cint" => Call::CInt(
                payload
                    .parse()
                    .with_context(|| format!("`{}` is not a C long", payload))?,
            ),
            other => bail!("unknown call kind `{}`", other),
        };
        Ok(call)
    }
}

fn c_string(payload: &str) -> Result<CString> {
    CString::new(payload).context("C string payload contains a NUL byte")
}

/// Parse every argument before anything is written.
pub fn parse_calls(args: &[String]) -> Result<Vec<Call>> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| arg.parse::<Call>().with_context(|| format!("invalid call #{}", i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("str:a=".parse::<Call>().unwrap(), Call::Str("a=".into()));
        assert_eq!("line:".parse::<Call>().unwrap(), Call::Line(String::new()));
        assert_eq!("int:-5".parse::<Call>().unwrap(), Call::Int(-5));
        assert_eq!(
            "cline:hi".parse::<Call>().unwrap(),
            Call::CLine(CString::new("hi").unwrap())
        );
        assert_eq!("cint:7".parse::<Call>().unwrap(), Call::CInt(7));
    }

    #[test]
    fn test_payload_keeps_later_colons() {
        assert_eq!("str:k:v".parse::<Call>().unwrap(), Call::Str("k:v".into()));
    }

    #[test]
    fn test_int_boundaries() {
        assert_eq!(
            "int:-9223372036854775808".parse::<Call>().unwrap(),
            Call::Int(i64::MIN)
        );
        assert!("int:9223372036854775808".parse::<Call>().is_err());
        assert!("int:".parse::<Call>().is_err());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!("nocolon".parse::<Call>().is_err());
        assert!("float:1.5".parse::<Call>().is_err());
        assert!("cstr:a\0b".parse::<Call>().is_err());
    }

    #[test]
    fn test_parse_calls_reports_position() {
        let args = vec!["str:ok".to_string(), "bogus".to_string()];
        let err = parse_calls(&args).unwrap_err();
        assert!(err.to_string().contains("#2"));
    }
}
