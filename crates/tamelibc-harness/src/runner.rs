//! Fixture case execution against the core operations.
//!
//! JSON string inputs are rehydrated as NUL-terminated buffers before the
//! call, and results are rendered back to strings for comparison: offsets
//! print as decimal with `-1` for "not found", buffer results print their
//! logical content up to the terminator.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tamelibc_core::{ctype, errno, string};

use crate::fixtures::{FixtureCase, FixtureSet};

/// Outcome of running a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Case identifier.
    pub name: String,
    /// Operation that was exercised.
    pub function: String,
    /// Whether output and code both matched.
    pub passed: bool,
    /// Expected rendering.
    pub expected: String,
    /// Actual rendering.
    pub actual: String,
}

/// C-string buffer from a JSON string input: bytes plus NUL terminator.
fn cbuf(text: &str) -> Vec<u8> {
    let mut buf = text.as_bytes().to_vec();
    buf.push(0);
    buf
}

/// Logical content of a C-string buffer, terminator excluded.
fn cstr_to_string(buf: &[u8]) -> String {
    String::from_utf8_lossy(&buf[..string::strlen(buf)]).into_owned()
}

fn str_input<'a>(inputs: &'a Value, key: &str) -> Option<&'a str> {
    inputs.get(key)?.as_str()
}

fn int_input(inputs: &Value, key: &str) -> Option<i64> {
    inputs.get(key)?.as_i64()
}

fn render_offset(found: Option<usize>) -> String {
    found.map_or_else(|| String::from("-1"), |pos| pos.to_string())
}

fn evaluate(function: &str, inputs: &Value) -> Option<(String, i32)> {
    match function {
        "strlen" => {
            let s = cbuf(str_input(inputs, "s")?);
            Some((string::strlen(&s).to_string(), 0))
        }
        "strpos" => {
            let haystack = cbuf(str_input(inputs, "haystack")?);
            let needle = cbuf(str_input(inputs, "needle")?);
            Some((render_offset(string::strpos(&haystack, &needle)), 0))
        }
        "strrpos" => {
            let haystack = cbuf(str_input(inputs, "haystack")?);
            let needle = cbuf(str_input(inputs, "needle")?);
            Some((render_offset(string::strrpos(&haystack, &needle)), 0))
        }
        "strtrim" => {
            let mut buf = cbuf(str_input(inputs, "s")?);
            Some((cstr_to_string(string::strtrim(&mut buf)), 0))
        }
        "strtriml" => {
            let buf = cbuf(str_input(inputs, "s")?);
            Some((cstr_to_string(string::strtriml(&buf)), 0))
        }
        "strtrimr" => {
            let mut buf = cbuf(str_input(inputs, "s")?);
            Some((cstr_to_string(string::strtrimr(&mut buf)), 0))
        }
        "strtolower" => {
            let mut buf = cbuf(str_input(inputs, "s")?);
            Some((cstr_to_string(string::strtolower(&mut buf)), 0))
        }
        "strtoupper" => {
            let mut buf = cbuf(str_input(inputs, "s")?);
            Some((cstr_to_string(string::strtoupper(&mut buf)), 0))
        }
        "stpncpy" => {
            let src = cbuf(str_input(inputs, "src")?);
            let count = usize::try_from(int_input(inputs, "count")?).ok()?;
            let dest_len = usize::try_from(int_input(inputs, "dest_len")?).ok()?;
            let mut dest = vec![0xAAu8; dest_len];
            let end = string::stpncpy(&mut dest, &src, count);
            // Rendered as "<end_index>:<content>", where content is the
            // logical string inside the written window. A truncating copy
            // leaves no terminator of its own.
            let window = &dest[..count.min(dest.len())];
            Some((format!("{}:{}", end, cstr_to_string(window)), 0))
        }
        "strerror_r" => {
            let errnum = i32::try_from(int_input(inputs, "errnum")?).ok()?;
            let len = usize::try_from(int_input(inputs, "len")?).ok()?;
            let mut buf = vec![0u8; len];
            let code = errno::strerror_r(errnum, &mut buf);
            let message = if buf.is_empty() {
                String::new()
            } else {
                cstr_to_string(&buf)
            };
            Some((message, code))
        }
        "to_lower_int" => {
            let c = i32::try_from(int_input(inputs, "c")?).ok()?;
            Some((ctype::to_lower_int(c).to_string(), 0))
        }
        "to_upper_int" => {
            let c = i32::try_from(int_input(inputs, "c")?).ok()?;
            Some((ctype::to_upper_int(c).to_string(), 0))
        }
        _ => None,
    }
}

/// Runs one fixture case, dispatching on its `function` name.
///
/// An unknown function name or malformed inputs fail the case instead of
/// aborting the run.
#[must_use]
pub fn run_case(case: &FixtureCase) -> CaseResult {
    let (actual, code) = evaluate(&case.function, &case.inputs)
        .unwrap_or_else(|| (String::from("<unsupported function or bad inputs>"), 0));
    let passed = actual == case.expected_output && code == case.expected_code;
    CaseResult {
        name: case.name.clone(),
        function: case.function.clone(),
        passed,
        expected: case.expected_output.clone(),
        actual,
    }
}

/// Runs every case in a fixture set.
#[must_use]
pub fn run_set(set: &FixtureSet) -> Vec<CaseResult> {
    set.cases.iter().map(run_case).collect()
}
