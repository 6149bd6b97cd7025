//! Fixture loading and management.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Operation being exercised.
    pub function: String,
    /// Input parameters (serialized).
    pub inputs: serde_json::Value,
    /// Expected output rendered as a string.
    pub expected_output: String,
    /// Expected status code for code-returning operations.
    #[serde(default)]
    pub expected_code: i32,
}

/// A collection of fixture cases for an operation family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Operation family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

fn case(
    name: &str,
    function: &str,
    inputs: serde_json::Value,
    expected_output: &str,
    expected_code: i32,
) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        function: function.to_string(),
        inputs,
        expected_output: expected_output.to_string(),
        expected_code,
    }
}

/// Built-in fixture set covering the library's documented contracts, so
/// verification runs without external files.
#[must_use]
pub fn builtin_fixtures() -> FixtureSet {
    let lorem = "     Lorem     ipsum     dolor     sit     ";
    FixtureSet {
        version: String::from("v1"),
        family: String::from("string+ctype+errno"),
        cases: vec![
            case("strlen_plain", "strlen", json!({"s": "hello"}), "5", 0),
            case("strlen_empty", "strlen", json!({"s": ""}), "0", 0),
            case(
                "strpos_empty_needle",
                "strpos",
                json!({"haystack": ">X,3?in.a{g>>qRc", "needle": ""}),
                "0",
                0,
            ),
            case(
                "strpos_empty_haystack",
                "strpos",
                json!({"haystack": "", "needle": ">X,3?in.a{g>>qRc"}),
                "-1",
                0,
            ),
            case(
                "strpos_middle",
                "strpos",
                json!({"haystack": ">X,3?in.a{g>>qRc", "needle": "in.a{g>"}),
                "5",
                0,
            ),
            case(
                "strpos_adjacent_needles",
                "strpos",
                json!({"haystack": ">X,3?i3?i3?i>qRc", "needle": "3?i"}),
                "3",
                0,
            ),
            case(
                "strrpos_adjacent_needles",
                "strrpos",
                json!({"haystack": ">X,3?i3?i3?i>qRc", "needle": "3?i"}),
                "9",
                0,
            ),
            case(
                "strrpos_spread_needles",
                "strrpos",
                json!({"haystack": ">X,3?in.3?i>3?ic", "needle": "3?i"}),
                "12",
                0,
            ),
            case(
                "strrpos_missing",
                "strrpos",
                json!({"haystack": ">X,3?in.a{g>>qRc", "needle": "{g>>qRd"}),
                "-1",
                0,
            ),
            case("strtrim_lorem", "strtrim", json!({"s": lorem}), "Lorem     ipsum     dolor     sit", 0),
            case("strtriml_lorem", "strtriml", json!({"s": lorem}), "Lorem     ipsum     dolor     sit     ", 0),
            case("strtrimr_lorem", "strtrimr", json!({"s": lorem}), "     Lorem     ipsum     dolor     sit", 0),
            case("strtrim_all_space", "strtrim", json!({"s": "     "}), "", 0),
            case("strtolower_mixed", "strtolower", json!({"s": "Lorem IPSUM"}), "lorem ipsum", 0),
            case("strtoupper_mixed", "strtoupper", json!({"s": "Lorem IPSUM"}), "LOREM IPSUM", 0),
            case(
                "stpncpy_pads_short_source",
                "stpncpy",
                json!({"src": "ab", "count": 5, "dest_len": 8}),
                "2:ab",
                0,
            ),
            case(
                "stpncpy_truncates_long_source",
                "stpncpy",
                json!({"src": "abcde", "count": 3, "dest_len": 8}),
                "3:abc",
                0,
            ),
            case("strerror_success", "strerror_r", json!({"errnum": 0, "len": 64}), "Success", 0),
            case(
                "strerror_invalid_argument",
                "strerror_r",
                json!({"errnum": 22, "len": 64}),
                "Invalid argument",
                0,
            ),
            case(
                "strerror_zero_length_buffer",
                "strerror_r",
                json!({"errnum": 0, "len": 0}),
                "",
                34,
            ),
            case(
                "strerror_unknown_errno",
                "strerror_r",
                json!({"errnum": -1, "len": 64}),
                "Unknown error -1",
                22,
            ),
            case("to_lower_int_letter", "to_lower_int", json!({"c": 65}), "97", 0),
            case("to_lower_int_eof", "to_lower_int", json!({"c": -1}), "-1", 0),
            case("to_upper_int_out_of_domain", "to_upper_int", json!({"c": 256}), "256", 0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_set_round_trips_through_json() {
        let set = builtin_fixtures();
        let json = set.to_json().expect("builtin set should serialize");
        let parsed = FixtureSet::from_json(&json).expect("round trip should parse");
        assert_eq!(parsed.cases.len(), set.cases.len());
        assert_eq!(parsed.family, set.family);
    }

    #[test]
    fn fixture_case_defaults_missing_code_to_zero() {
        let set = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"string",
                "cases":[
                    {
                        "name":"missing_code",
                        "function":"strlen",
                        "inputs":{"s":"abc"},
                        "expected_output":"3"
                    }
                ]
            }"#,
        )
        .expect("fixture should deserialize");

        assert_eq!(set.cases[0].expected_code, 0);
    }
}
