//! Best-effort introspection of a callable's declared parameter names.
//!
//! Given the source text of a conventional single-clause callable
//! (`function f(a, b) {}`, `(a, b) => ...`, a method head, etc.), extract
//! the ordered list of declared parameter names. This is a lightweight
//! heuristic, not a parser: comments are stripped first, the parameter
//! region is taken between the first `(` and the first `)` of the stripped
//! text, and the region is split at top-level commas. Default-value
//! expressions are discarded; a destructured parameter is kept as one
//! opaque token rather than expanded into its field names.
//!
//! Known limitation: callables whose leading syntax contains parentheses
//! before the parameter list (certain higher-order wrapping forms) misslice
//! the region. That is the contract of the first-paren heuristic.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Line comments to end of line, block comments non-greedy across lines.
static STRIP_COMMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m://.*$)|(?s:/\*.*?\*/)").unwrap());

/// Remove every line and block comment from a callable's source text.
///
/// Runs before region extraction so a comment containing parenthesis-like
/// characters cannot corrupt the boundary search.
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    STRIP_COMMENTS.replace_all(source, "")
}

/// Extract the declared parameter names from a callable's source text, in
/// declaration order.
///
/// Never fails: zero-parameter callables, missing delimiters, and
/// unconventional text all degrade to an empty (or partial) result.
pub fn extract_parameter_names(source: &str) -> Vec<String> {
    let stripped = strip_comments(source);
    let Some(open) = stripped.find('(') else {
        return Vec::new();
    };
    let Some(close) = stripped.find(')') else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }
    split_parameter_region(&stripped[open + 1..close])
}

/// Split the raw parameter region at top-level commas, tracking bracket
/// depth so commas inside destructuring patterns or default values do not
/// fracture a token.
fn split_parameter_region(region: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, ch) in region.char_indices() {
        match ch {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                names.extend(clean_token(&region[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    names.extend(clean_token(&region[start..]));
    names
}

/// Turn one comma-delimited segment into a parameter token: drop the
/// default-value expression (everything from the first top-level `=`),
/// then strip remaining whitespace and comma characters. Empty segments
/// yield nothing.
fn clean_token(segment: &str) -> Option<String> {
    let mut depth = 0usize;
    let mut cut = segment.len();
    for (i, ch) in segment.char_indices() {
        match ch {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => {
                cut = i;
                break;
            }
            _ => {}
        }
    }
    let name: String = segment[..cut]
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_simple_parameter_names_in_order() {
        assert_eq!(
            extract_parameter_names("function add(a, b) { return a + b; }"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn arrow_function_single_parameter() {
        assert_eq!(extract_parameter_names("(x) => x * 2"), vec!["x"]);
    }

    #[test]
    fn zero_parameter_callable_yields_empty() {
        assert_eq!(extract_parameter_names("() => {}"), Vec::<String>::new());
        assert_eq!(
            extract_parameter_names("function noop() {}"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn text_without_delimiters_yields_empty() {
        assert_eq!(extract_parameter_names("not a callable"), Vec::<String>::new());
        assert_eq!(extract_parameter_names("close) first ("), Vec::<String>::new());
    }

    #[test]
    fn default_value_expressions_are_discarded() {
        assert_eq!(
            extract_parameter_names("function f(a, b = 2) {}"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn destructured_parameter_stays_one_opaque_token() {
        // A comma inside the pattern or its default must not fracture the
        // token; cleanup removes whitespace and commas within it.
        assert_eq!(
            extract_parameter_names("function f(a, b = 2, {c, d} = {}) {}"),
            vec!["a", "b", "{cd}"]
        );
    }

    #[test]
    fn line_comment_with_unbalanced_paren_is_ignored() {
        let source = "// wraps console.log(\nfunction log(msg, level) {}";
        assert_eq!(extract_parameter_names(source), vec!["msg", "level"]);
    }

    #[test]
    fn block_comment_before_parameters_is_ignored() {
        let source = "/* takes (several) arguments */ function h(x) {}";
        assert_eq!(extract_parameter_names(source), vec!["x"]);
    }

    #[test]
    fn comment_inside_parameter_list_is_ignored() {
        assert_eq!(
            extract_parameter_names("function f(/* unused */ a, b) {}"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn strip_comments_handles_multiline_blocks_non_greedily() {
        let source = "a /* one\ntwo */ b /* three */ c";
        assert_eq!(strip_comments(source), "a  b  c");
    }
}
