//! Expected action names for a request path that resolved to nothing.
//!
//! Output is advisory text for 404 diagnostics and must never be used to
//! dispatch a request.

use crate::naming::init_cap;

/// At most three human-readable action guesses for `request_path`.
///
/// ```text
/// /foo/bar/ → foo.FooBarAction#index()
///             foo.FooAction#bar()
///             foo.bar.FooBarAction#index()
/// ```
pub fn build_expected_candidates(request_path: &str, action_suffix: &str) -> Vec<String> {
    let tokens: Vec<&str> = request_path
        .split('/')
        .filter(|t| !t.trim().is_empty())
        .collect();

    match tokens.first() {
        Some(first) if !may_be_parameter_token(first) => {}
        _ => return vec![format!("Index{}#index()", action_suffix)],
    }

    let mut named = String::new();
    let mut method = String::new();
    let mut whole_package = String::new();
    let mut class_prefix = String::new();
    let mut has_more = false;

    for (index, current) in tokens.iter().enumerate() {
        if index == 0 {
            named.push_str(current);
            named.push('.');
            method.push_str(current);
            method.push('.');
        }
        let next_is_action = tokens.get(index + 1).is_some_and(|next| !may_be_parameter_token(next));
        let cap = init_cap(current);
        if next_is_action {
            whole_package.push_str(current);
            whole_package.push('.');
            class_prefix.push_str(&cap);
            continue;
        }

        // last action token: the end of the path or followed by a parameter
        named.push_str(&format!("{}{}{}#index()", class_prefix, cap, action_suffix));
        if index > 0 {
            method.push_str(&format!("{}{}#{}()", class_prefix, action_suffix, current));
            class_prefix.push_str(&cap);
            whole_package.push_str(&format!("{}.{}{}#index()", current, class_prefix, action_suffix));
            has_more = true;
        }
        break;
    }

    let mut names = vec![named];
    if has_more {
        names.push(method);
        names.push(whole_package);
    }
    names
}

/// Tokens starting with a digit or sign, or containing `.`, `%`, `?` or `&`.
pub fn may_be_parameter_token(token: &str) -> bool {
    let first_is_number = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '+' || c == '-');
    first_is_number || token.contains(['.', '%', '?', '&'])
}

/// Multi-line "no routing action" message listing the expected names.
pub fn expected_routing_message(request_path: &str, names: &[String], root_package: &str) -> String {
    let mut message = String::from("\n/= = = = = = = = = = = = = = = = = = = = = = = = *No routing action:\n");
    message.push_str(&format!("e.g. expected actions for {}\n", request_path));
    for name in names {
        if root_package.is_empty() {
            message.push_str(&format!("  {}\n", name));
        } else {
            message.push_str(&format!("  {}.{}\n", root_package, name));
        }
    }
    message.push_str("  (and so on...)\n");
    message.push_str("= = = = = = = = = =/");
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(path: &str) -> Vec<String> {
        build_expected_candidates(path, "Action")
    }

    #[test]
    fn test_index_only() {
        assert_eq!(expected("/"), vec!["IndexAction#index()"]);
        assert_eq!(expected("/123/foo/"), vec!["IndexAction#index()"]);
        assert_eq!(expected("/-1/"), vec!["IndexAction#index()"]);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(expected("/foo/"), vec!["foo.FooAction#index()"]);
        assert_eq!(expected("/foo/123/bar/"), vec!["foo.FooAction#index()"]);
    }

    #[test]
    fn test_two_tokens() {
        let names = expected("/foo/bar/");
        assert_eq!(
            names,
            vec!["foo.FooBarAction#index()", "foo.FooAction#bar()", "foo.bar.FooBarAction#index()"]
        );
        assert_eq!(expected("/foo/bar/123/qux/"), names);
        assert_eq!(expected("/foo//bar"), names);
    }

    #[test]
    fn test_three_tokens() {
        assert_eq!(
            expected("/sea/land/iks/"),
            vec![
                "sea.SeaLandIksAction#index()",
                "sea.SeaLandAction#iks()",
                "sea.land.iks.SeaLandIksAction#index()",
            ]
        );
    }

    #[test]
    fn test_parameter_tokens() {
        assert!(may_be_parameter_token("123"));
        assert!(may_be_parameter_token("4ab"));
        assert!(may_be_parameter_token("+x"));
        assert!(may_be_parameter_token("a.b"));
        assert!(may_be_parameter_token("%2d"));
        assert!(may_be_parameter_token("?foo=bar"));
        assert!(!may_be_parameter_token("member"));
        assert!(!may_be_parameter_token(""));
    }

    #[test]
    fn test_message_layout() {
        let names = expected("/foo/");
        let message = expected_routing_message("/foo/", &names, "app.web");
        assert!(message.contains("e.g. expected actions for /foo/"));
        assert!(message.contains("  app.web.foo.FooAction#index()\n"));
        assert!(message.ends_with("= = = = = = = = = =/"));
    }
}
