//! Best-effort action path inference from view template paths.
//!
//! `/member/member_list.jsp` lives in `/member` and is named after the
//! `member` package plus the `list` method, so it most likely belongs to
//! `/member/list/`. Used for diagnostics and static linking only, never for
//! dispatch.

use std::fmt;
use std::sync::Arc;

use crate::routing::adjust::ActionAdjustment;

const INDEX_WORD: &str = "index";

#[derive(Clone)]
pub struct ViewPathInferencer {
    adjustment: Arc<dyn ActionAdjustment>,
}

impl fmt::Debug for ViewPathInferencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewPathInferencer")
            .field("adjustment", &self.adjustment)
            .finish()
    }
}

impl ViewPathInferencer {
    pub fn new(adjustment: Arc<dyn ActionAdjustment>) -> Self {
        Self { adjustment }
    }

    /// Guess the action path serving `view_path`.
    ///
    /// Paths whose last element has no extension are returned unchanged.
    /// When the file name cannot be matched against its directory the
    /// directory itself (with a trailing `/`) is returned.
    pub fn infer_action_path(&self, view_path: &str) -> String {
        let (directory, file_name) = view_path.rsplit_once('/').unwrap_or(("", view_path));
        let Some((base_name, _ext)) = file_name.rsplit_once('.') else {
            return view_path.to_string();
        };

        let path_base = format!("{}/", directory);
        let words: Vec<String> = base_name.split('_').map(str::to_string).collect();
        if words.len() < 2 {
            // e.g. list.jsp: no package prefix to match
            return path_base;
        }

        if let Some(hit) = match_words(directory, &path_base, &words) {
            return hit;
        }
        let retry = self.adjustment.view_retry_words(view_path, &words);
        if !retry.is_empty() {
            if let Some(hit) = match_words(directory, &path_base, &retry) {
                return hit;
            }
        }
        path_base
    }
}

/// The leading words must be the tail of the directory; the last word names
/// the method.
fn match_words(directory: &str, path_base: &str, words: &[String]) -> Option<String> {
    let (last, leading) = words.split_last()?;
    if leading.is_empty() {
        return None;
    }
    let window: String = leading.iter().map(|w| format!("/{}", w)).collect();
    if !directory.ends_with(&window) {
        return None;
    }
    if last == INDEX_WORD {
        Some(path_base.to_string())
    } else {
        Some(format!("{}{}/", path_base, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::AdjustmentConfig;
    use crate::routing::adjust::{ConfiguredAdjustment, NoAdjustment};

    fn plain() -> ViewPathInferencer {
        ViewPathInferencer::new(Arc::new(NoAdjustment))
    }

    #[test]
    fn test_package_prefixed_view() {
        let views = plain();
        assert_eq!(views.infer_action_path("/member/member_list.jsp"), "/member/list/");
        assert_eq!(
            views.infer_action_path("/member/purchase/member_purchase_list.html"),
            "/member/purchase/list/"
        );
    }

    #[test]
    fn test_index_view_maps_to_directory() {
        assert_eq!(
            plain().infer_action_path("/member/list/member_list_index.jsp"),
            "/member/list/"
        );
    }

    #[test]
    fn test_fallbacks() {
        let views = plain();
        assert_eq!(views.infer_action_path("/member/list.jsp"), "/member/");
        assert_eq!(views.infer_action_path("/member/purchase_list.jsp"), "/member/");
        assert_eq!(views.infer_action_path("member_list.jsp"), "/");
    }

    #[test]
    fn test_no_extension_is_unchanged() {
        let views = plain();
        assert_eq!(views.infer_action_path("/member/list/"), "/member/list/");
        assert_eq!(views.infer_action_path("/member/member_list"), "/member/member_list");
        let once = views.infer_action_path("/sea/land");
        assert_eq!(views.infer_action_path(&once), once);
    }

    #[test]
    fn test_retry_words() {
        let adjustment = ConfiguredAdjustment::from_config(&AdjustmentConfig {
            request_path_prefix: None,
            view_retry_prefixes: vec!["sp".into()],
        });
        let views = ViewPathInferencer::new(Arc::new(adjustment));
        assert_eq!(views.infer_action_path("/member/sp_member_list.html"), "/member/list/");
        assert_eq!(plain().infer_action_path("/member/sp_member_list.html"), "/member/");
    }
}
