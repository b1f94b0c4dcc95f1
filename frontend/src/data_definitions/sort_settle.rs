//! Two-phase settle protocol for query-dependent sort defaults.
//!
//! Search surfaces whose default sort depends on query presence (explicit
//! field sort while browsing, relevance while searching) must correct the
//! persisted sort exactly once when the query appears or disappears. The
//! corrective tick renders nothing; the next evaluation renders with the
//! corrected state.

/// Outcome of one render evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Render children normally.
    Ready,
    /// Render nothing this tick. The outer `Option` says whether a sort
    /// correction must be applied, the inner one is the corrected sort value.
    Settling { force_sort: Option<Option<String>> },
}

/// Tracks the previously seen query so a query-presence transition is
/// detected exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSettle {
    prev_query: String,
}

impl SortSettle {
    pub fn new(initial_query: String) -> Self {
        Self {
            prev_query: initial_query,
        }
    }

    /// Pure evaluation against the current query and persisted sort value.
    /// On `Settling`, the caller applies the correction (if any), calls
    /// [`SortSettle::note_query`] and renders nothing.
    ///
    /// Callers must observe the settle state reactively (a `read`, not a
    /// `peek`): when there is no sort correction, the `note_query` write is
    /// the only thing that brings the follow-up pass around.
    pub fn preview(
        &self,
        current_query: &str,
        sort_by: &Option<String>,
        browse_default: &str,
    ) -> SettleOutcome {
        // Browsing with no explicit sort: relevance makes no sense without a
        // query, restore the browse default.
        if current_query.is_empty() && sort_by.is_none() {
            return SettleOutcome::Settling {
                force_sort: Some(Some(browse_default.to_string())),
            };
        }
        if current_query != self.prev_query {
            // Switching from browsing to searching resets to relevance.
            let force_sort = if self.prev_query.is_empty() && !current_query.is_empty() {
                Some(None)
            } else {
                None
            };
            return SettleOutcome::Settling { force_sort };
        }
        SettleOutcome::Ready
    }

    pub fn note_query(&mut self, current_query: &str) {
        self.prev_query = current_query.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSE_DEFAULT: &str = "name";

    /// Drives preview/note_query the way a rendering surface would: an
    /// evaluation runs only when an observed input was written since the
    /// previous one. The settle state is itself an observed input, so the
    /// note_query write is what schedules the follow-up pass.
    fn run_ticks(
        settle: &mut SortSettle,
        query: &str,
        mut sort: Option<String>,
        max_ticks: usize,
    ) -> (Vec<bool>, Option<String>) {
        let mut rendered = Vec::new();
        // the caller just changed an input, so the first pass is due
        let mut scheduled = true;
        for _ in 0..max_ticks {
            if !scheduled {
                break;
            }
            scheduled = false;
            match settle.preview(query, &sort, BROWSE_DEFAULT) {
                SettleOutcome::Ready => {
                    rendered.push(true);
                }
                SettleOutcome::Settling { force_sort } => {
                    rendered.push(false);
                    if let Some(corrected) = force_sort {
                        sort = corrected;
                    }
                    settle.note_query(query);
                    scheduled = true;
                }
            }
        }
        (rendered, sort)
    }

    #[test]
    fn browse_to_search_resets_sort_exactly_once() {
        let mut settle = SortSettle::new(String::new());
        // steady state while browsing
        let (rendered, sort) = run_ticks(&mut settle, "", Some("name".to_string()), 4);
        assert_eq!(rendered, vec![true]);
        assert_eq!(sort, Some("name".to_string()));

        // query appears: one corrective non-rendering tick, then sort=None
        let (rendered, sort) = run_ticks(&mut settle, "abc", Some("name".to_string()), 4);
        assert_eq!(rendered, vec![false, true]);
        assert_eq!(sort, None);

        // no further correction on subsequent evaluations
        assert_eq!(settle.preview("abc", &None, BROWSE_DEFAULT), SettleOutcome::Ready);
    }

    #[test]
    fn search_to_browse_restores_browse_default() {
        let mut settle = SortSettle::new("abc".to_string());
        let (rendered, sort) = run_ticks(&mut settle, "", None, 4);
        assert_eq!(rendered, vec![false, true]);
        assert_eq!(sort, Some("name".to_string()));
    }

    #[test]
    fn explicit_sort_survives_query_removal() {
        let mut settle = SortSettle::new("abc".to_string());
        // user picked a concrete sort while searching; clearing the query
        // keeps it, only the prev-query bookkeeping tick is skipped
        let (rendered, sort) = run_ticks(&mut settle, "", Some("-name".to_string()), 4);
        assert_eq!(rendered, vec![false, true]);
        assert_eq!(sort, Some("-name".to_string()));
    }

    #[test]
    fn query_edit_while_searching_does_not_touch_sort() {
        let mut settle = SortSettle::new("ab".to_string());
        let (rendered, sort) = run_ticks(&mut settle, "abc", None, 4);
        assert_eq!(rendered, vec![false, true]);
        assert_eq!(sort, None);
    }

    #[test]
    fn rendering_resumes_without_any_sort_correction() {
        // both transitions below leave the sort field untouched, so the
        // prev-query write is the only thing that can end the blank tick
        let mut settle = SortSettle::new("ab".to_string());
        let (rendered, _) = run_ticks(&mut settle, "abc", None, 4);
        assert_eq!(rendered, vec![false, true]);

        let mut settle = SortSettle::new("abc".to_string());
        let (rendered, sort) = run_ticks(&mut settle, "", Some("-name".to_string()), 4);
        assert_eq!(rendered, vec![false, true]);
        assert_eq!(sort, Some("-name".to_string()));
    }
}
