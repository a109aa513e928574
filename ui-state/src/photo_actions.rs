//! Per-photo tracking for the gallery's asynchronous actions.

use payloads::{PhotoId, responses};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoActionKind {
    SetMain,
    Delete,
}

/// Records which photo, if any, is the active target of each action kind.
///
/// The gallery shares one busy flag across both kinds, so at most one
/// target per kind is tracked and invoking either kind clears the other:
/// only one destructive intent should read as loading at a time. The busy
/// flag itself belongs to the caller, which sets it around the API call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoActionTracker {
    set_main_target: Option<PhotoId>,
    delete_target: Option<PhotoId>,
}

impl PhotoActionTracker {
    /// Target `photo` with `kind`, clearing the complementary kind's
    /// target. Returns `None` without changing anything when the photo is
    /// the current main photo: the main photo is immune to both promotion
    /// and deletion, even if a stale control invokes it.
    pub fn begin(
        &self,
        kind: PhotoActionKind,
        photo: &responses::Photo,
    ) -> Option<Self> {
        if photo.is_main {
            return None;
        }
        let mut next = self.clone();
        match kind {
            PhotoActionKind::SetMain => {
                next.set_main_target = Some(photo.id.clone());
                next.delete_target = None;
            }
            PhotoActionKind::Delete => {
                next.delete_target = Some(photo.id.clone());
                next.set_main_target = None;
            }
        }
        Some(next)
    }

    /// Per-row loading feedback: true iff the shared busy flag is set and
    /// this photo is the active target of `kind`.
    pub fn is_loading(
        &self,
        kind: PhotoActionKind,
        photo_id: &PhotoId,
        busy: bool,
    ) -> bool {
        busy && self.target(kind) == Some(photo_id)
    }

    pub fn target(&self, kind: PhotoActionKind) -> Option<&PhotoId> {
        match kind {
            PhotoActionKind::SetMain => self.set_main_target.as_ref(),
            PhotoActionKind::Delete => self.delete_target.as_ref(),
        }
    }

    /// Forget both targets, e.g. when the gallery switches modes.
    pub fn reset(&self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, is_main: bool) -> responses::Photo {
        responses::Photo {
            id: PhotoId(id.to_string()),
            url: format!("/images/{id}.jpg"),
            is_main,
        }
    }

    #[test]
    fn begin_targets_the_photo_for_that_kind() {
        let tracker = PhotoActionTracker::default();
        let p2 = photo("p2", false);
        let tracker =
            tracker.begin(PhotoActionKind::Delete, &p2).unwrap();
        assert!(tracker.is_loading(PhotoActionKind::Delete, &p2.id, true));
        assert!(!tracker.is_loading(PhotoActionKind::SetMain, &p2.id, true));
    }

    #[test]
    fn loading_requires_the_shared_busy_flag() {
        let p2 = photo("p2", false);
        let tracker = PhotoActionTracker::default()
            .begin(PhotoActionKind::Delete, &p2)
            .unwrap();
        assert!(!tracker.is_loading(PhotoActionKind::Delete, &p2.id, false));
        assert!(tracker.is_loading(PhotoActionKind::Delete, &p2.id, true));
    }

    #[test]
    fn the_main_photo_is_immune_to_both_kinds() {
        let main = photo("p1", true);
        let tracker = PhotoActionTracker::default();
        assert!(tracker.begin(PhotoActionKind::SetMain, &main).is_none());
        assert!(tracker.begin(PhotoActionKind::Delete, &main).is_none());
    }

    #[test]
    fn refused_begin_leaves_existing_targets_in_place() {
        let main = photo("p1", true);
        let p2 = photo("p2", false);
        let tracker = PhotoActionTracker::default()
            .begin(PhotoActionKind::SetMain, &p2)
            .unwrap();
        assert!(tracker.begin(PhotoActionKind::SetMain, &main).is_none());
        // The p2 target survives the refused invocation.
        assert_eq!(
            tracker.target(PhotoActionKind::SetMain),
            Some(&p2.id)
        );
    }

    #[test]
    fn invoking_one_kind_clears_the_other() {
        let a = photo("a", false);
        let b = photo("b", false);
        let tracker = PhotoActionTracker::default()
            .begin(PhotoActionKind::Delete, &a)
            .unwrap()
            .begin(PhotoActionKind::SetMain, &b)
            .unwrap();
        assert!(!tracker.is_loading(PhotoActionKind::Delete, &a.id, true));
        assert!(tracker.is_loading(PhotoActionKind::SetMain, &b.id, true));
    }

    #[test]
    fn completion_does_not_clear_the_target_reset_does() {
        let p2 = photo("p2", false);
        let tracker = PhotoActionTracker::default()
            .begin(PhotoActionKind::Delete, &p2)
            .unwrap();
        // Busy cleared: no longer loading, but the target is remembered
        // until the next begin or a reset.
        assert!(!tracker.is_loading(PhotoActionKind::Delete, &p2.id, false));
        assert_eq!(tracker.target(PhotoActionKind::Delete), Some(&p2.id));
        assert_eq!(tracker.reset(), PhotoActionTracker::default());
    }
}
