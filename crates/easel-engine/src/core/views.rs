use glam::Vec2;
use crate::components::color::Rgb;
use crate::components::view::View;

/// Index of a view in its [`ViewTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u32);

/// Flat, index-addressed view storage.
/// Ids are positions in the table and stay valid until `clear()`.
pub struct ViewTable {
    views: Vec<View>,
}

impl ViewTable {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            views: Vec::with_capacity(capacity),
        }
    }

    /// Add a view to the table. Later views draw on top of earlier ones.
    pub fn spawn(&mut self, view: View) -> ViewId {
        let id = ViewId(self.views.len() as u32);
        self.views.push(view);
        id
    }

    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.views.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.get_mut(id.0 as usize)
    }

    pub fn set_visible(&mut self, id: ViewId, visible: bool) {
        if let Some(view) = self.get_mut(id) {
            view.visible = visible;
        }
    }

    /// Show or hide every view in a group.
    pub fn set_group_visible(&mut self, ids: &[ViewId], visible: bool) {
        for &id in ids {
            self.set_visible(id, visible);
        }
    }

    pub fn set_tint(&mut self, id: ViewId, tint: Rgb) {
        if let Some(view) = self.get_mut(id) {
            view.tint = tint;
        }
    }

    pub fn is_visible(&self, id: ViewId) -> bool {
        self.get(id).is_some_and(|v| v.visible)
    }

    /// Topmost visible, interactive view under `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<ViewId> {
        self.views
            .iter()
            .enumerate()
            .rev()
            .find(|(_, v)| v.visible && v.interactive && v.contains(point))
            .map(|(i, _)| ViewId(i as u32))
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<ViewId> {
        self.views
            .iter()
            .position(|v| v.tag == tag)
            .map(|i| ViewId(i as u32))
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Remove all views. Every previously issued id becomes invalid.
    pub fn clear(&mut self) {
        self.views.clear();
    }
}

impl Default for ViewTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(x: f32) -> View {
        View::default()
            .with_pos(Vec2::new(x, 0.0))
            .with_size(Vec2::splat(10.0))
            .interactive()
    }

    #[test]
    fn spawn_returns_sequential_ids() {
        let mut table = ViewTable::new();
        assert_eq!(table.spawn(View::default()), ViewId(0));
        assert_eq!(table.spawn(View::default()), ViewId(1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let mut table = ViewTable::new();
        let below = table.spawn(button(0.0));
        let above = table.spawn(button(2.0));
        assert_eq!(table.hit_test(Vec2::new(1.0, 0.0)), Some(above));
        table.set_visible(above, false);
        assert_eq!(table.hit_test(Vec2::new(1.0, 0.0)), Some(below));
    }

    #[test]
    fn hit_test_skips_decorations() {
        let mut table = ViewTable::new();
        table.spawn(View::default().with_size(Vec2::splat(100.0)));
        assert_eq!(table.hit_test(Vec2::ZERO), None);
    }

    #[test]
    fn group_visibility() {
        let mut table = ViewTable::new();
        let group: Vec<ViewId> = (0..3).map(|i| table.spawn(button(i as f32 * 20.0).hidden())).collect();
        table.set_group_visible(&group, true);
        assert!(group.iter().all(|&id| table.is_visible(id)));
    }

    #[test]
    fn find_by_tag() {
        let mut table = ViewTable::new();
        table.spawn(View::default().with_tag("easel"));
        let splat = table.spawn(View::default().with_tag("splat"));
        assert_eq!(table.find_by_tag("splat"), Some(splat));
        assert_eq!(table.find_by_tag("missing"), None);
    }
}
