use super::{DrawCmd, SortKey, ZIndex};

/// A recorded command and its place in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// The commands recorded for one frame.
///
/// Items are kept in recording order; [`iter_in_paint_order`](Self::iter_in_paint_order)
/// yields them back to front. The paint-order index is rebuilt lazily and its
/// buffer survives [`clear`](Self::clear), so steady-state frames do not allocate.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    paint_order: Vec<usize>,
    paint_order_valid: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every item, keeping capacity for the next frame.
    pub fn clear(&mut self) {
        self.items.clear();
        self.paint_order.clear();
        self.paint_order_valid = false;
    }

    /// Items in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        // Frames hold a few dozen commands; u32 never wraps in practice.
        let order = self.items.len() as u32;
        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });
        self.paint_order_valid = false;
    }

    /// Items back to front: by layer, ties in recording order.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if !self.paint_order_valid {
            let items = &self.items;
            self.paint_order.clear();
            self.paint_order.extend(0..items.len());
            // Keys are unique, so an unstable sort is still deterministic.
            self.paint_order.sort_unstable_by_key(|&i| items[i].key);
            self.paint_order_valid = true;
        }
        self.paint_order.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    #[test]
    fn lower_layers_paint_first() {
        let mut list = DrawList::new();
        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
        list.push_rect(ZIndex::new(2), unit, Color::black());
        list.push_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::white());
        list.push_rect(ZIndex::new(2), unit, Color::white());

        let order: Vec<_> = list
            .iter_in_paint_order()
            .map(|i| (i.cmd.kind(), i.key.order))
            .collect();
        assert_eq!(order, vec![("circle", 1), ("rect", 0), ("rect", 2)]);
    }

    #[test]
    fn pushes_after_iteration_are_resorted() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex::new(5), Vec2::zero(), 1.0, Color::white());
        assert_eq!(list.iter_in_paint_order().count(), 1);

        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
        list.push_rect(ZIndex::new(1), unit, Color::black());
        let first = list.iter_in_paint_order().next().map(|i| i.cmd.kind());
        assert_eq!(first, Some("rect"));
    }

    #[test]
    fn clear_restarts_numbering() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::white());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);

        list.push_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::white());
        assert_eq!(list.items()[0].key.order, 0);
    }
}
