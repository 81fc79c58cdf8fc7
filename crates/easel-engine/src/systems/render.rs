use crate::core::views::ViewTable;
use crate::renderer::instance::{ViewBuffer, ViewInstance};

/// Rebuild the view buffer from the table. Hidden and fully transparent views are skipped.
pub fn build_view_buffer(views: &ViewTable, buffer: &mut ViewBuffer) {
    buffer.clear();
    for view in views.iter() {
        if !view.visible || view.alpha <= 0.0 {
            continue;
        }
        buffer.push(ViewInstance::new(
            view.pos.x,
            view.pos.y,
            view.size.x,
            view.size.y,
            view.texture.0 as f32,
            view.tint.to_f32(),
            view.alpha,
        ));
    }
}
