use crate::{Bounds, Container, Host, Offset};

/// Bounds of the viewport an element is tested against.
///
/// - [`Container::Window`]: `{top: 0, left: 0, right: width, bottom: height}` of the window.
/// - [`Container::Element`]: the container's client rectangle as reported by the host.
/// - No container: `None`.
pub fn viewport_bounds<H: Host>(
    host: &H,
    container: Option<&Container<H::Element>>,
) -> Option<Bounds> {
    match container? {
        Container::Window => {
            let size = host.window_size();
            Some(Bounds::new(0.0, size.width, size.height, 0.0))
        }
        Container::Element(el) => host.client_rect(el),
    }
}

/// Bounds of `element` in the same coordinate space as [`viewport_bounds`].
///
/// Returns `None` if there is no element (not mounted yet) or the host cannot measure it.
pub fn element_bounds<H: Host>(host: &H, element: Option<&H::Element>) -> Option<Bounds> {
    host.bounding_rect(element?)
}

/// Normalizes an [`Offset`] into full bounds; absent sides are `0`.
pub fn offset_bounds(offset: &Offset) -> Bounds {
    match *offset {
        Offset::Uniform(v) => Bounds::uniform(v),
        Offset::Sides(s) => Bounds::new(
            s.top.unwrap_or(0.0),
            s.right.unwrap_or(0.0),
            s.bottom.unwrap_or(0.0),
            s.left.unwrap_or(0.0),
        ),
    }
}

/// Whether `element` overlaps `viewport` shrunk inward by `offset`.
///
/// Overlap is strict on all four axes: an element whose edge exactly touches the effective
/// viewport edge is not in view. A missing `offset` counts as zero on every side.
pub fn is_in_viewport(element: &Bounds, viewport: &Bounds, offset: Option<&Bounds>) -> bool {
    let effective = viewport.inset(offset.unwrap_or(&Bounds::ZERO));
    element.left < effective.right
        && element.right > effective.left
        && element.top < effective.bottom
        && element.bottom > effective.top
}
