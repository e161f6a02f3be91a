//! Scroll target math for the navigation coordinator.
//!
//! The coordinator on the web side owns the timers; everything that can be
//! computed without a viewport lives here.

/// Height of the fixed page header in CSS pixels. Anchor scrolls land just
/// below it so the header never covers the target heading.
pub const HEADER_OFFSET: f64 = 72.0;

/// Delay before computing a scroll target, letting a panel-visibility
/// transition finish layout first.
pub const SETTLE_MS: i32 = 150;

/// Delay between starting the scroll and moving keyboard focus to the target.
pub const FOCUS_MS: i32 = 400;

/// Duration of the animated fallback scroll.
pub const ANIM_MS: f64 = 400.0;

/// How long the arrival highlight stays on the target.
pub const HIGHLIGHT_MS: i32 = 2000;

/// Absolute scroll destination for an element, clamped at the document top.
///
/// `element_top` is viewport-relative (a bounding-rect top), `page_y` the
/// current vertical scroll position.
#[must_use]
pub fn target_offset(element_top: f64, page_y: f64) -> f64 {
    (element_top + page_y - HEADER_OFFSET).max(0.0)
}

/// Ease-in-out quadratic timing function over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = 2.0f64.mul_add(-t, 2.0);
        u.mul_add(-u, 2.0) / 2.0
    }
}

/// Position of the fallback animation `elapsed` milliseconds after start.
#[must_use]
pub fn frame_position(start: f64, end: f64, elapsed: f64) -> f64 {
    let progress = (elapsed / ANIM_MS).clamp(0.0, 1.0);
    (end - start).mul_add(ease_in_out_quad(progress), start)
}

/// True once the fallback animation has run its course.
#[must_use]
pub fn animation_done(elapsed: f64) -> bool {
    elapsed >= ANIM_MS
}
