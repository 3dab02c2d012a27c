use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ops::Range;
use std::rc::Rc;

use fltk::{
    app::{self, MouseWheel},
    draw,
    enums::{Color, Event},
    image::SvgImage,
    prelude::*,
    widget::Widget,
};

use crate::app::controllers::palette::{
    CommandElement, CommandPalette, ELEMENT_HEIGHT, ELEMENT_WIDTH, STRIP_INSET,
};
use crate::app::domain::color::Rgb;
use crate::app::domain::palette_config::PaletteStyle;

pub const ACCESSORY_BAR_HEIGHT: i32 = ELEMENT_HEIGHT;

const ICON_SIZE: i32 = 22;
const WHEEL_STEP: i32 = ELEMENT_WIDTH / 2;
/// Pointer travel after which a press becomes a scroll instead of a tap.
const DRAG_THRESHOLD: i32 = 4;

/// Rasterized icons keyed by asset name and tint.
struct IconCache<T> {
    images: HashMap<(&'static str, Rgb), T>,
}

impl<T> IconCache<T> {
    fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    fn get_or_load<E>(
        &mut self,
        key: (&'static str, Rgb),
        load: impl FnOnce() -> Result<T, E>,
    ) -> Result<&mut T, E> {
        match self.images.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(load()?)),
        }
    }

    /// Drop every image not drawn in `style`'s tint.
    fn retain_style(&mut self, style: Option<PaletteStyle>) {
        match style {
            Some(style) => self.images.retain(|(_, tint), _| *tint == style.tint),
            None => self.images.clear(),
        }
    }

    fn len(&self) -> usize {
        self.images.len()
    }
}

struct AccessoryBarState {
    palette: Option<Rc<CommandPalette>>,
    /// Recycled slots, one per visible position
    elements: Vec<CommandElement>,
    icons: IconCache<SvgImage>,
    scroll_x: i32,
    /// Pointer x and scroll offset at the last press
    drag_origin: Option<(i32, i32)>,
    /// Farthest horizontal pointer travel since the last press
    travel: i32,
    pressed: Option<usize>,
    hover: Option<usize>,
}

/// Horizontally scrolling strip that draws a [`CommandPalette`] and forwards
/// taps to it.
pub struct AccessoryBar {
    pub widget: Widget,
    state: Rc<RefCell<AccessoryBarState>>,
}

impl AccessoryBar {
    pub fn new(x: i32, y: i32, w: i32) -> Self {
        let state = Rc::new(RefCell::new(AccessoryBarState {
            palette: None,
            elements: Vec::new(),
            icons: IconCache::new(),
            scroll_x: 0,
            drag_origin: None,
            travel: 0,
            pressed: None,
            hover: None,
        }));

        let mut widget = Widget::new(x, y, w, ACCESSORY_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let mut st = draw_state.borrow_mut();
            draw_accessory_bar(wid, &mut st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_accessory_bar(wid, event, &handle_state));

        Self { widget, state }
    }

    /// Show `palette`, or hide the bar entirely when there is none.
    pub fn set_palette(&mut self, palette: Option<Rc<CommandPalette>>) {
        {
            let mut st = self.state.borrow_mut();
            st.scroll_x = 0;
            st.pressed = None;
            st.hover = None;
            st.drag_origin = None;
            st.travel = 0;
            st.elements.clear();
            st.icons.retain_style(palette.as_ref().map(|p| p.style()));
            st.palette = palette;
        }

        if self.state.borrow().palette.is_some() {
            self.widget.show();
        } else {
            self.widget.hide();
        }
        self.widget.redraw();
    }

    pub fn palette(&self) -> Option<Rc<CommandPalette>> {
        self.state.borrow().palette.clone()
    }
}

// --- Geometry ---

/// Keep the strip inside its content; there is no overscroll.
pub fn clamp_scroll(scroll_x: i32, content_w: i32, view_w: i32) -> i32 {
    scroll_x.clamp(0, (content_w - view_w).max(0))
}

/// Indices of the slots that intersect a `view_w` wide window at `scroll_x`.
pub fn visible_range(scroll_x: i32, view_w: i32, count: usize) -> Range<usize> {
    if count == 0 || view_w <= 0 {
        return 0..0;
    }
    let first = ((scroll_x - STRIP_INSET).max(0) / ELEMENT_WIDTH) as usize;
    let last = ((scroll_x + view_w - STRIP_INSET - 1).max(0) / ELEMENT_WIDTH) as usize + 1;
    first.min(count)..last.min(count)
}

/// Slot a press/release pair activates: the pointer went down and came up
/// on the same slot without travelling past the drag threshold. A press
/// outside every slot (the insets) never activates.
pub fn tap_target(
    pressed: Option<usize>,
    released_on: Option<usize>,
    travel: i32,
) -> Option<usize> {
    if travel > DRAG_THRESHOLD {
        return None;
    }
    pressed.filter(|&index| released_on == Some(index))
}

fn to_fltk(color: Rgb) -> Color {
    Color::from_rgb(color.r, color.g, color.b)
}

/// Mix `amount` of `over` into `base`.
fn blend(base: Rgb, over: Rgb, amount: f32) -> Rgb {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
    Rgb::new(mix(base.r, over.r), mix(base.g, over.g), mix(base.b, over.b))
}

fn slot_under_pointer(wid: &Widget, st: &AccessoryBarState) -> Option<usize> {
    let palette = st.palette.as_ref()?;
    let my = app::event_y();
    if my < wid.y() || my >= wid.y() + wid.h() {
        return None;
    }
    palette.slot_at(app::event_x() - wid.x() + st.scroll_x)
}

// --- Drawing ---

fn draw_accessory_bar(wid: &Widget, st: &mut AccessoryBarState) {
    let Some(palette) = st.palette.clone() else {
        return;
    };
    let (wx, wy, ww, wh) = (wid.x(), wid.y(), wid.w(), wid.h());
    let style = palette.style();

    draw::set_draw_color(to_fltk(style.background));
    draw::draw_rectf(wx, wy, ww, wh);

    st.scroll_x = clamp_scroll(st.scroll_x, palette.content_width(), ww);
    let range = visible_range(st.scroll_x, ww, palette.item_count());
    if st.elements.len() < range.len() {
        st.elements.resize_with(range.len(), CommandElement::new);
    }

    draw::push_clip(wx, wy, ww, wh);
    for (slot, index) in range.enumerate() {
        let Some(rect) = palette.slot_rect(index) else {
            continue;
        };
        let x = wx + rect.x - st.scroll_x;
        let y = wy + rect.y;

        let highlight = if st.pressed == Some(index) {
            Some(0.25)
        } else if st.hover == Some(index) {
            Some(0.10)
        } else {
            None
        };
        if let Some(amount) = highlight {
            draw::set_draw_color(to_fltk(blend(style.background, style.tint, amount)));
            draw::draw_rectf(x + 2, y + 4, rect.w - 4, rect.h - 8);
        }

        let element = &mut st.elements[slot];
        palette.element_at(index, element);
        let (Some(icon), Some(tint)) = (element.icon(), element.tint()) else {
            continue;
        };

        let loaded = st.icons.get_or_load((icon.name, tint), || {
            let mut image = SvgImage::from_data(&icon.tinted_svg(tint))?;
            image.scale(ICON_SIZE, ICON_SIZE, true, true);
            Ok::<_, FltkError>(image)
        });
        let image = match loaded {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(icon = icon.name, "failed to load toolbar icon: {e}");
                continue;
            }
        };
        image.draw(
            x + (rect.w - ICON_SIZE) / 2,
            y + (rect.h - ICON_SIZE) / 2,
            ICON_SIZE,
            ICON_SIZE,
        );
    }
    draw::pop_clip();
}

// --- Event handling ---

fn handle_accessory_bar(
    wid: &mut Widget,
    event: Event,
    state: &Rc<RefCell<AccessoryBarState>>,
) -> bool {
    match event {
        Event::Enter => true,
        Event::Push => {
            if app::event_button() != 1 {
                return false;
            }
            let mut st = state.borrow_mut();
            st.pressed = slot_under_pointer(wid, &st);
            st.drag_origin = Some((app::event_x(), st.scroll_x));
            st.travel = 0;
            drop(st);
            wid.redraw();
            true
        }
        Event::Drag => {
            let mut st = state.borrow_mut();
            let Some((origin_x, origin_scroll)) = st.drag_origin else {
                return false;
            };
            let dx = app::event_x() - origin_x;
            st.travel = st.travel.max(dx.abs());
            // Highlight goes away as soon as the press can no longer tap
            st.pressed = tap_target(st.pressed, st.pressed, st.travel);
            let content_w = st.palette.as_ref().map_or(0, |p| p.content_width());
            st.scroll_x = clamp_scroll(origin_scroll - dx, content_w, wid.w());
            drop(st);
            wid.redraw();
            true
        }
        Event::Released => {
            let mut st = state.borrow_mut();
            let pressed = st.pressed.take();
            st.drag_origin = None;
            let target = tap_target(pressed, slot_under_pointer(wid, &st), st.travel);
            let palette = st.palette.clone();
            drop(st);
            wid.redraw();

            if let (Some(index), Some(palette)) = (target, palette) {
                palette.activate(index);
            }
            true
        }
        Event::MouseWheel => {
            let step = match (app::event_dx(), app::event_dy()) {
                (MouseWheel::Right, _) | (_, MouseWheel::Down) => WHEEL_STEP,
                (MouseWheel::Left, _) | (_, MouseWheel::Up) => -WHEEL_STEP,
                _ => return false,
            };
            let mut st = state.borrow_mut();
            let content_w = st.palette.as_ref().map_or(0, |p| p.content_width());
            st.scroll_x = clamp_scroll(st.scroll_x + step, content_w, wid.w());
            drop(st);
            wid.redraw();
            true
        }
        Event::Move => {
            let mut st = state.borrow_mut();
            let hover = slot_under_pointer(wid, &st);
            if hover == st.hover {
                return true;
            }
            st.hover = hover;
            let label = hover
                .and_then(|i| st.palette.as_ref().and_then(|p| p.command_at(i)))
                .map(|c| c.label());
            drop(st);
            wid.set_tooltip(label.unwrap_or(""));
            wid.redraw();
            true
        }
        Event::Leave => {
            state.borrow_mut().hover = None;
            wid.redraw();
            true
        }
        _ => false,
    }
}
