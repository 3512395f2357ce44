use egui::{Context, Event, Key, Modifiers, Pos2, Rect};

use crate::tool::ToolMode;

/// Pointer events in canvas-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    PointerDown(Pos2),
    PointerDrag(Pos2),
    PointerUp(Pos2),
}

/// Actions reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SelectMode(ToolMode),
    Save,
    Reset,
}

/// Map a key press to its shortcut, if it has one
pub fn shortcut_for_key(key: Key, modifiers: Modifiers) -> Option<ShortcutAction> {
    if modifiers.ctrl || modifiers.command || modifiers.alt {
        return None;
    }
    match key {
        Key::R => Some(ShortcutAction::SelectMode(ToolMode::Rectangle)),
        Key::F => Some(ShortcutAction::SelectMode(ToolMode::FreeLine)),
        Key::S => Some(ShortcutAction::Save),
        Key::Delete => Some(ShortcutAction::Reset),
        _ => None,
    }
}

/// Collect the shortcuts pressed this frame
pub fn pressed_shortcuts(ctx: &Context) -> Vec<ShortcutAction> {
    let wants_keyboard_input = ctx.wants_keyboard_input();
    ctx.input(|input| shortcuts_from_events(&input.events, wants_keyboard_input))
}

/// Shortcuts in `events`. None fire while a widget has keyboard focus,
/// since the bare keys are then typed into it.
pub fn shortcuts_from_events(events: &[Event], wants_keyboard_input: bool) -> Vec<ShortcutAction> {
    if wants_keyboard_input {
        return Vec::new();
    }
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } => shortcut_for_key(*key, *modifiers),
            _ => None,
        })
        .collect()
}

/// The primary-button state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Pointer position in screen coordinates, if known
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    /// Whether the canvas is the topmost thing under the pointer. False
    /// while a popup or window covers it.
    pub canvas_hovered: bool,
}

impl PointerSample {
    /// Read the primary button state from the egui context
    pub fn from_ctx(ctx: &Context, canvas_hovered: bool) -> Self {
        ctx.input(|input| Self {
            canvas_hovered,
            pos: input.pointer.interact_pos(),
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Turns per-frame pointer samples into canvas events.
///
/// A stroke only starts on a press over the uncovered canvas, but once
/// started it keeps receiving drags and its release even outside the
/// canvas or under a popup.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    stroke_active: bool,
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            stroke_active: false,
            last_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if the layout changed)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn is_stroke_active(&self) -> bool {
        self.stroke_active
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<CanvasEvent> {
        self.translate(PointerSample::from_ctx(ctx, canvas_hovered))
    }

    pub fn translate(&mut self, sample: PointerSample) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        if let Some(pos) = sample.pos {
            if sample.pressed && sample.canvas_hovered && self.canvas_rect.contains(pos) {
                self.stroke_active = true;
                self.last_pos = Some(pos);
                events.push(CanvasEvent::PointerDown(self.to_canvas(pos)));
            } else if self.stroke_active && sample.down && self.last_pos != Some(pos) {
                self.last_pos = Some(pos);
                events.push(CanvasEvent::PointerDrag(self.to_canvas(pos)));
            }
        }

        if sample.released && self.stroke_active {
            self.stroke_active = false;
            if let Some(pos) = sample.pos.or(self.last_pos) {
                events.push(CanvasEvent::PointerUp(self.to_canvas(pos)));
            }
            self.last_pos = None;
        }

        events
    }
}
