use bracket_geometry::prelude::Point;
use bracket_terminal::prelude::*;

use crate::audio::Soundtrack;
use crate::data::{self, MENU};
use crate::map::Surface;
use crate::scene::{Mode, Scene, SceneController};
use crate::viewport::Viewport;

pub const SCREEN_WIDTH: i32 = 80;
pub const SCREEN_HEIGHT: i32 = 36;

const DIALOG_WIDTH: i32 = 34;
const DIALOG_HEIGHT: i32 = 10;
const NARRATION_TOP: i32 = 30;
const NARRATION_WIDTH: i32 = 70;
const STATUS_ROW: i32 = SCREEN_HEIGHT - 1;

fn fg() -> RGB {
    RGB::named(WHITE)
}

fn bg() -> RGB {
    RGB::named(BLACK)
}

/// Draws the whole frame for the controller's current mode.
pub fn draw<S: Soundtrack>(ctx: &mut BTerm, controller: &SceneController<S>) {
    match controller.mode() {
        Mode::Menu => draw_menu(ctx, controller.menu_revealing(), controller.menu_index()),
        Mode::ConfirmQuit => {
            draw_menu(ctx, false, controller.menu_index());
            draw_dialog(ctx, data::QUIT_PROMPT);
        }
        Mode::NameEntry => draw_name_box(ctx, controller.name_text()),
        Mode::Playing => {
            if let Some(scene) = controller.scene() {
                draw_scene(ctx, scene);
            }
            if let Some(text) = controller.narration() {
                draw_narration(ctx, &text, controller.narration_complete());
            }
            if controller.paused() {
                draw_dialog(ctx, data::QUIT_PROMPT);
            }
        }
    }
    if let Some(status) = controller.status() {
        ctx.print_color_centered(STATUS_ROW, RGB::named(LIGHT_GRAY), bg(), status);
    }
}

/// Shown for the last frame before a size-triggered exit.
pub fn draw_too_small(ctx: &mut BTerm) {
    ctx.print_color_centered(SCREEN_HEIGHT / 2, RGB::named(YELLOW), bg(), data::TOO_SMALL_NOTICE);
}

fn print_art(ctx: &mut BTerm, art: &[&str], top: i32) {
    for (row, line) in art.iter().enumerate() {
        let x = SCREEN_WIDTH / 2 - line.chars().count() as i32 / 2;
        ctx.print_color(x, top + row as i32, fg(), bg(), line);
    }
}

fn draw_menu(ctx: &mut BTerm, revealing: bool, selected: usize) {
    let middle = SCREEN_HEIGHT / 2;
    if revealing {
        let rows = (data::TITLE.len() + data::CLOSED_SCROLL.len()) as i32;
        let top = middle - rows / 2;
        print_art(ctx, data::TITLE, top);
        print_art(ctx, data::CLOSED_SCROLL, top + data::TITLE.len() as i32);
        return;
    }

    let rows = (data::TITLE.len() + data::OPEN_SCROLL.len()) as i32;
    let top = middle - rows / 2;
    print_art(ctx, data::TITLE, top);
    print_art(ctx, data::OPEN_SCROLL, top + data::TITLE.len() as i32);

    for (idx, option) in MENU.iter().enumerate() {
        let label = option.label();
        let x = SCREEN_WIDTH / 2 - label.len() as i32 / 2;
        let y = middle - MENU.len() as i32 / 2 + idx as i32 + 2;
        if idx == selected {
            ctx.print_color(x - 2, y, RGB::named(YELLOW), bg(), format!("> {label}"));
        } else {
            ctx.print_color(x, y, fg(), bg(), label);
        }
    }
}

fn dialog_origin() -> Point {
    Point::new(
        SCREEN_WIDTH / 2 - DIALOG_WIDTH / 2,
        SCREEN_HEIGHT / 2 - DIALOG_HEIGHT / 2,
    )
}

/// Boxed, centred block of text; used for both quit confirmations.
fn draw_dialog(ctx: &mut BTerm, lines: &[&str]) {
    let origin = dialog_origin();
    ctx.draw_box(
        origin.x,
        origin.y,
        DIALOG_WIDTH - 1,
        DIALOG_HEIGHT - 1,
        fg(),
        bg(),
    );
    let top = origin.y + DIALOG_HEIGHT / 2 - (lines.len() as i32 + 1) / 2;
    for (row, line) in lines.iter().enumerate() {
        let x = origin.x + (DIALOG_WIDTH - line.len() as i32) / 2;
        ctx.print_color(x, top + row as i32, fg(), bg(), line);
    }
}

fn draw_name_box(ctx: &mut BTerm, name: &str) {
    draw_dialog(ctx, &[data::NAME_PROMPT]);
    let origin = dialog_origin();
    let field = Point::new(origin.x + 14, origin.y + 6);
    let shown: String = name.chars().take(data::NAME_WIDTH).collect();
    let padded = format!("{shown:_<width$}", width = data::NAME_WIDTH);
    ctx.print_color(field.x, field.y, RGB::named(YELLOW), bg(), padded);
    let cursor = (shown.chars().count()).min(data::NAME_WIDTH - 1) as i32;
    ctx.set_bg(field.x + cursor, field.y, RGB::named(GRAY));
}

fn draw_scene(ctx: &mut BTerm, scene: &Scene) {
    let stage = &scene.stage;
    match &stage.viewport {
        Some(viewport) => draw_maze(ctx, &stage.surface, viewport),
        None => draw_room(ctx, &stage.surface),
    }
}

fn set_glyph(ctx: &mut BTerm, screen: Point, glyph: FontCharType) {
    let color = if glyph == to_cp437('@') {
        RGB::named(YELLOW)
    } else {
        fg()
    };
    ctx.set(screen.x, screen.y, color, bg(), glyph);
}

fn draw_room(ctx: &mut BTerm, surface: &Surface) {
    ctx.draw_box(
        surface.origin.x - 1,
        surface.origin.y - 1,
        surface.width + 1,
        surface.height + 1,
        RGB::named(GRAY),
        bg(),
    );
    for y in 0..surface.height {
        for x in 0..surface.width {
            let local = Point::new(x, y);
            if let Some(glyph) = surface.glyph_at(local) {
                set_glyph(ctx, surface.to_global(local), glyph);
            }
        }
    }
}

/// Frame around the window, then the visible slice of the backing surface.
fn draw_maze(ctx: &mut BTerm, surface: &Surface, viewport: &Viewport) {
    let anchor = viewport.anchor();
    ctx.draw_box(
        anchor.x - 5,
        anchor.y - 2,
        viewport.width + 9,
        viewport.height + 4,
        RGB::named(GRAY),
        bg(),
    );
    let view = viewport.offset();
    for y in view.y..view.y + viewport.height {
        for x in view.x..view.x + viewport.width {
            let backing = Point::new(x, y);
            let (Some(glyph), Some(screen)) = (surface.glyph_at(backing), viewport.to_screen(backing))
            else {
                continue;
            };
            set_glyph(ctx, screen, glyph);
        }
    }
}

fn draw_narration(ctx: &mut BTerm, text: &str, complete: bool) {
    let left = SCREEN_WIDTH / 2 - NARRATION_WIDTH / 2;
    ctx.draw_box(left, NARRATION_TOP, NARRATION_WIDTH - 1, 4, fg(), bg());
    for (row, line) in text.split('\n').take(3).enumerate() {
        ctx.print_color(left + 1, NARRATION_TOP + 1 + row as i32, fg(), bg(), line);
    }
    if complete {
        ctx.set(
            left + NARRATION_WIDTH - 3,
            NARRATION_TOP + 4,
            RGB::named(YELLOW),
            bg(),
            to_cp437('v'),
        );
    }
}
