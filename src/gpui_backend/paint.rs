use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, TextRun, Window, font, point,
    px, quad,
};

use crate::geom::Vector2;
use crate::render::{Color, LineStyle, PathOp, RenderCommand, RenderList, ScreenRect, TextStyle};

/// A recorded frame, positioned at the canvas origin.
#[derive(Debug, Clone)]
pub(crate) struct PlaneFrame {
    pub(crate) render: RenderList,
    pub(crate) origin: Vector2,
    pub(crate) background: Color,
}

pub(crate) fn paint_frame(frame: &PlaneFrame, window: &mut Window, cx: &mut App) {
    for command in frame.render.commands() {
        match command {
            RenderCommand::Clear(rect) => {
                paint_clear(window, frame.origin, *rect, frame.background);
            }
            RenderCommand::Path { ops, style } => {
                paint_path(window, frame.origin, ops, *style);
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                paint_text(window, cx, frame.origin, *position, text, style);
            }
        }
    }
}

fn paint_clear(window: &mut Window, origin: Vector2, rect: ScreenRect, background: Color) {
    window.paint_quad(quad(
        to_bounds(origin, rect),
        Corners::all(px(0.0)),
        to_rgba(background),
        Edges::all(px(0.0)),
        to_rgba(background),
        BorderStyle::default(),
    ));
}

fn paint_path(window: &mut Window, origin: Vector2, ops: &[PathOp], style: LineStyle) {
    if ops.is_empty() {
        return;
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for op in ops {
        match *op {
            PathOp::MoveTo(pt) => builder.move_to(to_point(origin, pt)),
            PathOp::LineTo(pt) => builder.line_to(to_point(origin, pt)),
        }
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    origin: Vector2,
    position: Vector2,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size);
    let run = TextRun {
        len: text.len(),
        font: font(style.family.clone()),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let _ = shaped.paint(to_point(origin, position), line_height, window, cx);
}

fn to_point(origin: Vector2, pt: Vector2) -> gpui::Point<Pixels> {
    point(px((origin.x + pt.x) as f32), px((origin.y + pt.y) as f32))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(origin: Vector2, rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(to_point(origin, rect.min), to_point(origin, rect.max))
}
