//! Stadium preview rendering.

use image::RgbaImage;
use tracing::debug;

use crate::error::Result;
use crate::types::{BackgroundType, Colour, Point, Stadium, Team};

use super::canvas::Canvas;

const SEGMENT_WIDTH: f64 = 3.0;
const OUTLINE_WIDTH: f64 = 2.0;
const RED_GOAL: Colour = Colour::rgb(0xe5, 0x6e, 0x56);
const BLUE_GOAL: Colour = Colour::rgb(0x56, 0x89, 0xe5);
const GRASS_FIELD: Colour = Colour::rgb(0x6b, 0x86, 0x55);
const HOCKEY_SURROUND: Colour = Colour::rgb(0x45, 0x48, 0x4c);
const HOCKEY_FIELD: Colour = Colour::rgb(0x6e, 0x72, 0x77);

/// The circle a curved segment lies on, swept from `start` to `end` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentArc {
    pub centre: Point,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
}

/// Compute the arc of a segment from `a` to `b` bending by `curve` degrees.
///
/// Negative curves bend the other way, which is the same arc with the ends
/// swapped. Returns `None` for straight or zero-length segments.
pub fn segment_arc(a: Point, b: Point, curve: f64) -> Option<SegmentArc> {
    if curve == 0.0 || a.distance(b) == 0.0 {
        return None;
    }

    let (v0, v1, curve) = if curve < 0.0 { (b, a, -curve) } else { (a, b, curve) };
    let m = v0.midpoint(v1);
    let dist = v0.distance(v1);

    let (centre, radius) = if curve == 180.0 {
        (m, dist / 2.0)
    } else {
        let radius = dist / (2.0 * (curve.to_radians() / 2.0).sin());
        let half = dist / 2.0;
        let offset = (radius * radius - half * half).max(0.0).sqrt();
        let centre = Point::new(
            m.x - offset * ((v1.y - v0.y) / 2.0) / half,
            m.y + offset * ((v1.x - v0.x) / 2.0) / half,
        );
        (centre, radius)
    };

    Some(SegmentArc {
        centre,
        radius: radius.abs(),
        start: (v0.y - centre.y).atan2(v0.x - centre.x),
        end: (v1.y - centre.y).atan2(v1.x - centre.x),
    })
}

/// Half extents of the preview: the stadium size, else the background size,
/// else the bounds of everything drawn.
fn extent(stadium: &Stadium) -> (f64, f64) {
    if stadium.width > 0.0 && stadium.height > 0.0 {
        return (stadium.width, stadium.height);
    }
    if stadium.bg.width > 0.0 && stadium.bg.height > 0.0 {
        return (stadium.bg.width, stadium.bg.height);
    }

    let vertexes = stadium.vertexes.iter().map(|v| (v.pos(), 0.0));
    let discs = stadium.discs.iter().map(|d| (d.pos, d.radius.max(0.0)));
    vertexes
        .chain(discs)
        .fold((1.0_f64, 1.0_f64), |(w, h), (p, r)| {
            (w.max(p.x.abs() + r), h.max(p.y.abs() + r))
        })
}

/// Surround colour, then the `bg.width x bg.height` field for grass and
/// hockey. Textures are drawn as flat colours.
fn paint_background(canvas: &mut Canvas, stadium: &Stadium) {
    let bg = &stadium.bg;
    let (surround, field) = match bg.kind {
        BackgroundType::None => (bg.colour, None),
        BackgroundType::Grass => (bg.colour, Some(GRASS_FIELD)),
        BackgroundType::Hockey => (HOCKEY_SURROUND, Some(HOCKEY_FIELD)),
    };

    canvas.fill(surround);
    if let Some(field) = field.filter(|_| bg.width > 0.0 && bg.height > 0.0) {
        canvas.fill_rect(
            Point::new(-bg.width, -bg.height),
            Point::new(bg.width, bg.height),
            field,
        );
    }
}

/// Rasterise a preview of a stadium.
///
/// The image is twice the stadium's width and height in pixels at scale 1,
/// with the stadium origin at the centre. Fails with `PreviewTooLarge`
/// rather than allocating an oversized image.
pub fn render_stadium(stadium: &Stadium, scale: u32) -> Result<RgbaImage> {
    let (half_width, half_height) = extent(stadium);
    let mut canvas = Canvas::new(half_width, half_height, scale)?;
    debug!(
        name = %stadium.name,
        width = canvas.width(),
        height = canvas.height(),
        "rendering preview"
    );

    paint_background(&mut canvas, stadium);

    for segment in stadium.segments.iter().filter(|s| s.vis) {
        let Some((v0, v1)) = stadium.segment_ends(segment) else {
            continue;
        };
        match segment_arc(v0.pos(), v1.pos(), segment.curve) {
            Some(arc) => canvas.arc(arc.centre, arc.radius, arc.start, arc.end, SEGMENT_WIDTH, segment.colour),
            None => canvas.line(v0.pos(), v1.pos(), SEGMENT_WIDTH, segment.colour),
        }
    }

    for goal in &stadium.goals {
        let colour = match goal.team {
            Team::Red => RED_GOAL,
            _ => BLUE_GOAL,
        };
        canvas.line(goal.p0, goal.p1, OUTLINE_WIDTH, colour);
    }

    for joint in &stadium.joints {
        if let Some((d0, d1)) = stadium.joint_discs(joint) {
            canvas.line(d0.pos, d1.pos, OUTLINE_WIDTH, joint.colour);
        }
    }

    // Ball last so it sits on top.
    for disc in stadium.other_discs().iter().chain(stadium.ball()) {
        canvas.fill_circle(disc.pos, disc.radius, disc.colour);
        canvas.stroke_circle(disc.pos, disc.radius, OUTLINE_WIDTH, Colour::BLACK);
    }

    Ok(canvas.into_image())
}
