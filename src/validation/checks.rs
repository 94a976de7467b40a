//! Lint checks over a parsed stadium.
//!
//! Each check takes a `&Stadium` and yields its findings. Entities are named
//! by their list path, e.g. `segments[4]`.

use crate::types::{JointLength, Stadium};

use super::lint::{Diagnostic, Lint};

const EPSILON: f64 = 1e-6;

/// Segments that start and end at the same place.
pub fn check_degenerate_segments(stadium: &Stadium) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    for (i, segment) in stadium.segments.iter().enumerate() {
        let target = format!("segments[{}]", i);

        if segment.v0 == segment.v1 {
            found.push(
                Diagnostic::warning(
                    Lint::DegenerateSegment,
                    target,
                    format!("uses vertex {} for both ends", segment.v0),
                )
                .with_help("A segment needs two distinct vertexes to collide with anything"),
            );
            continue;
        }

        if let Some((a, b)) = stadium.segment_ends(segment) {
            if a.pos().distance(b.pos()) < EPSILON {
                found.push(Diagnostic::warning(
                    Lint::DegenerateSegment,
                    target,
                    format!(
                        "joins vertexes {} and {} which share a position",
                        segment.v0, segment.v1
                    ),
                ));
            }
        }
    }

    found
}

/// Joints that connect a disc to itself or have an inverted range.
pub fn check_joints(stadium: &Stadium) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    for (i, joint) in stadium.joints.iter().enumerate() {
        if joint.d0 == joint.d1 {
            found.push(
                Diagnostic::error(
                    Lint::SelfJoint,
                    format!("joints[{}]", i),
                    format!("connects disc {} to itself", joint.d0),
                )
                .with_help("Point d0 and d1 at different discs"),
            );
        }

        if let JointLength::Range { min, max } = joint.length {
            if min > max {
                found.push(
                    Diagnostic::error(
                        Lint::JointRange,
                        format!("joints[{}]", i),
                        format!("has length range [{}, {}] with min above max", min, max),
                    )
                    .with_help("Write the range as [min, max]"),
                );
            }
        }
    }

    found
}

pub fn check_goals(stadium: &Stadium) -> Vec<Diagnostic> {
    stadium
        .goals
        .iter()
        .enumerate()
        .filter(|(_, goal)| goal.p0.distance(goal.p1) < EPSILON)
        .map(|(i, _)| {
            Diagnostic::warning(
                Lint::ZeroGoal,
                format!("goals[{}]", i),
                "has zero length and can never be scored",
            )
        })
        .collect()
}

/// Plane normals must be non-zero and are expected to be unit length.
pub fn check_plane_normals(stadium: &Stadium) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    for (i, plane) in stadium.planes.iter().enumerate() {
        let target = format!("planes[{}]", i);
        let len = plane.normal.length();

        if len < EPSILON {
            found.push(Diagnostic::error(Lint::PlaneNormal, target, "has a zero normal"));
        } else if (len - 1.0).abs() > EPSILON {
            found.push(
                Diagnostic::warning(
                    Lint::PlaneNormal,
                    target,
                    format!("normal has length {:.4}, not 1", len),
                )
                .with_help("dist is measured along the normal, so scale both together"),
            );
        }
    }

    found
}

pub fn check_disc_radius(stadium: &Stadium) -> Vec<Diagnostic> {
    stadium
        .discs
        .iter()
        .enumerate()
        .filter(|(_, disc)| disc.radius <= 0.0)
        .map(|(i, disc)| {
            let target = if i == 0 { "ball".to_string() } else { format!("discs[{}]", i) };
            Diagnostic::error(
                Lint::DiscRadius,
                target,
                format!("has non-positive radius {}", disc.radius),
            )
        })
        .collect()
}
