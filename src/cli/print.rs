//! Print command implementation.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::load;
use crate::types::{JointLength, JointStrength, Stadium, WireToken};

/// Print a summary of a stadium
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Stadium file to read
    pub file: PathBuf,
}

pub fn run(args: PrintArgs) -> Result<()> {
    let stadium = load(&args.file)?;
    print!("{}", summary(&stadium));
    Ok(())
}

/// Human-readable description of a parsed stadium.
pub fn summary(s: &Stadium) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", s.name);
    let _ = writeln!(out, "  size            {} x {}", s.width, s.height);
    let _ = writeln!(
        out,
        "  camera          {} x {}, follows {}, max view width {}",
        s.camera_width,
        s.camera_height,
        s.camera_follow.token(),
        s.max_view_width
    );
    let _ = writeln!(
        out,
        "  kick-off        {} reset, spawn distance {}",
        s.kick_off_reset.token(),
        s.spawn_distance
    );
    let _ = writeln!(out, "  can be stored   {}", s.can_be_stored);
    let _ = writeln!(
        out,
        "  background      {} {} x {}, colour {}",
        s.bg.kind.token(),
        s.bg.width,
        s.bg.height,
        s.bg.colour
    );

    if !s.traits.is_empty() {
        let names: Vec<&str> = s.traits.names().collect();
        let _ = writeln!(out, "  traits          {}", names.join(", "));
    }

    let _ = writeln!(out, "  vertexes        {}", s.vertexes.len());
    let curved = s.segments.iter().filter(|seg| seg.is_curved()).count();
    let hidden = s.segments.iter().filter(|seg| !seg.vis).count();
    let _ = writeln!(
        out,
        "  segments        {} ({} curved, {} hidden)",
        s.segments.len(),
        curved,
        hidden
    );

    for (i, goal) in s.goals.iter().enumerate() {
        let _ = writeln!(
            out,
            "  goal {:<10} {} [{}, {}] -> [{}, {}]",
            i,
            goal.team.token(),
            goal.p0.x,
            goal.p0.y,
            goal.p1.x,
            goal.p1.y
        );
    }

    if let Some(ball) = s.ball() {
        let _ = writeln!(
            out,
            "  ball            radius {}, invMass {}, at [{}, {}]",
            ball.radius, ball.inv_mass, ball.pos.x, ball.pos.y
        );
    }
    let _ = writeln!(out, "  discs           {}", s.other_discs().len());
    let _ = writeln!(out, "  planes          {}", s.planes.len());

    for (i, joint) in s.joints.iter().enumerate() {
        let length = match joint.length {
            JointLength::Fixed(len) => format!("length {}", len),
            JointLength::Range { min, max } => format!("length {}..{}", min, max),
            JointLength::Auto => "auto length".to_string(),
        };
        let strength = match joint.strength {
            JointStrength::Rigid => "rigid".to_string(),
            JointStrength::Spring(k) => format!("spring {}", k),
        };
        let _ = writeln!(
            out,
            "  joint {:<9} discs {} - {}, {}, {}",
            i, joint.d0, joint.d1, length, strength
        );
    }

    let _ = writeln!(
        out,
        "  spawn points    {} red, {} blue",
        s.red_spawn_points.len(),
        s.blue_spawn_points.len()
    );

    let physics = s.effective_player_physics();
    let _ = writeln!(
        out,
        "  players         radius {}, kick strength {}{}",
        physics.radius,
        physics.kick_strength,
        if s.player_physics.is_none() { " (defaults)" } else { "" }
    );

    out
}
